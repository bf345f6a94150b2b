use crate::components::recommendation::RecommendationView;
use leptos::prelude::*;
use nomad_core::{PlanningMode, Recommendation, TripQuery};

#[server]
pub async fn plan_trip(
    mode: String,
    description: String,
    api_key: String,
) -> Result<Recommendation, ServerFnError> {
    use nomad_core::models::UnknownMode;
    use std::time::Instant;

    let mode: PlanningMode = mode
        .parse()
        .map_err(|e: UnknownMode| ServerFnError::new(e.to_string()))?;
    let query = TripQuery::new(mode, description, api_key);

    let start = Instant::now();
    let result = crate::server::ai::plan_trip(query).await;
    let duration_ms = start.elapsed().as_millis();

    // The description can hold personal constraints and the key is a
    // credential, so only the mode and outcome are logged.
    match &result {
        Ok(_) => {
            tracing::info!(
                mode = %mode,
                duration_ms = %duration_ms,
                "Plan request completed"
            );
        }
        Err(e) => {
            tracing::error!(
                mode = %mode,
                duration_ms = %duration_ms,
                error = %e,
                "Plan request failed"
            );
        }
    }

    result.map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn Home() -> impl IntoView {
    let (api_key, set_api_key) = signal(String::new());
    let (mode, set_mode) = signal(PlanningMode::FamilyFriendly);
    let (description, set_description) = signal(String::new());
    let (response, set_response) = signal(Option::<Recommendation>::None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    // One submission runs the whole pipeline; the loading flag guards
    // re-entry while a call is in flight.
    let do_plan = move || {
        if loading.get() {
            return;
        }

        let query = TripQuery::new(mode.get(), description.get(), api_key.get());

        // Validation failures never leave the browser
        if let Err(e) = query.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_loading.set(true);
        set_error.set(None);

        leptos::task::spawn_local(async move {
            let mode_label = query.mode.label().to_string();
            match plan_trip(mode_label, query.description, query.api_key).await {
                Ok(recommendation) => {
                    set_response.set(Some(recommendation));
                    set_error.set(None);
                }
                Err(e) => {
                    let detail = match e {
                        ServerFnError::ServerError(msg) => msg,
                        other => other.to_string(),
                    };
                    set_error.set(Some(format!("Something went wrong:\n{detail}")));
                    leptos::logging::error!("API Error: {}", detail);
                }
            }
            set_loading.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        do_plan();
    };

    // Handle Enter key (Shift+Enter for new line)
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_plan();
        }
    };

    view! {
        <div class="home-container">
            <aside class="settings-panel">
                <h2>"🔐 Settings"</h2>
                <input
                    class="api-key-input"
                    type="password"
                    placeholder="Gemini API Key"
                    prop:value=api_key
                    on:input=move |ev| set_api_key.set(event_target_value(&ev))
                    prop:disabled=loading
                />
                <p class="settings-caption">"Your key is used only for this session."</p>
            </aside>

            <header class="hero">
                <h1>"🧭 Nomad"</h1>
                <p class="tagline">"Intent-Based Travel Planning powered by Gemini"</p>
                <p class="subtitle">
                    "Nomad reverses traditional travel platforms. Instead of choosing a city "
                    "and dates, you describe " <strong>"constraints"</strong> " and Gemini "
                    "reasons about the best destinations, timing, and tradeoffs."
                </p>
            </header>

            <form class="plan-form" on:submit=on_submit>
                <label class="mode-label" for="planning-mode">"Planning Mode"</label>
                <select
                    id="planning-mode"
                    class="mode-select"
                    prop:value=move || mode.get().label()
                    on:change=move |ev| {
                        if let Ok(selected) = event_target_value(&ev).parse::<PlanningMode>() {
                            set_mode.set(selected);
                        }
                    }
                    prop:disabled=loading
                >
                    {PlanningMode::ALL
                        .into_iter()
                        .map(|option| view! { <option value=option.label()>{option.label()}</option> })
                        .collect_view()}
                </select>

                <textarea
                    class="description-input"
                    placeholder="Example:\nI have 10 days off in April. Budget is limited. I want somewhere warm, kid-friendly, no long flights, and not very crowded."
                    rows="6"
                    prop:value=description
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    prop:disabled=loading
                />

                <button type="submit" class="plan-button" prop:disabled=loading>
                    {move || if loading.get() {
                        "Gemini is reasoning about your trip..."
                    } else {
                        "🧠 Compute My Best Trip"
                    }}
                </button>
            </form>

            // Errors (validation and invocation alike)
            {move || error.get().map(|err| view! {
                <div class="error-message">
                    <span class="icon">"⚠️"</span>
                    <span class="text">{err}</span>
                </div>
            })}

            // The model's answer, verbatim
            {move || response.get().map(|recommendation| view! {
                <RecommendationView recommendation/>
            })}

            <footer class="footer">
                <p>"Nomad demonstrates constraint-driven reasoning, not keyword search."</p>
            </footer>
        </div>
    }
}

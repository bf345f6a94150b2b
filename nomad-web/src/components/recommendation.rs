use crate::utils::markdown_to_html;
use leptos::prelude::*;
use nomad_core::Recommendation;

/// The model's answer, rendered as markdown under the fixed heading.
/// No transformation or truncation is applied to the text itself.
#[component]
pub fn RecommendationView(recommendation: Recommendation) -> impl IntoView {
    let html = markdown_to_html(&recommendation.answer);

    view! {
        <section class="recommendation">
            <hr class="divider"/>
            <h2 class="recommendation-heading">"🧳 Nomad’s Recommendation"</h2>
            <div class="recommendation-body" inner_html=html></div>
        </section>
    }
}

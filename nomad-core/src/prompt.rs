//! Prompt assembly for the travel engine.
//!
//! Pure string construction. Composing the same query twice yields
//! byte-identical output, so the request payload is fully determined by the
//! submitted form state.

use crate::models::PlanningMode;

/// Fixed instruction sent with every request. It pins the model to the
/// four-section report structure the UI renders.
pub const SYSTEM_INSTRUCTION: &str = r#"
You are Nomad, an expert travel decision engine.

Your job is NOT to list random destinations.
Your job is to reason like a human travel agent.

You MUST follow this structure exactly:

## Constraints Identified
- Extract budget, time, mobility, preferences, risks

## Reasoning
- Explain tradeoffs and elimination logic
- Show why some options are better than others

## Recommended Destinations
Provide 2–3 destinations. For each:
- Why it fits the constraints
- Estimated cost level (Low / Medium / High)
- Best time to travel

## Risks & Tradeoffs
- What might not be ideal
- What the user should be aware of

Be concise, insightful, and human.
"#;

/// Build the user message for one query: the fixed template with the mode
/// label and the raw description interpolated. No escaping is applied.
#[must_use]
pub fn compose_user_message(mode: PlanningMode, description: &str) -> String {
    format!(
        "\nPlanning Mode: {}\n\nUser Input:\n{}\n",
        mode.label(),
        description
    )
}

use nomad_core::{GeminiClient, PlanError, Recommendation, TripQuery};

/// Web-layer shim over the core pipeline, pinned to the hosted Gemini client.
pub async fn plan_trip(query: TripQuery) -> Result<Recommendation, PlanError> {
    nomad_core::ai::plan_trip(&query, &GeminiClient).await
}

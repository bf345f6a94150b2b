//! Live integration test against the hosted Gemini endpoint
//!
//! Run with: cargo test -p nomad-core --test live_gemini -- --ignored --nocapture

use anyhow::Result;
use nomad_core::{Config, GeminiClient, PlanningMode, TripQuery, ai};

#[tokio::test]
#[ignore] // Requires API key, run with: cargo test --ignored
async fn plans_a_real_trip() -> Result<()> {
    let config = Config::from_env()?;

    let query = TripQuery::new(
        PlanningMode::BudgetOptimized,
        "I have 10 days off in April. Budget is limited. I want somewhere warm, \
         kid-friendly, no long flights, and not very crowded.",
        config.gemini_api_key,
    );

    let recommendation = ai::plan_trip(&query, &GeminiClient).await?;

    println!("{}", recommendation.answer);
    assert!(!recommendation.answer.trim().is_empty());

    Ok(())
}

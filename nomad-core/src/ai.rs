//! Trip-planning pipeline: validate, compose, invoke, wrap.
//!
//! One submission runs through this linearly. A failed validation never
//! reaches the model, and a failed invocation is terminal for the
//! interaction; resubmitting starts a fresh pipeline.

use crate::error::PlanError;
use crate::gemini::TravelModel;
use crate::models::{Recommendation, TripQuery};
use crate::prompt::{self, SYSTEM_INSTRUCTION};
use tracing::{info, warn};

/// Run one trip query through the model.
///
/// Makes exactly one outbound call, and none unless the query validates.
/// The returned text is passed through untouched.
pub async fn plan_trip<M: TravelModel + ?Sized>(
    query: &TripQuery,
    model: &M,
) -> Result<Recommendation, PlanError> {
    use std::time::Instant;

    query.validate()?;

    let user_message = prompt::compose_user_message(query.mode, &query.description);

    let start = Instant::now();
    let result = model
        .invoke(SYSTEM_INSTRUCTION, &user_message, &query.api_key)
        .await;
    let duration_ms = start.elapsed().as_millis();

    match &result {
        Ok(_) => {
            info!(
                mode = %query.mode,
                duration_ms = %duration_ms,
                "Trip plan generated"
            );
        }
        Err(e) => {
            warn!(
                mode = %query.mode,
                duration_ms = %duration_ms,
                error = %e,
                "Trip plan failed"
            );
        }
    }

    let answer = result.map_err(|e| PlanError::Model(format!("{e:#}")))?;

    Ok(Recommendation { answer })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanningMode;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records every invocation and replies with a canned result.
    struct StubModel {
        reply: std::result::Result<String, String>,
        calls: AtomicUsize,
        seen: Mutex<Vec<(String, String, String)>>,
    }

    impl StubModel {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(detail: &str) -> Self {
            Self {
                reply: Err(detail.to_string()),
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TravelModel for StubModel {
        async fn invoke(
            &self,
            system_instruction: &str,
            user_message: &str,
            api_key: &str,
        ) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push((
                system_instruction.to_string(),
                user_message.to_string(),
                api_key.to_string(),
            ));
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(detail) => Err(anyhow::anyhow!("{detail}")),
            }
        }
    }

    #[tokio::test]
    async fn missing_key_short_circuits_before_the_model() {
        let model = StubModel::replying("unused");
        let query = TripQuery::new(
            PlanningMode::BudgetOptimized,
            "10 days in April, tight budget",
            "",
        );

        let err = plan_trip(&query, &model).await.unwrap_err();
        assert_eq!(err, PlanError::MissingApiKey);
        assert_eq!(err.to_string(), "Please enter your Gemini API key.");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn blank_description_short_circuits_before_the_model() {
        let model = StubModel::replying("unused");
        let query = TripQuery::new(PlanningMode::Adventure, "  ", "abc");

        let err = plan_trip(&query, &model).await.unwrap_err();
        assert_eq!(err, PlanError::MissingDescription);
        assert_eq!(err.to_string(), "Please describe your trip needs.");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn valid_query_invokes_the_model_exactly_once() {
        let model = StubModel::replying("## Constraints Identified\n- warm, quiet");
        let query = TripQuery::new(
            PlanningMode::Romantic,
            "Warm beach, quiet, 5 nights",
            "valid-key",
        );

        let recommendation = plan_trip(&query, &model).await.unwrap();
        assert_eq!(recommendation.answer, "## Constraints Identified\n- warm, quiet");
        assert_eq!(model.call_count(), 1);

        let seen = model.seen.lock().unwrap();
        let (system, message, key) = &seen[0];
        assert_eq!(system, SYSTEM_INSTRUCTION);
        assert!(message.contains("Planning Mode: Romantic"));
        assert!(message.contains("Warm beach, quiet, 5 nights"));
        assert_eq!(key, "valid-key");
    }

    #[tokio::test]
    async fn model_failure_carries_the_detail_text() {
        let model = StubModel::failing("Gemini API error 403: invalid credential");
        let query = TripQuery::new(PlanningMode::FamilyFriendly, "kid-friendly, no long flights", "k");

        let err = plan_trip(&query, &model).await.unwrap_err();
        assert_eq!(
            err,
            PlanError::Model("Gemini API error 403: invalid credential".to_string())
        );
        assert!(!err.is_validation());
        assert_eq!(model.call_count(), 1);
    }
}

//! Gemini Generative Language API client
//!
//! Typed request/response bindings for the `generateContent` endpoint, plus
//! the [`TravelModel`] seam the pipeline talks through so tests can
//! substitute a stub for the network.

use crate::http::get_client;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Model requested for every trip plan
pub const MODEL: &str = "gemini-2.5-flash";

/// Base URL of the Generative Language API
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// One synchronous text-generation call.
///
/// Implementations make at most one outbound request per invocation and
/// surface every failure, credential, network or service-side, as a single
/// opaque error. No retries.
#[async_trait]
pub trait TravelModel: Send + Sync {
    async fn invoke(
        &self,
        system_instruction: &str,
        user_message: &str,
        api_key: &str,
    ) -> Result<String>;
}

/// Request payload for `models/{model}:generateContent`
#[derive(Debug, Serialize)]
struct GenerateRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
}

impl GenerateRequest {
    fn new(system_instruction: &str, user_message: &str) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: user_message.to_string(),
                }],
            }],
        }
    }
}

/// A role-tagged bundle of parts. The system instruction carries no role.
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Response from `generateContent`
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if the service produced one.
    /// Safety-blocked prompts come back with no candidates or empty parts.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        if content.parts.is_empty() {
            return None;
        }
        Some(
            content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect(),
        )
    }
}

/// Stateless client for the hosted Gemini endpoint.
///
/// The credential is supplied per call, never held, so one client instance
/// can serve every session.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeminiClient;

#[async_trait]
impl TravelModel for GeminiClient {
    async fn invoke(
        &self,
        system_instruction: &str,
        user_message: &str,
        api_key: &str,
    ) -> Result<String> {
        use std::time::Instant;

        let client = get_client();
        let start = Instant::now();

        let request = GenerateRequest::new(system_instruction, user_message);

        let response = client
            .post(format!("{API_BASE}/{MODEL}:generateContent"))
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        let duration_ms = start.elapsed().as_millis();

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(
                status = %status,
                duration_ms = %duration_ms,
                "Gemini API error"
            );
            anyhow::bail!("Gemini API error {}: {}", status, text);
        }

        let result: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        let text = result
            .text()
            .ok_or_else(|| anyhow::anyhow!("No response from model"))?;

        info!(
            model = %MODEL,
            duration_ms = %duration_ms,
            "Gemini call completed"
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_the_wire_shape() {
        let request = GenerateRequest::new("follow the structure", "Planning Mode: Adventure");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "systemInstruction": {
                    "parts": [{"text": "follow the structure"}]
                },
                "contents": [{
                    "role": "user",
                    "parts": [{"text": "Planning Mode: Adventure"}]
                }]
            })
        );
    }

    #[test]
    fn response_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "## Constraints Identified\n"},
                        {"text": "- 10 days, low budget"}
                    ]
                }
            }]
        }))
        .unwrap();

        assert_eq!(
            response.text().as_deref(),
            Some("## Constraints Identified\n- 10 days, low budget")
        );
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let response: GenerateResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.text(), None);

        let blocked: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"role": "model", "parts": []}}]
        }))
        .unwrap();
        assert_eq!(blocked.text(), None);
    }
}

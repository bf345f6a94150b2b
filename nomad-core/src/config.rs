use anyhow::{Context, Result};

/// Environment-supplied settings for the headless surfaces (CLI, live tests).
///
/// The web form collects the key from the user directly and passes it through
/// the pipeline explicitly; nothing here is read by the pipeline itself.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
}

impl Config {
    /// Load configuration from a `.env` file and the environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Not an error if .env is missing

        let gemini_api_key =
            std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY not set")?;

        Ok(Self { gemini_api_key })
    }
}

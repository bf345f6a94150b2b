// Models, prompts and the error taxonomy are always available
pub mod error;
pub mod models;
pub mod prompt;

// Server-only modules
#[cfg(feature = "server")]
pub mod ai;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod gemini;
#[cfg(feature = "server")]
pub mod http;

// Re-export commonly used types
pub use error::PlanError;
pub use models::{PlanningMode, Recommendation, TripQuery};

#[cfg(feature = "server")]
pub use config::Config;
#[cfg(feature = "server")]
pub use gemini::{GeminiClient, TravelModel};

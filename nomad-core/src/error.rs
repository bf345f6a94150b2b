use thiserror::Error;

/// Everything that can stop a trip plan from being produced.
///
/// Validation variants carry their user-facing message directly. Any failure
/// from the model call, whether credential, network or service-side, is
/// collapsed into [`PlanError::Model`] with the underlying detail text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Please enter your Gemini API key.")]
    MissingApiKey,
    #[error("Please describe your trip needs.")]
    MissingDescription,
    #[error("{0}")]
    Model(String),
}

impl PlanError {
    /// True for input problems the user can fix by editing the form.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::MissingDescription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_stable() {
        assert_eq!(
            PlanError::MissingApiKey.to_string(),
            "Please enter your Gemini API key."
        );
        assert_eq!(
            PlanError::MissingDescription.to_string(),
            "Please describe your trip needs."
        );
    }

    #[test]
    fn model_errors_surface_detail_verbatim() {
        let err = PlanError::Model("Gemini API error 429: quota exceeded".to_string());
        assert_eq!(err.to_string(), "Gemini API error 429: quota exceeded");
        assert!(!err.is_validation());
    }

    #[test]
    fn validation_variants_are_recoverable() {
        assert!(PlanError::MissingApiKey.is_validation());
        assert!(PlanError::MissingDescription.is_validation());
    }
}

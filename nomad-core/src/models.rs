use crate::error::PlanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Planning mode steering the tone of the generated plan.
///
/// The label is interpolated into the prompt verbatim and not otherwise
/// interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanningMode {
    #[default]
    FamilyFriendly,
    BudgetOptimized,
    Adventure,
    Romantic,
    RemoteWork,
}

impl PlanningMode {
    /// All selectable modes, in the order the form presents them.
    pub const ALL: [PlanningMode; 5] = [
        PlanningMode::FamilyFriendly,
        PlanningMode::BudgetOptimized,
        PlanningMode::Adventure,
        PlanningMode::Romantic,
        PlanningMode::RemoteWork,
    ];

    /// User-facing label, exactly as shown in the mode selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PlanningMode::FamilyFriendly => "Family-friendly",
            PlanningMode::BudgetOptimized => "Budget Optimized",
            PlanningMode::Adventure => "Adventure",
            PlanningMode::Romantic => "Romantic",
            PlanningMode::RemoteWork => "Remote Work / Digital Nomad",
        }
    }

    /// Short slug for CLI arguments (`--mode remote-work`).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            PlanningMode::FamilyFriendly => "family-friendly",
            PlanningMode::BudgetOptimized => "budget",
            PlanningMode::Adventure => "adventure",
            PlanningMode::Romantic => "romantic",
            PlanningMode::RemoteWork => "remote-work",
        }
    }
}

impl fmt::Display for PlanningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a mode string matches neither a label nor a slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown planning mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for PlanningMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        PlanningMode::ALL
            .into_iter()
            .find(|mode| {
                mode.label().eq_ignore_ascii_case(needle) || mode.slug().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownMode(needle.to_string()))
    }
}

/// One user submission. Created fresh per interaction, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripQuery {
    pub mode: PlanningMode,
    pub description: String,
    /// Caller-supplied Gemini credential. Lives only as long as the request
    /// and is never logged.
    pub api_key: String,
}

impl TripQuery {
    #[must_use]
    pub fn new(
        mode: PlanningMode,
        description: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            mode,
            description: description.into(),
            api_key: api_key.into(),
        }
    }

    /// Check the submission is complete enough to send.
    ///
    /// The key is checked before the description, matching the order the
    /// form reports problems in.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.api_key.is_empty() {
            return Err(PlanError::MissingApiKey);
        }
        if self.description.trim().is_empty() {
            return Err(PlanError::MissingDescription);
        }
        Ok(())
    }
}

/// The model's answer for one trip query.
///
/// Opaque markdown-bearing text, rendered by the UI without transformation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_the_selector() {
        let labels: Vec<&str> = PlanningMode::ALL.into_iter().map(PlanningMode::label).collect();
        assert_eq!(
            labels,
            [
                "Family-friendly",
                "Budget Optimized",
                "Adventure",
                "Romantic",
                "Remote Work / Digital Nomad",
            ]
        );
    }

    #[test]
    fn parses_labels_and_slugs() {
        assert_eq!(
            "Budget Optimized".parse::<PlanningMode>().unwrap(),
            PlanningMode::BudgetOptimized
        );
        assert_eq!(
            "remote-work".parse::<PlanningMode>().unwrap(),
            PlanningMode::RemoteWork
        );
        assert_eq!(
            "ADVENTURE".parse::<PlanningMode>().unwrap(),
            PlanningMode::Adventure
        );
        assert!("scuba".parse::<PlanningMode>().is_err());
    }

    #[test]
    fn missing_key_is_reported_first() {
        let query = TripQuery::new(PlanningMode::BudgetOptimized, "", "");
        assert_eq!(query.validate(), Err(PlanError::MissingApiKey));

        let query = TripQuery::new(
            PlanningMode::BudgetOptimized,
            "10 days in April, tight budget",
            "",
        );
        assert_eq!(query.validate(), Err(PlanError::MissingApiKey));
    }

    #[test]
    fn whitespace_only_description_is_rejected() {
        let query = TripQuery::new(PlanningMode::Adventure, "  ", "abc");
        assert_eq!(query.validate(), Err(PlanError::MissingDescription));

        let query = TripQuery::new(PlanningMode::Adventure, "\n\t ", "abc");
        assert_eq!(query.validate(), Err(PlanError::MissingDescription));
    }

    #[test]
    fn complete_query_passes() {
        let query = TripQuery::new(PlanningMode::Romantic, "Warm beach, quiet, 5 nights", "valid-key");
        assert_eq!(query.validate(), Ok(()));
    }
}

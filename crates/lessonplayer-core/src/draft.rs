//! Draft persistence abstraction.
//!
//! A draft is a widget's in-progress answer, saved when the hosting screen is
//! torn down and handed back to the widget factory on the next construction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PlayerError;

/// Validation tier that produced the error showing when a draft was taken.
///
/// Restoring re-runs only this tier, so a real-time warning comes back as
/// the same warning rather than as a stricter submit-time error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Raised while typing.
    RealTime,
    /// Raised by a submission attempt.
    SubmitTime,
}

/// Serializable in-progress answer state of a single widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDraft {
    /// Interaction the draft was taken from. A draft is only restored into a
    /// widget of the same interaction.
    pub interaction_id: String,
    /// The raw text the learner had typed.
    pub raw_text: String,
    /// Tier of the error showing when the draft was taken.
    #[serde(default)]
    pub last_error_category: Option<ErrorCategory>,
}

impl WidgetDraft {
    /// Encodes the draft as JSON.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Draft` if serialization fails.
    pub fn to_json(&self, state_name: &str) -> Result<String, PlayerError> {
        serde_json::to_string(self).map_err(|e| PlayerError::Draft {
            state_name: state_name.to_owned(),
            reason: e.to_string(),
        })
    }

    /// Decodes a draft from JSON.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Draft` if the payload is not a valid draft.
    pub fn from_json(state_name: &str, json: &str) -> Result<Self, PlayerError> {
        serde_json::from_str(json).map_err(|e| PlayerError::Draft {
            state_name: state_name.to_owned(),
            reason: e.to_string(),
        })
    }
}

/// Store for widget drafts, keyed by state name.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Saves (or replaces) the draft for a state.
    async fn save_draft(&self, state_name: &str, draft: &WidgetDraft) -> Result<(), PlayerError>;

    /// Loads the draft for a state, if one was saved.
    async fn load_draft(&self, state_name: &str) -> Result<Option<WidgetDraft>, PlayerError>;

    /// Discards the draft for a state.
    async fn clear_draft(&self, state_name: &str) -> Result<(), PlayerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_draft_json_round_trip_keeps_error_category() {
        // Arrange
        let draft = WidgetDraft {
            interaction_id: "FractionInput".into(),
            raw_text: "1/0".into(),
            last_error_category: Some(ErrorCategory::SubmitTime),
        };

        // Act
        let json = draft.to_json("Fractions").unwrap();
        let restored = WidgetDraft::from_json("Fractions", &json).unwrap();

        // Assert
        assert_eq!(restored, draft);
    }

    #[test]
    fn test_error_category_serializes_as_tier_name() {
        let draft = WidgetDraft {
            interaction_id: "NumericInput".into(),
            raw_text: ".5".into(),
            last_error_category: Some(ErrorCategory::RealTime),
        };

        let encoded = draft.to_json("Decimals").unwrap();
        let json: serde_json::Value = serde_json::from_str(&encoded).unwrap();

        assert_eq!(json["last_error_category"], "real_time");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = WidgetDraft::from_json("Fractions", "not json");

        match result.unwrap_err() {
            PlayerError::Draft { state_name, .. } => assert_eq!(state_name, "Fractions"),
            other => panic!("expected Draft, got {other:?}"),
        }
    }
}

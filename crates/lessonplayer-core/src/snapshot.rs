//! State snapshots produced by the lesson engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::answer::UserAnswer;
use crate::customization::CustomizationArgs;

/// Stable identifier for a piece of translatable rich content.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ContentId(pub String);

impl ContentId {
    /// Creates a content id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rich content paired with the id it is translated under.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubtitledHtml {
    /// The content identifier.
    pub content_id: ContentId,
    /// The HTML body. Rendering is the host's concern.
    pub html: String,
}

impl SubtitledHtml {
    /// Creates a content block.
    #[must_use]
    pub fn new(content_id: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            content_id: ContentId::new(content_id),
            html: html.into(),
        }
    }
}

/// The interaction a state asks the learner to complete.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionSpec {
    /// Interaction identifier, e.g. `"FractionInput"`. Keys the widget registry.
    pub id: String,
    /// Interaction-specific customization arguments.
    #[serde(default)]
    pub customization_args: CustomizationArgs,
}

/// A previously submitted answer and the feedback it received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerAndFeedback {
    /// What the learner submitted.
    pub submitted_answer: UserAnswer,
    /// Feedback HTML shown in response. May be empty.
    #[serde(default)]
    pub feedback_html: String,
}

/// Where the learner is within a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotKind {
    /// Awaiting an answer.
    Pending,
    /// Answered correctly and navigable.
    Completed,
    /// End of the lesson.
    Terminal,
}

/// Immutable view of one learner-facing state, produced by the lesson engine
/// after each learner action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Name of the state within the lesson. Keys drafts and log fields.
    pub state_name: String,
    /// The state's main content.
    #[serde(default)]
    pub content: SubtitledHtml,
    /// The interaction the learner answers.
    #[serde(default)]
    pub interaction: InteractionSpec,
    /// Answers submitted so far, oldest first. For a pending state these are
    /// all wrong answers; for a completed state the last one is correct.
    #[serde(default)]
    pub prior_answers: Vec<AnswerAndFeedback>,
    /// Whether the learner can navigate back.
    #[serde(default)]
    pub has_previous_state: bool,
    /// Whether a state follows this one.
    #[serde(default)]
    pub has_next_state: bool,
    /// Snapshot kind.
    pub kind: SnapshotKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_snapshot_deserializes_with_defaults() {
        // Arrange
        let json = r#"{"state_name": "Intro", "kind": "terminal"}"#;

        // Act
        let snapshot: StateSnapshot = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(snapshot.state_name, "Intro");
        assert_eq!(snapshot.kind, SnapshotKind::Terminal);
        assert!(snapshot.prior_answers.is_empty());
        assert!(!snapshot.has_previous_state);
        assert!(!snapshot.has_next_state);
        assert!(snapshot.content.html.is_empty());
    }

    #[test]
    fn test_content_id_serializes_as_plain_string() {
        let json = serde_json::to_value(ContentId::new("ca_choices_0")).unwrap();
        assert_eq!(json, serde_json::json!("ca_choices_0"));
    }

    #[test]
    fn test_default_subtitled_html_is_empty() {
        let html = SubtitledHtml::default();

        assert_eq!(html.content_id, ContentId::new(""));
        assert!(html.html.is_empty());
    }
}

//! The items a state is displayed as.

use lessonplayer_core::answer::UserAnswer;
use lessonplayer_core::snapshot::SubtitledHtml;
use serde::{Deserialize, Serialize};

/// The single trailing navigation control of a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum NavigationControl {
    /// Back to the previous state.
    Previous,
    /// On to the next, already-unlocked state.
    Next {
        /// Whether a previous button is shown alongside.
        has_previous_button: bool,
    },
    /// Submit the answer in the active widget.
    Submit {
        /// Whether a previous button is shown alongside.
        has_previous_button: bool,
    },
    /// Continue past a completed state with no next state yet.
    #[serde(rename = "continue")]
    ContinueNav {
        /// Whether a previous button is shown alongside.
        has_previous_button: bool,
    },
    /// Restart the session.
    Replay,
    /// Leave the lesson and return to its topic.
    ReturnToTopic {
        /// Whether a previous button is shown alongside.
        has_previous_button: bool,
    },
}

/// One entry of the display list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayItem {
    /// The state's main content.
    Content(SubtitledHtml),
    /// Feedback for a submitted answer.
    Feedback {
        /// Feedback HTML.
        html: String,
    },
    /// The active answer widget, identified by its interaction.
    AnswerWidget {
        /// Interaction id of the widget.
        interaction_id: String,
    },
    /// A previously submitted answer.
    SubmittedAnswer {
        /// The answer as submitted.
        answer: UserAnswer,
        /// Whether the answer was correct.
        is_correct: bool,
    },
    /// Header over collapsible earlier answers.
    PreviousResponsesHeader {
        /// Number of earlier answers behind the header.
        count: usize,
        /// Whether the earlier answers are shown.
        expanded: bool,
    },
    /// The trailing navigation control.
    Navigation(NavigationControl),
}

impl DisplayItem {
    /// Whether this is the previous-responses header.
    #[must_use]
    pub fn is_previous_responses_header(&self) -> bool {
        matches!(self, Self::PreviousResponsesHeader { .. })
    }
}

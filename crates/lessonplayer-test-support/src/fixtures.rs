//! Snapshot and customization-argument fixtures.

use lessonplayer_core::answer::{Answer, UserAnswer};
use lessonplayer_core::customization::CustomizationArgs;
use lessonplayer_core::snapshot::{
    AnswerAndFeedback, InteractionSpec, SnapshotKind, StateSnapshot, SubtitledHtml,
};
use serde_json::json;

/// A text answer displayed as plain text.
#[must_use]
pub fn plain_answer(text: &str) -> UserAnswer {
    UserAnswer::plain(Answer::Text(text.to_owned()), text)
}

/// A prior text answer with the given feedback.
#[must_use]
pub fn answer_with_feedback(text: &str, feedback_html: &str) -> AnswerAndFeedback {
    AnswerAndFeedback {
        submitted_answer: plain_answer(text),
        feedback_html: feedback_html.to_owned(),
    }
}

fn choices(count: usize) -> serde_json::Value {
    let choices: Vec<serde_json::Value> = (0..count)
        .map(|i| json!({"content_id": format!("ca_choices_{i}"), "html": format!("<p>Choice {i}</p>")}))
        .collect();
    json!(choices)
}

/// Customization args for a multiple-choice interaction with `count` choices.
#[must_use]
pub fn multiple_choice_args(count: usize) -> CustomizationArgs {
    CustomizationArgs::new().with("choices", choices(count))
}

/// Customization args for an item-selection interaction.
#[must_use]
pub fn item_selection_args(count: usize, min: i64, max: i64) -> CustomizationArgs {
    CustomizationArgs::new()
        .with("choices", choices(count))
        .with("minAllowableSelectionCount", min)
        .with("maxAllowableSelectionCount", max)
}

/// Customization args for a drag-and-drop sort interaction.
#[must_use]
pub fn drag_drop_args(count: usize, allow_grouping: bool) -> CustomizationArgs {
    CustomizationArgs::new()
        .with("choices", choices(count))
        .with("allowMultipleItemsInSamePosition", allow_grouping)
}

/// Builder for `StateSnapshot` values.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    snapshot: StateSnapshot,
}

impl SnapshotBuilder {
    /// Starts a snapshot of the given kind with default content.
    #[must_use]
    pub fn new(kind: SnapshotKind) -> Self {
        Self {
            snapshot: StateSnapshot {
                state_name: "Test State".to_owned(),
                content: SubtitledHtml::new("content", "<p>What is 1/2 + 1/4?</p>"),
                interaction: InteractionSpec {
                    id: "TextInput".to_owned(),
                    customization_args: CustomizationArgs::new(),
                },
                prior_answers: Vec::new(),
                has_previous_state: false,
                has_next_state: false,
                kind,
            },
        }
    }

    /// Starts a pending snapshot.
    #[must_use]
    pub fn pending() -> Self {
        Self::new(SnapshotKind::Pending)
    }

    /// Starts a completed snapshot.
    #[must_use]
    pub fn completed() -> Self {
        Self::new(SnapshotKind::Completed)
    }

    /// Starts a terminal snapshot using the end-of-lesson interaction.
    #[must_use]
    pub fn terminal() -> Self {
        Self::new(SnapshotKind::Terminal).interaction("EndExploration", CustomizationArgs::new())
    }

    /// Sets the state name.
    #[must_use]
    pub fn state_name(mut self, name: &str) -> Self {
        name.clone_into(&mut self.snapshot.state_name);
        self
    }

    /// Sets the content HTML.
    #[must_use]
    pub fn content(mut self, html: &str) -> Self {
        self.snapshot.content = SubtitledHtml::new("content", html);
        self
    }

    /// Sets the interaction.
    #[must_use]
    pub fn interaction(mut self, id: &str, args: CustomizationArgs) -> Self {
        self.snapshot.interaction = InteractionSpec {
            id: id.to_owned(),
            customization_args: args,
        };
        self
    }

    /// Appends a prior answer.
    #[must_use]
    pub fn prior_answer(mut self, answer: AnswerAndFeedback) -> Self {
        self.snapshot.prior_answers.push(answer);
        self
    }

    /// Appends `count` wrong answers, each with non-empty feedback.
    #[must_use]
    pub fn wrong_answers(mut self, count: usize) -> Self {
        for i in 0..count {
            self.snapshot.prior_answers.push(answer_with_feedback(
                &format!("wrong {i}"),
                &format!("<p>Not quite ({i})</p>"),
            ));
        }
        self
    }

    /// Marks the snapshot as having a previous state.
    #[must_use]
    pub fn has_previous(mut self) -> Self {
        self.snapshot.has_previous_state = true;
        self
    }

    /// Marks the snapshot as having a next state.
    #[must_use]
    pub fn has_next(mut self) -> Self {
        self.snapshot.has_next_state = true;
        self
    }

    /// Finishes the snapshot.
    #[must_use]
    pub fn build(self) -> StateSnapshot {
        self.snapshot
    }
}

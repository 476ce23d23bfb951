//! Shared state handling for text-entry widgets.
//!
//! Text widgets keep their presentation state in an [`AnswerWidgetState`]
//! and change it only through [`transition`], which returns the next state
//! together with the notifications the change produces.

use super::errors::AnswerError;
use super::widget::{AnswerWidgetState, ValidationTrigger, WidgetNotification};

/// Something that happened to a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextFieldEvent {
    /// The learner edited the text; carries the real-time check's result.
    Edited {
        /// The new text.
        text: String,
        /// Result of the real-time check on `text`.
        real_time_error: Option<AnswerError>,
    },
    /// A validation pass produced this error (or cleared it).
    Validated(Option<AnswerError>),
}

/// Computes the state after `event`.
///
/// Blank text never shows a real-time error. A notification is produced
/// only when the shown error or the answer availability changes. With
/// `always_available`, the widget reports an answer as available even when
/// blank, so the blank submission reaches submit-time validation.
#[must_use]
pub fn transition(
    state: &AnswerWidgetState,
    event: TextFieldEvent,
    always_available: bool,
) -> (AnswerWidgetState, Vec<WidgetNotification>) {
    let next = match event {
        TextFieldEvent::Edited {
            text,
            real_time_error,
        } => AnswerWidgetState {
            current_error: if text.is_empty() {
                None
            } else {
                real_time_error
            },
            is_answer_available: always_available || !text.is_empty(),
            raw_input: text,
        },
        TextFieldEvent::Validated(error) => AnswerWidgetState {
            current_error: error,
            ..state.clone()
        },
    };

    let notifications = if next.current_error == state.current_error
        && next.is_answer_available == state.is_answer_available
    {
        Vec::new()
    } else {
        vec![WidgetNotification::error_or_availability(
            next.current_error.as_ref(),
            next.is_answer_available,
        )]
    };
    (next, notifications)
}

/// A text field: current state plus queued notifications.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    state: AnswerWidgetState,
    error_trigger: Option<ValidationTrigger>,
    always_available: bool,
    notifications: Vec<WidgetNotification>,
}

impl TextField {
    /// Creates an empty field.
    #[must_use]
    pub fn new(always_available: bool) -> Self {
        Self {
            state: AnswerWidgetState {
                is_answer_available: always_available,
                ..AnswerWidgetState::default()
            },
            error_trigger: None,
            always_available,
            notifications: Vec::new(),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &AnswerWidgetState {
        &self.state
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.state.raw_input
    }

    /// The validation tier that produced the shown error, if one shows.
    #[must_use]
    pub fn error_trigger(&self) -> Option<ValidationTrigger> {
        self.error_trigger
    }

    /// Replaces the text and re-runs the real-time check.
    pub fn edit(&mut self, text: &str, real_time_check: impl FnOnce(&str) -> Option<AnswerError>) {
        let real_time_error = real_time_check(text);
        self.apply(TextFieldEvent::Edited {
            text: text.to_owned(),
            real_time_error,
        });
        self.error_trigger = self
            .state
            .current_error
            .as_ref()
            .map(|_| ValidationTrigger::RealTime);
    }

    /// Records the result of a `trigger` validation pass as the shown error
    /// and returns it.
    pub fn record_error(
        &mut self,
        trigger: ValidationTrigger,
        error: Option<AnswerError>,
    ) -> Option<AnswerError> {
        self.error_trigger = error.as_ref().map(|_| trigger);
        self.apply(TextFieldEvent::Validated(error.clone()));
        error
    }

    fn apply(&mut self, event: TextFieldEvent) {
        let (next, notifications) = transition(&self.state, event, self.always_available);
        self.state = next;
        self.notifications.extend(notifications);
    }

    /// Queued notifications.
    #[must_use]
    pub fn notifications(&self) -> &[WidgetNotification] {
        &self.notifications
    }

    /// Clears queued notifications.
    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }
}

//! The Continue button.

use lessonplayer_core::answer::{Answer, UserAnswer};

use super::errors::AnswerError;
use super::interaction_ids;
use super::widget::{AnswerWidget, ValidationTrigger, WidgetInput, WidgetNotification};

/// Text submitted when the learner presses Continue.
pub const CONTINUE_ANSWER: &str = "Please continue.";

/// A single button that submits a fixed answer and moves on by itself.
#[derive(Debug, Default)]
pub struct ContinueWidget {
    notifications: Vec<WidgetNotification>,
}

impl ContinueWidget {
    /// Creates the widget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnswerWidget for ContinueWidget {
    fn interaction_id(&self) -> &str {
        interaction_ids::CONTINUE
    }

    fn current_answer(&self) -> Option<UserAnswer> {
        Some(UserAnswer::plain(
            Answer::Text(CONTINUE_ANSWER.to_owned()),
            CONTINUE_ANSWER,
        ))
    }

    fn validate(&mut self, _trigger: ValidationTrigger) -> Option<AnswerError> {
        None
    }

    fn current_error(&self) -> Option<&AnswerError> {
        None
    }

    fn is_answer_available(&self) -> bool {
        true
    }

    fn handle_input(&mut self, _input: WidgetInput) -> bool {
        false
    }

    fn is_explicit_submission_required(&self) -> bool {
        false
    }

    fn is_auto_navigating(&self) -> bool {
        true
    }

    fn pending_notifications(&self) -> &[WidgetNotification] {
        &self.notifications
    }

    fn clear_notifications(&mut self) {
        self.notifications.clear();
    }
}

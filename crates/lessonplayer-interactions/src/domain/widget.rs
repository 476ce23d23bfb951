//! The answer widget protocol.

use std::fmt;

use lessonplayer_core::answer::UserAnswer;
use lessonplayer_core::draft::{ErrorCategory, WidgetDraft};

use super::errors::AnswerError;

/// When validation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationTrigger {
    /// On every input change. Advisory; never blocks submission.
    RealTime,
    /// On submit. Authoritative; a non-empty result aborts submission.
    SubmitTime,
}

impl From<ValidationTrigger> for ErrorCategory {
    fn from(trigger: ValidationTrigger) -> Self {
        match trigger {
            ValidationTrigger::RealTime => Self::RealTime,
            ValidationTrigger::SubmitTime => Self::SubmitTime,
        }
    }
}

impl From<ErrorCategory> for ValidationTrigger {
    fn from(category: ErrorCategory) -> Self {
        match category {
            ErrorCategory::RealTime => Self::RealTime,
            ErrorCategory::SubmitTime => Self::SubmitTime,
        }
    }
}

/// Per-widget presentation state of a text-entry widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerWidgetState {
    /// The text exactly as typed.
    pub raw_input: String,
    /// The error currently shown, if any.
    pub current_error: Option<AnswerError>,
    /// Whether there is something to submit.
    pub is_answer_available: bool,
}

/// Change notifications a widget emits for its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetNotification {
    /// The shown error or the answer availability changed. The host feeds
    /// this to its submit-enablement callback.
    ErrorOrAvailabilityChanged {
        /// Learner-facing error message, if an error is showing.
        pending_error: Option<String>,
        /// Whether an answer is available to submit.
        answer_available: bool,
    },
}

impl WidgetNotification {
    /// Builds the notification for the given error and availability.
    #[must_use]
    pub fn error_or_availability(error: Option<&AnswerError>, answer_available: bool) -> Self {
        Self::ErrorOrAvailabilityChanged {
            pending_error: error.map(ToString::to_string),
            answer_available,
        }
    }
}

/// Error bookkeeping for widgets whose answer is always available.
///
/// Records the shown error and queues a notification whenever it changes.
#[derive(Debug, Clone, Default)]
pub struct ErrorSlot {
    error: Option<AnswerError>,
    notifications: Vec<WidgetNotification>,
}

impl ErrorSlot {
    /// The error currently shown.
    #[must_use]
    pub fn current(&self) -> Option<&AnswerError> {
        self.error.as_ref()
    }

    /// Records `error` as the shown error and returns it.
    pub fn record(&mut self, error: Option<AnswerError>) -> Option<AnswerError> {
        if error != self.error {
            self.notifications
                .push(WidgetNotification::error_or_availability(error.as_ref(), true));
            self.error.clone_from(&error);
        }
        error
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

/// Learner input routed to the active widget. Each widget accepts the
/// inputs that make sense for it and ignores the rest.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetInput {
    /// The text field now contains this text.
    TextChanged(String),
    /// The choice at this index was clicked.
    ChoiceClicked(usize),
    /// Move the slot at `from` to `to`.
    SlotMoved {
        /// Source index.
        from: usize,
        /// Destination index.
        to: usize,
    },
    /// Merge the slot at this index into the next one.
    SlotMergedWithNext(usize),
    /// Split the slot at this index into one slot per item.
    SlotSplit(usize),
    /// The image was clicked at normalized coordinates.
    ImageClicked {
        /// Horizontal coordinate in `[0, 1]`.
        x: f64,
        /// Vertical coordinate in `[0, 1]`.
        y: f64,
    },
}

/// Trait every answer-input widget implements.
///
/// Mutations queue [`WidgetNotification`]s which the host drains, the same
/// way it would drain any other pending changes.
pub trait AnswerWidget: fmt::Debug + Send {
    /// Interaction id this widget was built for.
    fn interaction_id(&self) -> &str;

    /// The typed answer, or `None` when the input is empty and empty input
    /// is permitted.
    fn current_answer(&self) -> Option<UserAnswer>;

    /// Runs validation for `trigger`, records the result as the current error
    /// and returns it.
    fn validate(&mut self, trigger: ValidationTrigger) -> Option<AnswerError>;

    /// The error currently shown.
    fn current_error(&self) -> Option<&AnswerError>;

    /// Whether there is something to submit.
    fn is_answer_available(&self) -> bool;

    /// Applies learner input. Returns whether the input applied to this widget.
    fn handle_input(&mut self, input: WidgetInput) -> bool;

    /// Whether the host must show a submit control.
    fn is_explicit_submission_required(&self) -> bool {
        true
    }

    /// Whether the widget navigates by itself.
    fn is_auto_navigating(&self) -> bool {
        false
    }

    /// Captures in-progress input so it survives teardown. Widgets without
    /// draft support return `None`.
    fn serialize_draft(&self) -> Option<WidgetDraft> {
        None
    }

    /// Notifications queued since the last clear.
    fn pending_notifications(&self) -> &[WidgetNotification];

    /// Clears queued notifications after the host has handled them.
    fn clear_notifications(&mut self);

    /// Drains queued notifications.
    fn take_notifications(&mut self) -> Vec<WidgetNotification> {
        let notifications = self.pending_notifications().to_vec();
        self.clear_notifications();
        notifications
    }
}

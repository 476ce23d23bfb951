//! Answer submission.

use lessonplayer_core::answer::UserAnswer;
use tracing::info;

use crate::domain::errors::AnswerError;
use crate::domain::widget::{AnswerWidget, ValidationTrigger};

/// Runs submit-time validation and, when it passes, returns the widget's
/// answer for forwarding. `Ok(None)` means the widget accepted an empty
/// answer and there is nothing to forward.
///
/// # Errors
///
/// Returns the submit-time `AnswerError`; the widget also keeps showing it.
pub fn submit_answer(widget: &mut dyn AnswerWidget) -> Result<Option<UserAnswer>, AnswerError> {
    if let Some(error) = widget.validate(ValidationTrigger::SubmitTime) {
        info!(
            interaction_id = widget.interaction_id(),
            category = error.category(),
            "answer rejected"
        );
        return Err(error);
    }
    let answer = widget.current_answer();
    info!(
        interaction_id = widget.interaction_id(),
        has_answer = answer.is_some(),
        "answer submitted"
    );
    Ok(answer)
}

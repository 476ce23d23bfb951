//! Lesson player host error types.

use lessonplayer_core::error::PlayerError;
use lessonplayer_interactions::domain::errors::AnswerError;
use thiserror::Error;

/// Startup and runtime errors for the host.
#[derive(Debug, Error)]
pub enum HostError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading an input file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot or output could not be (de)serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The player core rejected an operation.
    #[error(transparent)]
    Player(#[from] PlayerError),

    /// The learner's answer failed submit-time validation.
    #[error("answer rejected: {0}")]
    Answer(#[from] AnswerError),

    /// An answer operation was attempted while no state with an answer
    /// widget is showing.
    #[error("no answer widget is active")]
    NoActiveWidget,

    /// A timer was scheduled outside a tokio runtime.
    #[error("no async runtime available to schedule timers")]
    NoRuntime,
}

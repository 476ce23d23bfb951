//! Lesson Player host glue.
//!
//! Connects the presentation core to a screen: learner input and submission,
//! submit-control enablement, draft save and restore, and celebration timers
//! bound to the screen's lifetime.

pub mod celebration;
pub mod drafts;
pub mod error;
pub mod state;

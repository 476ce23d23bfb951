//! Lesson Player — state presentation.
//!
//! Responsible for turning a state snapshot into the ordered list of display
//! items the learner sees: capability flags, collapsible answer history,
//! the trailing navigation control and the assembler that combines them.

pub mod application;
pub mod domain;

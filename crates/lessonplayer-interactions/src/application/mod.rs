//! Widget construction and answer submission.

pub mod registry;
pub mod submission;

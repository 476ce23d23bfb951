//! Parsers for typed learner input.
//!
//! Each parser exposes a real-time check (advisory, run on every edit), a
//! submit-time check (authoritative) and the conversion to a typed value.

pub mod fraction;
pub mod math;
pub mod number;
pub mod ratio;

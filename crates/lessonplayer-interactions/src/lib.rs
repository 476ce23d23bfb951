//! Lesson Player — answer widgets.
//!
//! Responsible for every answer-input widget the player can show: their
//! validation rules, their mutation operations and the typed answers they
//! produce. Widgets are constructed through the registry by interaction id.

pub mod application;
pub mod domain;
pub mod parsing;

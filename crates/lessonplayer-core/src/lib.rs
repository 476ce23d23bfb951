//! Lesson Player Core — shared data model.
//!
//! This crate defines the types every other crate in the player depends on:
//! state snapshots handed over by the lesson engine, typed answers handed
//! back to it, and the abstractions widgets are built on (customization
//! arguments, draft storage, math parsing). It contains no presentation logic.

pub mod answer;
pub mod customization;
pub mod draft;
pub mod error;
pub mod math;
pub mod snapshot;

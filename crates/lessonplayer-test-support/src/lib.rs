//! Shared test fixtures and mocks for the lesson player.

mod draft_store;
mod fixtures;
mod math;
mod rng;

pub use draft_store::{FailingDraftStore, InMemoryDraftStore};
pub use fixtures::{
    SnapshotBuilder, answer_with_feedback, drag_drop_args, item_selection_args,
    multiple_choice_args, plain_answer,
};
pub use math::{FakeMathParser, FakeParsedMath};
pub use rng::{DeterministicRng, SeededRng, SequenceRng};

//! Display items and the pure rules that produce them.

pub mod display_item;
pub mod feature_set;
pub mod history;
pub mod navigation;

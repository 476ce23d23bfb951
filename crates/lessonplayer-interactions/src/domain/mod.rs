//! Answer widget protocol and the concrete widgets.

pub mod continue_widget;
pub mod drag_drop_sort;
pub mod errors;
pub mod fraction_input;
pub mod image_region;
pub mod interaction_ids;
pub mod math_expression_input;
pub mod numeric_input;
pub mod ratio_input;
pub mod selection;
pub mod text_field;
pub mod text_input;
pub mod widget;

//! Interaction identifiers as they appear in lesson content.

/// Continue button.
pub const CONTINUE: &str = "Continue";
/// Free text.
pub const TEXT_INPUT: &str = "TextInput";
/// Fraction or mixed number.
pub const FRACTION_INPUT: &str = "FractionInput";
/// Real number.
pub const NUMERIC_INPUT: &str = "NumericInput";
/// Colon-separated ratio.
pub const RATIO_EXPRESSION_INPUT: &str = "RatioExpressionInput";
/// Arithmetic expression.
pub const NUMERIC_EXPRESSION_INPUT: &str = "NumericExpressionInput";
/// Algebraic expression.
pub const ALGEBRAIC_EXPRESSION_INPUT: &str = "AlgebraicExpressionInput";
/// Equation.
pub const MATH_EQUATION_INPUT: &str = "MathEquationInput";
/// Single choice.
pub const MULTIPLE_CHOICE_INPUT: &str = "MultipleChoiceInput";
/// One or more choices.
pub const ITEM_SELECTION_INPUT: &str = "ItemSelectionInput";
/// Ranking by drag and drop.
pub const DRAG_AND_DROP_SORT_INPUT: &str = "DragAndDropSortInput";
/// Click on an image region.
pub const IMAGE_CLICK_INPUT: &str = "ImageClickInput";

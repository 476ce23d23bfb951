//! Widget registry: interaction id to widget factory.
//!
//! The assembler never names a concrete widget type. It hands the
//! interaction spec to the registry and gets back a boxed `AnswerWidget`.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use lessonplayer_core::customization::CustomizationArgs;
use lessonplayer_core::draft::WidgetDraft;
use lessonplayer_core::error::PlayerError;
use lessonplayer_core::math::{MathExpressionMode, MathExpressionParser};
use lessonplayer_core::snapshot::InteractionSpec;
use tracing::debug;

use crate::domain::continue_widget::ContinueWidget;
use crate::domain::drag_drop_sort::DragDropSortWidget;
use crate::domain::fraction_input::FractionInputWidget;
use crate::domain::image_region::ImageRegionWidget;
use crate::domain::interaction_ids;
use crate::domain::math_expression_input::MathExpressionInputWidget;
use crate::domain::numeric_input::NumericInputWidget;
use crate::domain::ratio_input::RatioInputWidget;
use crate::domain::selection::SelectionWidget;
use crate::domain::text_input::TextInputWidget;
use crate::domain::widget::AnswerWidget;
use crate::parsing::math::DefaultMathExpressionParser;

/// Everything a factory may need to build a widget.
#[derive(Debug)]
pub struct WidgetContext<'a> {
    /// Interaction id being built.
    pub interaction_id: &'a str,
    /// The interaction's customization args.
    pub customization_args: &'a CustomizationArgs,
    /// Draft saved for this state, if any.
    pub draft: Option<&'a WidgetDraft>,
    /// Parser shared by the math widgets.
    pub math_parser: Arc<dyn MathExpressionParser>,
}

/// Builds a widget from its context.
pub type WidgetFactory = fn(&WidgetContext<'_>) -> Box<dyn AnswerWidget>;

/// Maps interaction ids to widget factories.
pub struct WidgetRegistry {
    factories: HashMap<String, WidgetFactory>,
    math_parser: Arc<dyn MathExpressionParser>,
}

impl fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("WidgetRegistry")
            .field("interaction_ids", &ids)
            .field("math_parser", &self.math_parser)
            .finish()
    }
}

impl WidgetRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(math_parser: Arc<dyn MathExpressionParser>) -> Self {
        Self {
            factories: HashMap::new(),
            math_parser,
        }
    }

    /// Creates a registry with every built-in widget registered.
    #[must_use]
    pub fn with_default_widgets(math_parser: Arc<dyn MathExpressionParser>) -> Self {
        let mut registry = Self::new(math_parser);
        registry.register(interaction_ids::CONTINUE, |_| Box::new(ContinueWidget::new()));
        registry.register(interaction_ids::TEXT_INPUT, |ctx| {
            Box::new(TextInputWidget::new(ctx.customization_args))
        });
        registry.register(interaction_ids::FRACTION_INPUT, |ctx| {
            Box::new(FractionInputWidget::new(ctx.customization_args, ctx.draft))
        });
        registry.register(interaction_ids::NUMERIC_INPUT, |ctx| {
            Box::new(NumericInputWidget::new(ctx.draft))
        });
        registry.register(interaction_ids::RATIO_EXPRESSION_INPUT, |ctx| {
            Box::new(RatioInputWidget::new(ctx.customization_args))
        });
        registry.register(interaction_ids::NUMERIC_EXPRESSION_INPUT, |ctx| {
            math_widget(ctx, MathExpressionMode::NumericExpression)
        });
        registry.register(interaction_ids::ALGEBRAIC_EXPRESSION_INPUT, |ctx| {
            math_widget(ctx, MathExpressionMode::AlgebraicExpression)
        });
        registry.register(interaction_ids::MATH_EQUATION_INPUT, |ctx| {
            math_widget(ctx, MathExpressionMode::MathEquation)
        });
        registry.register(interaction_ids::MULTIPLE_CHOICE_INPUT, selection_widget);
        registry.register(interaction_ids::ITEM_SELECTION_INPUT, selection_widget);
        registry.register(interaction_ids::DRAG_AND_DROP_SORT_INPUT, |ctx| {
            Box::new(DragDropSortWidget::new(ctx.customization_args))
        });
        registry.register(interaction_ids::IMAGE_CLICK_INPUT, |ctx| {
            Box::new(ImageRegionWidget::new(ctx.customization_args))
        });
        registry
    }

    /// Registers (or replaces) the factory for `interaction_id`.
    pub fn register(&mut self, interaction_id: &str, factory: WidgetFactory) {
        self.factories.insert(interaction_id.to_owned(), factory);
    }

    /// Whether a widget is registered for `interaction_id`.
    #[must_use]
    pub fn supports(&self, interaction_id: &str) -> bool {
        self.factories.contains_key(interaction_id)
    }

    /// Builds the widget for `spec`, passing `draft` to widgets that restore
    /// drafts.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::UnknownInteraction` if no factory is registered
    /// for the spec's interaction id.
    pub fn create(
        &self,
        spec: &InteractionSpec,
        draft: Option<&WidgetDraft>,
    ) -> Result<Box<dyn AnswerWidget>, PlayerError> {
        let factory = self
            .factories
            .get(&spec.id)
            .ok_or_else(|| PlayerError::UnknownInteraction(spec.id.clone()))?;
        debug!(interaction_id = %spec.id, has_draft = draft.is_some(), "creating widget");
        Ok(factory(&WidgetContext {
            interaction_id: &spec.id,
            customization_args: &spec.customization_args,
            draft,
            math_parser: Arc::clone(&self.math_parser),
        }))
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::with_default_widgets(Arc::new(DefaultMathExpressionParser))
    }
}

fn math_widget(ctx: &WidgetContext<'_>, mode: MathExpressionMode) -> Box<dyn AnswerWidget> {
    Box::new(MathExpressionInputWidget::new(
        mode,
        ctx.customization_args,
        Arc::clone(&ctx.math_parser),
    ))
}

fn selection_widget(ctx: &WidgetContext<'_>) -> Box<dyn AnswerWidget> {
    Box::new(SelectionWidget::new(
        ctx.interaction_id,
        ctx.customization_args,
    ))
}

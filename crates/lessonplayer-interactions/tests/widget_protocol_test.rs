//! Integration tests for widgets built through the registry.

use lessonplayer_core::answer::Answer;
use lessonplayer_core::customization::CustomizationArgs;
use lessonplayer_core::snapshot::InteractionSpec;
use lessonplayer_interactions::application::registry::WidgetRegistry;
use lessonplayer_interactions::application::submission::submit_answer;
use lessonplayer_interactions::domain::interaction_ids;
use lessonplayer_interactions::domain::widget::{WidgetInput, WidgetNotification};
use lessonplayer_test_support::{drag_drop_args, item_selection_args};

fn spec(id: &str, args: CustomizationArgs) -> InteractionSpec {
    InteractionSpec {
        id: id.to_owned(),
        customization_args: args,
    }
}

#[test]
fn test_fraction_widget_error_then_fix_then_submit() {
    let registry = WidgetRegistry::default();
    let mut widget = registry
        .create(
            &spec(interaction_ids::FRACTION_INPUT, CustomizationArgs::new()),
            None,
        )
        .unwrap();

    // Typing an invalid character shows the advisory error.
    widget.handle_input(WidgetInput::TextChanged("1/x".into()));
    assert_eq!(
        widget.take_notifications(),
        vec![WidgetNotification::ErrorOrAvailabilityChanged {
            pending_error: Some(
                "Please only use numerical digits, spaces or forward slashes (/)".into()
            ),
            answer_available: true,
        }]
    );

    // Fixing the text clears it.
    widget.handle_input(WidgetInput::TextChanged("1/4".into()));
    assert_eq!(
        widget.take_notifications(),
        vec![WidgetNotification::error_or_availability(None, true)]
    );

    let answer = submit_answer(widget.as_mut()).unwrap().unwrap();
    assert!(matches!(answer.answer, Answer::Fraction(_)));
}

#[test]
fn test_widgets_ignore_inputs_meant_for_other_widgets() {
    let registry = WidgetRegistry::default();
    let mut widget = registry
        .create(
            &spec(interaction_ids::DRAG_AND_DROP_SORT_INPUT, drag_drop_args(3, false)),
            None,
        )
        .unwrap();

    assert!(!widget.handle_input(WidgetInput::TextChanged("hello".into())));
    assert!(widget.handle_input(WidgetInput::SlotMoved { from: 0, to: 1 }));
    assert!(submit_answer(widget.as_mut()).unwrap().is_some());
}

#[test]
fn test_item_selection_submission_requires_minimum() {
    let registry = WidgetRegistry::default();
    let mut widget = registry
        .create(
            &spec(interaction_ids::ITEM_SELECTION_INPUT, item_selection_args(4, 2, 3)),
            None,
        )
        .unwrap();
    widget.handle_input(WidgetInput::ChoiceClicked(3));

    let error = submit_answer(widget.as_mut()).unwrap_err();
    assert_eq!(error.to_string(), "Please select at least 2 choices.");
    assert_eq!(error.category(), "below_minimum");

    widget.handle_input(WidgetInput::ChoiceClicked(1));
    assert!(submit_answer(widget.as_mut()).unwrap().is_some());
}

#[test]
fn test_only_fraction_and_numeric_widgets_produce_drafts() {
    let registry = WidgetRegistry::default();
    let with_drafts = [interaction_ids::FRACTION_INPUT, interaction_ids::NUMERIC_INPUT];

    for id in [
        interaction_ids::FRACTION_INPUT,
        interaction_ids::NUMERIC_INPUT,
        interaction_ids::TEXT_INPUT,
        interaction_ids::RATIO_EXPRESSION_INPUT,
        interaction_ids::NUMERIC_EXPRESSION_INPUT,
    ] {
        let widget = registry
            .create(&spec(id, CustomizationArgs::new()), None)
            .unwrap();
        assert_eq!(
            widget.serialize_draft().is_some(),
            with_drafts.contains(&id),
            "unexpected draft support for {id}"
        );
    }
}

#[test]
fn test_math_equation_end_to_end_with_default_parser() {
    let registry = WidgetRegistry::default();
    let mut widget = registry
        .create(
            &spec(
                interaction_ids::MATH_EQUATION_INPUT,
                CustomizationArgs::new().with("customOskLetters", vec!["x", "y"]),
            ),
            None,
        )
        .unwrap();

    widget.handle_input(WidgetInput::TextChanged("y = 2z".into()));
    let error = submit_answer(widget.as_mut()).unwrap_err();
    assert_eq!(error.category(), "disabled_variables_in_use");

    widget.handle_input(WidgetInput::TextChanged("y = 2x + 1".into()));
    let answer = submit_answer(widget.as_mut()).unwrap().unwrap();
    match answer.answer {
        Answer::MathExpression(math) => {
            assert_eq!(math.latex.as_deref(), Some("y = 2x + 1"));
        }
        other => panic!("expected MathExpression, got {other:?}"),
    }
}

//! End-to-end display list scenarios through the item assembler.

use std::sync::Arc;

use lessonplayer_core::customization::CustomizationArgs;
use lessonplayer_interactions::application::registry::WidgetRegistry;
use lessonplayer_interactions::application::submission::submit_answer;
use lessonplayer_interactions::domain::errors::{AnswerError, FractionInputError};
use lessonplayer_interactions::domain::interaction_ids;
use lessonplayer_state::application::assembler::{ItemAssembler, navigation_controls};
use lessonplayer_state::application::config::PlayerConfig;
use lessonplayer_state::domain::display_item::{DisplayItem, NavigationControl};
use lessonplayer_state::domain::feature_set::{FeatureSet, PlayerFeatureSetBuilder};
use lessonplayer_test_support::{SnapshotBuilder, answer_with_feedback};

fn assembler() -> ItemAssembler {
    ItemAssembler::new(Arc::new(WidgetRegistry::default()))
}

fn count_history_items(items: &[DisplayItem]) -> usize {
    items
        .iter()
        .filter(|item| {
            matches!(
                item,
                DisplayItem::SubmittedAnswer { .. } | DisplayItem::Feedback { .. }
            )
        })
        .count()
}

#[test]
fn test_completed_state_with_next_shows_only_next() {
    let features = PlayerFeatureSetBuilder::exploration_player().build();
    let snapshot = SnapshotBuilder::completed()
        .prior_answer(answer_with_feedback("3/4", "<p>Correct!</p>"))
        .has_next()
        .build();

    let items = assembler().compute(&snapshot, &features).unwrap();

    assert_eq!(
        navigation_controls(&items),
        vec![NavigationControl::Next {
            has_previous_button: false
        }]
    );
    assert!(!items.iter().any(|item| matches!(
        item,
        DisplayItem::Navigation(NavigationControl::Submit { .. })
    )));
}

#[test]
fn test_terminal_state_shows_replay_then_return_to_topic() {
    let features = PlayerFeatureSetBuilder::new()
        .add_content_support()
        .add_replay_button_support()
        .add_return_to_topic_support()
        .build();
    let snapshot = SnapshotBuilder::terminal().has_previous().build();

    let items = assembler().compute(&snapshot, &features).unwrap();

    assert_eq!(
        items[1..],
        [
            DisplayItem::Navigation(NavigationControl::Replay),
            DisplayItem::Navigation(NavigationControl::ReturnToTopic {
                has_previous_button: false
            }),
        ]
    );
}

#[test]
fn test_three_wrong_answers_collapse_behind_header() {
    // Arrange
    let features = PlayerFeatureSetBuilder::exploration_player().build();
    let snapshot = SnapshotBuilder::pending()
        .interaction(interaction_ids::FRACTION_INPUT, CustomizationArgs::new())
        .wrong_answers(3)
        .build();
    let mut assembler = assembler();

    // Act
    let mut items = assembler.compute(&snapshot, &features).unwrap();

    // Assert
    let headers: Vec<&DisplayItem> = items
        .iter()
        .filter(|item| item.is_previous_responses_header())
        .collect();
    assert_eq!(
        headers,
        vec![&DisplayItem::PreviousResponsesHeader {
            count: 2,
            expanded: false
        }]
    );
    // Only the most recent answer and its feedback are visible.
    assert_eq!(count_history_items(&items), 2);

    let header_index = items
        .iter()
        .position(DisplayItem::is_previous_responses_header)
        .unwrap();
    let before = items.clone();
    assembler.toggle_previous_responses(&mut items).unwrap();

    assert_eq!(items.len(), before.len() + 4);
    assert_eq!(
        items[header_index + 1],
        DisplayItem::SubmittedAnswer {
            answer: lessonplayer_test_support::plain_answer("wrong 0"),
            is_correct: false
        }
    );
    assert_eq!(items[header_index + 5..], before[header_index + 1..]);
}

#[test]
fn test_toggle_twice_restores_list() {
    let features = PlayerFeatureSetBuilder::exploration_player().build();
    let snapshot = SnapshotBuilder::pending().wrong_answers(4).build();
    let mut assembler = assembler();
    let original = assembler.compute(&snapshot, &features).unwrap();
    let mut items = original.clone();

    assembler.toggle_previous_responses(&mut items).unwrap();
    assembler.toggle_previous_responses(&mut items).unwrap();

    assert_eq!(items, original);
    assert!(!assembler.previous_responses_expanded());
}

#[test]
fn test_empty_fraction_submission_is_rejected() {
    // Arrange
    let features = PlayerFeatureSetBuilder::exploration_player().build();
    let snapshot = SnapshotBuilder::pending()
        .interaction(interaction_ids::FRACTION_INPUT, CustomizationArgs::new())
        .build();
    let mut assembler = assembler();
    assembler.compute(&snapshot, &features).unwrap();
    let widget = assembler.pending_widget_mut().unwrap();

    // Act
    let result = submit_answer(widget);

    // Assert
    assert_eq!(
        result,
        Err(AnswerError::Fraction(FractionInputError::EmptyInput))
    );
}

#[test]
fn test_yaml_config_drives_assembly() {
    let features = PlayerConfig::from_yaml("capabilities: [interaction, forward_navigation]")
        .unwrap()
        .feature_set();
    let snapshot = SnapshotBuilder::pending().wrong_answers(2).build();

    let items = assembler().compute(&snapshot, &features).unwrap();

    assert_eq!(
        items,
        vec![
            DisplayItem::AnswerWidget {
                interaction_id: interaction_ids::TEXT_INPUT.to_owned()
            },
            DisplayItem::Navigation(NavigationControl::Submit {
                has_previous_button: false
            }),
        ]
    );
    assert_ne!(features, FeatureSet::default());
}

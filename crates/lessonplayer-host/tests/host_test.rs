//! Integration tests for the player host.

mod common;

use std::sync::Arc;
use std::time::Duration;

use lessonplayer_core::answer::Answer;
use lessonplayer_core::customization::CustomizationArgs;
use lessonplayer_core::draft::WidgetDraft;
use lessonplayer_core::error::PlayerError;
use lessonplayer_host::celebration::{CONGRATULATIONS_DURATION, CelebrationEvent};
use lessonplayer_host::error::HostError;
use lessonplayer_interactions::domain::interaction_ids;
use lessonplayer_interactions::domain::widget::WidgetInput;
use lessonplayer_state::domain::display_item::DisplayItem;
use lessonplayer_state::domain::feature_set::PlayerFeatureSetBuilder;
use lessonplayer_test_support::{FailingDraftStore, InMemoryDraftStore, SnapshotBuilder};

use common::{TEST_CELEBRATION_DELAY, build_host, build_host_with_features, drain};

fn fraction_state(name: &str) -> lessonplayer_core::snapshot::StateSnapshot {
    SnapshotBuilder::pending()
        .state_name(name)
        .interaction(interaction_ids::FRACTION_INPUT, CustomizationArgs::new())
        .build()
}

fn fraction_draft(raw_text: &str) -> WidgetDraft {
    WidgetDraft {
        interaction_id: interaction_ids::FRACTION_INPUT.to_owned(),
        raw_text: raw_text.into(),
        last_error_category: None,
    }
}

#[tokio::test]
async fn test_submit_enablement_follows_widget_errors() {
    // Arrange
    let (mut host, _rx) = build_host(Arc::new(InMemoryDraftStore::new()));
    host.show(fraction_state("Fractions")).await.unwrap();

    // Act
    host.handle_input(WidgetInput::TextChanged("1/x".into()))
        .unwrap();
    let with_error = host.submit_state().clone();
    host.handle_input(WidgetInput::TextChanged("3/4".into()))
        .unwrap();

    // Assert
    assert!(!with_error.is_enabled());
    assert!(with_error.pending_error.is_some());
    assert!(host.submit_state().is_enabled());
    let answer = host.submit().unwrap().unwrap();
    assert!(matches!(answer.answer, Answer::Fraction(_)));
}

#[tokio::test]
async fn test_empty_submission_is_rejected_and_shown() {
    let (mut host, _rx) = build_host(Arc::new(InMemoryDraftStore::new()));
    host.show(fraction_state("Fractions")).await.unwrap();

    let result = host.submit();

    match result.unwrap_err() {
        HostError::Answer(error) => assert_eq!(error.category(), "empty_input"),
        other => panic!("expected Answer, got {other:?}"),
    }
    assert_eq!(
        host.submit_state().pending_error.as_deref(),
        Some("Enter a fraction to continue.")
    );
}

#[tokio::test]
async fn test_suspend_saves_draft_and_show_restores_it() {
    // Arrange
    let store = Arc::new(InMemoryDraftStore::new());
    let (mut host, _rx) = build_host(store.clone());
    host.show(fraction_state("Fractions")).await.unwrap();
    host.handle_input(WidgetInput::TextChanged("2/3".into()))
        .unwrap();

    // Act
    host.suspend().await.unwrap();
    let (mut resumed, _rx) = build_host(store.clone());
    resumed.show(fraction_state("Fractions")).await.unwrap();

    // Assert
    assert_eq!(
        store.saved_drafts(),
        vec![(
            "Fractions".to_owned(),
            WidgetDraft {
                interaction_id: interaction_ids::FRACTION_INPUT.to_owned(),
                raw_text: "2/3".into(),
                last_error_category: None,
            }
        )]
    );
    assert_eq!(store.current("Fractions"), None);
    assert!(resumed.submit_state().is_enabled());
    let answer = resumed.submit().unwrap().unwrap();
    assert!(matches!(answer.answer, Answer::Fraction(_)));
}

#[tokio::test]
async fn test_restored_draft_shows_the_same_real_time_error() {
    // Arrange
    let store = Arc::new(InMemoryDraftStore::new());
    let (mut host, _rx) = build_host(store.clone());
    host.show(fraction_state("Fractions")).await.unwrap();
    host.handle_input(WidgetInput::TextChanged("abc".into()))
        .unwrap();
    let before = host.submit_state().clone();

    // Act
    host.suspend().await.unwrap();
    let (mut resumed, _rx) = build_host(store);
    resumed.show(fraction_state("Fractions")).await.unwrap();

    // Assert
    assert_eq!(
        before.pending_error.as_deref(),
        Some("Please only use numerical digits, spaces or forward slashes (/)")
    );
    assert_eq!(resumed.submit_state(), &before);
}

#[tokio::test]
async fn test_draft_is_kept_when_state_has_no_pending_widget() {
    // Arrange
    let store = Arc::new(InMemoryDraftStore::with_draft("Fractions", fraction_draft("2/3")));
    let (mut host, _rx) = build_host(store.clone());

    // Act
    host.show(SnapshotBuilder::completed().state_name("Fractions").build())
        .await
        .unwrap();

    // Assert
    assert_eq!(store.current("Fractions"), Some(fraction_draft("2/3")));
}

#[tokio::test]
async fn test_draft_for_another_interaction_is_kept() {
    // Arrange
    let store = Arc::new(InMemoryDraftStore::with_draft("Numbers", fraction_draft("2/3")));
    let (mut host, _rx) = build_host(store.clone());
    let snapshot = SnapshotBuilder::pending()
        .state_name("Numbers")
        .interaction(interaction_ids::NUMERIC_INPUT, CustomizationArgs::new())
        .build();

    // Act
    host.show(snapshot).await.unwrap();

    // Assert
    assert_eq!(store.current("Numbers"), Some(fraction_draft("2/3")));
    assert!(!host.submit_state().answer_available);
}

#[tokio::test]
async fn test_suspend_without_draft_support_saves_nothing() {
    let store = Arc::new(InMemoryDraftStore::new());
    let (mut host, _rx) = build_host(store.clone());
    host.show(SnapshotBuilder::pending().build()).await.unwrap();

    host.suspend().await.unwrap();

    assert!(store.saved_drafts().is_empty());
}

#[tokio::test]
async fn test_failing_draft_store_surfaces_infrastructure_error() {
    let (mut host, _rx) = build_host(Arc::new(FailingDraftStore));

    let result = host.show(fraction_state("Fractions")).await;

    match result.unwrap_err() {
        HostError::Player(PlayerError::Infrastructure(message)) => {
            assert_eq!(message, "disk full");
        }
        other => panic!("expected Player(Infrastructure), got {other:?}"),
    }
}

#[tokio::test]
async fn test_input_without_active_widget_fails() {
    let (mut host, _rx) = build_host(Arc::new(InMemoryDraftStore::new()));
    host.show(SnapshotBuilder::completed().wrong_answers(1).build())
        .await
        .unwrap();

    let result = host.handle_input(WidgetInput::TextChanged("1".into()));

    assert!(matches!(result, Err(HostError::NoActiveWidget)));
}

#[tokio::test]
async fn test_moving_to_another_state_collapses_previous_responses() {
    // Arrange
    let (mut host, _rx) = build_host(Arc::new(InMemoryDraftStore::new()));
    let first = SnapshotBuilder::pending().state_name("One").wrong_answers(3).build();
    let second = SnapshotBuilder::pending().state_name("Two").wrong_answers(3).build();
    host.show(first.clone()).await.unwrap();
    host.toggle_previous_responses().unwrap();

    // Act
    let same_state = host.show(first).await.unwrap().to_vec();
    let next_state = host.show(second).await.unwrap().to_vec();

    // Assert
    let header = |items: &[DisplayItem]| {
        items
            .iter()
            .find(|item| item.is_previous_responses_header())
            .cloned()
    };
    assert_eq!(
        header(&same_state),
        Some(DisplayItem::PreviousResponsesHeader {
            count: 2,
            expanded: true
        })
    );
    assert_eq!(
        header(&next_state),
        Some(DisplayItem::PreviousResponsesHeader {
            count: 2,
            expanded: false
        })
    );
}

#[tokio::test]
async fn test_toggle_with_collapsing_disabled_is_rejected() {
    let features = PlayerFeatureSetBuilder::new()
        .add_past_answers_support()
        .build();
    let (mut host, _rx) = build_host_with_features(Arc::new(InMemoryDraftStore::new()), features);
    host.show(SnapshotBuilder::pending().wrong_answers(3).build())
        .await
        .unwrap();

    let result = host.toggle_previous_responses();

    assert!(matches!(
        result,
        Err(HostError::Player(PlayerError::CollapsingDisabled))
    ));
}

#[tokio::test(start_paused = true)]
async fn test_terminal_state_starts_confetti_after_delay() {
    // Arrange
    let (mut host, mut rx) = build_host(Arc::new(InMemoryDraftStore::new()));

    // Act
    host.show(SnapshotBuilder::terminal().build()).await.unwrap();
    let immediately = drain(&mut rx);
    tokio::time::sleep(TEST_CELEBRATION_DELAY + Duration::from_millis(1)).await;

    // Assert
    assert!(immediately.is_empty());
    assert_eq!(drain(&mut rx), vec![CelebrationEvent::StartEndOfSessionConfetti]);
}

#[tokio::test(start_paused = true)]
async fn test_reshowing_terminal_state_starts_confetti_once() {
    // Arrange
    let (mut host, mut rx) = build_host(Arc::new(InMemoryDraftStore::new()));
    let terminal = SnapshotBuilder::terminal().build();

    // Act
    host.show(terminal.clone()).await.unwrap();
    host.show(terminal).await.unwrap();
    tokio::time::sleep(TEST_CELEBRATION_DELAY * 2).await;

    // Assert
    assert_eq!(drain(&mut rx), vec![CelebrationEvent::StartEndOfSessionConfetti]);
}

#[tokio::test(start_paused = true)]
async fn test_suspend_cancels_pending_confetti() {
    let (mut host, mut rx) = build_host(Arc::new(InMemoryDraftStore::new()));
    host.show(SnapshotBuilder::terminal().build()).await.unwrap();

    host.suspend().await.unwrap();
    tokio::time::sleep(TEST_CELEBRATION_DELAY * 2).await;

    assert!(drain(&mut rx).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_correct_answer_is_congratulated_then_hidden() {
    let (mut host, mut rx) = build_host(Arc::new(InMemoryDraftStore::new()));

    host.on_answer_outcome(false).unwrap();
    host.on_answer_outcome(true).unwrap();
    let shown = drain(&mut rx);
    tokio::time::sleep(CONGRATULATIONS_DURATION + Duration::from_millis(1)).await;

    assert_eq!(shown, vec![CelebrationEvent::ShowCongratulations]);
    assert_eq!(drain(&mut rx), vec![CelebrationEvent::HideCongratulations]);
}

//! Drag-and-drop ranking.
//!
//! The arrangement is an ordered list of slots, each holding one or more
//! choice ids. Moving, merging and splitting slots only ever reorders or
//! regroups ids, so the ids across all slots are always a permutation of
//! the original choices.

use std::collections::{BTreeMap, BTreeSet};

use lessonplayer_core::answer::{Answer, AnswerDisplay, UserAnswer};
use lessonplayer_core::customization::CustomizationArgs;
use lessonplayer_core::snapshot::ContentId;
use tracing::debug;

use super::errors::{AnswerError, DragDropSortError};
use super::interaction_ids;
use super::widget::{AnswerWidget, ErrorSlot, ValidationTrigger, WidgetInput, WidgetNotification};

/// Ranking widget over the interaction's choices.
#[derive(Debug)]
pub struct DragDropSortWidget {
    slots: Vec<Vec<ContentId>>,
    initial_slots: Vec<Vec<ContentId>>,
    html: BTreeMap<ContentId, String>,
    allow_grouping: bool,
    errors: ErrorSlot,
}

impl DragDropSortWidget {
    /// Creates the widget with one slot per choice, in authored order.
    /// Reads `choices` and `allowMultipleItemsInSamePosition`.
    #[must_use]
    pub fn new(args: &CustomizationArgs) -> Self {
        let choices = args.subtitled_html_list("choices");
        let slots: Vec<Vec<ContentId>> = choices
            .iter()
            .map(|choice| vec![choice.content_id.clone()])
            .collect();
        Self {
            initial_slots: slots.clone(),
            slots,
            html: choices
                .into_iter()
                .map(|choice| (choice.content_id, choice.html))
                .collect(),
            allow_grouping: args.bool_or("allowMultipleItemsInSamePosition", false),
            errors: ErrorSlot::default(),
        }
    }

    /// Current arrangement.
    #[must_use]
    pub fn slots(&self) -> &[Vec<ContentId>] {
        &self.slots
    }

    /// Whether slots may hold more than one item.
    #[must_use]
    pub fn allows_grouping(&self) -> bool {
        self.allow_grouping
    }

    /// Moves the slot at `from` so that it ends up at index `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn move_slot(&mut self, from: usize, to: usize) {
        assert!(
            from < self.slots.len() && to < self.slots.len(),
            "slot move {from} -> {to} out of range for {} slots",
            self.slots.len()
        );
        let slot = self.slots.remove(from);
        self.slots.insert(to, slot);
        self.arrangement_changed();
    }

    /// Merges the slot at `index` into the next slot. The merged slot lists
    /// the next slot's ids first, then this slot's.
    ///
    /// # Panics
    ///
    /// Panics if grouping is disabled or there is no next slot.
    pub fn merge_with_next(&mut self, index: usize) {
        assert!(self.allow_grouping, "merging requires grouping to be enabled");
        assert!(
            index + 1 < self.slots.len(),
            "no slot after {index} to merge with"
        );
        let merged = self.slots.remove(index);
        self.slots[index].extend(merged);
        self.arrangement_changed();
    }

    /// Splits the slot at `index` into one slot per id, in place.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn split(&mut self, index: usize) {
        assert!(
            index < self.slots.len(),
            "slot {index} out of range for {} slots",
            self.slots.len()
        );
        let ids = self.slots.remove(index);
        for (offset, id) in ids.into_iter().enumerate() {
            self.slots.insert(index + offset, vec![id]);
        }
        self.arrangement_changed();
    }

    fn arrangement_changed(&mut self) {
        debug!(slots = self.slots.len(), "drag-and-drop arrangement changed");
        self.validate(ValidationTrigger::RealTime);
    }

    fn html_for(&self, id: &ContentId) -> String {
        self.html.get(id).cloned().unwrap_or_default()
    }
}

impl AnswerWidget for DragDropSortWidget {
    fn interaction_id(&self) -> &str {
        interaction_ids::DRAG_AND_DROP_SORT_INPUT
    }

    fn current_answer(&self) -> Option<UserAnswer> {
        let sets = self
            .slots
            .iter()
            .map(|slot| slot.iter().cloned().collect::<BTreeSet<_>>())
            .collect();
        let display = self
            .slots
            .iter()
            .map(|slot| slot.iter().map(|id| self.html_for(id)).collect())
            .collect();
        Some(UserAnswer {
            answer: Answer::ContentIdSets(sets),
            display: AnswerDisplay::HtmlList(display),
            content_description: None,
        })
    }

    fn validate(&mut self, trigger: ValidationTrigger) -> Option<AnswerError> {
        let error = match trigger {
            ValidationTrigger::SubmitTime if self.slots == self.initial_slots => {
                Some(DragDropSortError::EmptyInput.into())
            }
            _ => None,
        };
        self.errors.record(error)
    }

    fn current_error(&self) -> Option<&AnswerError> {
        self.errors.current()
    }

    fn is_answer_available(&self) -> bool {
        true
    }

    fn handle_input(&mut self, input: WidgetInput) -> bool {
        match input {
            WidgetInput::SlotMoved { from, to } => self.move_slot(from, to),
            WidgetInput::SlotMergedWithNext(index) => self.merge_with_next(index),
            WidgetInput::SlotSplit(index) => self.split(index),
            _ => return false,
        }
        true
    }

    fn pending_notifications(&self) -> &[WidgetNotification] {
        self.errors.notifications()
    }

    fn clear_notifications(&mut self) {
        self.errors.clear_notifications();
    }
}

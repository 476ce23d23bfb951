//! Multiple-choice and item-selection input.

use lessonplayer_core::answer::{Answer, UserAnswer};
use lessonplayer_core::customization::CustomizationArgs;
use lessonplayer_core::snapshot::SubtitledHtml;
use tracing::{debug, warn};

use super::errors::{AnswerError, SelectionError};
use super::interaction_ids;
use super::widget::{AnswerWidget, ErrorSlot, ValidationTrigger, WidgetInput, WidgetNotification};

/// How clicks change the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// At most one item; a click replaces the selection.
    Radio,
    /// Several items, up to the maximum.
    Checkbox,
}

/// Guidance shown above a checkbox list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionHint {
    /// Nothing selected yet.
    NoItemsSelected,
    /// Some, but fewer than the maximum.
    SomeItemsSelected,
    /// The maximum is reached; carries the maximum.
    MaxItemsSelected(usize),
}

/// A list of choices, selected by clicking.
#[derive(Debug)]
pub struct SelectionWidget {
    interaction_id: String,
    choices: Vec<SubtitledHtml>,
    selected: Vec<usize>,
    mode: SelectionMode,
    min_selection: usize,
    max_selection: usize,
    errors: ErrorSlot,
}

fn count_arg(args: &CustomizationArgs, key: &str) -> Option<usize> {
    args.int(key).and_then(|n| usize::try_from(n).ok())
}

impl SelectionWidget {
    /// Creates the widget for `interaction_id` (multiple choice or item
    /// selection). Reads `choices`, `minAllowableSelectionCount` (default 1)
    /// and `maxAllowableSelectionCount` (default the minimum).
    #[must_use]
    pub fn new(interaction_id: &str, args: &CustomizationArgs) -> Self {
        let min_selection = count_arg(args, "minAllowableSelectionCount").unwrap_or(1);
        let max_selection = count_arg(args, "maxAllowableSelectionCount").unwrap_or(min_selection);
        let mode = if interaction_id == interaction_ids::ITEM_SELECTION_INPUT && max_selection > 1 {
            SelectionMode::Checkbox
        } else {
            SelectionMode::Radio
        };
        Self {
            interaction_id: interaction_id.to_owned(),
            choices: args.subtitled_html_list("choices"),
            selected: Vec::new(),
            mode,
            min_selection,
            max_selection,
            errors: ErrorSlot::default(),
        }
    }

    /// The selection mode.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// The choices, in display order.
    #[must_use]
    pub fn choices(&self) -> &[SubtitledHtml] {
        &self.choices
    }

    /// Indices of the selected choices, in the order they were clicked.
    #[must_use]
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Whether the choice at `index` is selected.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Whether the choice at `index` can be clicked. In checkbox mode every
    /// unselected choice is disabled once the maximum is reached.
    #[must_use]
    pub fn is_enabled(&self, index: usize) -> bool {
        match self.mode {
            SelectionMode::Radio => true,
            SelectionMode::Checkbox => {
                self.is_selected(index) || self.selected.len() < self.max_selection
            }
        }
    }

    /// Guidance for the current selection.
    #[must_use]
    pub fn hint(&self) -> SelectionHint {
        match self.selected.len() {
            0 => SelectionHint::NoItemsSelected,
            n if n >= self.max_selection => SelectionHint::MaxItemsSelected(self.max_selection),
            _ => SelectionHint::SomeItemsSelected,
        }
    }

    /// Clicks the choice at `index`. Clicking a selected choice unselects
    /// it. Returns whether the selection changed; a click beyond the
    /// checkbox maximum leaves it unchanged.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.choices.len() {
            warn!(index, choices = self.choices.len(), "selection index out of range");
            return false;
        }
        let changed = if let Some(position) = self.selected.iter().position(|&i| i == index) {
            self.selected.remove(position);
            true
        } else {
            match self.mode {
                SelectionMode::Radio => {
                    self.selected.clear();
                    self.selected.push(index);
                    true
                }
                SelectionMode::Checkbox if self.selected.len() < self.max_selection => {
                    self.selected.push(index);
                    true
                }
                SelectionMode::Checkbox => {
                    debug!(index, max = self.max_selection, "selection at maximum");
                    false
                }
            }
        };
        if changed {
            self.validate(ValidationTrigger::RealTime);
        }
        changed
    }

    fn selected_html(&self) -> Vec<&str> {
        self.selected
            .iter()
            .filter_map(|&i| self.choices.get(i))
            .map(|choice| choice.html.as_str())
            .collect()
    }

    fn display_html(&self) -> String {
        match self.selected_html().as_slice() {
            [single] => (*single).to_owned(),
            many => {
                let items: String = many.iter().map(|html| format!("<li>{html}</li>")).collect();
                format!("<ul>{items}</ul>")
            }
        }
    }

    fn submit_time_error(&self) -> Option<SelectionError> {
        match self.selected.len() {
            0 => Some(SelectionError::EmptyInput),
            n if n < self.min_selection => Some(SelectionError::BelowMinimum {
                min: self.min_selection,
            }),
            _ => None,
        }
    }
}

impl AnswerWidget for SelectionWidget {
    fn interaction_id(&self) -> &str {
        &self.interaction_id
    }

    fn current_answer(&self) -> Option<UserAnswer> {
        if self.selected.is_empty() {
            return None;
        }
        let answer = if self.interaction_id == interaction_ids::ITEM_SELECTION_INPUT {
            let ids = self
                .selected
                .iter()
                .filter_map(|&i| self.choices.get(i))
                .map(|choice| choice.content_id.clone())
                .collect();
            Answer::ContentIdSets(vec![ids])
        } else {
            Answer::SelectedIndices(
                self.selected
                    .iter()
                    .filter_map(|&i| u32::try_from(i).ok())
                    .collect(),
            )
        };
        Some(UserAnswer::html(answer, self.display_html()))
    }

    fn validate(&mut self, trigger: ValidationTrigger) -> Option<AnswerError> {
        let error = match trigger {
            ValidationTrigger::RealTime => None,
            ValidationTrigger::SubmitTime => self.submit_time_error().map(AnswerError::from),
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
            WidgetInput::ChoiceClicked(index) => {
                self.toggle(index);
                true
            }
            _ => false,
        }
    }

    fn pending_notifications(&self) -> &[WidgetNotification] {
        self.errors.notifications()
    }

    fn clear_notifications(&mut self) {
        self.errors.clear_notifications();
    }
}

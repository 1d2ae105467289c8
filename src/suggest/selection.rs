//! Selection cursor over the current suggestion list.
//!
//! The controller owns both the list and the cursor so the two can never
//! drift apart: installing a new list always resets the cursor, and the
//! cursor is never consulted while the list is empty.

use serde::{Deserialize, Serialize};

/// Cursor position within the suggestion list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Unselected,
    Selected(usize),
}

impl Selection {
    /// Selected list position, if any.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Unselected => None,
            Self::Selected(idx) => Some(idx),
        }
    }

    /// Integer form used by render surfaces: `-1` means no selection.
    pub fn as_raw(self) -> i64 {
        match self {
            Self::Unselected => -1,
            Self::Selected(idx) => idx as i64,
        }
    }
}

/// Whether a key was handled by the suggestion list.
///
/// `Consumed` means the host's default handling for the key must be
/// suppressed; `Ignored` lets it proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Consumed,
    Ignored,
}

/// State machine over the suggestion list and its selection cursor.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    suggestions: Vec<String>,
    selection: Selection,
}

impl SelectionController {
    /// Current suggestion list.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Current selection state.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// True while suggestions are visible.
    pub fn is_active(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Install a freshly computed list, discarding any in-progress navigation.
    pub fn replace(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
        self.selection = Selection::Unselected;
    }

    /// Move the cursor up, wrapping from the first entry (or no selection)
    /// to the last.
    pub fn move_up(&mut self) -> KeyOutcome {
        let len = self.suggestions.len();
        if len == 0 {
            return KeyOutcome::Ignored;
        }
        self.selection = match self.selection {
            Selection::Unselected | Selection::Selected(0) => Selection::Selected(len - 1),
            Selection::Selected(idx) => Selection::Selected(idx - 1),
        };
        KeyOutcome::Consumed
    }

    /// Move the cursor down, wrapping from the last entry to the first.
    ///
    /// No selection behaves like index `-1`, so it advances to the first entry.
    pub fn move_down(&mut self) -> KeyOutcome {
        let len = self.suggestions.len();
        if len == 0 {
            return KeyOutcome::Ignored;
        }
        self.selection = match self.selection {
            Selection::Unselected => Selection::Selected(0),
            Selection::Selected(idx) if idx + 1 >= len => Selection::Selected(0),
            Selection::Selected(idx) => Selection::Selected(idx + 1),
        };
        KeyOutcome::Consumed
    }

    /// Commit the selected suggestion and close the list.
    ///
    /// Without a selection this is a no-op and returns `None`.
    pub fn commit(&mut self) -> Option<String> {
        let idx = self.selection.index()?;
        self.take(idx)
    }

    /// Commit the suggestion at `index` directly (pointer click).
    ///
    /// Out-of-range indexes are ignored.
    pub fn pointer_select(&mut self, index: usize) -> Option<String> {
        self.take(index)
    }

    /// Close the list and clear the selection from any state.
    pub fn dismiss(&mut self) {
        self.suggestions.clear();
        self.selection = Selection::Unselected;
    }

    fn take(&mut self, index: usize) -> Option<String> {
        if index >= self.suggestions.len() {
            return None;
        }
        let chosen = self.suggestions.swap_remove(index);
        self.dismiss();
        Some(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(items: &[&str]) -> SelectionController {
        let mut controller = SelectionController::default();
        controller.replace(items.iter().map(|s| s.to_string()).collect());
        controller
    }

    #[test]
    fn down_from_unselected_selects_first() {
        let mut c = controller(&["a", "b", "c"]);
        assert_eq!(c.move_down(), KeyOutcome::Consumed);
        assert_eq!(c.selection(), Selection::Selected(0));
    }

    #[test]
    fn up_from_unselected_or_first_wraps_to_last() {
        let mut c = controller(&["a", "b", "c"]);
        c.move_up();
        assert_eq!(c.selection(), Selection::Selected(2));

        let mut c = controller(&["a", "b", "c"]);
        c.move_down();
        c.move_up();
        assert_eq!(c.selection(), Selection::Selected(2));
        c.move_up();
        assert_eq!(c.selection(), Selection::Selected(1));
    }

    #[test]
    fn down_from_last_wraps_to_first() {
        let mut c = controller(&["a", "b"]);
        c.move_down();
        c.move_down();
        assert_eq!(c.selection(), Selection::Selected(1));
        c.move_down();
        assert_eq!(c.selection(), Selection::Selected(0));
    }

    #[test]
    fn single_entry_list_stays_on_that_entry() {
        let mut c = controller(&["only"]);
        c.move_down();
        c.move_down();
        assert_eq!(c.selection(), Selection::Selected(0));
        c.move_up();
        assert_eq!(c.selection(), Selection::Selected(0));
    }

    #[test]
    fn navigation_on_empty_list_is_ignored() {
        let mut c = SelectionController::default();
        assert_eq!(c.move_up(), KeyOutcome::Ignored);
        assert_eq!(c.move_down(), KeyOutcome::Ignored);
        assert_eq!(c.selection(), Selection::Unselected);
    }

    #[test]
    fn replace_resets_selection() {
        let mut c = controller(&["a", "b", "c"]);
        c.move_up();
        assert_eq!(c.selection(), Selection::Selected(2));
        c.replace(vec!["x".to_string()]);
        assert_eq!(c.selection(), Selection::Unselected);
        assert_eq!(c.suggestions(), &["x".to_string()]);
    }

    #[test]
    fn commit_returns_selection_and_clears_list() {
        let mut c = controller(&["a", "b", "c"]);
        c.move_down();
        c.move_down();
        assert_eq!(c.commit(), Some("b".to_string()));
        assert!(c.suggestions().is_empty());
        assert_eq!(c.selection(), Selection::Unselected);
    }

    #[test]
    fn commit_without_selection_is_a_no_op() {
        let mut c = controller(&["a", "b"]);
        assert_eq!(c.commit(), None);
        assert_eq!(c.suggestions().len(), 2);
    }

    #[test]
    fn pointer_select_commits_without_navigation() {
        let mut c = controller(&["a", "b", "c"]);
        assert_eq!(c.pointer_select(2), Some("c".to_string()));
        assert!(!c.is_active());

        let mut c = controller(&["a"]);
        assert_eq!(c.pointer_select(5), None);
        assert!(c.is_active());
    }

    #[test]
    fn dismiss_clears_from_any_state() {
        let mut c = controller(&["a", "b"]);
        c.move_down();
        c.dismiss();
        assert!(c.suggestions().is_empty());
        assert_eq!(c.selection(), Selection::Unselected);
        assert_eq!(c.selection().as_raw(), -1);
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn selection_stays_in_bounds(
                len in 1usize..8,
                moves in proptest::collection::vec(any::<bool>(), 0..32)
            ) {
                let mut c = SelectionController::default();
                c.replace((0..len).map(|i| i.to_string()).collect());
                for up in moves {
                    if up { c.move_up(); } else { c.move_down(); }
                    let idx = c.selection().index().expect("selected after a move");
                    prop_assert!(idx < len);
                }
            }
        }
    }
}

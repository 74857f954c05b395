// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{Document, EventPropagation, caret_at_row_col, locate_caret,
            snap_to_grapheme_boundary, wrap_rows};

/// Everything the editor knows about the document and the user's place in it.
///
/// Invariants, upheld by every method:
/// - The document has at least one line (see [`Document`]).
/// - `0 <= active_index < line_count`.
/// - `caret` is a grapheme boundary inside the active line.
///
/// The transitions (`split_after_line`, `delete_empty_line`, and friends) are total.
/// They check their preconditions before touching anything, and report
/// [`EventPropagation::Propagate`] when a precondition does not hold, which tells the
/// caller to fall back to the default behavior of the input box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorState {
    document: Document,
    active_index: usize,
    show_all: bool,
    caret: usize,
}

impl EditorState {
    #[must_use]
    pub fn new(document: Document) -> Self {
        let mut it = Self {
            document,
            ..Default::default()
        };
        it.caret = it.active_line().len();
        it
    }

    #[must_use]
    pub fn document(&self) -> &Document { &self.document }

    #[must_use]
    pub fn active_index(&self) -> usize { self.active_index }

    #[must_use]
    pub fn show_all(&self) -> bool { self.show_all }

    #[must_use]
    pub fn caret(&self) -> usize { self.caret }

    #[must_use]
    pub fn active_line(&self) -> &str { self.document.get(self.active_index).unwrap_or("") }

    /// In focus mode only the active line accepts input, in show-all mode every line
    /// does.
    #[must_use]
    pub fn is_editable(&self, index: usize) -> bool {
        index < self.document.line_count() && (self.show_all || index == self.active_index)
    }

    /// The placeholder is shown on the first line only, and only while it is the sole
    /// empty line of the document.
    #[must_use]
    pub fn shows_placeholder(&self, index: usize) -> bool {
        index == 0 && self.document.line_count() == 1 && self.document.is_line_empty(0)
    }

    /// What gets copied to the clipboard.
    #[must_use]
    pub fn copy_all_text(&self) -> String { self.document.join() }

    /// `(row, col)` of the caret inside the active box, for a box `width` columns wide.
    #[must_use]
    pub fn caret_row_col(&self, width: usize) -> (usize, usize) {
        let line = self.active_line();
        locate_caret(line, &wrap_rows(line, width), self.caret)
    }
}

/// Transitions.
impl EditorState {
    /// Replaces `lines[index]` with `new_text`. The caret is re-clamped in case the active
    /// line got shorter.
    pub fn edit(&mut self, index: usize, new_text: impl Into<String>) -> EventPropagation {
        match self.document.replace_at(index, new_text) {
            Some(document) => {
                self.document = document;
                self.clamp();
                EventPropagation::ConsumedRender
            }
            None => EventPropagation::Propagate,
        }
    }

    /// Plain Enter. Inserts an empty line right after `index` and makes it active.
    pub fn split_after_line(&mut self, index: usize) -> EventPropagation {
        if index >= self.document.line_count() {
            return EventPropagation::Propagate;
        }
        let Some(document) = self.document.insert_at(index + 1, "") else {
            return EventPropagation::Propagate;
        };
        self.document = document;
        self.active_index = index + 1;
        self.caret = 0;
        EventPropagation::ConsumedRender
    }

    /// Backspace on an empty line, as long as it is not the only line. Removes it and
    /// activates the line above (or the new first line).
    pub fn delete_empty_line(&mut self, index: usize) -> EventPropagation {
        if !self.document.is_line_empty(index) {
            return EventPropagation::Propagate;
        }
        let Some(document) = self.document.remove_at(index) else {
            return EventPropagation::Propagate;
        };
        self.document = document;
        self.activate(index.saturating_sub(1));
        EventPropagation::ConsumedRender
    }

    /// ArrowUp. Does nothing on the first line.
    pub fn move_focus_up(&mut self, index: usize) -> EventPropagation {
        if index == 0 || index >= self.document.line_count() {
            return EventPropagation::Propagate;
        }
        self.activate(index - 1);
        EventPropagation::ConsumedRender
    }

    /// ArrowDown. Does nothing on the last line.
    pub fn move_focus_down(&mut self, index: usize) -> EventPropagation {
        if index >= self.document.last_index() {
            return EventPropagation::Propagate;
        }
        self.activate(index + 1);
        EventPropagation::ConsumedRender
    }

    /// Click on a line. Allowed for any existing line, in any mode.
    pub fn select_line(&mut self, index: usize) -> EventPropagation {
        if index >= self.document.line_count() {
            return EventPropagation::Propagate;
        }
        if index != self.active_index {
            self.activate(index);
        }
        EventPropagation::ConsumedRender
    }

    /// Click on the empty container background. Only does something in focus mode.
    pub fn select_last_line(&mut self) -> EventPropagation {
        if self.show_all {
            return EventPropagation::Propagate;
        }
        self.select_line(self.document.last_index())
    }

    /// Flips the display mode. The active index is left alone.
    pub fn toggle_show_all(&mut self) -> EventPropagation {
        self.show_all = !self.show_all;
        EventPropagation::ConsumedRender
    }
}

/// Caret.
impl EditorState {
    pub fn set_caret(&mut self, caret: usize) {
        self.caret = snap_to_grapheme_boundary(self.active_line(), caret);
    }

    /// Puts the caret at the visual `(row, col)` of the active box, which is where a
    /// mouse click landed.
    pub fn place_caret_at(&mut self, row: usize, col: usize, width: usize) {
        let line = self.active_line();
        let caret = caret_at_row_col(line, &wrap_rows(line, width), row, col);
        self.set_caret(caret);
    }

    /// A newly active line gets its caret at the end of its text.
    fn activate(&mut self, index: usize) {
        self.active_index = index;
        self.clamp();
        self.caret = self.active_line().len();
    }

    fn clamp(&mut self) {
        self.active_index = self.active_index.min(self.document.last_index());
        self.caret = snap_to_grapheme_boundary(self.active_line(), self.caret);
    }
}

/// Compact form for log messages.
impl Display for EditorState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "EditorState[{}, active={}, show_all={}, caret={}]",
            self.document, self.active_index, self.show_all, self.caret
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn state_with(lines: &[&str], active_index: usize) -> EditorState {
        let mut state = EditorState::new(Document::from_lines(lines.iter().copied()));
        state.activate(active_index);
        state
    }

    fn lines(state: &EditorState) -> Vec<&str> {
        state.document().lines().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_new_state() {
        let state = EditorState::default();
        assert_eq!(lines(&state), vec![""]);
        assert_eq!(state.active_index(), 0);
        assert!(!state.show_all());
        assert!(state.shows_placeholder(0));
    }

    #[test]
    fn test_split_after_line() {
        let mut state = state_with(&["ab", "c"], 0);
        assert_eq!(state.split_after_line(0), EventPropagation::ConsumedRender);
        assert_eq!(lines(&state), vec!["ab", "", "c"]);
        assert_eq!(state.active_index(), 1);
        assert_eq!(state.caret(), 0);
    }

    #[test]
    fn test_split_out_of_range_is_propagated() {
        let mut state = state_with(&["ab"], 0);
        assert_eq!(state.split_after_line(5), EventPropagation::Propagate);
        assert_eq!(lines(&state), vec!["ab"]);
    }

    #[test]
    fn test_delete_empty_line() {
        let mut state = state_with(&["x", ""], 1);
        assert_eq!(state.delete_empty_line(1), EventPropagation::ConsumedRender);
        assert_eq!(lines(&state), vec!["x"]);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.caret(), 1);
    }

    #[test]
    fn test_delete_first_empty_line_keeps_index_zero() {
        let mut state = state_with(&["", "y"], 0);
        assert_eq!(state.delete_empty_line(0), EventPropagation::ConsumedRender);
        assert_eq!(lines(&state), vec!["y"]);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_delete_sole_or_non_empty_line_is_propagated() {
        let mut state = state_with(&[""], 0);
        assert_eq!(state.delete_empty_line(0), EventPropagation::Propagate);
        assert_eq!(state.document().line_count(), 1);

        let mut state = state_with(&["x", "y"], 1);
        assert_eq!(state.delete_empty_line(1), EventPropagation::Propagate);
        assert_eq!(lines(&state), vec!["x", "y"]);
    }

    #[test]
    fn test_move_focus() {
        let mut state = state_with(&["a", "b", "c"], 1);
        assert_eq!(state.move_focus_up(1), EventPropagation::ConsumedRender);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.move_focus_up(0), EventPropagation::Propagate);
        assert_eq!(state.active_index(), 0);

        assert_eq!(state.move_focus_down(0), EventPropagation::ConsumedRender);
        assert_eq!(state.move_focus_down(1), EventPropagation::ConsumedRender);
        assert_eq!(state.active_index(), 2);
        assert_eq!(state.move_focus_down(2), EventPropagation::Propagate);
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn test_select_line_and_last_line() {
        let mut state = state_with(&["a", "b", "c"], 0);
        assert_eq!(state.select_line(1), EventPropagation::ConsumedRender);
        assert_eq!(state.active_index(), 1);
        assert_eq!(state.select_line(3), EventPropagation::Propagate);

        assert_eq!(state.select_last_line(), EventPropagation::ConsumedRender);
        assert_eq!(state.active_index(), 2);

        state.select_line(0);
        state.toggle_show_all();
        assert_eq!(state.select_last_line(), EventPropagation::Propagate);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_toggle_show_all_twice() {
        let mut state = state_with(&["a", "b"], 1);
        state.toggle_show_all();
        assert!(state.show_all());
        state.toggle_show_all();
        assert!(!state.show_all());
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn test_editable_lines_depend_on_mode() {
        let mut state = state_with(&["a", "b"], 1);
        assert!(!state.is_editable(0));
        assert!(state.is_editable(1));
        state.toggle_show_all();
        assert!(state.is_editable(0));
        assert!(!state.is_editable(2));
    }

    #[test]
    fn test_split_then_delete_round_trip() {
        let original = state_with(&["one", "two", "three"], 1);
        let mut state = original.clone();
        state.split_after_line(1);
        state.delete_empty_line(2);
        assert_eq!(state.document(), original.document());
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn test_edit_clamps_caret() {
        let mut state = state_with(&["hello"], 0);
        assert_eq!(state.caret(), 5);
        assert_eq!(state.edit(0, "hi"), EventPropagation::ConsumedRender);
        assert_eq!(state.caret(), 2);
        assert_eq!(state.edit(1, "nope"), EventPropagation::Propagate);
    }

    #[test]
    fn test_placeholder_only_for_sole_empty_first_line() {
        assert!(!state_with(&["a"], 0).shows_placeholder(0));
        assert!(!state_with(&["", ""], 0).shows_placeholder(0));
        assert!(!state_with(&["", ""], 1).shows_placeholder(1));
    }

    #[test]
    fn test_place_caret_at() {
        let mut state = state_with(&["hello world"], 0);
        state.place_caret_at(1, 2, 5);
        assert_eq!(state.caret(), 8);
        assert_eq!(state.caret_row_col(5), (1, 2));
    }

    /// Drives a long, deterministic mix of splits, deletes and moves, checking the
    /// invariants after every step.
    #[test]
    fn test_invariants_hold_for_any_sequence() {
        let mut state = EditorState::default();
        for step in 0..500_usize {
            let index = state.active_index();
            match step % 7 {
                0 | 3 => _ = state.split_after_line(index),
                1 | 5 => _ = state.delete_empty_line(index),
                2 => _ = state.move_focus_up(index),
                4 => _ = state.move_focus_down(index),
                _ => _ = state.edit(index, if step % 2 == 0 { "" } else { "x" }),
            }
            assert!(state.document().line_count() >= 1);
            assert!(state.active_index() < state.document().line_count());
            assert!(state.caret() <= state.active_line().len());
        }
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Routes a key press on line `index` to an editor transition, or failing that, to the
//! default behavior of the input box.
//!
//! | Key                          | Line action         | Falls back to             |
//! | :--------------------------- | :------------------ | :------------------------ |
//! | Enter (not Shift/Alt)        | `split_after_line`  | -                         |
//! | Backspace                    | `delete_empty_line` | delete grapheme before    |
//! | Up                           | `move_focus_up`     | caret up one visual row   |
//! | Down                         | `move_focus_down`   | caret down one visual row |
//! | Shift+Enter, Alt+Enter       | -                   | insert a new line         |
//! | Delete, Left, Right, Home, End | -                 | caret edits               |
//!
//! While `is_composing` is set the line actions are skipped entirely.

use crate::{EditorState, EventPropagation, Key, KeyPress, NEW_LINE, caret_at_row_col,
            delete_after_caret, delete_before_caret, insert_at_caret, locate_caret,
            next_grapheme_boundary, prev_grapheme_boundary, sanitize_pasted_text,
            wrap_rows};

impl EditorState {
    /// `width` is the width of the input box, needed for visual row movement.
    pub fn handle_keypress(
        &mut self,
        index: usize,
        keypress: KeyPress,
        width: usize,
    ) -> EventPropagation {
        if keypress.is_composing {
            return self.apply_default_key_behavior(index, keypress, width);
        }

        let line_action = match keypress.key {
            Key::Enter if keypress.is_plain_enter() => self.split_after_line(index),
            Key::Backspace => self.delete_empty_line(index),
            Key::Up => self.move_focus_up(index),
            Key::Down => self.move_focus_down(index),
            _ => EventPropagation::Propagate,
        };

        line_action.or_else(|| self.apply_default_key_behavior(index, keypress, width))
    }

    /// Bracketed paste into line `index`, new lines and all.
    pub fn insert_text(&mut self, index: usize, text: &str) -> EventPropagation {
        if !self.owns_caret(index) {
            return EventPropagation::Propagate;
        }
        let text = sanitize_pasted_text(text);
        if text.is_empty() {
            return EventPropagation::Consumed;
        }
        let (new_text, caret) = insert_at_caret(self.active_line(), self.caret(), &text);
        self.apply_text_change(index, new_text, caret)
    }

    /// What a plain input box does on its own when nothing above intercepted the key.
    fn apply_default_key_behavior(
        &mut self,
        index: usize,
        keypress: KeyPress,
        width: usize,
    ) -> EventPropagation {
        if !self.owns_caret(index) {
            return EventPropagation::Propagate;
        }

        let line = self.active_line();
        let caret = self.caret();

        if let Some(ch) = keypress.printable_char() {
            let (new_text, caret) = insert_at_caret(line, caret, ch.encode_utf8(&mut [0; 4]));
            return self.apply_text_change(index, new_text, caret);
        }

        match keypress.key {
            Key::Enter => {
                let (new_text, caret) = insert_at_caret(line, caret, NEW_LINE);
                self.apply_text_change(index, new_text, caret)
            }
            Key::Backspace => match delete_before_caret(line, caret) {
                Some((new_text, caret)) => self.apply_text_change(index, new_text, caret),
                None => EventPropagation::Propagate,
            },
            Key::Delete => match delete_after_caret(line, caret) {
                Some((new_text, caret)) => self.apply_text_change(index, new_text, caret),
                None => EventPropagation::Propagate,
            },
            Key::Left => self.move_caret(prev_grapheme_boundary(line, caret)),
            Key::Right => self.move_caret(next_grapheme_boundary(line, caret)),
            Key::Home | Key::End | Key::Up | Key::Down => {
                let rows = wrap_rows(line, width);
                let (row, col) = locate_caret(line, &rows, caret);
                let new_caret = match keypress.key {
                    Key::Home => caret_at_row_col(line, &rows, row, 0),
                    Key::End => caret_at_row_col(line, &rows, row, usize::MAX),
                    Key::Up if row == 0 => 0,
                    Key::Up => caret_at_row_col(line, &rows, row - 1, col),
                    _ if row + 1 >= rows.len() => line.len(),
                    _ => caret_at_row_col(line, &rows, row + 1, col),
                };
                self.move_caret(new_caret)
            }
            _ => EventPropagation::Propagate,
        }
    }

    /// The caret lives in the active line, so that is the only line that takes default
    /// edits. In focus mode it is also the only editable line.
    fn owns_caret(&self, index: usize) -> bool {
        index == self.active_index() && self.is_editable(index)
    }

    fn apply_text_change(
        &mut self,
        index: usize,
        new_text: String,
        caret: usize,
    ) -> EventPropagation {
        let result = self.edit(index, new_text);
        self.set_caret(caret);
        result
    }

    fn move_caret(&mut self, new_caret: usize) -> EventPropagation {
        if new_caret == self.caret() {
            return EventPropagation::Propagate;
        }
        self.set_caret(new_caret);
        EventPropagation::ConsumedRender
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Document, ModifierKeysMask, keypress};

    const WIDTH: usize = 5;

    fn state_with(lines: &[&str]) -> EditorState {
        EditorState::new(Document::from_lines(lines.iter().copied()))
    }

    fn lines(state: &EditorState) -> Vec<&str> {
        state.document().lines().iter().map(String::as_str).collect()
    }

    fn type_text(state: &mut EditorState, text: &str) {
        for ch in text.chars() {
            let index = state.active_index();
            state.handle_keypress(index, keypress!(@char ch), WIDTH);
        }
    }

    #[test]
    fn test_typing_and_enter_build_lines() {
        let mut state = EditorState::default();
        type_text(&mut state, "ab");
        state.handle_keypress(0, keypress!(@special Key::Enter), WIDTH);
        type_text(&mut state, "c");
        assert_eq!(lines(&state), vec!["ab", "c"]);
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn test_plain_enter_never_inserts_new_line() {
        let mut state = state_with(&["ab", "c"]);
        let result = state.handle_keypress(0, keypress!(@special Key::Enter), WIDTH);
        assert_eq!(result, EventPropagation::ConsumedRender);
        assert_eq!(lines(&state), vec!["ab", "", "c"]);
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn test_shift_enter_inserts_new_line() {
        let mut state = state_with(&["ab"]);
        let shift_enter = keypress!(@special ModifierKeysMask::new().with_shift(), Key::Enter);
        state.handle_keypress(0, shift_enter, WIDTH);
        assert_eq!(lines(&state), vec!["ab\n"]);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_enter_while_composing_inserts_new_line() {
        let mut state = state_with(&["ab"]);
        state.handle_keypress(0, keypress!(@special Key::Enter).composing(), WIDTH);
        assert_eq!(lines(&state), vec!["ab\n"]);
    }

    #[test]
    fn test_backspace_deletes_char_then_line() {
        let mut state = state_with(&["x", "y"]);
        state.select_line(1);
        state.handle_keypress(1, keypress!(@special Key::Backspace), WIDTH);
        assert_eq!(lines(&state), vec!["x", ""]);
        assert_eq!(state.active_index(), 1);

        state.handle_keypress(1, keypress!(@special Key::Backspace), WIDTH);
        assert_eq!(lines(&state), vec!["x"]);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_backspace_on_sole_empty_line_is_noop() {
        let mut state = EditorState::default();
        let result = state.handle_keypress(0, keypress!(@special Key::Backspace), WIDTH);
        assert_eq!(result, EventPropagation::Propagate);
        assert_eq!(lines(&state), vec![""]);
    }

    #[test]
    fn test_arrow_down_on_last_line_moves_caret_only() {
        let mut state = state_with(&["a", "hello world"]);
        state.select_line(1);
        state.set_caret(0);
        let result = state.handle_keypress(1, keypress!(@special Key::Down), WIDTH);
        assert_eq!(result, EventPropagation::ConsumedRender);
        assert_eq!(state.active_index(), 1);
        assert_eq!(state.caret(), 6);

        // Already on the last visual row: caret goes to the end.
        state.handle_keypress(1, keypress!(@special Key::Down), WIDTH);
        assert_eq!(state.caret(), 11);
        let result = state.handle_keypress(1, keypress!(@special Key::Down), WIDTH);
        assert_eq!(result, EventPropagation::Propagate);
    }

    #[test]
    fn test_arrow_up_on_first_line_moves_caret_to_start() {
        let mut state = state_with(&["abc", "d"]);
        state.handle_keypress(0, keypress!(@special Key::Up), WIDTH);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.caret(), 0);
    }

    #[test]
    fn test_arrows_move_between_lines() {
        let mut state = state_with(&["a", "b"]);
        state.handle_keypress(0, keypress!(@special Key::Down), WIDTH);
        assert_eq!(state.active_index(), 1);
        state.handle_keypress(1, keypress!(@special Key::Up), WIDTH);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn test_caret_edits() {
        let mut state = state_with(&["abc"]);
        state.handle_keypress(0, keypress!(@special Key::Left), WIDTH);
        state.handle_keypress(0, keypress!(@special Key::Left), WIDTH);
        type_text(&mut state, "X");
        assert_eq!(lines(&state), vec!["aXbc"]);

        state.handle_keypress(0, keypress!(@special Key::Delete), WIDTH);
        assert_eq!(lines(&state), vec!["aXc"]);

        state.handle_keypress(0, keypress!(@special Key::Home), WIDTH);
        assert_eq!(state.caret(), 0);
        state.handle_keypress(0, keypress!(@special Key::End), WIDTH);
        assert_eq!(state.caret(), 3);
    }

    #[test]
    fn test_end_on_soft_wrapped_row_stops_before_hanging_space() {
        let mut state = state_with(&["hello world"]);
        state.set_caret(0);
        state.handle_keypress(0, keypress!(@special Key::End), WIDTH);
        assert_eq!(state.caret(), 5);
        assert_eq!(state.caret_row_col(WIDTH), (0, 5));

        // On the last row End goes to the end of the text.
        state.handle_keypress(0, keypress!(@special Key::Down), WIDTH);
        state.handle_keypress(0, keypress!(@special Key::End), WIDTH);
        assert_eq!(state.caret(), 11);
    }

    #[test]
    fn test_ctrl_chars_are_not_typed() {
        let mut state = EditorState::default();
        let ctrl_t = keypress!(@char ModifierKeysMask::new().with_ctrl(), 't');
        assert_eq!(state.handle_keypress(0, ctrl_t, WIDTH), EventPropagation::Propagate);
        assert_eq!(lines(&state), vec![""]);
    }

    #[test]
    fn test_read_only_line_takes_no_input() {
        let mut state = state_with(&["a", "b"]);
        let result = state.handle_keypress(1, keypress!(@char 'z'), WIDTH);
        assert_eq!(result, EventPropagation::Propagate);
        assert_eq!(lines(&state), vec!["a", "b"]);
        assert_eq!(state.insert_text(1, "z"), EventPropagation::Propagate);
    }

    #[test]
    fn test_insert_pasted_text() {
        let mut state = state_with(&["ac"]);
        state.set_caret(1);
        assert_eq!(state.insert_text(0, "b\r\nb"), EventPropagation::ConsumedRender);
        assert_eq!(lines(&state), vec!["ab\nbc"]);
        assert_eq!(state.caret(), 4);
        assert_eq!(state.insert_text(0, "\u{7}"), EventPropagation::Consumed);
    }
}

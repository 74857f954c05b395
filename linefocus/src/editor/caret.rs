// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Grapheme aware text edits at a byte offset caret. This is the "default behavior" of
//! an input box, what it does when no line action intercepts a key.
//!
//! Every function takes the caret as a byte offset and returns the new text and caret
//! as a pair, so callers route the result through [`crate::EditorState::edit`].

use unicode_segmentation::UnicodeSegmentation;

use crate::NEW_LINE;

/// Largest grapheme boundary that is `<= caret`.
#[must_use]
pub fn snap_to_grapheme_boundary(text: &str, caret: usize) -> usize {
    if caret >= text.len() {
        return text.len();
    }
    text.grapheme_indices(true)
        .map(|(index, _)| index)
        .take_while(|index| *index <= caret)
        .last()
        .unwrap_or(0)
}

#[must_use]
pub fn prev_grapheme_boundary(text: &str, caret: usize) -> usize {
    text.grapheme_indices(true)
        .map(|(index, _)| index)
        .take_while(|index| *index < caret)
        .last()
        .unwrap_or(0)
}

#[must_use]
pub fn next_grapheme_boundary(text: &str, caret: usize) -> usize {
    text.grapheme_indices(true)
        .map(|(index, grapheme)| index + grapheme.len())
        .find(|end| *end > caret)
        .unwrap_or(text.len())
}

#[must_use]
pub fn insert_at_caret(text: &str, caret: usize, insert: &str) -> (String, usize) {
    let caret = snap_to_grapheme_boundary(text, caret);
    let mut acc = String::with_capacity(text.len() + insert.len());
    acc.push_str(&text[..caret]);
    acc.push_str(insert);
    acc.push_str(&text[caret..]);
    (acc, caret + insert.len())
}

/// Backspace. Returns [`None`] when there is nothing before the caret.
#[must_use]
pub fn delete_before_caret(text: &str, caret: usize) -> Option<(String, usize)> {
    let caret = snap_to_grapheme_boundary(text, caret);
    if caret == 0 {
        return None;
    }
    let start = prev_grapheme_boundary(text, caret);
    let mut acc = String::with_capacity(text.len());
    acc.push_str(&text[..start]);
    acc.push_str(&text[caret..]);
    Some((acc, start))
}

/// Delete. Returns [`None`] when there is nothing after the caret.
#[must_use]
pub fn delete_after_caret(text: &str, caret: usize) -> Option<(String, usize)> {
    let caret = snap_to_grapheme_boundary(text, caret);
    if caret >= text.len() {
        return None;
    }
    let end = next_grapheme_boundary(text, caret);
    let mut acc = String::with_capacity(text.len());
    acc.push_str(&text[..caret]);
    acc.push_str(&text[end..]);
    Some((acc, caret))
}

/// Normalizes text coming from a paste: `\r\n` and lone `\r` become [`NEW_LINE`], tabs
/// become four spaces, and any other control character is dropped. This keeps every
/// line free of characters that would move the terminal cursor when painted.
#[must_use]
pub fn sanitize_pasted_text(text: &str) -> String {
    let normalized = text.replace("\r\n", NEW_LINE).replace('\r', NEW_LINE);
    let mut acc = String::with_capacity(normalized.len());
    for ch in normalized.chars() {
        match ch {
            '\n' => acc.push(ch),
            '\t' => acc.push_str("    "),
            it if it.is_control() => {}
            it => acc.push(it),
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // "e" followed by a combining acute accent is one grapheme, 3 bytes.
    const COMBINING: &str = "ae\u{301}b";

    #[test]
    fn test_boundaries_skip_whole_graphemes() {
        assert_eq!(prev_grapheme_boundary(COMBINING, 4), 1);
        assert_eq!(next_grapheme_boundary(COMBINING, 1), 4);
        assert_eq!(snap_to_grapheme_boundary(COMBINING, 2), 1);
        assert_eq!(snap_to_grapheme_boundary(COMBINING, 99), COMBINING.len());
        assert_eq!(prev_grapheme_boundary(COMBINING, 0), 0);
        assert_eq!(next_grapheme_boundary(COMBINING, COMBINING.len()), COMBINING.len());
    }

    #[test]
    fn test_insert_at_caret() {
        assert_eq!(insert_at_caret("ac", 1, "b"), ("abc".to_string(), 2));
        assert_eq!(insert_at_caret("", 0, "開"), ("開".to_string(), 3));
        assert_eq!(insert_at_caret("ab", 2, "\n"), ("ab\n".to_string(), 3));
    }

    #[test]
    fn test_delete_before_caret() {
        assert_eq!(delete_before_caret("abc", 3), Some(("ab".to_string(), 2)));
        assert_eq!(delete_before_caret(COMBINING, 4), Some(("ab".to_string(), 1)));
        assert_eq!(delete_before_caret("abc", 0), None);
        assert_eq!(delete_before_caret("", 0), None);
    }

    #[test]
    fn test_delete_after_caret() {
        assert_eq!(delete_after_caret("abc", 0), Some(("bc".to_string(), 0)));
        assert_eq!(delete_after_caret(COMBINING, 1), Some(("ab".to_string(), 1)));
        assert_eq!(delete_after_caret("abc", 3), None);
    }

    #[test]
    fn test_sanitize_pasted_text() {
        assert_eq!(sanitize_pasted_text("a\r\nb\rc\td\u{7}"), "a\nb\nc    d");
    }
}

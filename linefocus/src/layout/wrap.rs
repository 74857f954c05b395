// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Soft wrapping of a single line into visual rows.
//!
//! Every input box grows to fit its content, so its height is simply the number of
//! visual rows returned by [`wrap_rows`]. Rows are byte ranges into the original text
//! (nothing is trimmed or copied), so caret offsets map onto them directly. This is what
//! [`locate_caret`] and [`caret_at_row_col`] rely on.
//!
//! Wrapping rules:
//! - An explicit [`NEW_LINE`] always starts a new row (and is not part of either row).
//! - Rows break after the last whitespace that fits. A word wider than the row is
//!   broken at the grapheme that overflows.
//! - Whitespace never causes a break, it hangs off the end of the row.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::NEW_LINE;

/// Byte range `start..end` of one visual row. `end` never includes a [`NEW_LINE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowSpan {
    pub start: usize,
    pub end: usize,
}

impl RowSpan {
    #[must_use]
    pub fn as_str<'a>(&self, text: &'a str) -> &'a str { &text[self.start..self.end] }
}

/// Splits `text` into visual rows no wider than `width` display columns (except for
/// trailing whitespace). Always returns at least one row, an empty text is one empty
/// row.
#[must_use]
pub fn wrap_rows(text: &str, width: usize) -> Vec<RowSpan> {
    let width = width.max(1);
    let mut acc = vec![];
    let mut segment_start = 0;
    for segment in text.split(NEW_LINE) {
        wrap_segment(segment, segment_start, width, &mut acc);
        segment_start += segment.len() + NEW_LINE.len();
    }
    acc
}

/// Number of rows the box for `text` needs. Never less than 1.
#[must_use]
pub fn measure_height(text: &str, width: usize) -> usize { wrap_rows(text, width).len() }

fn wrap_segment(segment: &str, base: usize, width: usize, acc: &mut Vec<RowSpan>) {
    let mut row_start = base;
    let mut row_width = 0;
    // Byte offset just past the last whitespace on this row, and the row width there.
    let mut maybe_break: Option<(usize, usize)> = None;

    for (offset, grapheme) in segment.grapheme_indices(true) {
        let index = base + offset;
        let grapheme_width = grapheme.width();
        let is_whitespace = grapheme.chars().all(char::is_whitespace);

        if !is_whitespace {
            while row_width > 0 && row_width + grapheme_width > width {
                match maybe_break.take() {
                    Some((break_at, width_at_break)) if break_at > row_start => {
                        acc.push(RowSpan {
                            start: row_start,
                            end: break_at,
                        });
                        row_start = break_at;
                        row_width -= width_at_break;
                    }
                    _ => {
                        acc.push(RowSpan {
                            start: row_start,
                            end: index,
                        });
                        row_start = index;
                        row_width = 0;
                    }
                }
            }
        }

        row_width += grapheme_width;
        if is_whitespace {
            maybe_break = Some((index + grapheme.len(), row_width));
        }
    }

    acc.push(RowSpan {
        start: row_start,
        end: base + segment.len(),
    });
}

/// Returns `(row_index, display_col)` of the caret. A caret sitting exactly on a soft
/// wrap boundary belongs to the start of the following row.
#[must_use]
pub fn locate_caret(text: &str, rows: &[RowSpan], caret: usize) -> (usize, usize) {
    let row_index = rows
        .iter()
        .rposition(|row| row.start <= caret)
        .unwrap_or(0);
    let Some(row) = rows.get(row_index) else {
        return (0, 0);
    };
    let end = caret.clamp(row.start, row.end);
    (row_index, text[row.start..end].width())
}

/// Returns the caret offset closest to `target_col` on row `row_index`. Asking for a
/// column past the end of a soft wrapped row lands before its last grapheme, so the
/// caret stays on that row instead of jumping to the next one. The offset just past
/// the row belongs to the start of the next row (see [`locate_caret`]).
///
/// This also means that End on a soft wrapped row stops before the hanging whitespace.
/// For `"hello world"` wrapped at 5 columns, End on `"hello "` gives offset 5, not 6.
#[must_use]
pub fn caret_at_row_col(
    text: &str,
    rows: &[RowSpan],
    row_index: usize,
    target_col: usize,
) -> usize {
    let Some(row) = rows.get(row_index) else {
        return text.len();
    };

    let mut col = 0;
    let mut last_grapheme_start = row.start;
    for (offset, grapheme) in row.as_str(text).grapheme_indices(true) {
        let grapheme_width = grapheme.width();
        if col + grapheme_width > target_col {
            return row.start + offset;
        }
        col += grapheme_width;
        last_grapheme_start = row.start + offset;
    }

    let is_soft_wrapped = rows
        .get(row_index + 1)
        .is_some_and(|next| next.start == row.end);
    if is_soft_wrapped && row.end > row.start {
        last_grapheme_start
    } else {
        row.end
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn row_strs(text: &str, width: usize) -> Vec<&str> {
        wrap_rows(text, width)
            .iter()
            .map(|row| row.as_str(text))
            .collect()
    }

    #[test]
    fn test_empty_text_is_one_row() {
        assert_eq!(wrap_rows("", 10), vec![RowSpan { start: 0, end: 0 }]);
        assert_eq!(measure_height("", 10), 1);
    }

    #[test]
    fn test_breaks_after_whitespace() {
        assert_eq!(row_strs("hello world", 5), vec!["hello ", "world"]);
        assert_eq!(row_strs("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_long_word_is_broken() {
        assert_eq!(row_strs("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_explicit_new_line_starts_row() {
        assert_eq!(row_strs("ab\ncd", 10), vec!["ab", "cd"]);
        assert_eq!(row_strs("ab\n", 10), vec!["ab", ""]);
        assert_eq!(measure_height("\n\n", 10), 3);
    }

    #[test]
    fn test_wide_graphemes_use_display_width() {
        // Each CJK character is 2 columns wide.
        assert_eq!(row_strs("開始輸入", 4), vec!["開始", "輸入"]);
    }

    #[test]
    fn test_zero_width_is_treated_as_one() {
        assert_eq!(row_strs("abc", 0), vec!["a", "b", "c"]);
    }

    #[test_case("hello world", 0 => (0, 0))]
    #[test_case("hello world", 3 => (0, 3))]
    #[test_case("hello world", 6 => (1, 0); "soft wrap boundary goes to next row")]
    #[test_case("hello world", 11 => (1, 5))]
    #[test_case("ab\ncd", 2 => (0, 2); "before the new line")]
    #[test_case("ab\ncd", 3 => (1, 0); "after the new line")]
    fn test_locate_caret(text: &str, caret: usize) -> (usize, usize) {
        let rows = wrap_rows(text, 5);
        locate_caret(text, &rows, caret)
    }

    #[test]
    fn test_caret_at_row_col() {
        let text = "hello world";
        let rows = wrap_rows(text, 5);
        assert_eq!(caret_at_row_col(text, &rows, 1, 2), 8);
        // Last row clamps to the end of text.
        assert_eq!(caret_at_row_col(text, &rows, 1, 99), 11);
        // Soft wrapped row stays on the row.
        assert_eq!(caret_at_row_col(text, &rows, 0, 99), 5);
        // Missing row.
        assert_eq!(caret_at_row_col(text, &rows, 9, 0), 11);
    }
}

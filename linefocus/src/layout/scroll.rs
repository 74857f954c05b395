// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Adjusts `scroll_top` by the smallest amount that keeps the active box in view. If
/// the box is taller than the viewport, only the caret row is kept in view.
///
/// All arguments are in document rows. `caret_row` is relative to `box_top`.
#[must_use]
pub fn scroll_to_reveal(
    scroll_top: usize,
    viewport_rows: usize,
    box_top: usize,
    box_height: usize,
    caret_row: usize,
) -> usize {
    if viewport_rows == 0 {
        return scroll_top;
    }

    let (top, height) = if box_height <= viewport_rows {
        (box_top, box_height)
    } else {
        (box_top + caret_row, 1)
    };

    if top < scroll_top {
        top
    } else if top + height > scroll_top + viewport_rows {
        top + height - viewport_rows
    } else {
        scroll_top
    }
}

/// Keeps `scroll_top` from leaving blank rows at the bottom once the document shrinks.
#[must_use]
pub fn clamp_scroll(scroll_top: usize, viewport_rows: usize, total_rows: usize) -> usize {
    scroll_top.min(total_rows.saturating_sub(viewport_rows))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0, 10, 3, 2, 0 => 0; "already visible")]
    #[test_case(5, 10, 3, 2, 0 => 3; "above the viewport")]
    #[test_case(0, 10, 12, 2, 0 => 4; "below the viewport")]
    #[test_case(0, 4, 2, 10, 7 => 6; "tall box follows the caret row")]
    #[test_case(3, 0, 12, 2, 0 => 3; "no viewport")]
    fn test_scroll_to_reveal(
        scroll_top: usize,
        viewport_rows: usize,
        box_top: usize,
        box_height: usize,
        caret_row: usize,
    ) -> usize {
        scroll_to_reveal(scroll_top, viewport_rows, box_top, box_height, caret_row)
    }

    #[test_case(8, 5, 10 => 5)]
    #[test_case(2, 5, 10 => 2)]
    #[test_case(2, 5, 3 => 0)]
    fn test_clamp_scroll(scroll_top: usize, viewport_rows: usize, total_rows: usize) -> usize {
        clamp_scroll(scroll_top, viewport_rows, total_rows)
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_width::UnicodeWidthStr;

use crate::{CONTROLS_ROW, ControlsLayout, DocumentArea, EditorState, H_MARGIN,
            LineHandleTable, Notice, Pos, RenderOp, RenderOps, Size, TextStyle,
            UiStrings, center_in, clamp_scroll, clip_to_width, scroll_to_reveal,
            to_u16, wrap_rows};

/// First screen row of the document area. The row between it and the control bar is a
/// rule.
pub const DOCUMENT_TOP_ROW: u16 = CONTROLS_ROW + 2;

/// Everything [`render_frame`] needs to draw one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameArgs<'a> {
    pub state: &'a EditorState,
    pub strings: &'a UiStrings,
    pub window: Size,
    /// Scroll offset of the previous frame, in document rows.
    pub scroll_top: usize,
    pub notice: Option<&'a Notice>,
}

/// One rendered frame, along with the side tables needed to interpret mouse input
/// until the next frame replaces it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub ops: RenderOps,
    pub handles: LineHandleTable,
    pub controls: ControlsLayout,
}

/// Generates the render ops for the whole screen from state. Box heights are measured
/// for every line from scratch, and the document is scrolled so that the caret row of
/// the active line is visible. The terminal cursor is left hidden, placing it is the
/// job of whoever owns focus.
#[must_use]
pub fn render_frame(args: FrameArgs<'_>) -> Frame {
    let FrameArgs {
        state,
        strings,
        window,
        scroll_top,
        notice,
    } = args;

    let mut ops = RenderOps::new();
    ops.push(RenderOp::HideCursor);
    ops.push(RenderOp::ClearScreen);

    if window.is_too_small() {
        ops.paint_at(
            Pos::new(0, 0),
            clip_to_width(strings.too_small, usize::from(window.cols)),
            TextStyle::NOTICE,
        );
        return Frame {
            ops,
            ..Default::default()
        };
    }

    let controls = ControlsLayout::render(&mut ops, strings, state.show_all(), window);
    let rule_width = usize::from(window.cols.saturating_sub(2 * H_MARGIN));
    ops.paint_at(
        Pos::new(H_MARGIN, CONTROLS_ROW + 1),
        "─".repeat(rule_width),
        TextStyle::BLURRED,
    );

    let handles = layout_document(state, window, scroll_top);
    render_lines(&mut ops, state, strings, &handles);

    if let Some(notice) = notice {
        render_notice(&mut ops, notice, strings, window);
    }

    Frame {
        ops,
        handles,
        controls,
    }
}

/// Builds the handle table and settles the scroll offset for this frame.
fn layout_document(state: &EditorState, window: Size, scroll_top: usize) -> LineHandleTable {
    let area = DocumentArea {
        origin: Pos::new(H_MARGIN, DOCUMENT_TOP_ROW),
        size: Size::new(
            window.cols.saturating_sub(2 * H_MARGIN),
            window.rows.saturating_sub(DOCUMENT_TOP_ROW),
        ),
        scroll_top: 0,
    };
    let mut handles = LineHandleTable::build(state.document(), area);

    let viewport_rows = usize::from(area.size.rows);
    let mut scroll_top = clamp_scroll(scroll_top, viewport_rows, handles.total_rows());
    if let Some(active) = handles.get(state.active_index()) {
        let (caret_row, _) = state.caret_row_col(usize::from(area.size.cols));
        scroll_top = scroll_to_reveal(
            scroll_top,
            viewport_rows,
            active.doc_row,
            active.height,
            caret_row,
        );
    }
    handles.area.scroll_top = scroll_top;

    handles
}

fn render_lines(
    ops: &mut RenderOps,
    state: &EditorState,
    strings: &UiStrings,
    handles: &LineHandleTable,
) {
    let area = handles.area;
    let width = usize::from(area.size.cols);
    let first_visible = area.scroll_top;
    let last_visible = area.scroll_top + usize::from(area.size.rows);

    for handle in handles.handles() {
        if handle.doc_row + handle.height <= first_visible || handle.doc_row >= last_visible {
            continue;
        }
        let Some(line) = state.document().get(handle.index) else {
            continue;
        };

        let style = if !state.show_all() && handle.index != state.active_index() {
            TextStyle::BLURRED
        } else {
            TextStyle::PLAIN
        };

        if state.shows_placeholder(handle.index) {
            if let Some(pos) = handles.to_screen(handle.index, 0, 0) {
                ops.paint_at(
                    pos,
                    clip_to_width(strings.placeholder, width),
                    TextStyle::PLACEHOLDER,
                );
            }
            continue;
        }

        for (row, span) in wrap_rows(line, width).iter().enumerate() {
            let doc_row = handle.doc_row + row;
            if doc_row < first_visible || doc_row >= last_visible {
                continue;
            }
            let text = clip_to_width(span.as_str(line), width);
            if text.is_empty() {
                continue;
            }
            if let Some(pos) = handles.to_screen(handle.index, row, 0) {
                ops.paint_at(pos, text, style);
            }
        }
    }
}

/// Draws `notice` as a centered box over whatever is already on screen.
fn render_notice(ops: &mut RenderOps, notice: &Notice, strings: &UiStrings, window: Size) {
    const MIN_INNER_WIDTH: usize = 16;
    const HEIGHT: u16 = 5;

    let ok_label = format!("[ {} ]", strings.ok);
    let max_inner_width = usize::from(window.cols).saturating_sub(4);
    let inner_width = (notice.message.width() + 2)
        .max(ok_label.width() + 2)
        .max(MIN_INNER_WIDTH)
        .min(max_inner_width);

    let box_width = to_u16(inner_width + 2);
    let left = window.cols.saturating_sub(box_width) / 2;
    let top = window.rows.saturating_sub(HEIGHT) / 2;

    let horizontal = "─".repeat(inner_width);
    let rows = [
        format!("╭{horizontal}╮"),
        format!("│{}│", center_in(&notice.message, inner_width)),
        format!("│{}│", " ".repeat(inner_width)),
        format!("│{}│", center_in(&ok_label, inner_width)),
        format!("╰{horizontal}╯"),
    ];
    for (offset, text) in (0..).zip(rows) {
        ops.paint_at(Pos::new(left, top + offset), text, TextStyle::NOTICE);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Document, Locale};

    fn args(state: &EditorState, window: Size) -> FrameArgs<'_> {
        FrameArgs {
            state,
            strings: Locale::English.strings(),
            window,
            scroll_top: 0,
            notice: None,
        }
    }

    fn painted(frame: &Frame) -> Vec<(String, TextStyle)> {
        frame
            .ops
            .iter()
            .filter_map(|op| match op {
                RenderOp::PaintText(text, style) => Some((text.clone(), *style)),
                _ => None,
            })
            .collect()
    }

    fn painted_with(frame: &Frame, style: TextStyle) -> Vec<String> {
        painted(frame)
            .into_iter()
            .filter(|(_, it)| *it == style)
            .map(|(text, _)| text)
            .collect()
    }

    #[test]
    fn test_placeholder_only_for_sole_empty_line() {
        let state = EditorState::default();
        let frame = render_frame(args(&state, Size::new(40, 10)));
        assert_eq!(
            painted_with(&frame, TextStyle::PLACEHOLDER),
            vec!["start typing…"]
        );

        let state = EditorState::new(Document::from_lines(["", ""]));
        let frame = render_frame(args(&state, Size::new(40, 10)));
        assert!(painted_with(&frame, TextStyle::PLACEHOLDER).is_empty());
    }

    #[test]
    fn test_focus_mode_dims_other_lines() {
        let mut state = EditorState::new(Document::from_lines(["one", "two", "three"]));
        state.select_line(1);
        let frame = render_frame(args(&state, Size::new(40, 10)));
        assert_eq!(painted_with(&frame, TextStyle::PLAIN), vec!["two"]);
        let blurred = painted_with(&frame, TextStyle::BLURRED);
        assert!(blurred.contains(&"one".to_string()));
        assert!(blurred.contains(&"three".to_string()));

        state.toggle_show_all();
        let frame = render_frame(args(&state, Size::new(40, 10)));
        assert_eq!(
            painted_with(&frame, TextStyle::PLAIN),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn test_heights_follow_wrapped_rows() {
        // 24 columns wide text area, the smallest window that is not too small.
        let state = EditorState::new(Document::from_lines([
            "short",
            "the quick brown fox jumps over",
            "x\ny",
        ]));
        let frame = render_frame(args(&state, Size::new(28, 10)));
        assert_eq!(frame.handles.area.size.cols, 24);
        let heights: Vec<_> = frame.handles.handles().iter().map(|it| it.height).collect();
        assert_eq!(heights, vec![1, 2, 2]);
        assert_eq!(frame.handles.total_rows(), 5);
    }

    #[test]
    fn test_scrolls_to_keep_active_line_visible() {
        let lines: Vec<String> = (0..20).map(|it| it.to_string()).collect();
        let mut state = EditorState::new(Document::from_lines(lines));
        state.select_line(19);
        // 8 visible document rows, the active line is the last one (row 19).
        let frame = render_frame(args(&state, Size::new(30, 10)));
        assert_eq!(frame.handles.area.scroll_top, 12);
        assert_eq!(painted_with(&frame, TextStyle::PLAIN), vec!["19"]);
        assert_eq!(
            frame.handles.to_screen(19, 0, 0),
            Some(Pos::new(H_MARGIN, 9))
        );
        assert_eq!(frame.handles.to_screen(0, 0, 0), None);
    }

    #[test]
    fn test_too_small_window() {
        let state = EditorState::default();
        let frame = render_frame(args(&state, Size::new(10, 3)));
        assert_eq!(painted_with(&frame, TextStyle::NOTICE), vec!["Window too"]);
        assert!(frame.handles.is_empty());
    }

    #[test]
    fn test_notice_box() {
        let state = EditorState::default();
        let notice = Notice::new("Copied all content!");
        let frame = render_frame(FrameArgs {
            notice: Some(&notice),
            ..args(&state, Size::new(40, 10))
        });
        let boxed = painted_with(&frame, TextStyle::NOTICE);
        assert_eq!(boxed.len(), 5);
        assert!(boxed[0].starts_with('╭'));
        assert!(boxed[1].contains("Copied all content!"));
        assert!(boxed[3].contains("[ OK ]"));
        assert!(boxed[4].ends_with('╯'));
        assert!(boxed.iter().all(|it| it.width() == boxed[0].width()));
    }
}

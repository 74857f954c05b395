// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::Pos;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub reverse: bool,
}

impl TextStyle {
    pub const PLAIN: Self = Self {
        bold: false,
        dim: false,
        italic: false,
        reverse: false,
    };

    /// Lines that are not active in focus mode.
    pub const BLURRED: Self = Self {
        dim: true,
        ..Self::PLAIN
    };

    pub const PLACEHOLDER: Self = Self {
        dim: true,
        italic: true,
        ..Self::PLAIN
    };

    pub const BUTTON: Self = Self {
        reverse: true,
        ..Self::PLAIN
    };

    pub const NOTICE: Self = Self {
        bold: true,
        ..Self::PLAIN
    };
}

/// Backend independent drawing instructions. A frame is a list of these, generated
/// from state by [`crate::render_frame`] and executed by [`crate::paint`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderOp {
    ClearScreen,
    MoveCursorTo(Pos),
    PaintText(String, TextStyle),
    ShowCursor,
    HideCursor,
}

pub const RENDER_OPS_INLINE_CAPACITY: usize = 64;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOps {
    pub list: SmallVec<[RenderOp; RENDER_OPS_INLINE_CAPACITY]>,
}

impl RenderOps {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, op: RenderOp) { self.list.push(op); }

    /// Moves to `pos` and paints `text` there.
    pub fn paint_at(&mut self, pos: Pos, text: impl Into<String>, style: TextStyle) {
        self.list.push(RenderOp::MoveCursorTo(pos));
        self.list.push(RenderOp::PaintText(text.into(), style));
    }

    /// Moves the (visible) terminal cursor to `pos`. This is how an input box gets
    /// focus on screen.
    pub fn show_cursor_at(&mut self, pos: Pos) {
        self.list.push(RenderOp::MoveCursorTo(pos));
        self.list.push(RenderOp::ShowCursor);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderOp> { self.list.iter() }

    #[must_use]
    pub fn len(&self) -> usize { self.list.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.list.is_empty() }
}

impl<'a> IntoIterator for &'a RenderOps {
    type Item = &'a RenderOp;
    type IntoIter = std::slice::Iter<'a, RenderOp>;

    fn into_iter(self) -> Self::IntoIter { self.list.iter() }
}

/// Cuts `text` so that it is at most `max_cols` display columns wide, never splitting
/// a grapheme.
#[must_use]
pub fn clip_to_width(text: &str, max_cols: usize) -> &str {
    let mut cols = 0;
    for (index, grapheme) in text.grapheme_indices(true) {
        cols += grapheme.width();
        if cols > max_cols {
            return &text[..index];
        }
    }
    text
}

/// Pads `text` on both sides to `width` columns. Text wider than `width` is clipped.
#[must_use]
pub fn center_in(text: &str, width: usize) -> String {
    let text = clip_to_width(text, width);
    let text_width = text.width();
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

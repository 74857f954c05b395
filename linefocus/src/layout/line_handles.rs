// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The per-line UI handle table.
//!
//! This is an ephemeral side table from line index to the on-screen box of that line.
//! It is rebuilt from scratch on every render and is only valid until the next
//! structural change to the document. Nothing durable ever points into it. Focus and
//! mouse hit testing resolve an index through it, and an index that does not resolve
//! simply means "do nothing".

use crate::{Document, Pos, Size, measure_height, to_u16};

/// Where the document is drawn on screen, and how far it is scrolled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocumentArea {
    /// Top left corner of the first visible document row.
    pub origin: Pos,
    /// `cols` is the width available for text, `rows` the visible height.
    pub size: Size,
    /// Document row shown at `origin.row`.
    pub scroll_top: usize,
}

/// The box of one line, in document rows (not screen rows).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineHandle {
    pub index: usize,
    pub doc_row: usize,
    pub height: usize,
}

/// Result of a mouse hit test inside the document area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// A click inside the box of line `index`, at `row` (within the box) and `col`.
    Line { index: usize, row: usize, col: usize },
    /// A click on the empty container below the last line.
    Background,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineHandleTable {
    pub area: DocumentArea,
    handles: Vec<LineHandle>,
}

impl LineHandleTable {
    /// Measures every line of `document` from scratch. There is no caching, heights are
    /// recomputed for every line on every render.
    #[must_use]
    pub fn build(document: &Document, area: DocumentArea) -> Self {
        let width = usize::from(area.size.cols);
        let mut doc_row = 0;
        let handles = document
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let height = measure_height(line, width);
                let handle = LineHandle {
                    index,
                    doc_row,
                    height,
                };
                doc_row += height;
                handle
            })
            .collect();
        Self { area, handles }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<LineHandle> { self.handles.get(index).copied() }

    #[must_use]
    pub fn len(&self) -> usize { self.handles.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.handles.is_empty() }

    #[must_use]
    pub fn handles(&self) -> &[LineHandle] { &self.handles }

    /// Total height of the document in rows.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.handles.last().map_or(0, |it| it.doc_row + it.height)
    }

    /// Screen position of `(row, col)` inside the box of line `index`. Returns [`None`]
    /// when the line has no handle, or when that row is scrolled out of view.
    #[must_use]
    pub fn to_screen(&self, index: usize, row: usize, col: usize) -> Option<Pos> {
        let handle = self.get(index)?;
        let doc_row = handle.doc_row + row.min(handle.height.saturating_sub(1));
        let visible_row = doc_row.checked_sub(self.area.scroll_top)?;
        if visible_row >= usize::from(self.area.size.rows) {
            return None;
        }
        let col = col.min(usize::from(self.area.size.cols).saturating_sub(1));
        Some(Pos::new(
            self.area.origin.col.saturating_add(to_u16(col)),
            self.area.origin.row.saturating_add(to_u16(visible_row)),
        ))
    }

    /// Returns [`None`] when `pos` is outside the rows of the document area. A click
    /// anywhere on a line's rows counts as a click on that line, even in the margins.
    #[must_use]
    pub fn hit_test(&self, pos: Pos) -> Option<HitTarget> {
        let area = self.area;
        let visible_row = pos.row.checked_sub(area.origin.row)?;
        if visible_row >= area.size.rows {
            return None;
        }
        let doc_row = usize::from(visible_row) + area.scroll_top;
        let col = usize::from(pos.col.saturating_sub(area.origin.col));

        Some(
            self.handles
                .iter()
                .find(|it| doc_row >= it.doc_row && doc_row < it.doc_row + it.height)
                .map_or(HitTarget::Background, |it| HitTarget::Line {
                    index: it.index,
                    row: doc_row - it.doc_row,
                    col,
                }),
        )
    }
}

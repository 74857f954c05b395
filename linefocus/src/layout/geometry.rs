// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// A position on the terminal screen. `(0, 0)` is the top left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col: u16,
    pub row: u16,
}

impl Pos {
    #[must_use]
    pub const fn new(col: u16, row: u16) -> Self { Self { col, row } }
}

/// Size of the terminal window, or of a region inside it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub cols: u16,
    pub rows: u16,
}

impl Size {
    #[must_use]
    pub const fn new(cols: u16, rows: u16) -> Self { Self { cols, rows } }
}

/// Matches the `(columns, rows)` tuple returned by [`crossterm::terminal::size()`].
impl From<(u16, u16)> for Size {
    fn from((cols, rows): (u16, u16)) -> Self { Self { cols, rows } }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[c:{}, r:{}]", self.col, self.row)
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "[w:{}, h:{}]", self.cols, self.rows)
    }
}

/// The smallest window the editor will draw itself into.
#[repr(u16)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MinSize {
    Col = 24,
    Row = 6,
}

impl Size {
    #[must_use]
    pub fn is_too_small(&self) -> bool {
        self.cols < MinSize::Col as u16 || self.rows < MinSize::Row as u16
    }
}

/// Saturating conversion for screen math, terminal coordinates never exceed `u16`.
#[must_use]
pub fn to_u16(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          sync::Arc};

pub const NEW_LINE: &str = "\n";

/// An ordered, never empty sequence of lines. Each line is one paragraph of the document
/// and the order is reading order.
///
/// This is copy-on-write. Cloning is cheap (the lines live behind an [`Arc`]), and every
/// structural operation ([`insert_at`], [`remove_at`], [`replace_at`]) returns a brand
/// new [`Document`] and leaves `self` untouched. This keeps the editor transitions in
/// [`crate::EditorState`] free of aliasing surprises.
///
/// [`insert_at`]: Document::insert_at
/// [`remove_at`]: Document::remove_at
/// [`replace_at`]: Document::replace_at
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    lines: Arc<[String]>,
}

impl Default for Document {
    /// A new document is a single empty line.
    fn default() -> Self {
        Self {
            lines: Arc::from(vec![String::new()]),
        }
    }
}

impl Document {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// An empty iterator produces the default document (one empty line), so the
    /// invariant holds no matter what the caller passes in.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Self::default();
        }
        Self {
            lines: Arc::from(lines),
        }
    }

    #[must_use]
    pub fn line_count(&self) -> usize { self.lines.len() }

    #[must_use]
    pub fn last_index(&self) -> usize { self.lines.len() - 1 }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn lines(&self) -> &[String] { &self.lines }

    /// `true` when `index` points at an existing line and that line is `""`.
    #[must_use]
    pub fn is_line_empty(&self, index: usize) -> bool {
        self.get(index).is_some_and(str::is_empty)
    }

    /// Returns a new document with `line` inserted at `index`, which may be equal to
    /// [`Self::line_count`] to append. Returns [`None`] if `index` is out of range.
    #[must_use]
    pub fn insert_at(&self, index: usize, line: impl Into<String>) -> Option<Self> {
        if index > self.lines.len() {
            return None;
        }
        let mut lines = self.lines.to_vec();
        lines.insert(index, line.into());
        Some(Self {
            lines: Arc::from(lines),
        })
    }

    /// Returns a new document without the line at `index`. Returns [`None`] if `index`
    /// is out of range, or if this is the last remaining line.
    #[must_use]
    pub fn remove_at(&self, index: usize) -> Option<Self> {
        if index >= self.lines.len() || self.lines.len() == 1 {
            return None;
        }
        let mut lines = self.lines.to_vec();
        lines.remove(index);
        Some(Self {
            lines: Arc::from(lines),
        })
    }

    /// Returns a new document with the line at `index` replaced by `text`. Returns
    /// [`None`] if `index` is out of range.
    #[must_use]
    pub fn replace_at(&self, index: usize, text: impl Into<String>) -> Option<Self> {
        if index >= self.lines.len() {
            return None;
        }
        let mut lines = self.lines.to_vec();
        lines[index] = text.into();
        Some(Self {
            lines: Arc::from(lines),
        })
    }

    /// All lines joined with [`NEW_LINE`]. This is what gets copied to the clipboard.
    #[must_use]
    pub fn join(&self) -> String { self.lines.join(NEW_LINE) }
}

/// Compact form for log messages, since this is called on every render.
impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let bytes: usize = self.lines.iter().map(String::len).sum();
        write!(f, "Document[lines={}, bytes={bytes}]", self.lines.len())
    }
}

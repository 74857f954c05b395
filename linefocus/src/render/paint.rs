// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crossterm::{cursor::{Hide, MoveTo, Show},
                queue,
                style::{Attribute, Print, SetAttribute},
                terminal::{Clear, ClearType}};

use crate::{CommonResult, LineFocusError, RenderOp, RenderOps, TextStyle};

/// Executes `ops` against `out` (the terminal's stdout in the app, a byte buffer in
/// tests) and flushes once at the end.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn paint(ops: &RenderOps, out: &mut impl Write) -> CommonResult<()> {
    for op in ops {
        paint_op(op, out).map_err(|source| LineFocusError::terminal("paint", source))?;
    }
    out.flush()
        .map_err(|source| LineFocusError::terminal("flush", source))?;
    Ok(())
}

fn paint_op(op: &RenderOp, out: &mut impl Write) -> std::io::Result<()> {
    match op {
        RenderOp::ClearScreen => queue!(out, Clear(ClearType::All)),
        RenderOp::MoveCursorTo(pos) => queue!(out, MoveTo(pos.col, pos.row)),
        RenderOp::ShowCursor => queue!(out, Show),
        RenderOp::HideCursor => queue!(out, Hide),
        RenderOp::PaintText(text, style) => {
            let attributes = style_to_attributes(*style);
            for attr in &attributes {
                queue!(out, SetAttribute(*attr))?;
            }
            queue!(out, Print(text))?;
            if attributes.is_empty() {
                Ok(())
            } else {
                queue!(out, SetAttribute(Attribute::Reset))
            }
        }
    }
}

fn style_to_attributes(style: TextStyle) -> Vec<Attribute> {
    [
        (style.bold, Attribute::Bold),
        (style.dim, Attribute::Dim),
        (style.italic, Attribute::Italic),
        (style.reverse, Attribute::Reverse),
    ]
    .into_iter()
    .filter_map(|(is_set, attr)| is_set.then_some(attr))
    .collect()
}

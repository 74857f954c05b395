// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseInput {
    pub pos: Pos,
    pub kind: MouseInputKind,
}

/// Only a left button press does anything in the editor. Everything else (drag,
/// release, wheel, other buttons) is [`MouseInputKind::Other`] and gets ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseInputKind {
    LeftClick,
    Other,
}

impl MouseInput {
    #[must_use]
    pub const fn left_click(col: u16, row: u16) -> Self {
        Self {
            pos: Pos::new(col, row),
            kind: MouseInputKind::LeftClick,
        }
    }
}

impl From<MouseEvent> for MouseInput {
    fn from(mouse_event: MouseEvent) -> Self {
        let kind = match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => MouseInputKind::LeftClick,
            _ => MouseInputKind::Other,
        };
        Self {
            pos: Pos::new(mouse_event.column, mouse_event.row),
            kind,
        }
    }
}

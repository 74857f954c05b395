// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_width::UnicodeWidthStr;

use crate::{Pos, RenderOps, Size, TextStyle, UiStrings, to_u16};

/// Row of the control bar.
pub const CONTROLS_ROW: u16 = 0;
/// Left and right margin of the control bar and the document area.
pub const H_MARGIN: u16 = 2;
const BUTTON_GAP: u16 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlButton {
    ToggleShowAll,
    CopyAll,
}

/// Columns `[start, end)` occupied by a button on [`CONTROLS_ROW`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonSpan {
    pub button: ControlButton,
    pub start_col: u16,
    pub end_col: u16,
}

/// Where the buttons ended up in the last frame. Like the line handle table, this is
/// rebuilt on every render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlsLayout {
    spans: Vec<ButtonSpan>,
}

impl ControlsLayout {
    /// Paints the control bar. The labels reflect the current mode. A button that does
    /// not fit in the window is left out.
    pub fn render(
        ops: &mut RenderOps,
        strings: &UiStrings,
        show_all: bool,
        window: Size,
    ) -> Self {
        let buttons = [
            (
                ControlButton::ToggleShowAll,
                format!("[ {} ^T ]", strings.toggle_label(show_all)),
            ),
            (
                ControlButton::CopyAll,
                format!("[ {} ^Y ]", strings.copy_all),
            ),
        ];

        let max_col = window.cols.saturating_sub(H_MARGIN);
        let mut col = H_MARGIN;
        let mut spans = vec![];
        for (button, label) in buttons {
            let end_col = col.saturating_add(to_u16(label.width()));
            if end_col > max_col {
                break;
            }
            ops.paint_at(Pos::new(col, CONTROLS_ROW), label, TextStyle::BUTTON);
            spans.push(ButtonSpan {
                button,
                start_col: col,
                end_col,
            });
            col = end_col.saturating_add(BUTTON_GAP);
        }

        Self { spans }
    }

    #[must_use]
    pub fn hit_test(&self, pos: Pos) -> Option<ControlButton> {
        if pos.row != CONTROLS_ROW {
            return None;
        }
        self.spans
            .iter()
            .find(|it| pos.col >= it.start_col && pos.col < it.end_col)
            .map(|it| it.button)
    }

    #[must_use]
    pub fn get(&self, button: ControlButton) -> Option<ButtonSpan> {
        self.spans.iter().find(|it| it.button == button).copied()
    }
}

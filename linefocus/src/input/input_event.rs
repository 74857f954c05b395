// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::Event;

use crate::{KeyPress, MouseInput, Size};

/// Unified input event for the editor.
///
/// ```text
/// crossterm::Event
///     ├─→ Event::Key(KeyEvent)     → KeyPress   → InputEvent::Keyboard
///     ├─→ Event::Mouse(MouseEvent) → MouseInput → InputEvent::Mouse
///     ├─→ Event::Resize(w, h)      → Size       → InputEvent::Resize
///     ├─→ Event::Paste(String)     → String     → InputEvent::BracketedPaste
///     └─→ Event::Focus*            → (dropped)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard(KeyPress),
    Mouse(MouseInput),
    Resize(Size),
    /// Text pasted with the terminal's own paste (right click, middle click, etc).
    /// It arrives in one chunk and is inserted verbatim, new lines included.
    BracketedPaste(String),
}

impl InputEvent {
    /// Checks to see whether this event matches any of the `exit_keys`.
    #[must_use]
    pub fn matches(&self, exit_keys: &[InputEvent]) -> bool {
        exit_keys.iter().any(|exit_key| self == exit_key)
    }
}

impl TryFrom<Event> for InputEvent {
    type Error = ();

    fn try_from(event: Event) -> Result<Self, Self::Error> {
        match event {
            Event::Key(key_event) => Ok(InputEvent::Keyboard(key_event.try_into()?)),
            Event::Mouse(mouse_event) => Ok(InputEvent::Mouse(mouse_event.into())),
            Event::Resize(cols, rows) => Ok(InputEvent::Resize(Size::new(cols, rows))),
            Event::Paste(text) => Ok(InputEvent::BracketedPaste(text)),
            Event::FocusGained | Event::FocusLost => Err(()),
        }
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InputEvent, Key, KeyPress, MouseInput, MouseInputKind};

/// A blocking acknowledgement. While one is shown, all input except its dismissal is
/// swallowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Enter, Esc, Space or a mouse click.
    #[must_use]
    pub fn is_dismissed_by(input_event: &InputEvent) -> bool {
        match input_event {
            InputEvent::Keyboard(KeyPress { key, .. }) => {
                matches!(key, Key::Enter | Key::Esc | Key::Character(' '))
            }
            InputEvent::Mouse(MouseInput {
                kind: MouseInputKind::LeftClick,
                ..
            }) => true,
            InputEvent::Mouse(_) | InputEvent::Resize(_) | InputEvent::BracketedPaste(_) => {
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{Size, keypress};

    #[test_case(InputEvent::Keyboard(keypress!(@special Key::Enter)) => true)]
    #[test_case(InputEvent::Keyboard(keypress!(@special Key::Esc)) => true)]
    #[test_case(InputEvent::Keyboard(keypress!(@char ' ')) => true)]
    #[test_case(InputEvent::Mouse(MouseInput::left_click(0, 0)) => true)]
    #[test_case(InputEvent::Keyboard(keypress!(@char 'x')) => false)]
    #[test_case(InputEvent::BracketedPaste("x".into()) => false)]
    #[test_case(InputEvent::Resize(Size::new(80, 24)) => false)]
    fn test_is_dismissed_by(input_event: InputEvent) -> bool {
        Notice::is_dismissed_by(&input_event)
    }
}

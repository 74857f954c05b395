// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Examples.
///
/// ```rust
/// use linefocus::*;
///
/// let a = keypress!(@char 'a');
/// let ctrl_q = keypress!(@char ModifierKeysMask::new().with_ctrl(), 'q');
/// let enter = keypress!(@special Key::Enter);
/// let shift_enter = keypress!(@special ModifierKeysMask::new().with_shift(), Key::Enter);
///
/// assert_eq!(a.key, Key::Character('a'));
/// assert!(ctrl_q.mask.ctrl);
/// assert!(!enter.mask.shift);
/// assert!(shift_enter.mask.shift);
/// ```
#[macro_export]
macro_rules! keypress {
    (@char $arg_char : expr) => {
        $crate::KeyPress::new($crate::Key::Character($arg_char))
    };

    (@char $arg_modifiers : expr, $arg_char : expr) => {
        $crate::KeyPress::new($crate::Key::Character($arg_char)).with_mask($arg_modifiers)
    };

    (@special $arg_special : expr) => {
        $crate::KeyPress::new($arg_special)
    };

    (@special $arg_modifiers : expr, $arg_special : expr) => {
        $crate::KeyPress::new($arg_special).with_mask($arg_modifiers)
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Character(char),
    Enter,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Tab,
    Esc,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModifierKeysMask {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl ModifierKeysMask {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shift: false,
            ctrl: false,
            alt: false,
        }
    }

    #[must_use]
    pub const fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    #[must_use]
    pub const fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[must_use]
    pub const fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool { !self.shift && !self.ctrl && !self.alt }
}

/// A normalized key press.
///
/// `is_composing` is set when the key is part of an in-progress composed input sequence
/// (an IME). Terminals only hand over text once composition is committed, so events
/// converted from crossterm never have it set. Other front ends (and tests) can set it
/// with [`KeyPress::composing`], and the editor then leaves the key to the default
/// behavior of the input box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub mask: ModifierKeysMask,
    pub is_composing: bool,
}

impl KeyPress {
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            mask: ModifierKeysMask::new(),
            is_composing: false,
        }
    }

    #[must_use]
    pub const fn with_mask(mut self, mask: ModifierKeysMask) -> Self {
        self.mask = mask;
        self
    }

    #[must_use]
    pub const fn composing(mut self) -> Self {
        self.is_composing = true;
        self
    }

    /// Enter with no modifiers. Shift+Enter and Alt+Enter are "soft" new lines, since
    /// many terminals can't report Shift+Enter at all.
    #[must_use]
    pub const fn is_plain_enter(&self) -> bool {
        matches!(self.key, Key::Enter) && !self.mask.shift && !self.mask.alt
    }

    /// A character that should be typed into the input box (Shift is fine, Ctrl and
    /// Alt are shortcuts).
    #[must_use]
    pub const fn printable_char(&self) -> Option<char> {
        match self.key {
            Key::Character(ch) if !self.mask.ctrl && !self.mask.alt => Some(ch),
            _ => None,
        }
    }
}

pub(crate) mod converters {
    use super::{Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyPress,
                ModifierKeysMask};

    impl From<KeyModifiers> for ModifierKeysMask {
        fn from(modifiers: KeyModifiers) -> Self {
            Self {
                shift: modifiers.contains(KeyModifiers::SHIFT),
                ctrl: modifiers.contains(KeyModifiers::CONTROL),
                alt: modifiers.contains(KeyModifiers::ALT),
            }
        }
    }

    impl TryFrom<KeyEvent> for KeyPress {
        type Error = ();

        /// Release events are filtered out, Press and Repeat both count. Keys the editor
        /// has no use for (function keys, media keys, etc) are rejected.
        fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
            if key_event.kind == KeyEventKind::Release {
                return Err(());
            }

            let key = match key_event.code {
                KeyCode::Char(ch) => Key::Character(ch),
                KeyCode::Enter => Key::Enter,
                KeyCode::Backspace => Key::Backspace,
                KeyCode::Delete => Key::Delete,
                KeyCode::Left => Key::Left,
                KeyCode::Right => Key::Right,
                KeyCode::Up => Key::Up,
                KeyCode::Down => Key::Down,
                KeyCode::Home => Key::Home,
                KeyCode::End => Key::End,
                KeyCode::Tab => Key::Tab,
                KeyCode::Esc => Key::Esc,
                _ => return Err(()),
            };

            Ok(KeyPress::new(key).with_mask(key_event.modifiers.into()))
        }
    }
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::stdout;

use crossterm::{cursor::Show,
                event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
                        EnableMouseCapture, KeyboardEnhancementFlags,
                        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
                execute,
                terminal::{self, EnterAlternateScreen, LeaveAlternateScreen}};

use crate::{CommonResult, DEBUG_LINEFOCUS_MOD, LineFocusError};

/// Puts the terminal into the state the editor needs: raw mode, the alternate screen,
/// mouse capture and bracketed paste. Where the terminal supports it, the keyboard
/// enhancement protocol is turned on as well, so that Shift+Enter can be told apart from
/// Enter.
///
/// Everything is undone when this guard is dropped, including on the error path.
#[derive(Debug)]
pub struct RawMode {
    keyboard_enhanced: bool,
}

impl RawMode {
    /// # Errors
    ///
    /// Returns an error if the terminal can't be switched into raw mode.
    pub fn start() -> CommonResult<Self> {
        terminal::enable_raw_mode()
            .map_err(|source| LineFocusError::terminal("enable raw mode", source))?;

        let mut it = Self {
            keyboard_enhanced: false,
        };

        execute!(
            stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )
        .map_err(|source| LineFocusError::terminal("enter alternate screen", source))?;

        if matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                )
            )
            .map_err(|source| {
                LineFocusError::terminal("push keyboard enhancement flags", source)
            })?;
            it.keyboard_enhanced = true;
        }

        DEBUG_LINEFOCUS_MOD.then(|| {
            tracing::debug!(
                message = "RawMode::start",
                keyboard_enhanced = it.keyboard_enhanced
            );
        });

        Ok(it)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            if let Err(error) = execute!(stdout(), PopKeyboardEnhancementFlags) {
                tracing::error!(message = "Could not pop keyboard flags", ?error);
            }
        }

        if let Err(error) = execute!(
            stdout(),
            Show,
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        ) {
            tracing::error!(message = "Could not leave alternate screen", ?error);
        }

        if let Err(error) = terminal::disable_raw_mode() {
            tracing::error!(message = "Could not disable raw mode", ?error);
        }

        DEBUG_LINEFOCUS_MOD.then(|| {
            tracing::debug!(message = "RawMode::drop");
        });
    }
}

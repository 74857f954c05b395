// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{Write, stdout},
          sync::Arc};

use crossterm::{event::EventStream, terminal};
use futures_util::StreamExt;
use tokio::sync::mpsc;

use crate::{AppSignal, CHANNEL_WIDTH, CommonResult, DEBUG_LINEFOCUS_MOD, Document,
            EventPropagation, InputEvent, LineEditor, LineFocusError, Locale,
            ModifierKeysMask, RawMode, Size, SystemClipboard, keypress, paint};

/// Takes over the terminal and runs the editor until `Ctrl+Q` is pressed. The terminal
/// is restored when this returns, whether or not there was an error.
///
/// # Errors
///
/// Returns an error if the terminal can't be set up, read from or written to.
pub async fn run_app(locale: Locale) -> CommonResult<()> {
    // Exit if these keys are pressed.
    let exit_keys = &[InputEvent::Keyboard(
        keypress! { @char ModifierKeysMask::new().with_ctrl(), 'q' },
    )];

    let window: Size = terminal::size()
        .map_err(|source| LineFocusError::terminal("get window size", source))?
        .into();

    let (sender, receiver) = mpsc::channel::<AppSignal>(CHANNEL_WIDTH);
    let editor = LineEditor::new(
        Document::default(),
        locale,
        window,
        Arc::new(SystemClipboard),
        sender,
    );

    let raw_mode = RawMode::start()?;
    let result = main_event_loop(editor, exit_keys, receiver, &mut stdout()).await;
    drop(raw_mode);

    result
}

async fn main_event_loop(
    mut editor: LineEditor,
    exit_keys: &[InputEvent],
    mut receiver: mpsc::Receiver<AppSignal>,
    out: &mut impl Write,
) -> CommonResult<()> {
    DEBUG_LINEFOCUS_MOD.then(|| {
        tracing::debug!(message = "main_event_loop -> Startup 🚀");
    });

    let mut event_stream = EventStream::new();
    paint_frame(&mut editor, out)?;

    loop {
        let propagation = tokio::select! {
            maybe_event = event_stream.next() => {
                let Some(event) = maybe_event else {
                    break;
                };
                let event = event
                    .map_err(|source| LineFocusError::terminal("read input", source))?;
                let Ok(input_event) = InputEvent::try_from(event) else {
                    continue;
                };
                if input_event.matches(exit_keys) {
                    break;
                }
                editor.handle_input_event(input_event)
            }
            Some(signal) = receiver.recv() => {
                DEBUG_LINEFOCUS_MOD.then(|| {
                    tracing::debug!(message = "main_event_loop -> Signal 📣", signal = ?signal);
                });
                editor.handle_signal(signal)
            }
        };

        match propagation {
            EventPropagation::ConsumedRender => paint_frame(&mut editor, out)?,
            EventPropagation::ExitMainEventLoop => break,
            EventPropagation::Consumed | EventPropagation::Propagate => {}
        }
    }

    DEBUG_LINEFOCUS_MOD.then(|| {
        tracing::debug!(message = "main_event_loop -> Shutdown 🛑");
    });

    Ok(())
}

/// Paints the next frame, then runs the after render hooks against it.
fn paint_frame(editor: &mut LineEditor, out: &mut impl Write) -> CommonResult<()> {
    let ops = editor.render();
    paint(&ops, out)?;
    let ops = editor.run_after_render_hooks();
    if !ops.is_empty() {
        paint(&ops, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard_test_fixtures::TestClipboard;

    #[tokio::test]
    async fn test_paint_frame_writes_and_focuses() {
        let (sender, _receiver) = mpsc::channel(CHANNEL_WIDTH);
        let mut editor = LineEditor::new(
            Document::from_lines(["hello"]),
            Locale::English,
            Size::new(40, 12),
            Arc::new(TestClipboard::default()),
            sender,
        );

        let mut out: Vec<u8> = vec![];
        paint_frame(&mut editor, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("hello"));
        assert!(output.contains("[ Show all ^T ]"));
        assert_eq!(editor.focus(), Some(0));
    }
}

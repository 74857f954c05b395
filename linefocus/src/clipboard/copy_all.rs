// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinHandle};

use crate::{AppSignal, ClipboardService, DEBUG_LINEFOCUS_COPY_PASTE, LineFocusError};

/// Writes `text` to the clipboard without blocking the caller.
///
/// The clipboard call itself runs on tokio's blocking pool (X11 clipboard setup can
/// take a while). When it settles, the outcome is sent back to the main event loop as
/// [`AppSignal::CopyFinished`]. There is no retry and no cancellation. Nothing else in
/// the editor waits on this task.
pub fn spawn_copy_all(
    text: String,
    clipboard: Arc<dyn ClipboardService>,
    sender: mpsc::Sender<AppSignal>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = tokio::task::spawn_blocking(move || {
            clipboard.try_to_put_content_into_clipboard(text)
        })
        .await;

        let result = match result {
            Ok(Ok(())) => Ok(()),
            Ok(Err(error)) => Err(LineFocusError::Clipboard {
                reason: error.to_string(),
            }),
            Err(join_error) => Err(LineFocusError::Clipboard {
                reason: join_error.to_string(),
            }),
        };

        if sender.send(AppSignal::CopyFinished(result)).await.is_err() {
            DEBUG_LINEFOCUS_COPY_PASTE.then(|| {
                tracing::debug!(
                    message = "📋📋📋 Main event loop is gone, dropping copy result"
                );
            });
        }
    })
}

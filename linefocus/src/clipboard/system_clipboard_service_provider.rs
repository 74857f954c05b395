// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use copypasta_ext::copypasta::ClipboardProvider;

use super::{ClipboardResult, ClipboardService};
use crate::DEBUG_LINEFOCUS_COPY_PASTE;

/// On X11 the clipboard is owned by the process that set it. The `x11_fork` context
/// forks a small process that keeps serving the content after the editor exits.
#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
type PlatformClipboardContext = copypasta_ext::x11_fork::ClipboardContext;

#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
type PlatformClipboardContext = copypasta_ext::copypasta::ClipboardContext;

#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn try_to_put_content_into_clipboard(&self, content: String) -> ClipboardResult<()> {
        let content_len = content.len();
        let mut ctx = PlatformClipboardContext::new()?;
        ctx.set_contents(content)?;

        DEBUG_LINEFOCUS_COPY_PASTE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📋📋📋 Document was copied to clipboard",
                copied_bytes = %content_len,
            );
        });

        Ok(())
    }
}

pub mod clipboard_test_fixtures {
    use std::sync::Mutex;

    use super::{ClipboardResult, ClipboardService};

    /// Remembers the last content put into it.
    #[derive(Debug, Default)]
    pub struct TestClipboard {
        pub content: Mutex<String>,
    }

    impl TestClipboard {
        #[must_use]
        pub fn content(&self) -> String {
            self.content
                .lock()
                .map(|it| it.clone())
                .unwrap_or_default()
        }
    }

    impl ClipboardService for TestClipboard {
        fn try_to_put_content_into_clipboard(
            &self,
            content: String,
        ) -> ClipboardResult<()> {
            let mut guard = self
                .content
                .lock()
                .map_err(|_| "test clipboard mutex poisoned")?;
            *guard = content;
            Ok(())
        }
    }

    /// Always fails, like a headless session with no clipboard owner.
    #[derive(Debug, Default)]
    pub struct FailingClipboard;

    impl ClipboardService for FailingClipboard {
        fn try_to_put_content_into_clipboard(
            &self,
            _content: String,
        ) -> ClipboardResult<()> {
            Err("clipboard unavailable".into())
        }
    }
}

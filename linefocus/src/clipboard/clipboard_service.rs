// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{error::Error, fmt::Debug};

pub type ClipboardResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

/// Abstraction for the clipboard service for dependency injection. This trait is
/// implemented by both test clipboard services and the system clipboard service.
///
/// It is write only, the editor never reads from the clipboard. The write runs on
/// tokio's blocking pool (see [`crate::spawn_copy_all`]), hence `Send + Sync` and `&self`.
pub trait ClipboardService: Debug + Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the platform clipboard can't be opened or refuses the write.
    fn try_to_put_content_into_clipboard(&self, content: String) -> ClipboardResult<()>;
}

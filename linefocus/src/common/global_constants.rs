// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Chatty debug logging for the main event loop and renders. The log file is only
/// written when `--enable-logging` is passed, this just gates the noisy parts.
pub const DEBUG_LINEFOCUS_MOD: bool = true;

/// Debug logging for the clipboard copy task.
pub const DEBUG_LINEFOCUS_COPY_PASTE: bool = true;

/// Capacity of the mpsc channel that carries [`crate::AppSignal`]s to the main loop.
pub const CHANNEL_WIDTH: usize = 1_000;

pub const DEFAULT_LOG_FILE_NAME: &str = "linefocus_log.txt";

pub const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

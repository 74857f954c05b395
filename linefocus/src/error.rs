// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for the crate. See [`LineFocusError`] for details.

/// Result type used at the app and launcher seams. The binary returns this from `main()`
/// so that the global miette report handler renders any error that escapes.
pub type CommonResult<T> = miette::Result<T>;

/// Errors that can happen while running the editor.
///
/// | Variant       | Cause                                               | Shown to user? |
/// | :------------ | :-------------------------------------------------- | :------------- |
/// | [`Terminal`]  | Raw mode, alternate screen or painting failed       | Yes, on exit   |
/// | [`Clipboard`] | The system clipboard rejected the write             | No, only logs  |
/// | [`Logging`]   | The log file could not be created                   | Yes, at start  |
///
/// [`Terminal`]: Self::Terminal
/// [`Clipboard`]: Self::Clipboard
/// [`Logging`]: Self::Logging
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum LineFocusError {
    #[error("Terminal I/O failed while trying to {during}")]
    #[diagnostic(
        code(linefocus::terminal),
        help("Make sure stdin and stdout are attached to an interactive terminal.")
    )]
    Terminal {
        during: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not copy to the system clipboard: {reason}")]
    #[diagnostic(
        code(linefocus::clipboard),
        help(
            "On Linux the clipboard needs a running X11 or Wayland session. \
             Over SSH, forward X11 or copy from show-all mode with the mouse."
        )
    )]
    Clipboard { reason: String },

    #[error("Could not create the log file {path}")]
    #[diagnostic(
        code(linefocus::logging),
        help("Pass a writable path with `--log-file`, or run without `--enable-logging`.")
    )]
    Logging { path: String },
}

impl LineFocusError {
    /// Wraps an [`std::io::Error`] from a terminal operation.
    #[must_use]
    pub fn terminal(during: &'static str, source: std::io::Error) -> Self {
        Self::Terminal { during, source }
    }
}

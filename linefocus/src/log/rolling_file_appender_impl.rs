// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use crate::LineFocusError;

/// Note that if you wrap this up in a non blocking writer, it doesn't work. Here's an
/// example of this:
/// `tracing_appender::non_blocking(try_create("foo")?)`
///
/// # Errors
///
/// Returns an error if:
/// - The path has no file name
/// - The file can't be created in its parent folder
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let file_name = path.file_name().ok_or_else(|| LineFocusError::Logging {
        path: path.display().to_string(),
    })?;

    // A bare file name has an empty parent, which means the current folder.
    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it.to_path_buf(),
        _ => PathBuf::from("."),
    };

    tracing_appender::rolling::RollingFileAppender::builder()
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .map_err(|_| {
            LineFocusError::Logging {
                path: path.display().to_string(),
            }
            .into()
        })
}

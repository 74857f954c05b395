// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `linefocus` is a focus mode line editor for the terminal.
//!
//! You write one line at a time. Only the active line is shown at full clarity, every
//! other line is dimmed and read-only. Toggle "show all" mode to see and edit every line,
//! and copy the whole document to the system clipboard when you are done.
//!
//! The crate is layered so that the interesting parts are pure and testable:
//! 1. [`Document`] is a copy-on-write sequence of lines that can never become empty.
//! 2. [`EditorState`] holds the document, active index, display mode and caret, and
//!    exposes the editor transitions as total functions that return
//!    [`EventPropagation`].
//! 3. [`render_frame`] turns state into a list of [`RenderOp`]s plus a
//!    [`LineHandleTable`] that is rebuilt on every render.
//! 4. [`LineEditor`] routes [`InputEvent`]s and [`AppSignal`]s and runs the
//!    [`AfterRender`] hooks once a frame is committed.
//! 5. [`launcher::run_app`] owns the terminal and the tokio main event loop.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod app;
pub mod clap_config;
pub mod clipboard;
pub mod common;
pub mod document;
pub mod editor;
pub mod error;
pub mod input;
pub mod launcher;
pub mod layout;
pub mod log;
pub mod render;
pub mod ui_str;

// Re-export.
pub use app::*;
pub use clap_config::*;
pub use clipboard::*;
pub use common::*;
pub use document::*;
pub use editor::*;
pub use error::*;
pub use input::*;
pub use layout::*;
pub use log::*;
pub use render::*;
pub use ui_str::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod after_render;
pub mod app_signal;
pub mod line_editor;
pub mod notice;

// Re-export.
pub use after_render::*;
pub use app_signal::*;
pub use line_editor::*;
pub use notice::*;

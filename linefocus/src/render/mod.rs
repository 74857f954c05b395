// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod controls;
pub mod paint;
pub mod raw_mode;
pub mod render_frame;
pub mod render_op;

// Re-export.
pub use controls::*;
pub use paint::*;
pub use raw_mode::*;
pub use render_frame::*;
pub use render_op::*;

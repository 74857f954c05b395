// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod input_event;
pub mod keypress;
pub mod mouse_input;

// Re-export.
pub use input_event::*;
pub use keypress::*;
pub use mouse_input::*;

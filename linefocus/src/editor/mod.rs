// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod caret;
pub mod editor_state;
pub mod event_routing_support;
pub mod key_routing;

// Re-export.
pub use caret::*;
pub use editor_state::*;
pub use event_routing_support::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Side effects that must run after a frame has been painted, because they need the
/// handle table of that frame. They are queued by event handlers and drained exactly
/// once, by [`crate::LineEditor::run_after_render_hooks`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterRender {
    /// Give input focus to the box of line `index`, if it still has a handle.
    RestoreFocus { index: usize },
}

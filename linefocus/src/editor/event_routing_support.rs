// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Tells the caller whether an event was consumed, and if so, whether a render is
/// necessary. [`EventPropagation::Propagate`] means "not handled here", so the next
/// handler in line (usually the default behavior of the input box) gets a go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventPropagation {
    ConsumedRender,
    Consumed,
    Propagate,
    ExitMainEventLoop,
}

impl EventPropagation {
    #[must_use]
    pub fn is_propagate(self) -> bool { self == EventPropagation::Propagate }

    /// Runs `fallback` only if `self` is [`EventPropagation::Propagate`].
    #[must_use]
    pub fn or_else(self, fallback: impl FnOnce() -> EventPropagation) -> EventPropagation {
        if self.is_propagate() { fallback() } else { self }
    }
}

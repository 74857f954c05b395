// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod document_impl;

// Re-export.
pub use document_impl::*;

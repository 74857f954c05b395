// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod geometry;
pub mod line_handles;
pub mod scroll;
pub mod wrap;

// Re-export.
pub use geometry::*;
pub use line_handles::*;
pub use scroll::*;
pub use wrap::*;

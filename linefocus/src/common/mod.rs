// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod global_constants;
pub mod memory_allocator;
pub mod miette_setup_global_report_handler;

// Re-export.
pub use global_constants::*;
pub use miette_setup_global_report_handler::*;

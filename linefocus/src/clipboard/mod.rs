// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clipboard_service;
pub mod copy_all;
pub mod system_clipboard_service_provider;

// Re-export.
pub use clipboard_service::*;
pub use copy_all::*;
pub use system_clipboard_service_provider::*;

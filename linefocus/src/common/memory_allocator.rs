// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// `mimalloc` is a replacement for the default global allocator. Every render allocates
/// and drops lots of small strings, which is the workload it is good at.
/// - <https://github.com/microsoft/mimalloc?tab=readme-ov-file#performance>
/// - <https://crates.io/crates/mimalloc>
///
/// Call this once, at the top of `main`.
#[macro_export]
macro_rules! set_mimalloc_in_main {
    () => {{
        use mimalloc::MiMalloc;

        #[global_allocator]
        static GLOBAL: MiMalloc = MiMalloc;
    }};
}

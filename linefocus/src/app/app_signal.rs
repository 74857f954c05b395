// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::LineFocusError;

/// Messages sent to the main event loop from background tasks.
#[derive(Debug)]
pub enum AppSignal {
    /// The clipboard write kicked off by "copy all" has settled.
    CopyFinished(Result<(), LineFocusError>),
}

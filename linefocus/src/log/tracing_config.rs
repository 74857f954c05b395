// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

use crate::try_create_layers;

/// Where log output goes. The terminal belongs to the editor UI, so there is no stdout
/// or stderr option, logs either go to a file or nowhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    File(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(file_path: impl Into<String>, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(file_path.into()),
            level_filter,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Installs the subscriber globally for the life of the process. Does nothing for
    /// [`WriterConfig::None`].
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or if a global subscriber is
    /// already installed.
    pub fn install_global(self) -> miette::Result<()> {
        if let Some(layers) = try_create_layers(self)? {
            tracing_subscriber::registry()
                .with(layers)
                .try_init()
                .into_diagnostic()?;
        }
        Ok(())
    }

    /// Installs the subscriber for the current thread only, until the returned guard is
    /// dropped. Useful in tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<Option<DefaultGuard>> {
        Ok(try_create_layers(self)?
            .map(|layers| tracing_subscriber::registry().with(layers).set_default()))
    }
}

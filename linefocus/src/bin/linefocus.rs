// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use linefocus::{CLIArg, CommonResult, ISSUES_URL, TracingConfig, launcher,
                set_mimalloc_in_main, setup_default_miette_global_report_handler};

// Note: The `tokio::main` macro internally calls `.expect("Failed building the Runtime")`
// when initializing the Tokio runtime. This is unavoidable and safe, as runtime creation
// failure is a fatal error that should panic. The lint must be suppressed here.
#[tokio::main]
#[allow(clippy::unwrap_in_result)]
async fn main() -> CommonResult<()> {
    set_mimalloc_in_main!();

    setup_default_miette_global_report_handler(ISSUES_URL);

    let cli_arg = CLIArg::parse();
    let options = &cli_arg.global_options;

    if options.enable_logging {
        TracingConfig::new_file(options.log_file.as_str(), options.log_level)
            .install_global()?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    launcher::run_app(options.locale).await?;

    options.enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    Ok(())
}

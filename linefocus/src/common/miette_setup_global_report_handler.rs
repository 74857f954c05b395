// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Customizes how a [`miette::Report`] that escapes `main()` is printed.
//!
//! The hook is lazy. It only runs when a report is actually displayed, which happens
//! after raw mode has been left, so the terminal width is measured at that point.

use miette::MietteHandlerOpts;
use tracing::debug;

pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(80, |(columns, _rows)| usize::from(columns));
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}

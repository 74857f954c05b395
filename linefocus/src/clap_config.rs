// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};
use tracing_core::LevelFilter;

use crate::{DEFAULT_LOG_FILE_NAME, Locale};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "linefocus")]
#[command(about = "✍️ Write one line at a time, in focus 💡")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nKeys: Enter new line, Shift+Enter or Alt+Enter soft break, ^T show all, ^Y copy all, ^Q quit.\nUSAGE 📓:\n  linefocus [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file for debugging, see `--log-file`."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value = DEFAULT_LOG_FILE_NAME,
        help = "Path of the log file, used with `--enable-logging`."
    )]
    pub log_file: String,

    #[arg(
        global = true,
        long,
        default_value_t = LevelFilter::DEBUG,
        help = "One of: off, error, warn, info, debug, trace."
    )]
    pub log_level: LevelFilter,

    #[arg(
        global = true,
        long,
        default_value_t = Locale::English,
        help = "Language of the UI, one of: en, zh-tw."
    )]
    pub locale: Locale,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::try_parse_from(["linefocus"]).unwrap();
        let options = cli_arg.global_options;
        assert!(!options.enable_logging);
        assert_eq!(options.log_file, DEFAULT_LOG_FILE_NAME);
        assert_eq!(options.log_level, LevelFilter::DEBUG);
        assert_eq!(options.locale, Locale::English);
    }

    #[test]
    fn test_all_options() {
        let cli_arg = CLIArg::try_parse_from([
            "linefocus",
            "-l",
            "--log-file",
            "/tmp/lf.log",
            "--log-level",
            "warn",
            "--locale",
            "zh-tw",
        ])
        .unwrap();
        let options = cli_arg.global_options;
        assert!(options.enable_logging);
        assert_eq!(options.log_file, "/tmp/lf.log");
        assert_eq!(options.log_level, LevelFilter::WARN);
        assert_eq!(options.locale, Locale::TraditionalChinese);
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        assert!(CLIArg::try_parse_from(["linefocus", "--locale", "fr"]).is_err());
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        CLIArg::command().debug_assert();
    }
}

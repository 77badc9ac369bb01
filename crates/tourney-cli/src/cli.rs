//! CLI argument definitions for tourney-etl.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colorchoice_clap::Color;

use crate::config::DEFAULT_CONFIG_PATH;

#[derive(Parser)]
#[command(
    name = "tourney-etl",
    version,
    about = "Load tournament battle logs into a SQLite fact table",
    long_about = "Extract battle-log CSV exports, clean and normalize them, check the\n\
                  dataset's integrity, and append it to the fact table.\n\n\
                  The cumulative stats view is refreshed after every load; the\n\
                  analytical views are created with --add-views."
)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Also create the analytical views from the configured views directory.
    #[arg(long = "add-views")]
    pub add_views: bool,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log line format written to the log file.
    #[arg(long = "log-format", value_enum, default_value = "compact")]
    pub log_format: LogFormatArg,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

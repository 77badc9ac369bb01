//! Tournament battle-log ETL.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use tourney_cli::cli::{Cli, LogFormatArg};
use tourney_cli::logging::{LogConfig, LogFormat, ansi_enabled, init_logging};
use tourney_cli::summary::print_summary;
use tourney_cli::{EtlConfig, RunOptions, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();

    let config = match EtlConfig::load(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging(&log_config(&cli, &config)) {
        eprintln!("error: failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    info!(config = %cli.config.display(), add_views = cli.add_views, "ETL process started.");
    let options = RunOptions {
        add_views: cli.add_views,
    };
    match run(&config, options) {
        Ok(summary) => {
            info!("ETL process completed.");
            print_summary(&summary, cli.color.color);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Error during ETL process: {err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn log_config(cli: &Cli, config: &EtlConfig) -> LogConfig {
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let log_file = config.logging.log_file.clone();
    LogConfig::default()
        .with_level(config.logging.level())
        .with_format(format)
        .with_ansi(ansi_enabled(cli.color.color, Some(&log_file)))
        .with_log_file(Some(log_file))
}

//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Every run appends to the configured log file. The log level comes from the
//! configuration file unless `RUST_LOG` is set.
//!
//! # Log Levels
//!
//! - `error`: Failed integrity checks, missing view scripts, fatal errors
//! - `warn`: Non-fatal issues
//! - `info`: Stage completion and row counts
//! - `debug`: Per-file and per-step detail

use std::fs::OpenOptions;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use clap::ColorChoice;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Crates whose events are kept at the configured level.
const CRATES: [&str; 6] = [
    "tourney_cli",
    "tourney_ingest",
    "tourney_model",
    "tourney_store",
    "tourney_transform",
    "tourney_validate",
];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_timestamps: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Log file, appended to. Logs go to stderr when `None`.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human-readable format.
    Pretty,
    /// Single-line format.
    #[default]
    Compact,
    /// JSON lines for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_timestamps: true,
            with_ansi: false,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    /// Set the log file path (writes to stderr when None).
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Whether log lines carry ANSI colors for the given `--color` choice.
///
/// `auto` colors only a terminal, never a log file.
pub fn ansi_enabled(color: ColorChoice, log_file: Option<&Path>) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => log_file.is_none() && io::stderr().is_terminal(),
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// The log file's parent directory is created when missing. Call once at
/// startup.
///
/// # Errors
///
/// Returns an error if the log file or its directory cannot be created.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, SharedFileWriter::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

/// Initialize logging with a custom writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(config.level);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_span_events(fmt::format::FmtSpan::CLOSE);

            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(false);

            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .init();
            }
        }
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_writer(writer)
                .with_ansi(config.with_ansi)
                .with_target(false);

            if config.with_timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(layer.without_time())
                    .init();
            }
        }
    }
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl SharedFileWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

/// Filter directives: other crates at warn, ours at `level`.
fn filter_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.join(",")
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(level)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_workspace_crates() {
        insta::assert_snapshot!(
            filter_directives(Level::DEBUG),
            @"warn,tourney_cli=debug,tourney_ingest=debug,tourney_model=debug,tourney_store=debug,tourney_transform=debug,tourney_validate=debug"
        );
    }

    #[test]
    fn builder_sets_fields() {
        let config = LogConfig::default()
            .with_level(Level::ERROR)
            .with_format(LogFormat::Json)
            .with_log_file(Some(PathBuf::from("logs/etl.log")));
        assert_eq!(config.level, Level::ERROR);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.with_timestamps);
        assert_eq!(config.log_file, Some(PathBuf::from("logs/etl.log")));
        assert!(!config.with_ansi);
        assert!(config.with_ansi(true).with_ansi);
    }

    #[test]
    fn ansi_follows_color_choice() {
        let file = Path::new("logs/etl.log");
        assert!(ansi_enabled(ColorChoice::Always, Some(file)));
        assert!(!ansi_enabled(ColorChoice::Never, None));
        assert!(!ansi_enabled(ColorChoice::Auto, Some(file)));
    }
}

//! Run configuration loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::EtlError;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Settings for one ETL run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtlConfig {
    #[serde(default)]
    pub logging: LoggingSettings,
    pub database: DatabaseSettings,
    pub files: FileSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// Level name such as `INFO` or `debug`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

impl LoggingSettings {
    /// Configured level; unknown names fall back to INFO.
    pub fn level(&self) -> Level {
        parse_level(&self.log_level).unwrap_or(Level::INFO)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite store file.
    pub db_path: PathBuf,
    /// DDL script creating the fact table.
    pub fact_table_schema: PathBuf,
    /// Script creating the cumulative battle stats view.
    pub cumulative_view: PathBuf,
    /// Directory holding `<view_name>.sql` for each analytical view.
    #[serde(default = "default_views_dir")]
    pub views_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Directory scanned for battle-log CSV files.
    pub input_dir: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("logs/etl.log")
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_views_dir() -> PathBuf {
    PathBuf::from("sql/views")
}

/// Parses a level name, ignoring case. Accepts `warning` and `critical`.
pub fn parse_level(name: &str) -> Option<Level> {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" | "critical" => Some(Level::ERROR),
        _ => None,
    }
}

impl EtlConfig {
    /// Reads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, EtlError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                EtlError::ConfigMissing {
                    path: path.to_path_buf(),
                }
            } else {
                EtlError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        toml::from_str(&content).map_err(|source| EtlError::ConfigInvalid {
            path: path.to_path_buf(),
            source,
        })
    }
}

//! Error types for the SQLite store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while talking to the store.
#[derive(Debug, Error)]
pub enum StoreError {
    // === File System Errors ===
    /// Could not create the directory holding the store file.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A SQL script file does not exist.
    #[error("SQL script not found: {path}")]
    ScriptMissing { path: PathBuf },

    /// A SQL script file exists but could not be read.
    #[error("failed to read SQL script {path}: {source}")]
    ScriptRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === SQLite Errors ===
    /// Opening the store file failed.
    #[error("failed to open store {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Closing the connection failed.
    #[error("failed to close store: {0}")]
    Close(#[source] rusqlite::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_missing_display() {
        let err = StoreError::ScriptMissing {
            path: PathBuf::from("sql/views/top_used_pokemons.sql"),
        };
        assert_eq!(
            err.to_string(),
            "SQL script not found: sql/views/top_used_pokemons.sql"
        );
    }
}

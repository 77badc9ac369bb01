//! Top-level errors of an ETL run.

use std::path::PathBuf;

use thiserror::Error;

use tourney_ingest::IngestError;
use tourney_model::IntegrityReport;
use tourney_store::StoreError;
use tourney_transform::TransformError;

/// Every way a run can fail. Each one ends the process with exit code 1.
#[derive(Debug, Error)]
pub enum EtlError {
    // === Configuration ===
    #[error("configuration file {path} not found")]
    ConfigMissing { path: PathBuf },

    #[error("failed to read configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file {path}: {source}")]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // === Pipeline stages ===
    #[error("extraction failed: {0}")]
    Extraction(#[from] IngestError),

    #[error("transformation failed: {0}")]
    Transformation(#[from] TransformError),

    #[error("data integrity checks failed: {report}")]
    IntegrityViolation { report: IntegrityReport },

    // === Store ===
    #[error("store unavailable: {0}")]
    Store(#[source] StoreError),

    #[error("failed to create fact table schema: {0}")]
    Schema(#[source] StoreError),

    #[error("failed to load data: {0}")]
    Load(#[source] StoreError),

    #[error("failed to create views: {0}")]
    Views(#[source] StoreError),
}

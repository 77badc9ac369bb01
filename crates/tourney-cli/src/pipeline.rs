//! ETL run with explicit stages.
//!
//! The run follows these stages in order:
//! 1. **Schema**: create the fact table from its DDL script
//! 2. **Extract**: read and concatenate every CSV in the input directory
//! 3. **Transform**: dedupe, sort, backfill stats, split types
//! 4. **Integrity**: refuse the whole dataset if any check fails
//! 5. **Load**: append every row to the fact table
//! 6. **Views**: refresh the cumulative view, then the analytical views on request
//!
//! One store connection serves every stage and is closed when the run ends,
//! whether it succeeded or not.

use std::path::PathBuf;

use polars::prelude::DataFrame;
use tracing::{error, info, info_span};

use tourney_ingest::{Extracted, extract};
use tourney_model::{ANALYTICAL_VIEWS, FACT_TABLE, IntegrityReport};
use tourney_store::{Store, ViewReport, materialize_cumulative_view, materialize_views};
use tourney_transform::{TransformStats, Transformed, transform};
use tourney_validate::check_integrity;

use crate::config::EtlConfig;
use crate::error::EtlError;

/// Options that do not come from the configuration file.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Create the analytical views after the load.
    pub add_views: bool,
}

/// What a successful run did.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub files: Vec<PathBuf>,
    pub rows_extracted: usize,
    pub transform: TransformStats,
    pub integrity: IntegrityReport,
    pub rows_loaded: usize,
    /// Rows in the fact table after the load, earlier runs included.
    pub fact_rows: usize,
    pub views: ViewReport,
}

/// Runs the whole ETL against the configured store.
pub fn run(config: &EtlConfig, options: RunOptions) -> Result<RunSummary, EtlError> {
    let mut store = Store::open(&config.database.db_path).map_err(EtlError::Store)?;
    let outcome = run_with_store(&mut store, config, options);
    let closed = store.close().map_err(EtlError::Store);
    let summary = outcome?;
    closed?;
    Ok(summary)
}

/// Runs every stage on an already open store.
pub fn run_with_store(
    store: &mut Store,
    config: &EtlConfig,
    options: RunOptions,
) -> Result<RunSummary, EtlError> {
    setup_schema(store, config)?;
    let extracted = extract_stage(config)?;
    let transformed = transform_stage(&extracted.frame)?;
    let integrity = integrity_stage(&transformed.frame)?;
    let rows_loaded = load_stage(store, &transformed.frame)?;
    let views = views_stage(store, config, options)?;
    let fact_rows = store.row_count(FACT_TABLE).map_err(EtlError::Store)?;

    Ok(RunSummary {
        rows_extracted: extracted.frame.height(),
        files: extracted.files,
        transform: transformed.stats,
        integrity,
        rows_loaded,
        fact_rows,
        views,
    })
}

// ============================================================================
// Stage 1: Schema
// ============================================================================

pub fn setup_schema(store: &Store, config: &EtlConfig) -> Result<(), EtlError> {
    let span = info_span!("schema");
    let _guard = span.enter();
    store
        .execute_script_file(&config.database.fact_table_schema)
        .map_err(EtlError::Schema)?;
    info!(script = %config.database.fact_table_schema.display(), "Fact table schema applied.");
    Ok(())
}

// ============================================================================
// Stage 2: Extract
// ============================================================================

pub fn extract_stage(config: &EtlConfig) -> Result<Extracted, EtlError> {
    let span = info_span!("extract", dir = %config.files.input_dir.display());
    let _guard = span.enter();
    Ok(extract(&config.files.input_dir)?)
}

// ============================================================================
// Stage 3: Transform
// ============================================================================

pub fn transform_stage(df: &DataFrame) -> Result<Transformed, EtlError> {
    Ok(transform(df)?)
}

// ============================================================================
// Stage 4: Integrity
// ============================================================================

/// Fails the run when any integrity check fails; nothing is loaded then.
pub fn integrity_stage(df: &DataFrame) -> Result<IntegrityReport, EtlError> {
    let span = info_span!("integrity", rows = df.height());
    let _guard = span.enter();
    let report = check_integrity(df);
    if !report.passed() {
        error!(%report, "Data integrity checks failed.");
        return Err(EtlError::IntegrityViolation { report });
    }
    Ok(report)
}

// ============================================================================
// Stage 5: Load
// ============================================================================

pub fn load_stage(store: &mut Store, df: &DataFrame) -> Result<usize, EtlError> {
    let span = info_span!("load", table = FACT_TABLE);
    let _guard = span.enter();
    let rows = store.append_frame(FACT_TABLE, df).map_err(EtlError::Load)?;
    info!(rows, "Data loaded successfully.");
    Ok(rows)
}

// ============================================================================
// Stage 6: Views
// ============================================================================

pub fn views_stage(
    store: &Store,
    config: &EtlConfig,
    options: RunOptions,
) -> Result<ViewReport, EtlError> {
    let span = info_span!("views", add_views = options.add_views);
    let _guard = span.enter();
    materialize_cumulative_view(store, &config.database.cumulative_view)
        .map_err(EtlError::Views)?;
    if !options.add_views {
        return Ok(ViewReport::default());
    }
    materialize_views(store, &config.database.views_dir, &ANALYTICAL_VIEWS).map_err(EtlError::Views)
}

//! Battle log extraction.
//!
//! This crate discovers the CSV exports of a tournament in one directory,
//! reads them into Polars DataFrames, and concatenates them into a single
//! dataset for the transform stage.
//!
//! # Features
//!
//! - **Discovery**: `.csv` files directly inside the input directory, sorted by name
//! - **CSV Loading**: every file read as String columns, headers cleaned
//! - **Concatenation**: column union across files, missing columns filled with nulls
//! - **Typing**: missing-value markers become nulls, numeric columns are inferred
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tourney_ingest::extract;
//!
//! let extracted = extract(Path::new("data/battles"))?;
//! println!("{} rows from {} files", extracted.frame.height(), extracted.files.len());
//! ```

mod combine;
mod csv;
mod discovery;
mod error;
mod extract;
mod polars_utils;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::read_csv_frame;

// === File Discovery ===
pub use discovery::list_csv_files;

// === Concatenation ===
pub use combine::{ColumnKind, concat_frames, infer_kind, normalize_columns, union_columns};

// === Extraction ===
pub use extract::{Extracted, extract};

// === Polars Helpers ===
pub use polars_utils::{
    any_to_f64, any_to_i64, any_to_opt_string, any_to_string, column_f64, column_i64,
    column_strings, format_numeric, parse_f64, parse_i64, set_f64_column, set_i64_column,
    set_string_column,
};

//! CSV file reading.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Reads a battle log CSV into a DataFrame with every column as String.
///
/// Typing is deferred until all files are combined, so a column that is
/// empty in one file cannot clash with its typed counterpart in another.
/// Header names are trimmed and stripped of a UTF-8 BOM.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    let parse_err = |e: polars::prelude::PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_err)?
        .finish()
        .map_err(parse_err)?;

    let cleaned: Vec<String> = df
        .get_column_names_str()
        .iter()
        .map(|name| normalize_header(name))
        .collect();
    df.set_column_names(cleaned).map_err(parse_err)?;

    if df.get_column_names_str().iter().any(|name| name.is_empty()) {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: "empty column name in header".to_string(),
        });
    }

    Ok(df)
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_start_matches('\u{feff}').trim().to_string()
}

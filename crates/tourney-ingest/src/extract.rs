//! Extraction stage: directory of CSV exports to one DataFrame.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tracing::{debug, info};

use crate::combine::{concat_frames, normalize_columns};
use crate::csv::read_csv_frame;
use crate::discovery::list_csv_files;
use crate::error::{IngestError, Result};

/// Combined battle logs plus the files they came from.
#[derive(Debug, Clone)]
pub struct Extracted {
    pub frame: DataFrame,
    pub files: Vec<PathBuf>,
}

/// Reads every CSV file in `dir` and concatenates them.
///
/// Rows keep their per-file order and files keep discovery order. Any file
/// that fails to parse aborts the whole extraction; an empty directory is
/// an error rather than an empty dataset.
pub fn extract(dir: &Path) -> Result<Extracted> {
    let files = list_csv_files(dir)?;
    if files.is_empty() {
        return Err(IngestError::NoCsvFiles {
            path: dir.to_path_buf(),
        });
    }

    let mut frames = Vec::with_capacity(files.len());
    for path in &files {
        let frame = read_csv_frame(path)?;
        debug!(
            path = %path.display(),
            rows = frame.height(),
            columns = frame.width(),
            "read battle log"
        );
        frames.push(frame);
    }

    let mut frame = concat_frames(&frames)?;
    normalize_columns(&mut frame)?;

    info!(
        files = files.len(),
        rows = frame.height(),
        columns = frame.width(),
        "Data extraction completed successfully."
    );
    Ok(Extracted { frame, files })
}

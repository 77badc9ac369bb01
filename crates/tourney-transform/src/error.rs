//! Error types for the transform stage.

use thiserror::Error;

/// Errors that abort a transform. No partial result is ever returned.
#[derive(Debug, Error)]
pub enum TransformError {
    /// An expected input column is absent from the dataset.
    #[error("required column '{column}' not found in dataset")]
    MissingColumn { column: String },

    /// A composite types field lists more labels than there are type slots.
    #[error("column '{column}' row {row} has {count} types in '{value}', at most 2 allowed")]
    TooManyTypes {
        column: String,
        row: usize,
        count: usize,
        value: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;

//! Library side of the `tourney-etl` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod summary;

pub use config::EtlConfig;
pub use error::EtlError;
pub use pipeline::{RunOptions, RunSummary, run};

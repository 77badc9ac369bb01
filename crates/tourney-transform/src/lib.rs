//! Cleanup and normalization of extracted battle logs.
//!
//! # Features
//!
//! - **Dedupe**: rows identical across every column are dropped, first kept
//! - **Sort**: stable order by `battle_id`, then `last_update_ts`
//! - **Backfill**: missing stats filled from later rows of the same battle
//! - **Types split**: `pokemonN_types` replaced by two capitalized type slots
//!
//! # Example
//!
//! ```ignore
//! use tourney_transform::transform;
//!
//! let transformed = transform(&extracted.frame)?;
//! println!("{} duplicates removed", transformed.stats.duplicates_removed);
//! ```

pub mod backfill;
pub mod dedupe;
mod error;
pub mod pipeline;
pub mod sort;
pub mod types;

pub use backfill::{backfill_by_group, backfill_columns};
pub use dedupe::drop_duplicate_rows;
pub use error::{Result, TransformError};
pub use pipeline::{TransformStats, Transformed, require_columns, transform};
pub use sort::sort_rows;
pub use types::{capitalize, split_all_types, split_type_field};

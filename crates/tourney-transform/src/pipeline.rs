//! Transform stage with explicit steps.
//!
//! The steps run in this order:
//! 1. **Dedupe**: drop rows identical across every column
//! 2. **Sort**: order by `battle_id`, then `last_update_ts`
//! 3. **Backfill**: fill missing stats from later rows of the same battle
//! 4. **Split**: turn each composite types field into two type slots

use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use tourney_model::{BATTLE_ID, Combatant, SORT_KEYS, transform_input_columns};

use crate::backfill::backfill_columns;
use crate::dedupe::drop_duplicate_rows;
use crate::error::{Result, TransformError};
use crate::sort::sort_rows;
use crate::types::split_all_types;

/// Row and cell counts gathered while transforming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub input_rows: usize,
    pub duplicates_removed: usize,
    pub cells_backfilled: usize,
    pub output_rows: usize,
}

/// Transformed dataset ready for the integrity check.
#[derive(Debug, Clone)]
pub struct Transformed {
    pub frame: DataFrame,
    pub stats: TransformStats,
}

/// Checks that every column the transform reads is present.
pub fn require_columns(df: &DataFrame) -> Result<()> {
    for name in transform_input_columns() {
        if df.column(name).is_err() {
            return Err(TransformError::MissingColumn {
                column: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Runs every transform step over the extracted dataset.
///
/// The input is left untouched; a failing step returns an error and no
/// partially transformed frame.
pub fn transform(df: &DataFrame) -> Result<Transformed> {
    let span = info_span!("transform", rows = df.height());
    let _guard = span.enter();

    require_columns(df)?;
    let mut stats = TransformStats {
        input_rows: df.height(),
        ..TransformStats::default()
    };

    let (deduped, removed) = drop_duplicate_rows(df)?;
    stats.duplicates_removed = removed;
    debug!(removed, "dropped duplicate rows");

    let mut frame = sort_rows(&deduped, &SORT_KEYS)?;

    for combatant in Combatant::ALL {
        let filled = backfill_columns(&mut frame, BATTLE_ID, &combatant.stat_columns())?;
        debug!(?combatant, filled, "backfilled stats");
        stats.cells_backfilled += filled;
    }

    split_all_types(&mut frame)?;
    stats.output_rows = frame.height();

    info!(
        input_rows = stats.input_rows,
        duplicates_removed = stats.duplicates_removed,
        cells_backfilled = stats.cells_backfilled,
        output_rows = stats.output_rows,
        "Data transformation completed successfully."
    );
    Ok(Transformed { frame, stats })
}

//! Removal of rows repeated across every column.

use std::collections::HashSet;

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use tourney_ingest::column_strings;

use crate::error::Result;

/// Drops rows identical to an earlier row across every column.
///
/// The first occurrence is kept and relative order is preserved. Nulls only
/// match nulls, never empty text. Returns the filtered frame and the number
/// of rows removed.
pub fn drop_duplicate_rows(df: &DataFrame) -> Result<(DataFrame, usize)> {
    if df.height() == 0 {
        return Ok((df.clone(), 0));
    }
    let columns: Vec<Vec<Option<String>>> = df
        .get_columns()
        .iter()
        .map(column_strings)
        .collect();

    let mut seen: HashSet<Vec<Option<String>>> = HashSet::with_capacity(df.height());
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let row: Vec<Option<String>> = columns.iter().map(|values| values[idx].clone()).collect();
        keep.push(seen.insert(row));
    }
    let removed = keep.iter().filter(|kept| !**kept).count();
    if removed == 0 {
        return Ok((df.clone(), 0));
    }
    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    Ok((df.filter(&mask)?, removed))
}

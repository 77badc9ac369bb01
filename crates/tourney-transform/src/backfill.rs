//! Backward fill of missing stats within each battle.

use std::collections::HashMap;

use polars::prelude::DataFrame;
use tourney_ingest::{
    column_f64, column_i64, column_strings, set_f64_column, set_i64_column, set_string_column,
};

use crate::error::{Result, TransformError};

/// Fills each null with the next non-null value later in the slice that
/// belongs to the same group.
///
/// Rows without a group key are neither filled nor used as a source.
/// Returns the number of cells filled.
pub fn backfill_by_group<T: Clone>(values: &mut [Option<T>], groups: &[Option<String>]) -> usize {
    let mut next: HashMap<&str, T> = HashMap::new();
    let mut filled = 0;
    for (value, group) in values.iter_mut().zip(groups).rev() {
        let Some(group) = group.as_deref() else {
            continue;
        };
        match value {
            Some(current) => {
                next.insert(group, current.clone());
            }
            None => {
                if let Some(later) = next.get(group) {
                    *value = Some(later.clone());
                    filled += 1;
                }
            }
        }
    }
    filled
}

/// Backfills `columns` within groups of `group_column`, keeping each
/// column's dtype family (integer, float, or text).
pub fn backfill_columns(df: &mut DataFrame, group_column: &str, columns: &[&str]) -> Result<usize> {
    let groups = column_strings(df.column(group_column).map_err(|_| {
        TransformError::MissingColumn {
            column: group_column.to_string(),
        }
    })?);

    let mut filled = 0;
    for name in columns {
        let column = df.column(name).map_err(|_| TransformError::MissingColumn {
            column: (*name).to_string(),
        })?;
        let dtype = column.dtype().clone();
        if dtype.is_integer() {
            let mut values = column_i64(column);
            filled += backfill_by_group(&mut values, &groups);
            set_i64_column(df, name, values)?;
        } else if dtype.is_float() {
            let mut values = column_f64(column);
            filled += backfill_by_group(&mut values, &groups);
            set_f64_column(df, name, values)?;
        } else {
            let mut values = column_strings(column);
            filled += backfill_by_group(&mut values, &groups);
            set_string_column(df, name, values)?;
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{DataType, IntoColumn, NamedFrom, Series};

    fn groups(keys: &[Option<&str>]) -> Vec<Option<String>> {
        keys.iter().map(|k| k.map(String::from)).collect()
    }

    #[test]
    fn fills_from_next_value_in_group() {
        let mut values = vec![None, None, Some(5), None];
        let keys = groups(&[Some("1"), Some("1"), Some("1"), Some("1")]);
        let filled = backfill_by_group(&mut values, &keys);
        assert_eq!(values, vec![Some(5), Some(5), Some(5), None]);
        assert_eq!(filled, 2);
    }

    #[test]
    fn never_crosses_groups() {
        let mut values = vec![None, Some(7), None, Some(9)];
        let keys = groups(&[Some("1"), Some("2"), Some("2"), Some("3")]);
        backfill_by_group(&mut values, &keys);
        assert_eq!(values, vec![None, Some(7), None, Some(9)]);
    }

    #[test]
    fn ungrouped_rows_are_left_alone() {
        let mut values = vec![None, Some(3), None];
        let keys = groups(&[None, None, Some("1")]);
        backfill_by_group(&mut values, &keys);
        assert_eq!(values, vec![None, Some(3), None]);
    }

    #[test]
    fn non_contiguous_group_members_still_fill() {
        let mut values = vec![None, Some(1), Some(2)];
        let keys = groups(&[Some("a"), Some("b"), Some("a")]);
        backfill_by_group(&mut values, &keys);
        assert_eq!(values, vec![Some(2), Some(1), Some(2)]);
    }

    #[test]
    fn backfill_columns_keeps_dtype() {
        let mut df = DataFrame::new(vec![
            Series::new("battle_id".into(), vec![1i64, 1, 2]).into_column(),
            Series::new("pokemon1_hp".into(), vec![None, Some(50i64), None]).into_column(),
            Series::new("pokemon1_speed".into(), vec![None, Some(1.5f64), Some(2.0)])
                .into_column(),
        ])
        .unwrap();

        let filled =
            backfill_columns(&mut df, "battle_id", &["pokemon1_hp", "pokemon1_speed"]).unwrap();
        assert_eq!(filled, 2);

        let hp = df.column("pokemon1_hp").unwrap();
        assert_eq!(hp.dtype(), &DataType::Int64);
        assert_eq!(column_i64(hp), vec![Some(50), Some(50), None]);
        let speed = df.column("pokemon1_speed").unwrap();
        assert_eq!(speed.dtype(), &DataType::Float64);
        assert_eq!(column_f64(speed), vec![Some(1.5), Some(1.5), Some(2.0)]);
    }
}

//! Stable multi-column row ordering.

use std::cmp::Ordering;

use polars::prelude::{AnyValue, Column, DataFrame, IdxCa, IdxSize};

use crate::error::{Result, TransformError};

/// Comparable form of one cell.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Integer(i64),
    Number(f64),
    Text(String),
    Missing,
}

impl SortKey {
    fn from_any(value: AnyValue<'_>) -> Self {
        match value {
            AnyValue::Null => Self::Missing,
            AnyValue::Int8(v) => Self::Integer(i64::from(v)),
            AnyValue::Int16(v) => Self::Integer(i64::from(v)),
            AnyValue::Int32(v) => Self::Integer(i64::from(v)),
            AnyValue::Int64(v) => Self::Integer(v),
            AnyValue::UInt8(v) => Self::Integer(i64::from(v)),
            AnyValue::UInt16(v) => Self::Integer(i64::from(v)),
            AnyValue::UInt32(v) => Self::Integer(i64::from(v)),
            AnyValue::UInt64(v) => match i64::try_from(v) {
                Ok(v) => Self::Integer(v),
                Err(_) => Self::Number(v as f64),
            },
            AnyValue::Float32(v) if v.is_nan() => Self::Missing,
            AnyValue::Float32(v) => Self::Number(f64::from(v)),
            AnyValue::Float64(v) if v.is_nan() => Self::Missing,
            AnyValue::Float64(v) => Self::Number(v),
            AnyValue::String(s) => Self::Text(s.to_string()),
            AnyValue::StringOwned(s) => Self::Text(s.to_string()),
            other => Self::Text(other.to_string()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Integer(_) | Self::Number(_) => 0,
            Self::Text(_) => 1,
            Self::Missing => 2,
        }
    }

    /// Numbers before text, nulls last.
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Integer(a), Self::Number(b)) => (*a as f64).total_cmp(b),
            (Self::Number(a), Self::Integer(b)) => a.total_cmp(&(*b as f64)),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

fn column_keys(column: &Column) -> Vec<SortKey> {
    (0..column.len())
        .map(|idx| SortKey::from_any(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

/// Stable ascending sort by several columns.
pub fn sort_rows(df: &DataFrame, by: &[&str]) -> Result<DataFrame> {
    let mut keys = Vec::with_capacity(by.len());
    for name in by {
        let column = df
            .column(name)
            .map_err(|_| TransformError::MissingColumn {
                column: (*name).to_string(),
            })?;
        keys.push(column_keys(column));
    }

    let mut order: Vec<usize> = (0..df.height()).collect();
    order.sort_by(|&a, &b| {
        keys.iter()
            .map(|column| column[a].compare(&column[b]))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });

    let indices: Vec<IdxSize> = order.into_iter().map(|idx| idx as IdxSize).collect();
    let indices = IdxCa::from_vec("order".into(), indices);
    Ok(df.take(&indices)?)
}

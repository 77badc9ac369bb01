//! Concatenation of per-file frames into one typed dataset.

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use tourney_model::is_null_token;

use crate::error::Result;
use crate::polars_utils::{column_strings, parse_f64, parse_i64};

/// Storage type chosen for a combined column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
}

/// Union of column names across frames, in first-seen order.
pub fn union_columns(frames: &[DataFrame]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for frame in frames {
        for name in frame.get_column_names_str() {
            if !columns.iter().any(|existing| existing == name) {
                columns.push(name.to_string());
            }
        }
    }
    columns
}

/// Reorders a frame to `columns`, filling absent ones with String nulls.
fn align_to(frame: &DataFrame, columns: &[String]) -> Result<DataFrame> {
    let height = frame.height();
    let aligned: Vec<Column> = columns
        .iter()
        .map(|name| match frame.column(name) {
            Ok(column) => column.clone(),
            Err(_) => Series::full_null(name.as_str().into(), height, &DataType::String)
                .into_column(),
        })
        .collect();
    Ok(DataFrame::new(aligned)?)
}

/// Stacks String frames vertically, keeping file order and row order.
pub fn concat_frames(frames: &[DataFrame]) -> Result<DataFrame> {
    let columns = union_columns(frames);
    let mut combined: Option<DataFrame> = None;
    for frame in frames {
        let aligned = align_to(frame, &columns)?;
        match combined.as_mut() {
            Some(existing) => {
                existing.vstack_mut(&aligned)?;
            }
            None => combined = Some(aligned),
        }
    }
    Ok(combined.unwrap_or_else(DataFrame::empty))
}

/// Picks the narrowest kind every non-null value fits into.
pub fn infer_kind(values: &[Option<String>]) -> ColumnKind {
    let mut seen = false;
    let mut all_int = true;
    let mut all_float = true;
    for value in values.iter().flatten() {
        seen = true;
        if all_int && parse_i64(value).is_none() {
            all_int = false;
        }
        if parse_f64(value).is_none() {
            all_float = false;
            break;
        }
    }
    match (seen, all_int, all_float) {
        (false, _, _) => ColumnKind::Text,
        (true, true, _) => ColumnKind::Integer,
        (true, false, true) => ColumnKind::Float,
        _ => ColumnKind::Text,
    }
}

/// Converts missing-value markers to nulls and types each column.
pub fn normalize_columns(df: &mut DataFrame) -> Result<()> {
    let names: Vec<String> = df
        .get_column_names_str()
        .iter()
        .map(|name| (*name).to_string())
        .collect();
    for name in names {
        let values: Vec<Option<String>> = column_strings(df.column(&name)?)
            .into_iter()
            .map(|value| value.filter(|text| !is_null_token(text)))
            .collect();
        let series = match infer_kind(&values) {
            ColumnKind::Integer => {
                let parsed: Vec<Option<i64>> = values
                    .iter()
                    .map(|value| value.as_deref().and_then(parse_i64))
                    .collect();
                Series::new(name.as_str().into(), parsed)
            }
            ColumnKind::Float => {
                let parsed: Vec<Option<f64>> = values
                    .iter()
                    .map(|value| value.as_deref().and_then(parse_f64))
                    .collect();
                Series::new(name.as_str().into(), parsed)
            }
            ColumnKind::Text => Series::new(name.as_str().into(), values),
        };
        df.with_column(series)?;
    }
    Ok(())
}

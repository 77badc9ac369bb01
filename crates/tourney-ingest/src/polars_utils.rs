//! Polars AnyValue and column helpers shared by the pipeline stages.

use polars::prelude::{AnyValue, Column, DataFrame, NamedFrom, PolarsResult, Series};

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null, properly formats numeric types.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Converts AnyValue to String, keeping nulls distinct from empty text.
pub fn any_to_opt_string(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        other => Some(any_to_string(other)),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Converts an AnyValue to f64, returning None for non-numeric or null values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Converts an AnyValue to i64, returning None for non-integer or null values.
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(&s),
        _ => None,
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<i64>().ok()
}

/// Reads every cell of a column as optional text.
pub fn column_strings(column: &Column) -> Vec<Option<String>> {
    (0..column.len())
        .map(|idx| any_to_opt_string(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

/// Reads every cell of a column as optional i64.
pub fn column_i64(column: &Column) -> Vec<Option<i64>> {
    (0..column.len())
        .map(|idx| any_to_i64(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

/// Reads every cell of a column as optional f64.
pub fn column_f64(column: &Column) -> Vec<Option<f64>> {
    (0..column.len())
        .map(|idx| any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

/// Replaces (or appends) a String column.
pub fn set_string_column(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<String>>,
) -> PolarsResult<()> {
    df.with_column(Series::new(name.into(), values))?;
    Ok(())
}

/// Replaces (or appends) an Int64 column.
pub fn set_i64_column(df: &mut DataFrame, name: &str, values: Vec<Option<i64>>) -> PolarsResult<()> {
    df.with_column(Series::new(name.into(), values))?;
    Ok(())
}

/// Replaces (or appends) a Float64 column.
pub fn set_f64_column(df: &mut DataFrame, name: &str, values: Vec<Option<f64>>) -> PolarsResult<()> {
    df.with_column(Series::new(name.into(), values))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_to_string_formats_numbers() {
        assert_eq!(any_to_string(AnyValue::Int64(7)), "7");
        assert_eq!(any_to_string(AnyValue::Float64(50.0)), "50");
        assert_eq!(any_to_string(AnyValue::Float64(1.25)), "1.25");
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_opt_string(AnyValue::Null), None);
        assert_eq!(
            any_to_opt_string(AnyValue::String("")),
            Some(String::new())
        );
    }

    #[test]
    fn format_numeric_keeps_integer_zeros() {
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(2.50), "2.5");
    }

    #[test]
    fn numeric_conversions() {
        assert_eq!(any_to_i64(AnyValue::String(" 42 ")), Some(42));
        assert_eq!(any_to_i64(AnyValue::String("4.2")), None);
        assert_eq!(any_to_f64(AnyValue::String("4.2")), Some(4.2));
        assert_eq!(any_to_f64(AnyValue::Boolean(true)), None);
    }

    #[test]
    fn column_round_trip_through_setters() {
        let mut df = DataFrame::new(vec![
            Series::new("a".into(), vec![Some(1i64), None]).into(),
        ])
        .unwrap();
        set_string_column(&mut df, "b", vec![Some("x".to_string()), None]).unwrap();
        assert_eq!(
            column_strings(df.column("b").unwrap()),
            vec![Some("x".to_string()), None]
        );
        assert_eq!(column_i64(df.column("a").unwrap()), vec![Some(1), None]);
        assert_eq!(column_f64(df.column("a").unwrap()), vec![Some(1.0), None]);
    }
}

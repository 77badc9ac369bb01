//! Mapping between polars frames and SQLite tables.

use polars::prelude::{AnyValue, DataFrame, DataType};
use rusqlite::types::Value;
use tourney_ingest::any_to_string;

/// Quotes an identifier for use in generated SQL.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// SQLite column affinity for a polars dtype.
pub fn sql_type(dtype: &DataType) -> &'static str {
    if dtype.is_integer() || matches!(dtype, DataType::Boolean) {
        "INTEGER"
    } else if dtype.is_float() {
        "REAL"
    } else {
        "TEXT"
    }
}

/// `CREATE TABLE IF NOT EXISTS` statement matching the frame's columns.
pub fn create_table_sql(table: &str, df: &DataFrame) -> String {
    let columns: Vec<String> = df
        .get_columns()
        .iter()
        .map(|column| {
            format!(
                "{} {}",
                quote_ident(column.name().as_str()),
                sql_type(column.dtype())
            )
        })
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quote_ident(table),
        columns.join(", ")
    )
}

/// Parameterized `INSERT` for every column of the frame.
pub fn insert_sql(table: &str, df: &DataFrame) -> String {
    let names = df.get_column_names_str();
    let columns: Vec<String> = names.iter().map(|name| quote_ident(name)).collect();
    let placeholders: Vec<String> = (1..=names.len()).map(|idx| format!("?{idx}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_ident(table),
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Converts one cell to a bindable SQLite value.
pub fn sql_value(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(v) => Value::Integer(i64::from(v)),
        AnyValue::Int8(v) => Value::Integer(i64::from(v)),
        AnyValue::Int16(v) => Value::Integer(i64::from(v)),
        AnyValue::Int32(v) => Value::Integer(i64::from(v)),
        AnyValue::Int64(v) => Value::Integer(v),
        AnyValue::UInt8(v) => Value::Integer(i64::from(v)),
        AnyValue::UInt16(v) => Value::Integer(i64::from(v)),
        AnyValue::UInt32(v) => Value::Integer(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => Value::Integer(v),
            Err(_) => Value::Text(v.to_string()),
        },
        AnyValue::Float32(v) if v.is_nan() => Value::Null,
        AnyValue::Float32(v) => Value::Real(f64::from(v)),
        AnyValue::Float64(v) if v.is_nan() => Value::Null,
        AnyValue::Float64(v) => Value::Real(v),
        AnyValue::String(s) => Value::Text(s.to_string()),
        AnyValue::StringOwned(s) => Value::Text(s.to_string()),
        other => Value::Text(any_to_string(other)),
    }
}

/// Bindable values of one row, in column order.
pub fn row_values(df: &DataFrame, idx: usize) -> Vec<Value> {
    df.get_columns()
        .iter()
        .map(|column| sql_value(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

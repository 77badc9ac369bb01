//! Composite types field split into two capitalized slots.

use polars::prelude::{DataFrame, NamedFrom, Series};
use tourney_ingest::column_strings;
use tourney_model::Combatant;

use crate::error::{Result, TransformError};

/// Delimiter between labels in a composite types field.
pub const TYPES_DELIMITER: char = ',';

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn normalize_label(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(capitalize(trimmed))
    }
}

/// Splits one composite types value into the two type slots.
///
/// Returns the number of labels found when there are more than two.
pub fn split_type_field(raw: &str) -> std::result::Result<[Option<String>; 2], usize> {
    let labels: Vec<&str> = raw.split(TYPES_DELIMITER).collect();
    match labels.as_slice() {
        [single] => Ok([normalize_label(single), None]),
        [first, second] => Ok([normalize_label(first), normalize_label(second)]),
        _ => Err(labels.len()),
    }
}

/// The two slot columns computed for one combatant.
#[derive(Debug, Clone)]
pub struct TypeSlots {
    pub combatant: Combatant,
    pub first: Vec<Option<String>>,
    pub second: Vec<Option<String>>,
}

/// Splits a combatant's types column without touching the frame.
pub fn split_types_column(df: &DataFrame, combatant: Combatant) -> Result<TypeSlots> {
    let name = combatant.types_column();
    let column = df.column(name).map_err(|_| TransformError::MissingColumn {
        column: name.to_string(),
    })?;

    let values = column_strings(column);
    let mut first = Vec::with_capacity(values.len());
    let mut second = Vec::with_capacity(values.len());
    for (row, value) in values.into_iter().enumerate() {
        let Some(raw) = value else {
            first.push(None);
            second.push(None);
            continue;
        };
        let [a, b] = split_type_field(&raw).map_err(|count| TransformError::TooManyTypes {
            column: name.to_string(),
            row,
            count,
            value: raw.clone(),
        })?;
        first.push(a);
        second.push(b);
    }
    Ok(TypeSlots {
        combatant,
        first,
        second,
    })
}

/// Replaces each combatant's composite types column with its two slots.
///
/// Every combatant is split before the frame is modified, so a rejected
/// value leaves `df` untouched. Slot columns are appended after the
/// remaining columns.
pub fn split_all_types(df: &mut DataFrame) -> Result<()> {
    let slots = Combatant::ALL
        .iter()
        .map(|combatant| split_types_column(df, *combatant))
        .collect::<Result<Vec<_>>>()?;

    for slot in &slots {
        df.drop_in_place(slot.combatant.types_column())?;
    }
    for slot in slots {
        let [first_name, second_name] = slot.combatant.type_slot_columns();
        df.with_column(Series::new(first_name.into(), slot.first))?;
        df.with_column(Series::new(second_name.into(), slot.second))?;
    }
    Ok(())
}

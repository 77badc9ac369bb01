//! Column names of the battle log and the derived fact table.
//!
//! Raw CSV exports carry one row per observed battle state. Identifiers and
//! timestamps are kept as-is, per-combatant stats may be partially missing,
//! and each combatant's types arrive as a comma-joined composite field.

/// Battle identifier. Groups observations of the same battle.
pub const BATTLE_ID: &str = "battle_id";
/// First trainer identifier.
pub const TRAINER1_ID: &str = "trainer1_id";
/// Second trainer identifier.
pub const TRAINER2_ID: &str = "trainer2_id";
/// Battle lifecycle state (e.g. "Completed", "InProgress").
pub const BATTLE_STATUS: &str = "battle_status";
/// Winning trainer; only required once the battle is completed.
pub const WINNER_TRAINER_ID: &str = "winner_trainer_id";
/// Observation timestamp, orders rows within a battle.
pub const LAST_UPDATE_TS: &str = "last_update_ts";

/// Status value that requires a winner.
pub const STATUS_COMPLETED: &str = "Completed";

/// Identifier columns that must never be null in a loadable dataset.
pub const REQUIRED_IDENTIFIERS: [&str; 3] = [BATTLE_ID, TRAINER1_ID, TRAINER2_ID];

/// Sort key used before backfilling stats.
pub const SORT_KEYS: [&str; 2] = [BATTLE_ID, LAST_UPDATE_TS];

/// One combatant slot in a battle record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Combatant {
    First,
    Second,
}

impl Combatant {
    pub const ALL: [Combatant; 2] = [Combatant::First, Combatant::Second];

    /// Stat columns for this combatant, in source order.
    #[must_use]
    pub const fn stat_columns(self) -> [&'static str; 4] {
        match self {
            Self::First => [
                "pokemon1_hp",
                "pokemon1_attack",
                "pokemon1_defense",
                "pokemon1_speed",
            ],
            Self::Second => [
                "pokemon2_hp",
                "pokemon2_attack",
                "pokemon2_defense",
                "pokemon2_speed",
            ],
        }
    }

    /// Composite comma-joined types column consumed by the split.
    #[must_use]
    pub const fn types_column(self) -> &'static str {
        match self {
            Self::First => "pokemon1_types",
            Self::Second => "pokemon2_types",
        }
    }

    /// The two type slots produced from [`Self::types_column`].
    #[must_use]
    pub const fn type_slot_columns(self) -> [&'static str; 2] {
        match self {
            Self::First => ["pokemon1_type1", "pokemon1_type2"],
            Self::Second => ["pokemon2_type1", "pokemon2_type2"],
        }
    }
}

/// Columns the transformer needs to find in the extracted dataset.
#[must_use]
pub fn transform_input_columns() -> Vec<&'static str> {
    let mut columns = vec![BATTLE_ID, LAST_UPDATE_TS];
    for combatant in Combatant::ALL {
        columns.extend(combatant.stat_columns());
        columns.push(combatant.types_column());
    }
    columns
}

/// Cell texts treated as missing when reading CSV exports.
pub const NULL_TOKENS: [&str; 11] = [
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "NULL", "null", "None", "<NA>", "#N/A",
];

/// Returns true when the raw cell text denotes a missing value.
#[must_use]
pub fn is_null_token(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || NULL_TOKENS.contains(&trimmed)
}

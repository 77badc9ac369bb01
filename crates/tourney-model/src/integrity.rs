use std::fmt;

use serde::{Deserialize, Serialize};

/// The dataset-level invariants checked before any load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityCheck {
    /// `battle_id`, `trainer1_id` and `trainer2_id` are never null.
    NullIdentifiers,
    /// Every completed battle names a winner.
    CompletedWithoutWinner,
}

impl IntegrityCheck {
    /// Message logged when the check fails.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NullIdentifiers => "Null values found in battle_id, trainer1_id, or trainer2_id.",
            Self::CompletedWithoutWinner => "Completed matches without winner_trainer_id found.",
        }
    }
}

impl fmt::Display for IntegrityCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NullIdentifiers => "null_identifiers",
            Self::CompletedWithoutWinner => "completed_without_winner",
        };
        f.write_str(label)
    }
}

/// A failed integrity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityViolation {
    pub check: IntegrityCheck,
    /// Offending rows (rows with at least one null identifier for
    /// [`IntegrityCheck::NullIdentifiers`]).
    pub rows: usize,
    /// Columns involved in the failure.
    pub columns: Vec<String>,
}

/// Outcome of running every integrity check over one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub rows_checked: usize,
    pub violations: Vec<IntegrityViolation>,
}

impl IntegrityReport {
    /// True when no check failed.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn failed(&self, check: IntegrityCheck) -> bool {
        self.violations.iter().any(|v| v.check == check)
    }
}

impl fmt::Display for IntegrityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "all checks passed over {} rows", self.rows_checked);
        }
        for (idx, violation) in self.violations.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{} ({} rows)", violation.check, violation.rows)?;
        }
        Ok(())
    }
}

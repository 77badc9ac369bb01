//! Integrity checks over a transformed battle dataset.
//!
//! Both checks always run. The caller decides what a failed report means;
//! the pipeline refuses to load anything unless [`IntegrityReport::passed`].

use polars::prelude::DataFrame;
use tracing::{error, info};

use tourney_ingest::column_strings;
use tourney_model::{
    BATTLE_STATUS, IntegrityCheck, IntegrityReport, IntegrityViolation, REQUIRED_IDENTIFIERS,
    STATUS_COMPLETED, WINNER_TRAINER_ID,
};

/// Cell values of `name`, or all nulls when the column is absent.
fn values_or_nulls(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    match df.column(name) {
        Ok(column) => column_strings(column),
        Err(_) => vec![None; df.height()],
    }
}

/// Rows where any required identifier is null.
fn null_identifier_violation(df: &DataFrame) -> Option<IntegrityViolation> {
    let columns: Vec<(&str, Vec<Option<String>>)> = REQUIRED_IDENTIFIERS
        .iter()
        .map(|name| (*name, values_or_nulls(df, name)))
        .collect();

    let rows = (0..df.height())
        .filter(|idx| columns.iter().any(|(_, values)| values[*idx].is_none()))
        .count();
    if rows == 0 {
        return None;
    }
    let offending = columns
        .iter()
        .filter(|(_, values)| values.iter().any(Option::is_none))
        .map(|(name, _)| (*name).to_string())
        .collect();
    Some(IntegrityViolation {
        check: IntegrityCheck::NullIdentifiers,
        rows,
        columns: offending,
    })
}

/// Completed battles without a winner.
fn missing_winner_violation(df: &DataFrame) -> Option<IntegrityViolation> {
    let status = values_or_nulls(df, BATTLE_STATUS);
    let winner = values_or_nulls(df, WINNER_TRAINER_ID);

    let rows = status
        .iter()
        .zip(&winner)
        .filter(|(status, winner)| status.as_deref() == Some(STATUS_COMPLETED) && winner.is_none())
        .count();
    (rows > 0).then(|| IntegrityViolation {
        check: IntegrityCheck::CompletedWithoutWinner,
        rows,
        columns: vec![BATTLE_STATUS.to_string(), WINNER_TRAINER_ID.to_string()],
    })
}

/// Runs every integrity check over `df`.
///
/// Each failed check is logged at error level with its own message.
pub fn check_integrity(df: &DataFrame) -> IntegrityReport {
    let violations: Vec<IntegrityViolation> = [
        null_identifier_violation(df),
        missing_winner_violation(df),
    ]
    .into_iter()
    .flatten()
    .collect();

    for violation in &violations {
        error!(
            check = %violation.check,
            rows = violation.rows,
            columns = ?violation.columns,
            "{}",
            violation.check.message()
        );
    }

    let report = IntegrityReport {
        rows_checked: df.height(),
        violations,
    };
    if report.passed() {
        info!(rows = report.rows_checked, "Data integrity checks passed.");
    }
    report
}

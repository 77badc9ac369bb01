//! Shared types for the tournament battle ETL.

pub mod integrity;
pub mod schema;
pub mod store;

pub use integrity::{IntegrityCheck, IntegrityReport, IntegrityViolation};
pub use schema::{
    BATTLE_ID, BATTLE_STATUS, Combatant, LAST_UPDATE_TS, NULL_TOKENS, REQUIRED_IDENTIFIERS,
    SORT_KEYS, STATUS_COMPLETED, TRAINER1_ID, TRAINER2_ID, WINNER_TRAINER_ID, is_null_token,
    transform_input_columns,
};
pub use store::{ANALYTICAL_VIEWS, CUMULATIVE_VIEW, FACT_TABLE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrity_report_display() {
        let report = IntegrityReport {
            rows_checked: 4,
            violations: vec![
                IntegrityViolation {
                    check: IntegrityCheck::NullIdentifiers,
                    rows: 1,
                    columns: vec![TRAINER2_ID.to_string()],
                },
                IntegrityViolation {
                    check: IntegrityCheck::CompletedWithoutWinner,
                    rows: 2,
                    columns: vec![BATTLE_STATUS.to_string(), WINNER_TRAINER_ID.to_string()],
                },
            ],
        };
        assert!(!report.passed());
        assert!(report.failed(IntegrityCheck::CompletedWithoutWinner));
        assert_eq!(
            report.to_string(),
            "null_identifiers (1 rows); completed_without_winner (2 rows)"
        );
    }

    #[test]
    fn empty_report_passes() {
        let report = IntegrityReport {
            rows_checked: 10,
            violations: Vec::new(),
        };
        assert!(report.passed());
        assert_eq!(report.to_string(), "all checks passed over 10 rows");
    }
}

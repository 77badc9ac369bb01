//! End-to-end runs against temporary directories.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use tourney_cli::config::{DatabaseSettings, FileSettings, LoggingSettings};
use tourney_cli::{EtlConfig, EtlError, RunOptions, run};
use tourney_model::{FACT_TABLE, IntegrityCheck};
use tourney_store::Store;

const HEADER: &str = "battle_id,trainer1_id,trainer2_id,battle_status,winner_trainer_id,last_update_ts,\
pokemon1_hp,pokemon1_attack,pokemon1_defense,pokemon1_speed,pokemon1_types,\
pokemon2_hp,pokemon2_attack,pokemon2_defense,pokemon2_speed,pokemon2_types";

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS fact_tournament_battles (
    battle_id INTEGER NOT NULL,
    trainer1_id TEXT NOT NULL,
    trainer2_id TEXT NOT NULL,
    battle_status TEXT,
    winner_trainer_id TEXT,
    last_update_ts TEXT,
    pokemon1_hp INTEGER,
    pokemon1_attack INTEGER,
    pokemon1_defense INTEGER,
    pokemon1_speed INTEGER,
    pokemon2_hp INTEGER,
    pokemon2_attack INTEGER,
    pokemon2_defense INTEGER,
    pokemon2_speed INTEGER,
    pokemon1_type1 TEXT,
    pokemon1_type2 TEXT,
    pokemon2_type1 TEXT,
    pokemon2_type2 TEXT
);";

const CUMULATIVE: &str = "DROP VIEW IF EXISTS cumulative_battle_stats;
CREATE VIEW cumulative_battle_stats AS
SELECT trainer1_id, COUNT(DISTINCT battle_id) AS battles
FROM fact_tournament_battles GROUP BY trainer1_id;";

struct Workspace {
    dir: TempDir,
    config: EtlConfig,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("battles")).unwrap();
        fs::create_dir_all(root.join("sql/views")).unwrap();
        fs::write(root.join("sql/schema.sql"), SCHEMA).unwrap();
        fs::write(root.join("sql/cumulative.sql"), CUMULATIVE).unwrap();

        let config = EtlConfig {
            logging: LoggingSettings::default(),
            database: DatabaseSettings {
                db_path: root.join("db/tournament.db"),
                fact_table_schema: root.join("sql/schema.sql"),
                cumulative_view: root.join("sql/cumulative.sql"),
                views_dir: root.join("sql/views"),
            },
            files: FileSettings {
                input_dir: root.join("battles"),
            },
        };
        Self { dir, config }
    }

    fn write_csv(&self, name: &str, rows: &[&str]) {
        let mut content = format!("{HEADER}\n");
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        fs::write(self.dir.path().join("battles").join(name), content).unwrap();
    }

    fn write_view(&self, name: &str, body: &str) {
        fs::write(
            self.dir.path().join("sql/views").join(format!("{name}.sql")),
            body,
        )
        .unwrap();
    }

    fn store(&self) -> Store {
        Store::open(&self.config.database.db_path).unwrap()
    }
}

fn query_text(store: &Store, sql: &str) -> Option<String> {
    store
        .connection()
        .query_row(sql, [], |row| row.get::<_, Option<String>>(0))
        .unwrap()
}

fn seed_valid_battles(ws: &Workspace) {
    ws.write_csv(
        "a.csv",
        &[
            "1,T1,T2,InProgress,,2024-05-01 10:00:00,,55,40,90,\"Fire,Flying\",60,50,45,70,Water",
            "1,T1,T2,Completed,T1,2024-05-01 10:05:00,50,55,40,90,\"Fire,Flying\",0,50,45,70,Water",
        ],
    );
    ws.write_csv(
        "b.csv",
        &[
            "2,T3,T4,Completed,T4,2024-05-02 09:00:00,80,60,60,60,grass,70,70,70,70,\"Rock, ground\"",
            "1,T1,T2,InProgress,,2024-05-01 10:00:00,,55,40,90,\"Fire,Flying\",60,50,45,70,Water",
        ],
    );
}

#[test]
fn run_loads_cleaned_battles() {
    let ws = Workspace::new();
    seed_valid_battles(&ws);

    let summary = run(&ws.config, RunOptions::default()).unwrap();
    assert_eq!(summary.files.len(), 2);
    assert_eq!(summary.rows_extracted, 4);
    assert_eq!(summary.transform.duplicates_removed, 1);
    assert_eq!(summary.transform.cells_backfilled, 1);
    assert_eq!(summary.rows_loaded, 3);
    assert_eq!(summary.fact_rows, 3);
    assert!(summary.integrity.passed());
    assert!(summary.views.created.is_empty());

    let store = ws.store();
    assert_eq!(store.row_count(FACT_TABLE).unwrap(), 3);
    let hp: i64 = store
        .connection()
        .query_row(
            "SELECT pokemon1_hp FROM fact_tournament_battles
             WHERE battle_id = 1 AND last_update_ts = '2024-05-01 10:00:00'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(hp, 50);
    assert_eq!(
        query_text(
            &store,
            "SELECT pokemon1_type2 FROM fact_tournament_battles WHERE battle_id = 1 LIMIT 1"
        ),
        Some("Flying".to_string())
    );
    assert_eq!(
        query_text(
            &store,
            "SELECT pokemon2_type2 FROM fact_tournament_battles WHERE battle_id = 2"
        ),
        Some("Ground".to_string())
    );
    assert_eq!(
        query_text(
            &store,
            "SELECT pokemon1_type2 FROM fact_tournament_battles WHERE battle_id = 2"
        ),
        None
    );
    assert!(store.view_exists("cumulative_battle_stats").unwrap());
}

#[test]
fn repeated_runs_append() {
    let ws = Workspace::new();
    seed_valid_battles(&ws);

    run(&ws.config, RunOptions::default()).unwrap();
    let second = run(&ws.config, RunOptions::default()).unwrap();
    assert_eq!(second.rows_loaded, 3);
    assert_eq!(second.fact_rows, 6);
}

#[test]
fn completed_battle_without_winner_aborts_before_load() {
    let ws = Workspace::new();
    ws.write_csv(
        "a.csv",
        &["3,T1,T2,Completed,,2024-05-03 12:00:00,10,10,10,10,ice,10,10,10,10,fire"],
    );

    let err = run(&ws.config, RunOptions::default()).unwrap_err();
    match err {
        EtlError::IntegrityViolation { report } => {
            assert!(report.failed(IntegrityCheck::CompletedWithoutWinner));
            assert!(!report.failed(IntegrityCheck::NullIdentifiers));
        }
        other => panic!("expected integrity violation, got {other}"),
    }
    assert_eq!(ws.store().row_count(FACT_TABLE).unwrap(), 0);
}

#[test]
fn add_views_creates_available_views() {
    let ws = Workspace::new();
    seed_valid_battles(&ws);
    ws.write_view(
        "trainer_performance",
        "SELECT winner_trainer_id, COUNT(*) AS wins FROM fact_tournament_battles
         WHERE battle_status = 'Completed' GROUP BY winner_trainer_id;",
    );

    let summary = run(&ws.config, RunOptions { add_views: true }).unwrap();
    assert_eq!(summary.views.created, vec!["trainer_performance"]);
    assert_eq!(summary.views.skipped.len(), 3);
    assert!(ws.store().view_exists("trainer_performance").unwrap());
}

#[test]
fn missing_input_directory_is_an_extraction_error() {
    let ws = Workspace::new();
    fs::remove_dir_all(ws.dir.path().join("battles")).unwrap();

    let err = run(&ws.config, RunOptions::default()).unwrap_err();
    assert!(matches!(err, EtlError::Extraction(_)));
}

#[test]
fn missing_schema_script_fails_before_extract() {
    let mut ws = Workspace::new();
    seed_valid_battles(&ws);
    ws.config.database.fact_table_schema = Path::new("/nonexistent/schema.sql").to_path_buf();

    let err = run(&ws.config, RunOptions::default()).unwrap_err();
    assert!(matches!(err, EtlError::Schema(_)));
}

#[test]
fn three_types_is_a_transformation_error() {
    let ws = Workspace::new();
    ws.write_csv(
        "a.csv",
        &["4,T1,T2,InProgress,,2024-05-04 08:00:00,1,1,1,1,\"fire,water,grass\",1,1,1,1,ice"],
    );

    let err = run(&ws.config, RunOptions::default()).unwrap_err();
    assert!(matches!(err, EtlError::Transformation(_)));
    assert_eq!(ws.store().row_count(FACT_TABLE).unwrap(), 0);
}

#[test]
fn counting_fact_rows_after_views_is_a_store_error() {
    let ws = Workspace::new();
    seed_valid_battles(&ws);
    fs::write(
        ws.dir.path().join("sql/cumulative.sql"),
        "DROP TABLE fact_tournament_battles;",
    )
    .unwrap();

    let err = run(&ws.config, RunOptions::default()).unwrap_err();
    assert!(matches!(err, EtlError::Store(_)), "got {err}");
}

#[test]
fn bundled_config_and_scripts_work_together() {
    let repo = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let bundled = EtlConfig::load(&repo.join("config.toml")).unwrap();
    assert_eq!(bundled.logging.log_file, Path::new("logs/etl.log"));

    let mut ws = Workspace::new();
    seed_valid_battles(&ws);
    ws.config.database.fact_table_schema = repo.join(&bundled.database.fact_table_schema);
    ws.config.database.cumulative_view = repo.join(&bundled.database.cumulative_view);
    ws.config.database.views_dir = repo.join(&bundled.database.views_dir);

    let summary = run(&ws.config, RunOptions { add_views: true }).unwrap();
    assert_eq!(summary.views.created.len(), 4);
    assert!(summary.views.skipped.is_empty());

    let store = ws.store();
    let wins: i64 = store
        .connection()
        .query_row(
            "SELECT wins FROM cumulative_battle_stats WHERE trainer_id = 'T1'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(wins, 1);
}

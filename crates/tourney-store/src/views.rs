//! Derived views over the fact table, defined by external SQL scripts.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::{Result, StoreError};
use crate::store::{Store, read_script};

/// Views created or skipped by one materialization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewReport {
    pub created: Vec<String>,
    pub skipped: Vec<String>,
}

/// Replaces view `name` with the query in `body`.
pub fn replace_view_sql(name: &str, body: &str) -> String {
    format!("DROP VIEW IF EXISTS {name}; CREATE VIEW {name} AS {body}")
}

/// Location of a named view's script inside `views_dir`.
pub fn view_script_path(views_dir: &Path, name: &str) -> PathBuf {
    views_dir.join(format!("{name}.sql"))
}

/// Runs the cumulative statistics script as-is. A missing script is an error.
pub fn materialize_cumulative_view(store: &Store, script: &Path) -> Result<()> {
    store.execute_script_file(script)?;
    info!(script = %script.display(), "Cumulative battle stats view created successfully.");
    Ok(())
}

/// Creates each named view from `<views_dir>/<name>.sql`.
///
/// A view whose script is missing is logged and skipped; any other failure
/// stops the pass.
pub fn materialize_views(store: &Store, views_dir: &Path, names: &[&str]) -> Result<ViewReport> {
    let mut report = ViewReport::default();
    for name in names {
        let path = view_script_path(views_dir, name);
        let body = match read_script(&path) {
            Ok(body) => body,
            Err(StoreError::ScriptMissing { .. }) => {
                error!(view = name, path = %path.display(), "SQL script for {name} not found.");
                report.skipped.push((*name).to_string());
                continue;
            }
            Err(err) => return Err(err),
        };
        store.execute_script(&replace_view_sql(name, &body))?;
        report.created.push((*name).to_string());
    }
    info!(
        created = report.created.len(),
        skipped = report.skipped.len(),
        "Additional views created successfully."
    );
    Ok(report)
}

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::frame::{create_table_sql, insert_sql, quote_ident, row_values};

/// One SQLite connection held for a whole run.
///
/// Dropping the store releases the connection; [`Store::close`] does the same
/// and reports close failures.
#[derive(Debug)]
pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    /// Opens (or creates) the store file, creating its parent directory.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened store");
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Opens a private in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn, path: None })
    }

    /// Store file path, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Executes a multi-statement script. Each statement commits on completion.
    pub fn execute_script(&self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Reads a script from disk and executes it.
    pub fn execute_script_file(&self, path: &Path) -> Result<()> {
        let sql = read_script(path)?;
        self.execute_script(&sql)?;
        debug!(script = %path.display(), "executed script");
        Ok(())
    }

    pub fn table_exists(&self, table: &str) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![table],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn view_exists(&self, view: &str) -> Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'view' AND name = ?1",
                params![view],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    /// Appends every row of `df` to `table` in one transaction.
    ///
    /// A missing table is created from the frame's dtypes. Existing rows are
    /// kept. On any failure nothing is written. Returns the rows inserted.
    pub fn append_frame(&mut self, table: &str, df: &DataFrame) -> Result<usize> {
        if df.width() == 0 {
            return Ok(0);
        }
        let tx = self.conn.transaction()?;
        tx.execute_batch(&create_table_sql(table, df))?;
        {
            let mut stmt = tx.prepare(&insert_sql(table, df))?;
            for idx in 0..df.height() {
                stmt.execute(params_from_iter(row_values(df, idx)))?;
            }
        }
        tx.commit()?;
        info!(table, rows = df.height(), "appended rows");
        Ok(df.height())
    }

    pub fn row_count(&self, table: &str) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", quote_ident(table));
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Closes the connection.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| StoreError::Close(err))
    }
}

/// Reads a SQL script, distinguishing a missing file from other read errors.
pub fn read_script(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            StoreError::ScriptMissing {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::ScriptRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

//! SQLite store for the battle fact table and its derived views.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tourney_store::Store;
//!
//! let mut store = Store::open(Path::new("data/tournament.db"))?;
//! store.execute_script_file(Path::new("sql/fact_tournament_battles.sql"))?;
//! let rows = store.append_frame("fact_tournament_battles", &frame)?;
//! store.close()?;
//! ```

mod error;
pub mod frame;
mod store;
pub mod views;

pub use error::{Result, StoreError};
pub use frame::{create_table_sql, insert_sql, quote_ident, sql_type, sql_value};
pub use store::{Store, read_script};
pub use views::{
    ViewReport, materialize_cumulative_view, materialize_views, replace_view_sql,
    view_script_path,
};

//! SQLite database executor
//!
//! Concrete engine boundary using rusqlite. One connection per process,
//! opened once at startup and owned here until exit; every statement runs
//! synchronously on the caller's thread.

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::Connection;

use crate::db::grid::{ResultGrid, ShapeError};
use crate::error::{DbError, DbResult};

/// Fixed catalog query listing user tables, in catalog order.
pub const LIST_TABLES_SQL: &str = "SELECT name FROM sqlite_master WHERE type='table'";

impl From<ShapeError> for DbError {
    fn from(err: ShapeError) -> Self {
        DbError::QueryFailed(err.to_string())
    }
}

/// The process-wide SQLite connection.
///
/// Dropping the handle closes the connection; there is exactly one owner,
/// so close happens exactly once.
#[derive(Debug)]
pub struct SqliteDb {
    conn: Connection,
}

impl SqliteDb {
    /// Open a database file.
    ///
    /// # Errors
    /// Returns [`DbError::OpenFailed`] carrying the path and the engine's
    /// diagnostic text.
    pub fn open(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::OpenFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used by tests and scratch sessions).
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| DbError::OpenFailed {
            path: ":memory:".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { conn })
    }

    /// Execute one SQL statement and materialize the full result.
    ///
    /// The statement always runs to completion first, so DML/DDL side
    /// effects land even when the result shape is then rejected. The raw
    /// engine rows never escape this function: they are converted to owned
    /// text cells and wrapped into a [`ResultGrid`] before returning.
    ///
    /// # Errors
    /// Returns [`DbError::QueryFailed`] with the engine diagnostic on
    /// execution failure, or with the shape diagnostic when the column
    /// count falls outside the displayable range.
    pub fn execute_query(&self, sql: &str) -> DbResult<ResultGrid> {
        let map_err = |e: rusqlite::Error| DbError::QueryFailed(e.to_string());

        let mut stmt = self.conn.prepare(sql).map_err(map_err)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();
        let col_count = columns.len();

        let mut grid_rows: Vec<Vec<Option<String>>> = Vec::new();
        let mut rows = stmt.query([]).map_err(map_err)?;
        while let Some(row) = rows.next().map_err(map_err)? {
            let mut cells = Vec::with_capacity(col_count);
            for i in 0..col_count {
                cells.push(cell_text(row.get_ref(i).map_err(map_err)?));
            }
            grid_rows.push(cells);
        }

        Ok(ResultGrid::new(columns, grid_rows)?)
    }

    /// List user table names via the fixed catalog query.
    ///
    /// # Errors
    /// Propagates the executor's [`DbError::QueryFailed`].
    pub fn list_tables(&self) -> DbResult<Vec<String>> {
        let grid = self.execute_query(LIST_TABLES_SQL)?;
        Ok(grid
            .rows()
            .map(|row| row[0].clone().unwrap_or_default())
            .collect())
    }
}

/// Convert one engine value to its display text, `None` for SQL NULL.
fn cell_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) => Some(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Some(format!("<blob {} bytes>", b.len())),
    }
}

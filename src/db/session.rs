//! Query session state
//!
//! Owns the "current" query text plus the single live result and error for
//! one view, and implements the replace-on-success / retain-on-failure rule
//! shared by the free-SQL view and the table browser.

use crate::db::grid::ResultGrid;
use crate::db::sqlite::SqliteDb;
use crate::error::DbResult;

/// A source of executable SQL.
///
/// Two implementors exist: [`QuerySession`] hands over its text verbatim,
/// and [`TableBrowser`](crate::db::catalog::TableBrowser) derives its text
/// from catalog state. Both terminate in the same executor call through
/// [`ResultSlot::run`].
pub trait QuerySource {
    /// SQL to execute next, or `None` when the source has nothing runnable.
    fn current_sql(&self) -> Option<String>;
}

/// Holder for one view's live result and last error.
///
/// At most one [`ResultGrid`] is alive per slot. On success the old grid is
/// released as the new one is installed; on failure the old grid stays
/// displayed next to the fresh error text.
#[derive(Debug, Default)]
pub struct ResultSlot {
    result: Option<ResultGrid>,
    error: Option<String>,
}

impl ResultSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a query outcome into the slot.
    ///
    /// Success replaces the previous result (dropping its storage) and
    /// clears the error. Failure records the error and deliberately leaves
    /// the previous result untouched: a good table is not discarded just
    /// because a subsequent edit is broken.
    pub fn absorb(&mut self, outcome: DbResult<ResultGrid>) {
        match outcome {
            Ok(grid) => {
                self.result = Some(grid);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }

    /// Execute `sql` and absorb the outcome.
    pub fn run(&mut self, db: &SqliteDb, sql: &str) {
        self.absorb(db.execute_query(sql));
    }

    /// The live result, if any
    pub fn result(&self) -> Option<&ResultGrid> {
        self.result.as_ref()
    }

    /// The last error, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether any run has ever completed through this slot
    pub fn has_run(&self) -> bool {
        self.result.is_some() || self.error.is_some()
    }
}

/// The free-SQL query session: active text plus its result slot.
///
/// Starts Idle (nothing has run, no result, no error); `run` is the only
/// transition and the session lives as long as the connection.
#[derive(Debug, Default)]
pub struct QuerySession {
    query_text: String,
    slot: ResultSlot,
}

impl QuerySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with initial query text.
    pub fn with_query(text: impl Into<String>) -> Self {
        Self {
            query_text: text.into(),
            slot: ResultSlot::new(),
        }
    }

    /// Record the active query text. Pure state update, no execution.
    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
    }

    /// The active query text
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    /// Execute the active query text, blocking until the engine returns.
    ///
    /// Blank text is not runnable and leaves the session untouched.
    pub fn run(&mut self, db: &SqliteDb) {
        if let Some(sql) = self.current_sql() {
            self.slot.run(db, &sql);
        }
    }

    /// The live result for display
    pub fn current_result(&self) -> Option<&ResultGrid> {
        self.slot.result()
    }

    /// The last error for display
    pub fn current_error(&self) -> Option<&str> {
        self.slot.error()
    }

    /// False until the first `run` completes
    pub fn has_run(&self) -> bool {
        self.slot.has_run()
    }

    /// Borrow the slot for rendering
    pub fn slot(&self) -> &ResultSlot {
        &self.slot
    }
}

impl QuerySource for QuerySession {
    fn current_sql(&self) -> Option<String> {
        let trimmed = self.query_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(self.query_text.clone())
        }
    }
}

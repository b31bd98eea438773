//! Table catalog browser
//!
//! Alternate entry point next to the free-SQL session: enumerate tables
//! from the catalog, pick one plus a filter clause, and feed the derived
//! query through the same executor. Keeps its own result/error state,
//! fully separate from the free-SQL session's.

use crate::db::grid::ResultGrid;
use crate::db::session::{QuerySource, ResultSlot};
use crate::db::sqlite::SqliteDb;
use crate::error::DbResult;

/// Tautology substituted for an empty filter at composition time.
pub const DEFAULT_FILTER: &str = "1=1";

/// Catalog browse state: table list, selection, filter, result slot.
///
/// The filter is a trusted raw SQL fragment interpolated verbatim into the
/// derived query; no escaping is performed.
#[derive(Debug, Default)]
pub struct TableBrowser {
    tables: Vec<String>,
    selected: usize,
    filter: String,
    slot: ResultSlot,
}

impl TableBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetch the table list from the catalog.
    ///
    /// Called every time the browse view is (re)entered: tables may have
    /// changed via DDL run from the other view, so there is no caching. A
    /// previously stored selection that fell off the end is clamped back
    /// into range.
    ///
    /// # Errors
    /// Propagates the executor's [`DbError::QueryFailed`](crate::error::DbError).
    pub fn refresh(&mut self, db: &SqliteDb) -> DbResult<()> {
        self.tables = db.list_tables()?;
        self.selected = clamp_index(self.selected, self.tables.len());
        Ok(())
    }

    /// Table names as last fetched, in catalog order
    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    /// Index of the selected table (0 when the list is empty)
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Name of the selected table, if any
    pub fn selected_table(&self) -> Option<&str> {
        self.tables.get(self.selected).map(String::as_str)
    }

    /// Select a table by index, clamping out-of-range values into
    /// `[0, len-1]` (0 when the list is empty).
    pub fn select(&mut self, index: usize) {
        self.selected = clamp_index(index, self.tables.len());
    }

    /// Move the selection down one entry
    pub fn select_next(&mut self) {
        self.select(self.selected.saturating_add(1));
    }

    /// Move the selection up one entry
    pub fn select_prev(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    /// Set the filter clause verbatim. Normalization to [`DEFAULT_FILTER`]
    /// happens at composition time only, so the raw text stays recoverable
    /// for re-editing.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    /// The raw filter text
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Build the derived browse query, or `None` when no table is selected.
    pub fn compose_query(&self) -> Option<String> {
        let table = self.selected_table()?;
        let filter = match self.filter.trim() {
            "" => DEFAULT_FILTER,
            _ => self.filter.as_str(),
        };
        Some(format!("SELECT * FROM {} WHERE {}", table, filter))
    }

    /// Compose and run the derived query, blocking until the engine
    /// returns. A no-op when the table list is empty.
    pub fn browse(&mut self, db: &SqliteDb) {
        if let Some(sql) = self.current_sql() {
            self.slot.run(db, &sql);
        }
    }

    /// The live browse result for display
    pub fn current_result(&self) -> Option<&ResultGrid> {
        self.slot.result()
    }

    /// The last browse error for display
    pub fn current_error(&self) -> Option<&str> {
        self.slot.error()
    }

    /// Borrow the slot for rendering
    pub fn slot(&self) -> &ResultSlot {
        &self.slot
    }
}

impl QuerySource for TableBrowser {
    fn current_sql(&self) -> Option<String> {
        self.compose_query()
    }
}

/// Clamp an index into `[0, len-1]`, or 0 for an empty list.
fn clamp_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_db() -> SqliteDb {
        let db = SqliteDb::open_in_memory().unwrap();
        let _ = db.execute_query("CREATE TABLE person(name TEXT, age INTEGER)");
        let _ = db.execute_query("INSERT INTO person VALUES ('Ann', 30), ('Bo', NULL)");
        let _ = db.execute_query("CREATE TABLE pet(name TEXT)");
        db
    }

    #[test]
    fn test_refresh_lists_tables() {
        let db = seeded_db();
        let mut browser = TableBrowser::new();
        browser.refresh(&db).unwrap();
        assert_eq!(browser.tables(), &["person", "pet"]);
        assert_eq!(browser.selected(), 0);
    }

    #[test]
    fn test_select_clamps_out_of_range() {
        let db = seeded_db();
        let mut browser = TableBrowser::new();
        browser.refresh(&db).unwrap();

        browser.select(10);
        assert_eq!(browser.selected(), 1); // last valid index

        browser.select(1);
        assert_eq!(browser.selected_table(), Some("pet"));
    }

    #[test]
    fn test_select_on_empty_list_stays_zero() {
        let mut browser = TableBrowser::new();
        browser.select(5);
        assert_eq!(browser.selected(), 0);
        assert!(browser.selected_table().is_none());
        assert!(browser.compose_query().is_none());
    }

    #[test]
    fn test_refresh_clamps_stale_selection() {
        let db = seeded_db();
        let mut browser = TableBrowser::new();
        browser.refresh(&db).unwrap();
        browser.select(1);

        let _ = db.execute_query("DROP TABLE pet");
        browser.refresh(&db).unwrap();
        assert_eq!(browser.tables(), &["person"]);
        assert_eq!(browser.selected(), 0);
    }

    #[test]
    fn test_refresh_observes_ddl_from_other_view() {
        let db = seeded_db();
        let mut browser = TableBrowser::new();
        browser.refresh(&db).unwrap();
        assert_eq!(browser.tables().len(), 2);

        let _ = db.execute_query("CREATE TABLE extra(x)");
        browser.refresh(&db).unwrap();
        assert_eq!(browser.tables().len(), 3);
    }

    #[test]
    fn test_empty_filter_normalizes_to_tautology() {
        let db = seeded_db();
        let mut browser = TableBrowser::new();
        browser.refresh(&db).unwrap();

        assert_eq!(
            browser.compose_query().unwrap(),
            "SELECT * FROM person WHERE 1=1"
        );

        browser.set_filter("1=1");
        assert_eq!(
            browser.compose_query().unwrap(),
            "SELECT * FROM person WHERE 1=1"
        );
    }

    #[test]
    fn test_filter_text_is_interpolated_verbatim() {
        let db = seeded_db();
        let mut browser = TableBrowser::new();
        browser.refresh(&db).unwrap();
        browser.set_filter("age > 20 ORDER BY name");
        assert_eq!(
            browser.compose_query().unwrap(),
            "SELECT * FROM person WHERE age > 20 ORDER BY name"
        );
        assert_eq!(browser.filter(), "age > 20 ORDER BY name");
    }

    #[test]
    fn test_browse_runs_derived_query() {
        let db = seeded_db();
        let mut browser = TableBrowser::new();
        browser.refresh(&db).unwrap();
        browser.set_filter("age > 20");
        browser.browse(&db);

        let grid = browser.current_result().unwrap();
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.cell(0, 0), Some(Some("Ann")));
        assert!(browser.current_error().is_none());
    }

    #[test]
    fn test_browse_failure_retains_previous_result() {
        let db = seeded_db();
        let mut browser = TableBrowser::new();
        browser.refresh(&db).unwrap();
        browser.browse(&db);
        assert_eq!(browser.current_result().unwrap().row_count(), 2);

        browser.set_filter("no_such_column = 1");
        browser.browse(&db);
        assert_eq!(browser.current_result().unwrap().row_count(), 2);
        assert!(browser.current_error().is_some());
    }

    #[test]
    fn test_browser_state_is_separate_from_session() {
        use crate::db::session::QuerySession;

        let db = seeded_db();
        let mut session = QuerySession::with_query("SELEC broken");
        session.run(&db);

        let mut browser = TableBrowser::new();
        browser.refresh(&db).unwrap();
        browser.browse(&db);

        assert!(session.current_error().is_some());
        assert!(session.current_result().is_none());
        assert!(browser.current_error().is_none());
        assert!(browser.current_result().is_some());
    }

    #[test]
    fn test_browse_on_empty_database_is_noop() {
        let db = SqliteDb::open_in_memory().unwrap();
        let mut browser = TableBrowser::new();
        browser.refresh(&db).unwrap();
        browser.browse(&db);
        assert!(browser.current_result().is_none());
        assert!(browser.current_error().is_none());
    }
}

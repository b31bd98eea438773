//! Integration tests
//!
//! Exercise the public library API end to end against real database files
//! (in-memory and on-disk via tempfile).

mod common;

use vizlite::db::{QuerySession, SqliteDb, TableBrowser};
use vizlite::display::{GridDisplay, NULL_MARKER};
use vizlite::error::DbError;

use common::seed_person_table;

#[test]
fn end_to_end_person_scenario() {
    let db = SqliteDb::open_in_memory().unwrap();
    seed_person_table(&db);

    let grid = db.execute_query("SELECT * FROM person").unwrap();
    assert_eq!(grid.column_names(), &["name".to_string(), "age".to_string()]);
    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.cell(0, 0), Some(Some("Ann")));
    assert_eq!(grid.cell(1, 1), Some(None)); // Bo's age is NULL
}

#[test]
fn on_disk_database_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("people.db");

    {
        let db = SqliteDb::open(&path).unwrap();
        seed_person_table(&db);
    } // connection closed here, exactly once

    let db = SqliteDb::open(&path).unwrap();
    let grid = db.execute_query("SELECT name FROM person ORDER BY name").unwrap();
    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.cell(0, 0), Some(Some("Ann")));
}

#[test]
fn open_failure_reports_path_and_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    // A directory is not a database file; opening it must fail.
    let err = SqliteDb::open(dir.path()).unwrap_err();
    match err {
        DbError::OpenFailed { ref path, ref message } => {
            assert_eq!(path, &dir.path().display().to_string());
            assert!(!message.is_empty());
        }
        other => panic!("expected OpenFailed, got {:?}", other),
    }
}

#[test]
fn session_lifecycle_against_disk_database() {
    let dir = tempfile::tempdir().unwrap();
    let db = SqliteDb::open(&dir.path().join("s.db")).unwrap();
    seed_person_table(&db);

    let mut session = QuerySession::with_query("SELECT * FROM person");
    session.run(&db);
    assert_eq!(session.current_result().unwrap().row_count(), 2);

    // A broken edit keeps the good table on screen.
    session.set_query_text("SELECT * FROM nope");
    session.run(&db);
    assert_eq!(session.current_result().unwrap().row_count(), 2);
    assert!(session.current_error().is_some());

    // A fixed query replaces it and clears the error.
    session.set_query_text("SELECT name FROM person WHERE age IS NULL");
    session.run(&db);
    let grid = session.current_result().unwrap();
    assert_eq!(grid.row_count(), 1);
    assert_eq!(grid.cell(0, 0), Some(Some("Bo")));
    assert!(session.current_error().is_none());
}

#[test]
fn browser_composes_and_runs_derived_query() {
    let db = SqliteDb::open_in_memory().unwrap();
    seed_person_table(&db);

    let mut browser = TableBrowser::new();
    browser.refresh(&db).unwrap();
    assert_eq!(browser.tables(), &["person"]);

    browser.set_filter("name = 'Ann'");
    assert_eq!(
        browser.compose_query().unwrap(),
        "SELECT * FROM person WHERE name = 'Ann'"
    );

    browser.browse(&db);
    let grid = browser.current_result().unwrap();
    assert_eq!(grid.row_count(), 1);
    assert_eq!(grid.cell(0, 1), Some(Some("30")));
}

#[test]
fn null_and_empty_render_distinguishably() {
    let db = SqliteDb::open_in_memory().unwrap();
    let grid = db.execute_query("SELECT '' AS empty, NULL AS missing").unwrap();

    let display = GridDisplay::new(&grid);
    let cells: Vec<_> = display.cells().collect();
    assert_eq!(cells.len(), 2);
    assert!(!cells[0].is_null);
    assert_eq!(cells[0].text, "");
    assert!(cells[1].is_null);
    assert_eq!(cells[1].text, NULL_MARKER);
}

#[test]
fn shape_bound_holds_at_the_api_boundary() {
    let db = SqliteDb::open_in_memory().unwrap();
    seed_person_table(&db);

    // 0 columns: DML runs but yields a shape failure, never a grid.
    let mut session = QuerySession::with_query("DELETE FROM person WHERE name = 'Ann'");
    session.run(&db);
    assert!(session.current_result().is_none());
    assert!(session
        .current_error()
        .unwrap()
        .contains("unsupported column count"));

    // ...and the delete happened.
    session.set_query_text("SELECT * FROM person");
    session.run(&db);
    assert_eq!(session.current_result().unwrap().row_count(), 1);
}

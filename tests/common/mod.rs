//! Common test utilities and helpers
//!
//! Shared fixtures for integration tests.

use vizlite::db::SqliteDb;

/// Seed the canonical two-row person table.
///
/// DDL/DML statements produce no result columns, so the executor reports
/// the shape as an error even though the statements take effect.
pub fn seed_person_table(db: &SqliteDb) {
    let _ = db.execute_query("CREATE TABLE person(name TEXT, age INTEGER)");
    let _ = db.execute_query("INSERT INTO person VALUES ('Ann', 30), ('Bo', NULL)");
}

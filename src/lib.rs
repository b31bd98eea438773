//! vizlite - A fast, keyboard-driven SQLite browser for the terminal
//!
//! vizlite opens a local SQLite database file and lets you type SQL, run
//! it, and walk the result as a table, or pick a table from the catalog
//! and browse it with a raw WHERE filter.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`db`]: the query-result lifecycle core: immutable result grid,
//!   SQLite executor, free-SQL session, and table catalog browser
//! - [`display`]: adapter walking a result grid into renderable cells
//! - [`ui`]: terminal user interface components
//! - [`config`]: application settings
//! - [`error`]: error types and result aliases
//! - [`app`]: application state and event handling
//!
//! # Example
//!
//! ```no_run
//! use vizlite::db::{QuerySession, SqliteDb};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = SqliteDb::open(std::path::Path::new("example.db"))?;
//!
//! let mut session = QuerySession::with_query("SELECT * FROM person");
//! session.run(&db);
//! if let Some(grid) = session.current_result() {
//!     println!("Got {} rows", grid.row_count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod ui;

pub use error::{ConfigError, DbError, Result, VizliteError};

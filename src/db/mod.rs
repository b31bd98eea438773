//! Database layer
//!
//! The query-result lifecycle core: the immutable result grid, the SQLite
//! executor, and the two query entry points (free-SQL session and table
//! catalog browser) that share it.

pub mod catalog;
pub mod grid;
pub mod session;
pub mod sqlite;

// Re-export main types
pub use catalog::TableBrowser;
pub use grid::{ResultGrid, ShapeError, MAX_GRID_COLUMNS};
pub use session::{QuerySession, QuerySource, ResultSlot};
pub use sqlite::SqliteDb;

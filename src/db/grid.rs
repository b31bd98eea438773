//! Immutable query result grid
//!
//! One query execution produces one [`ResultGrid`]: column names plus a
//! rectangular grid of nullable text cells. Constructed atomically from a
//! successful execution, never mutated afterwards, and dropped as a whole
//! when its owner replaces it.

/// Widest result the viewer will display. Wider results are rejected
/// before a grid is ever constructed.
pub const MAX_GRID_COLUMNS: usize = 64;

/// Shape violations caught at grid construction time.
///
/// Never reaches a session directly: the executor converts it into
/// [`DbError::QueryFailed`](crate::error::DbError) before returning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// Column count outside `1..=MAX_GRID_COLUMNS`
    #[error("unsupported column count: rows={rows} cols={cols}")]
    ColumnCount { rows: usize, cols: usize },

    /// A row with a cell count different from the header
    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
}

/// An immutable, rectangular grid of nullable text cells.
///
/// `None` cells are SQL NULL; `Some("")` is an empty string. The two are
/// distinct all the way through to rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGrid {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl ResultGrid {
    /// Build a grid from column names and row-ordered cells, validating the
    /// column-count bound and row rectangularity.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Result<Self, ShapeError> {
        let cols = columns.len();
        if cols < 1 || cols > MAX_GRID_COLUMNS {
            return Err(ShapeError::ColumnCount {
                rows: rows.len(),
                cols,
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ShapeError::RaggedRow {
                    row: i,
                    got: row.len(),
                    expected: cols,
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Number of columns (always in `1..=MAX_GRID_COLUMNS`)
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Name of column `i`, if in range
    pub fn column_name(&self, i: usize) -> Option<&str> {
        self.columns.get(i).map(String::as_str)
    }

    /// All column names, in order
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Cell at (row, col): `None` out of range, `Some(None)` for SQL NULL
    pub fn cell(&self, row: usize, col: usize) -> Option<Option<&str>> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|c| c.as_deref())
    }

    /// Row `i` as a cell slice, if in range
    pub fn row(&self, i: usize) -> Option<&[Option<String>]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// Iterate rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[Option<String>]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("c{}", i)).collect()
    }

    #[test]
    fn test_rejects_zero_columns() {
        let err = ResultGrid::new(vec![], vec![]).unwrap_err();
        assert_eq!(err, ShapeError::ColumnCount { rows: 0, cols: 0 });
        assert_eq!(err.to_string(), "unsupported column count: rows=0 cols=0");
    }

    #[test]
    fn test_accepts_one_column() {
        let grid = ResultGrid::new(names(1), vec![vec![Some("x".into())]]).unwrap();
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.row_count(), 1);
    }

    #[test]
    fn test_accepts_max_columns() {
        let grid = ResultGrid::new(names(MAX_GRID_COLUMNS), vec![]).unwrap();
        assert_eq!(grid.column_count(), 64);
    }

    #[test]
    fn test_rejects_over_max_columns() {
        let err = ResultGrid::new(names(MAX_GRID_COLUMNS + 1), vec![]).unwrap_err();
        assert_eq!(err, ShapeError::ColumnCount { rows: 0, cols: 65 });
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let rows = vec![
            vec![Some("a".into()), Some("b".into())],
            vec![Some("only-one".into())],
        ];
        let err = ResultGrid::new(names(2), rows).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RaggedRow {
                row: 1,
                got: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_cell_accessors() {
        let rows = vec![
            vec![Some("Ann".into()), Some("30".into())],
            vec![Some("Bo".into()), None],
        ];
        let grid = ResultGrid::new(vec!["name".into(), "age".into()], rows).unwrap();

        assert_eq!(grid.column_name(0), Some("name"));
        assert_eq!(grid.column_name(2), None);
        assert_eq!(grid.cell(0, 0), Some(Some("Ann")));
        assert_eq!(grid.cell(1, 1), Some(None)); // SQL NULL
        assert_eq!(grid.cell(2, 0), None); // out of range
        assert_eq!(grid.cell(0, 5), None);
    }

    #[test]
    fn test_null_and_empty_string_are_distinct() {
        let rows = vec![vec![Some(String::new()), None]];
        let grid = ResultGrid::new(names(2), rows).unwrap();
        assert_eq!(grid.cell(0, 0), Some(Some("")));
        assert_eq!(grid.cell(0, 1), Some(None));
        assert_ne!(grid.cell(0, 0), grid.cell(0, 1));
    }

    #[test]
    fn test_rows_iterator_is_ordered() {
        let rows = vec![vec![Some("1".into())], vec![Some("2".into())]];
        let grid = ResultGrid::new(names(1), rows).unwrap();
        let collected: Vec<_> = grid.rows().collect();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0][0].as_deref(), Some("1"));
        assert_eq!(collected[1][0].as_deref(), Some("2"));
    }
}

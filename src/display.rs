//! Display adapter
//!
//! Deterministic, side-effect-free walk of a [`ResultGrid`] into a header
//! sequence plus row-major `(is_null, text)` cells for the rendering layer.
//! The grid is immutable, so re-walking it always yields the same output.

use crate::db::grid::ResultGrid;

/// Marker rendered for SQL NULL cells. Never the empty string, so NULL and
/// `''` stay visually distinguishable.
pub const NULL_MARKER: &str = "<NULL>";

/// One renderable cell: the text to draw plus whether it stands in for NULL
/// (so the renderer can style it differently).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayCell<'a> {
    pub is_null: bool,
    pub text: &'a str,
}

impl<'a> DisplayCell<'a> {
    fn from_value(value: Option<&'a str>) -> Self {
        match value {
            Some(text) => Self {
                is_null: false,
                text,
            },
            None => Self {
                is_null: true,
                text: NULL_MARKER,
            },
        }
    }
}

/// Lazy, restartable walk over a borrowed grid.
#[derive(Debug, Clone, Copy)]
pub struct GridDisplay<'a> {
    grid: &'a ResultGrid,
}

impl<'a> GridDisplay<'a> {
    pub fn new(grid: &'a ResultGrid) -> Self {
        Self { grid }
    }

    /// Header cells, one per column
    pub fn header(&self) -> impl Iterator<Item = &'a str> {
        self.grid.column_names().iter().map(String::as_str)
    }

    /// Cells of row `i`, in column order
    pub fn row(&self, i: usize) -> impl Iterator<Item = DisplayCell<'a>> {
        self.grid
            .row(i)
            .unwrap_or(&[])
            .iter()
            .map(|cell| DisplayCell::from_value(cell.as_deref()))
    }

    /// All body cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = DisplayCell<'a>> + '_ {
        self.grid
            .rows()
            .flat_map(|row| row.iter().map(|cell| DisplayCell::from_value(cell.as_deref())))
    }
}

//! Panel layout management
//!
//! Pure geometry: splits the terminal area into the panel rectangles for
//! each view. Blocks and borders are drawn by `render`.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Free-SQL view: tab bar, editor, results, status line
pub struct QueryLayout {
    pub tabs: Rect,
    pub editor: Rect,
    pub results: Rect,
    pub status: Rect,
}

/// Browse view: tab bar, table list + filter on the left, results, status
pub struct BrowseLayout {
    pub tabs: Rect,
    pub filter: Rect,
    pub tables: Rect,
    pub results: Rect,
    pub status: Rect,
}

pub fn query_layout(area: Rect) -> QueryLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(8),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    QueryLayout {
        tabs: rows[0],
        editor: rows[1],
        results: rows[2],
        status: rows[3],
    }
}

pub fn browse_layout(area: Rect) -> BrowseLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(20)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(main[0]);

    BrowseLayout {
        tabs: rows[0],
        filter: left[0],
        tables: left[1],
        results: main[1],
        status: rows[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_layout_covers_height() {
        let area = Rect::new(0, 0, 100, 40);
        let l = query_layout(area);
        assert_eq!(l.tabs.height, 1);
        assert_eq!(l.status.height, 1);
        assert_eq!(
            l.tabs.height + l.editor.height + l.results.height + l.status.height,
            40
        );
    }

    #[test]
    fn test_browse_layout_splits_columns() {
        let area = Rect::new(0, 0, 100, 40);
        let l = browse_layout(area);
        assert_eq!(l.tables.width, 30);
        assert_eq!(l.results.width, 70);
        assert_eq!(l.filter.width, 30);
    }
}

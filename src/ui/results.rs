//! Query results viewer widget
//!
//! Displays one view's result slot as a scrollable table with cell-level
//! selection. The grid itself is owned by the session/browser; this widget
//! holds only view state and borrows the slot at render time.
//!
//! When the slot carries an error, the error banner renders above the
//! still-displayed previous result: a good table is not hidden just because
//! the latest edit failed.

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::db::grid::ResultGrid;
use crate::db::session::ResultSlot;
use crate::display::GridDisplay;
use crate::ui::theme::Theme;

/// Results table viewer
pub struct ResultsViewer {
    selected_row: usize,
    selected_col: usize,
    scroll_offset: usize,
    h_scroll_offset: usize,
    /// Cap on rendered column width, from settings
    max_column_width: u16,
}

impl ResultsViewer {
    pub fn new(max_column_width: u16) -> Self {
        Self {
            selected_row: 0,
            selected_col: 0,
            scroll_offset: 0,
            h_scroll_offset: 0,
            max_column_width: max_column_width.max(4),
        }
    }

    /// Reset selection and scroll; called after a new result is installed.
    pub fn reset(&mut self) {
        self.selected_row = 0;
        self.selected_col = 0;
        self.scroll_offset = 0;
        self.h_scroll_offset = 0;
    }

    /// Selected (row, col)
    pub fn selected(&self) -> (usize, usize) {
        (self.selected_row, self.selected_col)
    }

    pub fn move_up(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
        }
    }

    pub fn move_down(&mut self, row_count: usize) {
        if row_count > 0 && self.selected_row < row_count - 1 {
            self.selected_row += 1;
        }
    }

    pub fn move_left(&mut self) {
        if self.selected_col > 0 {
            self.selected_col -= 1;
        }
    }

    pub fn move_right(&mut self, col_count: usize) {
        if self.selected_col < col_count.saturating_sub(1) {
            self.selected_col += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(20);
    }

    pub fn page_down(&mut self, row_count: usize) {
        self.selected_row = (self.selected_row + 20).min(row_count.saturating_sub(1));
    }

    pub fn go_to_top(&mut self) {
        self.selected_row = 0;
    }

    pub fn go_to_bottom(&mut self, row_count: usize) {
        self.selected_row = row_count.saturating_sub(1);
    }

    pub fn go_to_home(&mut self) {
        self.selected_col = 0;
        self.h_scroll_offset = 0;
    }

    pub fn go_to_end(&mut self, col_count: usize) {
        self.selected_col = col_count.saturating_sub(1);
    }

    /// Render the slot's error banner and/or grid into `area`.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        focused: bool,
        theme: &Theme,
        slot: &ResultSlot,
    ) {
        if area.height == 0 || area.width < 5 {
            return;
        }

        let mut body = area;
        if let Some(error) = slot.error() {
            let wanted = error.lines().count() as u16 + 1;
            let banner_h = wanted.min(area.height / 2).max(1).min(area.height);
            let banner = Rect::new(area.x, area.y, area.width, banner_h);
            let lines: Vec<Line> = std::iter::once(Line::from(Span::styled(
                "Query Error",
                theme.results_error_title,
            )))
            .chain(
                error
                    .lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), theme.results_error_text))),
            )
            .collect();
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), banner);

            body = Rect::new(
                area.x,
                area.y + banner_h,
                area.width,
                area.height - banner_h,
            );
        }

        match slot.result() {
            Some(grid) => self.render_grid(frame, body, focused, theme, grid),
            None if slot.error().is_none() => {
                let msg = "No results yet. Run a query to see rows here.";
                frame.render_widget(Paragraph::new(msg).style(theme.results_empty), body);
            }
            None => {}
        }
    }

    fn render_grid(
        &self,
        frame: &mut Frame,
        area: Rect,
        focused: bool,
        theme: &Theme,
        grid: &ResultGrid,
    ) {
        if area.height < 2 {
            return;
        }

        let display = GridDisplay::new(grid);
        let col_widths = compute_column_widths(grid, self.max_column_width);
        let row_count = grid.row_count();
        let col_count = grid.column_count();

        // Selection may be stale after a smaller result replaced a bigger
        // one; clamp for drawing only.
        let selected_row = self.selected_row.min(row_count.saturating_sub(1));
        let selected_col = self.selected_col.min(col_count.saturating_sub(1));

        let visible_height = (area.height as usize).saturating_sub(2); // header + footer

        // Ensure selected row is visible
        let scroll_offset = if selected_row < self.scroll_offset {
            selected_row
        } else if visible_height > 0 && selected_row >= self.scroll_offset + visible_height {
            selected_row - visible_height + 1
        } else {
            self.scroll_offset
        };

        // Auto-adjust horizontal scroll to keep the selected column visible
        let h_scroll = {
            let mut hs = self.h_scroll_offset.min(col_count.saturating_sub(1));
            if selected_col < hs {
                hs = selected_col;
            } else {
                let mut x: u16 = 0;
                let mut visible = false;
                for ci in hs..col_widths.len() {
                    let w = col_widths[ci];
                    if ci == selected_col {
                        visible = x + w <= area.width;
                        break;
                    }
                    x += w + 1;
                    if x >= area.width {
                        break;
                    }
                }
                if !visible {
                    let mut new_hs = selected_col;
                    let mut total: u16 = col_widths.get(selected_col).copied().unwrap_or(10);
                    while new_hs > 0 {
                        let prev_w = col_widths[new_hs - 1];
                        if total + prev_w + 1 > area.width {
                            break;
                        }
                        total += prev_w + 1;
                        new_hs -= 1;
                    }
                    hs = new_hs;
                }
            }
            hs
        };

        // Header row
        let header_y = area.y;
        let mut x = area.x;
        for (col_idx, name) in display.header().enumerate().skip(h_scroll) {
            if x >= area.x + area.width {
                break;
            }
            let w = col_widths[col_idx].min(area.x + area.width - x);
            let style = if focused && col_idx == selected_col {
                theme.results_header_selected
            } else {
                theme.results_header
            };
            let padded = pad_to_width(name, w as usize);
            frame.render_widget(
                Paragraph::new(padded).style(style),
                Rect::new(x, header_y, w, 1),
            );
            x += w + 1; // +1 for column separator
        }

        // Body rows
        for vis_row in 0..visible_height {
            let row_idx = scroll_offset + vis_row;
            if row_idx >= row_count {
                break;
            }
            let y = area.y + 1 + vis_row as u16;

            let is_selected_row = row_idx == selected_row;
            let row_base_style = if vis_row % 2 == 0 {
                theme.results_row_even
            } else {
                theme.results_row_odd
            };

            let mut x = area.x;
            for (col_idx, cell) in display.row(row_idx).enumerate().skip(h_scroll) {
                if x >= area.x + area.width {
                    break;
                }
                let w = col_widths[col_idx].min(area.x + area.width - x);

                let style = if focused && is_selected_row && col_idx == selected_col {
                    theme.results_selected
                } else if cell.is_null {
                    theme.results_null
                } else {
                    row_base_style
                };

                let padded = pad_to_width(cell.text, w as usize);
                frame.render_widget(Paragraph::new(padded).style(style), Rect::new(x, y, w, 1));
                x += w + 1;
            }
        }

        // Footer with position info
        let footer_y = area.y + area.height - 1;
        let footer = format!(
            "Row {}/{} | Col {}/{}",
            selected_row + 1,
            row_count,
            selected_col + 1,
            col_count,
        );
        frame.render_widget(
            Paragraph::new(footer).style(theme.results_footer),
            Rect::new(area.x, footer_y, area.width, 1),
        );
    }
}

/// Compute column widths from header names and a sample of the data
fn compute_column_widths(grid: &ResultGrid, cap: u16) -> Vec<u16> {
    let display = GridDisplay::new(grid);
    let mut widths: Vec<u16> = display
        .header()
        .map(|name| name.width() as u16 + 1)
        .collect();

    // Sample first 100 rows to determine widths
    for row_idx in 0..grid.row_count().min(100) {
        for (i, cell) in display.row(row_idx).enumerate() {
            let cell_width = cell.text.width().min(cap as usize) as u16 + 1;
            widths[i] = widths[i].max(cell_width);
        }
    }

    for w in &mut widths {
        *w = (*w).clamp(4, cap);
    }
    widths
}

/// Truncate to a display-width budget and pad with spaces to exactly fill it
fn pad_to_width(s: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw > max {
            break;
        }
        out.push(c);
        used += cw;
    }
    while used < max {
        out.push(' ');
        used += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> ResultGrid {
        ResultGrid::new(
            vec!["id".into(), "name".into()],
            vec![
                vec![Some("1".into()), Some("Alice".into())],
                vec![Some("2".into()), Some("Bob".into())],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_viewer_starts_at_origin() {
        let viewer = ResultsViewer::new(40);
        assert_eq!(viewer.selected(), (0, 0));
    }

    #[test]
    fn test_navigation_boundary_clamping() {
        let mut viewer = ResultsViewer::new(40);

        // 2 rows, 2 cols
        viewer.move_down(2);
        assert_eq!(viewer.selected(), (1, 0));
        viewer.move_down(2);
        assert_eq!(viewer.selected(), (1, 0)); // stays at last row

        viewer.move_right(2);
        assert_eq!(viewer.selected(), (1, 1));
        viewer.move_right(2);
        assert_eq!(viewer.selected(), (1, 1)); // stays at last col

        viewer.move_up();
        viewer.move_up();
        viewer.move_left();
        viewer.move_left();
        assert_eq!(viewer.selected(), (0, 0));
    }

    #[test]
    fn test_navigation_on_empty_counts_is_safe() {
        let mut viewer = ResultsViewer::new(40);
        viewer.move_down(0);
        viewer.move_right(0);
        viewer.page_down(0);
        viewer.go_to_bottom(0);
        viewer.go_to_end(0);
        assert_eq!(viewer.selected(), (0, 0));
    }

    #[test]
    fn test_go_to_top_bottom_home_end() {
        let mut viewer = ResultsViewer::new(40);
        viewer.go_to_bottom(5);
        assert_eq!(viewer.selected(), (4, 0));
        viewer.go_to_end(3);
        assert_eq!(viewer.selected(), (4, 2));
        viewer.go_to_top();
        viewer.go_to_home();
        assert_eq!(viewer.selected(), (0, 0));
    }

    #[test]
    fn test_reset_clears_selection() {
        let mut viewer = ResultsViewer::new(40);
        viewer.move_down(10);
        viewer.move_right(10);
        viewer.reset();
        assert_eq!(viewer.selected(), (0, 0));
    }

    #[test]
    fn test_column_widths_respect_cap() {
        let grid = ResultGrid::new(
            vec!["c".into()],
            vec![vec![Some("x".repeat(200))]],
        )
        .unwrap();
        let widths = compute_column_widths(&grid, 40);
        assert_eq!(widths, vec![40]);
    }

    #[test]
    fn test_column_widths_fit_content() {
        let widths = compute_column_widths(&sample_grid(), 40);
        // "name" header is 4 wide, "Alice" cell is 5 wide; +1 padding
        assert_eq!(widths[1], 6);
    }

    #[test]
    fn test_pad_to_width_truncates_and_pads() {
        assert_eq!(pad_to_width("abcdef", 4), "abcd");
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("", 3), "   ");
    }
}

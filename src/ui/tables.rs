//! Tables panel widgets
//!
//! Browse-view widgets: the table list (selection rendered from the
//! catalog browser's state) and the single-line WHERE-filter input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::db::catalog::TableBrowser;
use crate::ui::theme::Theme;
use crate::ui::ComponentAction;

/// Single-line text input for the filter clause
pub struct FilterInput {
    text: String,
    /// Cursor position as a char column
    cursor: usize,
}

impl FilterInput {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    /// Current input text, verbatim
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.chars().count();
    }

    /// Handle a key event; returns whether it was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> ComponentAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return ComponentAction::Ignored;
        }
        match key.code {
            KeyCode::Char(c) => {
                let offset = byte_offset(&self.text, self.cursor);
                self.text.insert(offset, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let offset = byte_offset(&self.text, self.cursor - 1);
                    self.text.remove(offset);
                    self.cursor -= 1;
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.text.chars().count() {
                    let offset = byte_offset(&self.text, self.cursor);
                    self.text.remove(offset);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.text.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.text.chars().count(),
            _ => return ComponentAction::Ignored,
        }
        ComponentAction::Consumed
    }

    /// Render as `WHERE <text>` with a cursor cell when focused
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let mut spans = vec![Span::styled("WHERE ", theme.filter_label)];
        if focused {
            let before: String = self.text.chars().take(self.cursor).collect();
            let at: String = self
                .text
                .chars()
                .nth(self.cursor)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            let after: String = self.text.chars().skip(self.cursor + 1).collect();
            spans.push(Span::styled(before, theme.editor_text));
            spans.push(Span::styled(at, theme.editor_cursor));
            spans.push(Span::styled(after, theme.editor_text));
        } else if self.text.is_empty() {
            spans.push(Span::styled("1=1", theme.results_empty));
        } else {
            spans.push(Span::styled(self.text.clone(), theme.editor_text));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

impl Default for FilterInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Table list renderer; selection state comes from the catalog browser
pub struct TableList {
    scroll_offset: usize,
}

impl TableList {
    pub fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        focused: bool,
        theme: &Theme,
        browser: &TableBrowser,
    ) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let tables = browser.tables();
        if tables.is_empty() {
            let msg = "No tables in this database.";
            frame.render_widget(Paragraph::new(msg).style(theme.results_empty), area);
            return;
        }

        let height = area.height as usize;
        let selected = browser.selected();
        let scroll = if selected < self.scroll_offset {
            selected
        } else if selected >= self.scroll_offset + height {
            selected - height + 1
        } else {
            self.scroll_offset
        };

        for (vis, (idx, name)) in tables.iter().enumerate().skip(scroll).take(height).enumerate() {
            let y = area.y + vis as u16;
            let style = if idx == selected && focused {
                theme.tables_selected
            } else if idx == selected {
                theme.results_header
            } else {
                theme.tables_item
            };
            let marker = if idx == selected { "> " } else { "  " };
            frame.render_widget(
                Paragraph::new(format!("{}{}", marker, name)).style(style),
                Rect::new(area.x, y, area.width, 1),
            );
        }
    }
}

impl Default for TableList {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of char column `col` in `s`
fn byte_offset(s: &str, col: usize) -> usize {
    s.char_indices().nth(col).map(|(i, _)| i).unwrap_or(s.len())
}

//! Query editor widget
//!
//! Multi-line SQL editor. Holds only the text buffer and cursor; the
//! session receives the content when the user submits.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use crate::ui::theme::Theme;
use crate::ui::ComponentAction;

/// Query editor component
pub struct QueryEditor {
    /// Text buffer, one entry per line (never empty)
    lines: Vec<String>,

    /// Cursor position (line index, char column)
    cursor: (usize, usize),

    /// First visible line
    scroll: usize,
}

impl QueryEditor {
    /// Create an empty editor
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: (0, 0),
            scroll: 0,
        }
    }

    /// Get the full buffer as one string
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the buffer, cursor to end of text
    pub fn set_content(&mut self, content: &str) {
        self.lines = content.split('\n').map(str::to_string).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        let last = self.lines.len() - 1;
        self.cursor = (last, self.lines[last].chars().count());
        self.scroll = 0;
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.cursor = (0, 0);
        self.scroll = 0;
    }

    /// True when the buffer is blank
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Cursor position (line, char column)
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let (line, col) = self.cursor;
        let offset = byte_offset(&self.lines[line], col);
        self.lines[line].insert(offset, c);
        self.cursor.1 = col + 1;
    }

    /// Insert text at the cursor, splitting on embedded newlines
    pub fn insert_text(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.insert_newline();
            } else if c != '\r' {
                self.insert_char(c);
            }
        }
    }

    /// Split the current line at the cursor
    pub fn insert_newline(&mut self) {
        let (line, col) = self.cursor;
        let offset = byte_offset(&self.lines[line], col);
        let tail = self.lines[line].split_off(offset);
        self.lines.insert(line + 1, tail);
        self.cursor = (line + 1, 0);
    }

    /// Delete the character before the cursor, joining lines at column 0
    pub fn backspace(&mut self) {
        let (line, col) = self.cursor;
        if col > 0 {
            let offset = byte_offset(&self.lines[line], col - 1);
            self.lines[line].remove(offset);
            self.cursor.1 = col - 1;
        } else if line > 0 {
            let tail = self.lines.remove(line);
            let prev_len = self.lines[line - 1].chars().count();
            self.lines[line - 1].push_str(&tail);
            self.cursor = (line - 1, prev_len);
        }
    }

    /// Delete the character under the cursor, joining lines at end of line
    pub fn delete(&mut self) {
        let (line, col) = self.cursor;
        let len = self.lines[line].chars().count();
        if col < len {
            let offset = byte_offset(&self.lines[line], col);
            self.lines[line].remove(offset);
        } else if line + 1 < self.lines.len() {
            let tail = self.lines.remove(line + 1);
            self.lines[line].push_str(&tail);
        }
    }

    pub fn move_left(&mut self) {
        let (line, col) = self.cursor;
        if col > 0 {
            self.cursor.1 = col - 1;
        } else if line > 0 {
            self.cursor = (line - 1, self.lines[line - 1].chars().count());
        }
    }

    pub fn move_right(&mut self) {
        let (line, col) = self.cursor;
        if col < self.lines[line].chars().count() {
            self.cursor.1 = col + 1;
        } else if line + 1 < self.lines.len() {
            self.cursor = (line + 1, 0);
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor.0 > 0 {
            self.cursor.0 -= 1;
            self.clamp_col();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor.0 + 1 < self.lines.len() {
            self.cursor.0 += 1;
            self.clamp_col();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor.1 = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor.1 = self.lines[self.cursor.0].chars().count();
    }

    fn clamp_col(&mut self) {
        let len = self.lines[self.cursor.0].chars().count();
        if self.cursor.1 > len {
            self.cursor.1 = len;
        }
    }

    /// Handle a key event; returns whether it was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> ComponentAction {
        // Plain text input only; modified keys belong to the app.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return ComponentAction::Ignored;
        }
        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Enter => self.insert_newline(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return ComponentAction::Ignored,
        }
        ComponentAction::Consumed
    }

    /// Render the editor into `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let height = area.height as usize;
        let width = area.width as usize;

        // Keep the cursor line visible without mutating stored scroll.
        let scroll = if self.cursor.0 < self.scroll {
            self.cursor.0
        } else if self.cursor.0 >= self.scroll + height {
            self.cursor.0 - height + 1
        } else {
            self.scroll
        };

        for (vis, line_idx) in (scroll..self.lines.len()).take(height).enumerate() {
            let y = area.y + vis as u16;
            let line = &self.lines[line_idx];
            let chars: Vec<char> = line.chars().collect();

            // Horizontal window keeping the cursor column visible.
            let h_start = if focused && line_idx == self.cursor.0 && self.cursor.1 >= width {
                self.cursor.1 + 1 - width
            } else {
                0
            };

            let visible: String = chars.iter().skip(h_start).take(width).collect();

            if focused && line_idx == self.cursor.0 {
                let cur = self.cursor.1 - h_start;
                let before: String = visible.chars().take(cur).collect();
                let at: String = visible
                    .chars()
                    .nth(cur)
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| " ".to_string());
                let after: String = visible.chars().skip(cur + 1).collect();
                let spans = Line::from(vec![
                    Span::styled(before, theme.editor_text),
                    Span::styled(at, theme.editor_cursor),
                    Span::styled(after, theme.editor_text),
                ]);
                frame.render_widget(spans, Rect::new(area.x, y, area.width, 1));
            } else {
                frame.render_widget(
                    Span::styled(visible, theme.editor_text),
                    Rect::new(area.x, y, area.width, 1),
                );
            }
        }
    }
}

impl Default for QueryEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of char column `col` in `line`
fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

//! UI theme and styling
//!
//! Defines colors, styles, and visual appearance for all UI components.
//! Built once at startup from settings and passed by reference to render;
//! there is no mutable process-wide style state.

use ratatui::style::{Color, Modifier, Style};

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    // Panel borders
    pub border_focused: Style,
    pub border_unfocused: Style,

    // View tab bar
    pub tab_active: Style,
    pub tab_inactive: Style,

    // Query editor
    pub editor_text: Style,
    pub editor_cursor: Style,

    // Tables panel
    pub tables_item: Style,
    pub tables_selected: Style,
    pub filter_label: Style,

    // Results table
    pub results_header: Style,
    pub results_header_selected: Style,
    pub results_row_even: Style,
    pub results_row_odd: Style,
    pub results_selected: Style,
    pub results_null: Style,
    pub results_empty: Style,
    pub results_footer: Style,
    pub results_error_title: Style,
    pub results_error_text: Style,

    // Status messages
    pub status_success: Style,
    pub status_error: Style,
    pub status_info: Style,
    pub status_warning: Style,
    pub status_hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Look a theme up by its settings name; unknown names fall back to dark.
    pub fn named(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Default dark theme
    pub fn dark() -> Self {
        Self {
            border_focused: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            border_unfocused: Style::default().fg(Color::DarkGray),

            tab_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),

            editor_text: Style::default().fg(Color::White),
            editor_cursor: Style::default().bg(Color::White).fg(Color::Black),

            tables_item: Style::default().fg(Color::Green),
            tables_selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            filter_label: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            results_header: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            results_header_selected: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            results_row_even: Style::default().fg(Color::White),
            results_row_odd: Style::default().fg(Color::Gray),
            results_selected: Style::default().fg(Color::Black).bg(Color::Yellow),
            results_null: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            results_empty: Style::default().fg(Color::DarkGray),
            results_footer: Style::default().fg(Color::DarkGray),
            results_error_title: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            results_error_text: Style::default().fg(Color::Red),

            status_success: Style::default().fg(Color::Green),
            status_error: Style::default().fg(Color::Red),
            status_info: Style::default().fg(Color::Blue),
            status_warning: Style::default().fg(Color::Yellow),
            status_hint: Style::default().fg(Color::DarkGray),
        }
    }

    /// Light theme for bright terminals
    pub fn light() -> Self {
        Self {
            border_focused: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            border_unfocused: Style::default().fg(Color::Gray),

            tab_active: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),

            editor_text: Style::default().fg(Color::Black),
            editor_cursor: Style::default().bg(Color::Black).fg(Color::White),

            tables_item: Style::default().fg(Color::Blue),
            tables_selected: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            filter_label: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            results_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            results_header_selected: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            results_row_even: Style::default().fg(Color::Black),
            results_row_odd: Style::default().fg(Color::DarkGray),
            results_selected: Style::default().fg(Color::White).bg(Color::Blue),
            results_null: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            results_empty: Style::default().fg(Color::Gray),
            results_footer: Style::default().fg(Color::Gray),
            results_error_title: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            results_error_text: Style::default().fg(Color::Red),

            status_success: Style::default().fg(Color::Green),
            status_error: Style::default().fg(Color::Red),
            status_info: Style::default().fg(Color::Blue),
            status_warning: Style::default().fg(Color::Yellow),
            status_hint: Style::default().fg(Color::Gray),
        }
    }

    /// Get border style based on focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_falls_back_to_dark() {
        let dark = Theme::named("no-such-theme");
        assert_eq!(dark.editor_text, Theme::dark().editor_text);
    }

    #[test]
    fn test_border_style_tracks_focus() {
        let theme = Theme::dark();
        assert_eq!(theme.border_style(true), theme.border_focused);
        assert_eq!(theme.border_style(false), theme.border_unfocused);
    }
}

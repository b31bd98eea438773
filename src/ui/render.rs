//! Top-level render function
//!
//! Orchestrates rendering of all panels using the layout module. Reads
//! application state, never mutates it.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, PanelFocus, StatusLevel, View};
use crate::ui::layout::{browse_layout, query_layout};
use crate::ui::theme::Theme;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    match app.view {
        View::Query => render_query_view(frame, app),
        View::Browse => render_browse_view(frame, app),
    }
}

fn render_query_view(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let layout = query_layout(frame.area());

    render_tab_bar(frame, layout.tabs, app, theme);

    let editor_block = Block::default()
        .borders(Borders::ALL)
        .title(" Query ")
        .border_style(theme.border_style(app.focus == PanelFocus::Editor));
    let editor_inner = editor_block.inner(layout.editor);
    frame.render_widget(editor_block, layout.editor);
    app.editor
        .render(frame, editor_inner, app.focus == PanelFocus::Editor, theme);

    let results_block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .border_style(theme.border_style(app.focus == PanelFocus::QueryResults));
    let results_inner = results_block.inner(layout.results);
    frame.render_widget(results_block, layout.results);
    app.query_results.render(
        frame,
        results_inner,
        app.focus == PanelFocus::QueryResults,
        theme,
        app.session.slot(),
    );

    render_status_bar(frame, layout.status, app, theme);
}

fn render_browse_view(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let layout = browse_layout(frame.area());

    render_tab_bar(frame, layout.tabs, app, theme);

    let filter_block = Block::default()
        .borders(Borders::ALL)
        .title(" Filter ")
        .border_style(theme.border_style(app.focus == PanelFocus::Filter));
    let filter_inner = filter_block.inner(layout.filter);
    frame.render_widget(filter_block, layout.filter);
    app.filter
        .render(frame, filter_inner, app.focus == PanelFocus::Filter, theme);

    let tables_block = Block::default()
        .borders(Borders::ALL)
        .title(" Tables ")
        .border_style(theme.border_style(app.focus == PanelFocus::Tables));
    let tables_inner = tables_block.inner(layout.tables);
    frame.render_widget(tables_block, layout.tables);
    app.table_list.render(
        frame,
        tables_inner,
        app.focus == PanelFocus::Tables,
        theme,
        &app.browser,
    );

    let results_block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .border_style(theme.border_style(app.focus == PanelFocus::BrowseResults));
    let results_inner = results_block.inner(layout.results);
    frame.render_widget(results_block, layout.results);
    app.browse_results.render(
        frame,
        results_inner,
        app.focus == PanelFocus::BrowseResults,
        theme,
        app.browser.slot(),
    );

    render_status_bar(frame, layout.status, app, theme);
}

fn render_tab_bar(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let (query_style, browse_style) = match app.view {
        View::Query => (theme.tab_active, theme.tab_inactive),
        View::Browse => (theme.tab_inactive, theme.tab_active),
    };
    let line = Line::from(vec![
        Span::styled(" 1 Query ", query_style),
        Span::raw(" "),
        Span::styled(" 2 Tables ", browse_style),
        Span::raw("  "),
        Span::styled(format!("[{}]", app.db_name), theme.status_hint),
    ]);
    frame.render_widget(line, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    if let Some(ref status) = app.status_message {
        let style = match status.level {
            StatusLevel::Info => theme.status_info,
            StatusLevel::Success => theme.status_success,
            StatusLevel::Warning => theme.status_warning,
            StatusLevel::Error => theme.status_error,
        };
        frame.render_widget(Paragraph::new(status.message.as_str()).style(style), area);
    } else {
        let text = "F5 run | F2 switch view | Tab cycle panel | Ctrl+Q quit";
        frame.render_widget(Paragraph::new(text).style(theme.status_hint), area);
    }
}

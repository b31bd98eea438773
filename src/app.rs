//! Application state and event handling
//!
//! Central state machine: key events come in, state updates, nothing else.
//! Execution is fully synchronous: a submit key blocks on the engine and
//! the next frame renders whatever the session now holds.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Settings;
use crate::db::catalog::TableBrowser;
use crate::db::session::QuerySession;
use crate::db::sqlite::SqliteDb;
use crate::ui::editor::QueryEditor;
use crate::ui::results::ResultsViewer;
use crate::ui::tables::{FilterInput, TableList};
use crate::ui::theme::Theme;

/// The two entry points: free-typed SQL and catalog-derived browsing.
/// Each keeps its own result/error state; they share one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Query,
    Browse,
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    Editor,
    QueryResults,
    Filter,
    Tables,
    BrowseResults,
}

/// Status message with severity level
pub struct StatusMessage {
    pub message: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Main application state
pub struct App {
    /// The process-wide database connection
    db: SqliteDb,

    /// Database display name (file name) for the tab bar
    pub db_name: String,

    /// Active view
    pub view: View,

    /// Which panel currently has focus
    pub focus: PanelFocus,

    /// Free-SQL session (query text + live result + last error)
    pub session: QuerySession,

    /// Catalog browser (table list + filter + live result + last error)
    pub browser: TableBrowser,

    /// UI components
    pub editor: QueryEditor,
    pub filter: FilterInput,
    pub table_list: TableList,
    pub query_results: ResultsViewer,
    pub browse_results: ResultsViewer,

    /// UI theme (built once from settings, reused every frame)
    pub theme: Theme,

    /// Status message to display
    pub status_message: Option<StatusMessage>,

    /// Whether the application is running
    pub running: bool,
}

impl App {
    /// Create the app around an open connection.
    ///
    /// `initial_query` lands in the editor; the caller decides whether to
    /// run it before the first frame.
    pub fn new(db: SqliteDb, db_name: String, initial_query: &str, settings: &Settings) -> Self {
        let mut editor = QueryEditor::new();
        editor.set_content(initial_query);

        Self {
            db,
            db_name,
            view: View::Query,
            focus: PanelFocus::Editor,
            session: QuerySession::new(),
            browser: TableBrowser::new(),
            editor,
            filter: FilterInput::new(),
            table_list: TableList::new(),
            query_results: ResultsViewer::new(settings.max_column_width),
            browse_results: ResultsViewer::new(settings.max_column_width),
            theme: Theme::named(&settings.theme),
            status_message: None,
            running: true,
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        // Global bindings first
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
            self.running = false;
            return;
        }
        match key.code {
            KeyCode::F(2) => {
                match self.view {
                    View::Query => self.enter_browse_view(),
                    View::Browse => self.enter_query_view(),
                }
                return;
            }
            KeyCode::F(5) => {
                match self.view {
                    View::Query => self.run_editor_query(),
                    View::Browse => self.run_browse_query(),
                }
                return;
            }
            KeyCode::Tab => {
                self.cycle_focus();
                return;
            }
            KeyCode::BackTab => {
                self.cycle_focus_reverse();
                return;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Editor => {
                let _ = self.editor.handle_key(key);
            }
            PanelFocus::QueryResults => {
                let (rows, cols) = grid_counts(&self.session);
                Self::navigate(&mut self.query_results, key, rows, cols);
            }
            PanelFocus::Filter => {
                if key.code == KeyCode::Enter {
                    self.run_browse_query();
                } else {
                    let _ = self.filter.handle_key(key);
                }
            }
            PanelFocus::Tables => match key.code {
                KeyCode::Up => self.browser.select_prev(),
                KeyCode::Down => self.browser.select_next(),
                KeyCode::Enter => self.run_browse_query(),
                KeyCode::Char('/') => self.focus = PanelFocus::Filter,
                _ => {}
            },
            PanelFocus::BrowseResults => {
                let rows = self.browser.current_result().map_or(0, |g| g.row_count());
                let cols = self
                    .browser
                    .current_result()
                    .map_or(0, |g| g.column_count());
                Self::navigate(&mut self.browse_results, key, rows, cols);
            }
        }
    }

    fn navigate(viewer: &mut ResultsViewer, key: KeyEvent, rows: usize, cols: usize) {
        match key.code {
            KeyCode::Up => viewer.move_up(),
            KeyCode::Down => viewer.move_down(rows),
            KeyCode::Left => viewer.move_left(),
            KeyCode::Right => viewer.move_right(cols),
            KeyCode::PageUp => viewer.page_up(),
            KeyCode::PageDown => viewer.page_down(rows),
            KeyCode::Home => viewer.go_to_home(),
            KeyCode::End => viewer.go_to_end(cols),
            _ => {}
        }
    }

    /// Submit the editor: record the text on the session, then run it.
    /// The button press and the accelerator both land here.
    pub fn run_editor_query(&mut self) {
        let sql = self.editor.content();
        if sql.trim().is_empty() {
            return;
        }
        self.session.set_query_text(sql);

        let start = Instant::now();
        self.session.run(&self.db);
        let elapsed = start.elapsed();

        match self.session.current_error() {
            None => {
                self.query_results.reset();
                let rows = self.session.current_result().map_or(0, |g| g.row_count());
                self.set_status(
                    format!("{} rows in {:.1}ms", rows, elapsed.as_secs_f64() * 1000.0),
                    StatusLevel::Success,
                );
                self.focus = PanelFocus::QueryResults;
            }
            Some(_) => {
                self.set_status("Query failed".to_string(), StatusLevel::Error);
            }
        }
    }

    /// Submit the browser: record the filter text, then browse.
    pub fn run_browse_query(&mut self) {
        self.browser.set_filter(self.filter.text());
        if self.browser.compose_query().is_none() {
            self.set_status("No table selected".to_string(), StatusLevel::Warning);
            return;
        }

        let start = Instant::now();
        self.browser.browse(&self.db);
        let elapsed = start.elapsed();

        match self.browser.current_error() {
            None => {
                self.browse_results.reset();
                let rows = self.browser.current_result().map_or(0, |g| g.row_count());
                self.set_status(
                    format!("{} rows in {:.1}ms", rows, elapsed.as_secs_f64() * 1000.0),
                    StatusLevel::Success,
                );
            }
            Some(_) => {
                self.set_status("Query failed".to_string(), StatusLevel::Error);
            }
        }
    }

    /// Switch to the browse view, re-reading the catalog. Tables may have
    /// changed via DDL run from the query view, so the list is never cached.
    pub fn enter_browse_view(&mut self) {
        self.view = View::Browse;
        self.focus = PanelFocus::Tables;
        match self.browser.refresh(&self.db) {
            Ok(()) => {
                let n = self.browser.tables().len();
                self.set_status(format!("{} tables", n), StatusLevel::Info);
            }
            Err(e) => {
                self.set_status(format!("Table refresh failed: {}", e), StatusLevel::Error);
            }
        }
    }

    /// Switch back to the free-SQL view
    pub fn enter_query_view(&mut self) {
        self.view = View::Query;
        self.focus = PanelFocus::Editor;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match (self.view, self.focus) {
            (View::Query, PanelFocus::Editor) => PanelFocus::QueryResults,
            (View::Query, _) => PanelFocus::Editor,
            (View::Browse, PanelFocus::Tables) => PanelFocus::Filter,
            (View::Browse, PanelFocus::Filter) => PanelFocus::BrowseResults,
            (View::Browse, _) => PanelFocus::Tables,
        };
    }

    fn cycle_focus_reverse(&mut self) {
        self.focus = match (self.view, self.focus) {
            (View::Query, PanelFocus::Editor) => PanelFocus::QueryResults,
            (View::Query, _) => PanelFocus::Editor,
            (View::Browse, PanelFocus::Tables) => PanelFocus::BrowseResults,
            (View::Browse, PanelFocus::Filter) => PanelFocus::Tables,
            (View::Browse, _) => PanelFocus::Filter,
        };
    }

    pub fn set_status(&mut self, message: String, level: StatusLevel) {
        self.status_message = Some(StatusMessage { message, level });
    }
}

fn grid_counts(session: &QuerySession) -> (usize, usize) {
    session
        .current_result()
        .map_or((0, 0), |g| (g.row_count(), g.column_count()))
}

//! vizlite - A fast, keyboard-driven SQLite browser for the terminal
//!
//! Binary entry point: argument parsing, the fatal open path, terminal
//! setup/teardown, and the synchronous event loop. All logic lives in the
//! library modules for better testability.

use std::io::{self, stdout};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use vizlite::app::App;
use vizlite::config;
use vizlite::db::sqlite::{SqliteDb, LIST_TABLES_SQL};
use vizlite::ui;

#[derive(Parser)]
#[command(name = "vizlite", version, about = "A fast, keyboard-driven SQLite browser for the terminal")]
struct Cli {
    /// Path to the SQLite database file
    db_path: PathBuf,

    /// Initial query placed in the editor and run on startup
    /// (defaults to listing the tables in the catalog)
    #[arg(short, long)]
    query: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Open the database before touching the terminal: a bad path is fatal
    // and must be reported plainly on stderr.
    let db = match SqliteDb::open(&cli.db_path) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let settings = match config::settings::load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Warning: {}", e);
            config::Settings::default()
        }
    };
    let db_name = cli
        .db_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.db_path.display().to_string());
    let initial_query = cli.query.as_deref().unwrap_or(LIST_TABLES_SQL);

    let mut app = App::new(db, db_name, initial_query, &settings);
    app.run_editor_query();

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // Restore the terminal on panic so the shell is not left in raw mode
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, &mut app);

    restore_terminal()?;
    result
}

/// Synchronous draw/read loop: one thread, one connection, queries block.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::render::render(frame, &*app))?;
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            _ => {} // resize redraws on the next turn of the loop
        }
    }
    Ok(())
}

/// Restore terminal to normal state
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

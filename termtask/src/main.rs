//! `TermTask` — terminal-native task tracker.
//!
//! Launches the TUI over the locally persisted task collection.
//! Configuration via CLI flags, environment variables, or config file
//! (`~/.config/termtask/config.toml`).
//!
//! ```bash
//! # Default snapshot location (<data_dir>/termtask/tasks.json)
//! cargo run --bin termtask
//!
//! # Explicit snapshot file
//! cargo run --bin termtask -- --data-file ./tasks.json
//!
//! # Or via environment variable
//! TERMTASK_DATA_FILE=./tasks.json cargo run --bin termtask
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use termtask::app::App;
use termtask::config::{AppConfig, CliArgs};
use termtask::reminder::PermissionStore;
use termtask::store::TaskStore;
use termtask::ui;

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > defaults).
    let config = match AppConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            AppConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("termtask starting");

    // Open the task store: missing or corrupt snapshot means starting empty.
    let mut app = match config.data_file_path() {
        Ok(path) => {
            tracing::info!(path = %path.display(), "opening task snapshot");
            let store = TaskStore::open(&path);
            let app = App::new(store, &config);
            match config.permission_file_path() {
                Ok(permission_path) => {
                    app.with_permission(PermissionStore::new(&permission_path))
                }
                Err(_) => app,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "no data directory, tasks will not persist");
            App::new(TaskStore::in_memory(), &config)
        }
    };

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("termtask exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the
/// terminal). Returns a [`WorkerGuard`] that must be held until shutdown
/// to ensure all buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("termtask.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop.
///
/// Each iteration draws a frame, ticks the periodic sweeps, then polls
/// for one terminal input event with a bounded timeout. Every handler
/// runs to completion before the next begins; there is no other thread.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &AppConfig,
) -> io::Result<()> {
    app.start_sweeps();

    loop {
        let now = chrono::Local::now().naive_local();

        // Step 1: Draw the UI frame.
        terminal.draw(|frame| ui::draw(frame, app, now.date()))?;

        // Step 2: Run any sweep whose interval has elapsed.
        app.tick_sweeps(now);

        // Step 3: Poll for terminal input events.
        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key);
        }

        if app.should_quit {
            app.stop_sweeps();
            return Ok(());
        }
    }
}

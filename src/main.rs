mod app;
mod domain;
mod input;
mod localization;
mod logging;
mod notifications;
mod persistence;
mod session;
mod store;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{completion_box, pomodoro_badge};
use persistence::{defaults_file, ensure_data_dir, init_local_data_dir, prefs, system_locale, JsonFileStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use store::TaskStore;
use ticker::Ticker;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "tomato")]
#[command(about = "A terminal Pomodoro timer with a task list", long_about = None)]
struct Cli {
    /// Use this data directory instead of discovering one
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .tomato directory in the current directory
    Init,
    /// Print the saved tasks with their pomodoro counts
    Tasks,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let current_dir = std::env::current_dir().context("Could not determine current directory")?;
            let data_dir = init_local_data_dir(&current_dir)?;
            println!("Initialized tomato directory: {}", data_dir.display());
            println!();
            println!("Tomato will now keep tasks and settings in this directory.");
            println!("Run 'tomato' to start focusing.");
            Ok(())
        }
        Some(Commands::Tasks) => print_tasks(cli.data_dir.as_deref()),
        None => run_tui(cli.data_dir.as_deref()),
    }
}

fn open_defaults(data_dir: &Path) -> Result<JsonFileStore> {
    let path = defaults_file(data_dir);
    JsonFileStore::open(&path).with_context(|| format!("Failed to open {}", path.display()))
}

fn print_tasks(data_dir: Option<&Path>) -> Result<()> {
    let data_dir = ensure_data_dir(data_dir)?;
    let defaults = open_defaults(&data_dir)?;
    let tasks = prefs::load_tasks(&defaults);

    if tasks.is_empty() {
        println!("No tasks in {}", data_dir.display());
        return Ok(());
    }
    for task in &tasks {
        println!(
            "{} {}  {}",
            completion_box(task.is_completed),
            task.title,
            pomodoro_badge(task.completed_pomodoros, true)
        );
    }
    Ok(())
}

fn run_tui(data_dir: Option<&Path>) -> Result<()> {
    let data_dir = ensure_data_dir(data_dir)?;
    let _log_guard = logging::init(&data_dir)?;
    info!(data_dir = %data_dir.display(), "starting tomato");

    let defaults = open_defaults(&data_dir)?;
    info!(path = %defaults.path().display(), "defaults loaded");
    let store = TaskStore::new(Box::new(defaults), Ticker::system(), &system_locale());
    let mut app = AppState::new(store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.store.stop_timer();
    finish(result)
}

/// Log how the session ended and hand the loop's result back to `main`,
/// which prints the error and exits non-zero
fn finish(result: Result<()>) -> Result<()> {
    match &result {
        Ok(()) => info!("tomato closed"),
        Err(err) => error!(error = %err, "exiting after error"),
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.tick();
    }
}

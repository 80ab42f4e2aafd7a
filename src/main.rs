mod app;
mod config;
mod domain;
mod error;
mod export;
mod input;
mod persistence;
mod store;
mod ticker;
mod ui;

use anyhow::{bail, Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::{load_settings, save_settings, Settings};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{BoardView, TaskStatus};
use persistence::{
    atomic_write, config_file, ensure_dir, export_file, get_data_dir, init_local_data_dir,
    log_file, FileKvStore, KeyValueStore, MemoryKvStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use store::TaskStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taskflow")]
#[command(about = "A kanban task board for the terminal", long_about = None)]
struct Cli {
    /// Data directory. Defaults to the nearest .taskflow, then ~/.taskflow
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Keep the board in memory only. No data directory, settings or log
    /// file is touched
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .taskflow directory in the current directory
    Init,
    /// Print the board's columns to stdout
    List {
        /// Only this column: todo, in_progress or done
        #[arg(short, long, value_parser = parse_status)]
        status: Option<TaskStatus>,
    },
    /// Write the board as an HTML page
    Export {
        /// Output file path. Defaults to <data dir>/board.html
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let current_dir = std::env::current_dir().context("Could not determine current directory")?;
        let data_dir = init_local_data_dir(&current_dir)?;
        save_settings(config_file(&data_dir), &Settings::default())?;
        println!("Initialized taskflow directory: {}", data_dir.display());
        println!();
        println!("Taskflow will now keep this board's tasks in that directory.");
        println!("Run 'taskflow' to open the board.");
        return Ok(());
    }

    let (data_dir, settings) = if cli.ephemeral {
        (None, Settings::default())
    } else {
        let (data_dir, settings) = open_data_dir(cli.dir)?;
        (Some(data_dir), settings)
    };

    let storage: Box<dyn KeyValueStore> = match &data_dir {
        Some(dir) => Box::new(FileKvStore::open(dir)?),
        None => Box::new(MemoryKvStore::new()),
    };
    let store = TaskStore::load(storage);

    match cli.command {
        Some(Commands::List { status }) => {
            print!("{}", export::render_text(&BoardView::project(store.tasks()), status));
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let path = export_path(output, data_dir.as_deref())?;
            let html = export::render_html(&BoardView::project(store.tasks()));
            atomic_write(&path, &html)
                .with_context(|| format!("Failed to write export: {}", path.display()))?;
            println!("Board exported: {}", path.display());
            Ok(())
        }
        Some(Commands::Init) | None => run_tui(store, settings),
    }
}

/// Resolve and create the data directory, then bring up settings and logging
fn open_data_dir(dir: Option<PathBuf>) -> Result<(PathBuf, Settings)> {
    let data_dir = match dir {
        Some(dir) => dir,
        None => get_data_dir()?,
    };
    ensure_dir(&data_dir)?;

    // Settings problems are logged once logging is up
    let settings_result = load_settings(config_file(&data_dir));
    let settings = settings_result.as_ref().cloned().unwrap_or_default();
    init_logging(&data_dir, &settings)?;
    if let Err(e) = &settings_result {
        tracing::warn!(error = %e, "Ignoring settings file; using defaults");
    }
    tracing::info!(dir = %data_dir.display(), "Starting taskflow");

    Ok((data_dir, settings))
}

/// Export target: `--output` if given, else the data directory's board.html
fn export_path(output: Option<PathBuf>, data_dir: Option<&Path>) -> Result<PathBuf> {
    match (output, data_dir) {
        (Some(path), _) => Ok(path),
        (None, Some(dir)) => Ok(export_file(dir)),
        (None, None) => bail!("An ephemeral board has no data directory; pass --output"),
    }
}

fn parse_status(value: &str) -> std::result::Result<TaskStatus, String> {
    TaskStatus::from_tag(value)
        .ok_or_else(|| format!("unknown status '{}' (todo, in_progress, done)", value))
}

/// Send logs to <data dir>/taskflow.log; the terminal belongs to the UI
fn init_logging(data_dir: &Path, settings: &Settings) -> Result<()> {
    let path = log_file(data_dir);
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env("TASKFLOW_LOG")
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn run_tui(store: TaskStore, settings: Settings) -> Result<()> {
    let mouse = settings.mouse;
    let mut app = AppState::new(store, settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // An edit left open at quit still counts as a blur
    app.commit_edit();

    if app.store.is_stale() {
        eprintln!("Warning: the last changes could not be saved; see taskflow.log");
    }

    if let Err(err) = &result {
        tracing::error!(error = %err, "Board exited with an error");
        eprintln!("Error: {}", err);
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let tick_rate = ticker::tick_duration(app.settings.tick_ms);

    loop {
        app.refresh_view();
        terminal.draw(|f| ui::render(f, app))?;

        // Poll with a timeout so the clock keeps ticking
        if event::poll(tick_rate)? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if input::handle_key(app, key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ephemeral_after_subcommand() {
        let cli = Cli::try_parse_from(["taskflow", "list", "--ephemeral"]).unwrap();
        assert!(cli.ephemeral);
        assert!(matches!(cli.command, Some(Commands::List { status: None })));
    }

    #[test]
    fn test_list_status_filter() {
        let cli = Cli::try_parse_from(["taskflow", "list", "-s", "in_progress"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List { status: Some(TaskStatus::InProgress) })
        ));

        assert!(Cli::try_parse_from(["taskflow", "list", "-s", "later"]).is_err());
    }

    #[test]
    fn test_export_path() {
        let dir = Path::new("/data/.taskflow");

        assert_eq!(export_path(None, Some(dir)).unwrap(), dir.join("board.html"));
        assert_eq!(
            export_path(Some(PathBuf::from("out.html")), None).unwrap(),
            PathBuf::from("out.html")
        );
        assert!(export_path(None, None).is_err());
    }
}

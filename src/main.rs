mod app;
mod config;
mod domain;
mod input;
mod logging;
mod screen;
mod ui;

use anyhow::{Context, Result};
use app::{AppState, Snapshot};
use clap::{Parser, Subcommand};
use config::{config_file, ensure_tasker_dir, init_local_tasker, load_config, Config};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::RenamePolicy;
use ratatui::{backend::CrosstermBackend, Terminal};
use screen::Screen;
use std::cell::{Cell, RefCell};
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "tasker")]
#[command(about = "A small single-screen terminal task manager", long_about = None)]
struct Cli {
    /// Config file to use. Defaults to .tasker/config.json (local, then ~/.tasker)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "tasker=trace". Overrides TASKER_LOG and the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Refuse to save tasks with an empty name
    #[arg(long)]
    reject_empty_names: bool,

    /// How an edit that changes a task's name is applied: in-place or delete-insert
    #[arg(long, value_parser = parse_rename_policy)]
    rename_policy: Option<RenamePolicy>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .tasker directory with a default config
    Init,
    /// Print the effective configuration
    Config,
}

fn parse_rename_policy(value: &str) -> Result<RenamePolicy, String> {
    RenamePolicy::from_tag(value)
        .ok_or_else(|| format!("unknown rename policy '{}' (use in-place or delete-insert)", value))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config_file()?,
    };
    let config = resolve_config(&cli, load_config(&config_path)?);

    match cli.command {
        Some(Commands::Init) => {
            let current_dir = std::env::current_dir().context("Could not determine current directory")?;
            let path = init_local_tasker(&current_dir)?;
            println!("Initialized tasker config: {}", path.display());
            Ok(())
        }
        Some(Commands::Config) => {
            println!("# {}", config_path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        None => {
            let filter = logging::build_filter(cli.log_level.as_deref(), &config.log_level)?;
            let log_dir = ensure_tasker_dir()?;
            logging::init_tracing(filter, &log_dir)?;
            info!(
                config_path = %config_path.display(),
                allow_empty_names = config.allow_empty_names,
                rename_policy = config.rename_policy.to_tag(),
                "starting tasker"
            );
            run_tui(&config)
        }
    }
}

/// Apply CLI overrides on top of the file config
fn resolve_config(cli: &Cli, mut config: Config) -> Config {
    if cli.reject_empty_names {
        config.allow_empty_names = false;
    }
    if let Some(policy) = cli.rename_policy {
        config.rename_policy = policy;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config
}

fn run_tui(config: &Config) -> Result<()> {
    let mut screen = Screen::new(AppState::new(config.allow_empty_names, config.rename_policy));

    // The UI is a subscriber: it keeps the latest snapshot and redraws when told
    let latest = Rc::new(RefCell::new(screen.snapshot()));
    let dirty = Rc::new(Cell::new(true));
    let subscription = {
        let latest = Rc::clone(&latest);
        let dirty = Rc::clone(&dirty);
        screen.subscribe(move |snapshot| {
            *latest.borrow_mut() = snapshot.clone();
            dirty.set(true);
        })
    };

    // Setup terminal
    enable_raw_mode()?;
    let setup = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
    let mut terminal = undo_on_failure(setup, || restore_terminal(&mut io::stdout()))?;

    let result = run_app(&mut terminal, &mut screen, &latest, &dirty);
    screen.unsubscribe(subscription);

    // Restore terminal
    restore_terminal(terminal.backend_mut())?;
    terminal.show_cursor()?;

    info!(tasks = screen.state().tasks.len(), "tasker closed");

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    result
}

fn restore_terminal<W: io::Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}

/// Run `undo` when a setup step failed, so raw mode is not left behind
fn undo_on_failure<T>(step: io::Result<T>, undo: impl FnOnce() -> io::Result<()>) -> Result<T> {
    step.or_else(|err| {
        if let Err(undo_err) = undo() {
            warn!(error = %undo_err, "failed to restore terminal");
        }
        Err(err).context("Failed to set up terminal")
    })
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    screen: &mut Screen,
    latest: &RefCell<Snapshot>,
    dirty: &Cell<bool>,
) -> Result<()> {
    loop {
        if dirty.replace(false) {
            terminal.draw(|f| ui::render(f, &latest.borrow()))?;
        }

        match event::read()? {
            // Only process key press events (ignore key release)
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if input::handle_key(screen, key) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                let area = terminal.size()?;
                input::handle_mouse(screen, mouse, area);
            }
            Event::Resize(_, _) => dirty.set(true),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rename_policy() {
        assert_eq!(parse_rename_policy("delete-insert"), Ok(RenamePolicy::DeleteInsert));
        assert!(parse_rename_policy("sideways").is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "tasker",
            "--reject-empty-names",
            "--rename-policy",
            "delete-insert",
            "--log-level",
            "debug",
        ]);
        let config = resolve_config(&cli, Config::default());

        assert!(!config.allow_empty_names);
        assert_eq!(config.rename_policy, RenamePolicy::DeleteInsert);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_cli_without_flags_keeps_config() {
        let cli = Cli::parse_from(["tasker", "config"]);
        let file_config = Config {
            allow_empty_names: false,
            rename_policy: RenamePolicy::DeleteInsert,
            log_level: "warn".to_string(),
        };
        assert_eq!(resolve_config(&cli, file_config.clone()), file_config);
        assert!(matches!(cli.command, Some(Commands::Config)));
    }

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: Result<()> = undo_on_failure(
            Err(io::Error::new(io::ErrorKind::Other, "no tty")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let restored = Cell::new(false);
        let value = undo_on_failure(Ok(7), || {
            restored.set(true);
            Ok(())
        });
        assert_eq!(value.ok(), Some(7));
        assert!(!restored.get());
    }
}

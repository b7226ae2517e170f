//! Schulte Table TUI - Main entry point
//!
//! Sets up logging and the terminal, then hands control to the
//! application event loop.

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::{debug, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;

use schulte_tui::app::App;
use schulte_tui::cli::Cli;
use schulte_tui::error::general_error;
use schulte_tui::preferences::Preferences;

/// Initialize the logger with appropriate settings
fn init_logger() {
    use env_logger::Builder;
    use std::io::Write;

    Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env() // Allows RUST_LOG env var to override
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging first
    init_logger();
    info!("Schulte TUI starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    // Preferences first: the persisted scale feeds into the settings
    let prefs_path = cli.prefs.clone().or_else(Preferences::default_path);
    let preferences = match prefs_path {
        Some(ref path) => Preferences::load_or_default(path),
        None => Preferences::default(),
    };

    let settings = match cli.to_settings(&preferences) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(2);
        }
    };

    run_tui(settings, preferences, prefs_path, cli.seed)
}

/// Run the TUI trainer
fn run_tui(
    settings: schulte_tui::Settings,
    preferences: Preferences,
    prefs_path: Option<std::path::PathBuf>,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Initializing terminal for TUI mode");

    // Initialize terminal
    enable_raw_mode().map_err(|e| general_error(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(
        stdout(),
        crossterm::terminal::EnterAlternateScreen,
        EnableMouseCapture
    )
    .map_err(|e| general_error(format!("Failed to enter alternate screen: {}", e)))?;

    // Create terminal backend
    let backend = CrosstermBackend::new(stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| general_error(format!("Failed to create terminal: {}", e)))?;

    // Create and run application
    let result = App::new(settings, preferences, prefs_path, seed)
        .and_then(|mut app| app.run(&mut terminal));

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        stdout(),
        DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    );

    result
}

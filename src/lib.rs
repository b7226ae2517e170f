//! Schulte Table TUI Library
//!
//! A terminal trainer for peripheral vision and attention. A square
//! table of shuffled symbols is cleared by clicking them in ascending
//! order against the clock.

pub mod app;
pub mod cli;
pub mod engine;
pub mod error;
pub mod preferences;
pub mod settings;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState};
pub use engine::{Cell, ClickOutcome, GameTimer, Phase, Session};
pub use error::{Result, SchulteError};
pub use preferences::Preferences;
pub use settings::Settings;
pub use types::{OrderMode, SymbolType, ThemeMode};

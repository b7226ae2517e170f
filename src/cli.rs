use clap::Parser;
use std::path::PathBuf;

use crate::error::{Result, SchulteError};
use crate::preferences::Preferences;
use crate::settings::Settings;
use crate::types::{OrderMode, SymbolType};

/// Schulte Table TUI - attention and peripheral vision trainer
#[derive(Parser, Debug)]
#[command(name = "schulte-tui")]
#[command(about = "Schulte table trainer with a terminal interface")]
#[command(version)]
pub struct Cli {
    /// Table side length (cells per row)
    #[arg(short, long)]
    pub size: Option<u16>,

    /// Cell symbols (numbers or letters)
    #[arg(long)]
    pub symbols: Option<String>,

    /// Table order (random or sequential)
    #[arg(long)]
    pub order: Option<String>,

    /// Visual scale factor (0.5 to 1.5)
    #[arg(long)]
    pub scale: Option<f64>,

    /// Hide the central fixation dot
    #[arg(long)]
    pub no_center_dot: bool,

    /// Keep cell positions fixed instead of reshuffling after each click
    #[arg(long)]
    pub static_table: bool,

    /// Preferences file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub prefs: Option<PathBuf>,

    /// Seed the table shuffle for a reproducible layout
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }

    /// Build the starting settings: defaults, then the persisted scale,
    /// then any explicit flags on top.
    pub fn to_settings(&self, preferences: &Preferences) -> Result<Settings> {
        let mut settings = Settings {
            scale_factor: preferences.scale_factor,
            ..Default::default()
        };

        if let Some(size) = self.size {
            settings.size = size;
        }
        if let Some(ref symbols) = self.symbols {
            settings.symbol_type = symbols.parse::<SymbolType>().map_err(|_| {
                SchulteError::settings(format!(
                    "unknown symbol type '{}' (expected 'numbers' or 'letters')",
                    symbols
                ))
            })?;
        }
        if let Some(ref order) = self.order {
            settings.order = order.parse::<OrderMode>().map_err(|_| {
                SchulteError::settings(format!(
                    "unknown order '{}' (expected 'random' or 'sequential')",
                    order
                ))
            })?;
        }
        if let Some(scale) = self.scale {
            settings.scale_factor = Settings::clamp_scale(scale);
        }
        if self.no_center_dot {
            settings.show_center_dot = false;
        }
        if self.static_table {
            settings.shuffle_on_click = false;
        }

        settings.validate()?;
        Ok(settings)
    }
}

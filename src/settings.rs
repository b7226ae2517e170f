//! Game settings
//!
//! A `Settings` value is an immutable snapshot for one game: the session
//! engine copies it on apply/reset and never reads live UI state. All
//! fields are constrained by the settings panel, so validation here is a
//! defensive precondition check, not a recoverable error path.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchulteError};
use crate::types::{OrderMode, SymbolType};

/// Table sizes offered by the settings panel
pub const TABLE_SIZES: [u16; 4] = [3, 4, 5, 6];

/// Largest size accepted anywhere, the point where letter labels run
/// out (32² = 1024 ranks of the 1056 encodable)
pub const MAX_TABLE_SIZE: u16 = 32;

/// Scale slider bounds and step
pub const SCALE_MIN: f64 = 0.5;
pub const SCALE_MAX: f64 = 1.5;
pub const SCALE_STEP: f64 = 0.1;

/// One game's worth of configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Side length of the square table (cells per row)
    pub size: u16,
    /// Numbers or Cyrillic letter codes
    pub symbol_type: SymbolType,
    /// Random permutation or ascending order
    pub order: OrderMode,
    /// Visual scale factor, drives cell box dimensions
    pub scale_factor: f64,
    /// Decorate the center cell with a fixation dot (odd sizes only)
    pub show_center_dot: bool,
    /// Regenerate the table after every click
    pub shuffle_on_click: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: 5,
            symbol_type: SymbolType::Numbers,
            order: OrderMode::Random,
            scale_factor: 1.0,
            show_center_dot: true,
            shuffle_on_click: true,
        }
    }
}

impl Settings {
    /// Total number of cells in the table
    pub fn cell_count(&self) -> u32 {
        u32::from(self.size) * u32::from(self.size)
    }

    /// Check preconditions for table generation.
    ///
    /// The UI cannot produce invalid values, so a failure here means a
    /// programming error or a hand-crafted CLI override.
    pub fn validate(&self) -> Result<()> {
        if self.size < 2 || self.size > MAX_TABLE_SIZE {
            return Err(SchulteError::settings(format!(
                "table size must be between 2 and {}, got {}",
                MAX_TABLE_SIZE, self.size
            )));
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(SchulteError::settings(format!(
                "scale factor must be a positive number, got {}",
                self.scale_factor
            )));
        }
        Ok(())
    }

    /// Clamp the scale factor into the slider range
    pub fn clamp_scale(value: f64) -> f64 {
        if !value.is_finite() || value <= 0.0 {
            return 1.0;
        }
        value.clamp(SCALE_MIN, SCALE_MAX)
    }
}

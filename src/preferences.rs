//! Persisted user preferences
//!
//! Two scalar values survive across sessions: the color theme and the
//! visual scale factor. They live in a small JSON file under the user
//! config directory. A missing or malformed file silently falls back to
//! defaults; saving failures are reported but never fatal.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::settings::Settings;
use crate::types::ThemeMode;

/// File name inside the per-user config directory
const PREFS_FILE: &str = "preferences.json";
const PREFS_DIR: &str = "schulte-tui";

/// Preferences that persist across sessions.
///
/// Each field falls back to its default independently, so a file
/// carrying only one of the values still restores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "default_scale")]
    pub scale_factor: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            scale_factor: 1.0,
        }
    }
}

impl Preferences {
    /// Default preference file location (`~/.config/schulte-tui/preferences.json`
    /// on Linux). `None` when no config directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PREFS_DIR).join(PREFS_FILE))
    }

    /// Load preferences, falling back to defaults on any problem.
    ///
    /// Absence means "use defaults" per the preference contract, so a
    /// missing file is not even worth a warning; a file that exists but
    /// fails to parse is logged and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                log::warn!("Failed to read preferences from {:?}: {}", path, e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Self>(&content) {
            Ok(prefs) => prefs.sanitized(),
            Err(e) => {
                log::warn!("Malformed preferences in {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save preferences as pretty JSON, creating parent directories as needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create preference directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize preferences to JSON")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write preferences to {:?}", path))?;

        Ok(())
    }

    /// Replace out-of-range values with defaults
    fn sanitized(mut self) -> Self {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            log::warn!(
                "Ignoring invalid persisted scale factor {}",
                self.scale_factor
            );
            self.scale_factor = 1.0;
        } else {
            self.scale_factor = Settings::clamp_scale(self.scale_factor);
        }
        self
    }
}

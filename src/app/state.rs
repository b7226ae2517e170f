//! Application state definitions
//!
//! Contains all state-related types for the application: `AppState`,
//! `AppMode`, and the settings-panel form state.

use std::path::PathBuf;

use rand::Rng;

use crate::engine::Session;
use crate::error::Result;
use crate::preferences::Preferences;
use crate::settings::{Settings, SCALE_STEP, TABLE_SIZES};

/// Number of editable fields in the settings form
pub const FORM_FIELD_COUNT: usize = 6;

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal play: the table takes input
    Table,
    /// Settings panel open over the table
    Settings,
}

/// Draft edits for the settings panel.
///
/// Edits live on a copy of the settings and only replace the real ones
/// on apply; Esc throws the draft away.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    pub draft: Settings,
    /// Selected field, 0-based: size, symbols, order, scale, dot, shuffle
    pub selected: usize,
}

impl SettingsForm {
    pub fn new(current: Settings) -> Self {
        Self {
            draft: current,
            selected: 0,
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected < FORM_FIELD_COUNT - 1 {
            self.selected += 1;
        }
    }

    /// Cycle or step the selected field. `delta` is -1 (left) or +1 (right).
    pub fn adjust(&mut self, delta: i32) {
        match self.selected {
            0 => {
                let current = TABLE_SIZES
                    .iter()
                    .position(|&s| s == self.draft.size)
                    .unwrap_or(0);
                let next = (current as i32 + delta).rem_euclid(TABLE_SIZES.len() as i32);
                self.draft.size = TABLE_SIZES[next as usize];
            }
            1 => self.draft.symbol_type = cycle(self.draft.symbol_type),
            2 => self.draft.order = cycle_order(self.draft.order),
            3 => {
                let stepped = self.draft.scale_factor + f64::from(delta) * SCALE_STEP;
                self.draft.scale_factor = Settings::clamp_scale(stepped);
            }
            4 => self.draft.show_center_dot = !self.draft.show_center_dot,
            5 => self.draft.shuffle_on_click = !self.draft.shuffle_on_click,
            _ => {}
        }
    }
}

fn cycle(value: crate::types::SymbolType) -> crate::types::SymbolType {
    use crate::types::SymbolType;
    match value {
        SymbolType::Numbers => SymbolType::Letters,
        SymbolType::Letters => SymbolType::Numbers,
    }
}

fn cycle_order(value: crate::types::OrderMode) -> crate::types::OrderMode {
    use crate::types::OrderMode;
    match value {
        OrderMode::Random => OrderMode::Sequential,
        OrderMode::Sequential => OrderMode::Random,
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Live settings (the session holds its own snapshot)
    pub settings: Settings,
    /// The active game
    pub session: Session,
    /// Persisted theme + scale
    pub preferences: Preferences,
    /// Where to save preferences; `None` disables persistence
    pub prefs_path: Option<PathBuf>,
    /// Keyboard cursor as a cell index into the grid
    pub cursor: usize,
    /// Settings panel draft, present while the panel is open
    pub form: Option<SettingsForm>,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether the help overlay is visible
    pub help_visible: bool,
}

impl AppState {
    pub fn new(
        settings: Settings,
        preferences: Preferences,
        prefs_path: Option<PathBuf>,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let session = Session::new(settings, rng)?;
        Ok(Self {
            mode: AppMode::Table,
            settings,
            session,
            preferences,
            prefs_path,
            cursor: 0,
            form: None,
            status_message: "Click the symbols in ascending order".to_string(),
            help_visible: false,
        })
    }

    /// Move the keyboard cursor by whole cells, clamped to the grid
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let size = i32::from(self.settings.size);
        let row = (self.cursor as i32 / size + dy).clamp(0, size - 1);
        let col = (self.cursor as i32 % size + dx).clamp(0, size - 1);
        self.cursor = (row * size + col) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderMode, SymbolType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state() -> AppState {
        let mut rng = StdRng::seed_from_u64(7);
        AppState::new(Settings::default(), Preferences::default(), None, &mut rng).unwrap()
    }

    #[test]
    fn test_initial_mode_is_table() {
        let s = state();
        assert_eq!(s.mode, AppMode::Table);
        assert_eq!(s.cursor, 0);
        assert!(s.form.is_none());
        assert!(!s.help_visible);
    }

    #[test]
    fn test_cursor_clamps_to_grid() {
        let mut s = state(); // 5x5
        s.move_cursor(-1, -1);
        assert_eq!(s.cursor, 0);

        s.move_cursor(2, 3);
        assert_eq!(s.cursor, 3 * 5 + 2);

        for _ in 0..10 {
            s.move_cursor(1, 1);
        }
        assert_eq!(s.cursor, 24); // bottom-right
    }

    #[test]
    fn test_form_field_navigation() {
        let mut form = SettingsForm::new(Settings::default());
        form.move_up();
        assert_eq!(form.selected, 0);
        for _ in 0..10 {
            form.move_down();
        }
        assert_eq!(form.selected, FORM_FIELD_COUNT - 1);
    }

    #[test]
    fn test_form_cycles_size() {
        let mut form = SettingsForm::new(Settings::default()); // size 5
        form.adjust(1);
        assert_eq!(form.draft.size, 6);
        form.adjust(1); // wraps
        assert_eq!(form.draft.size, 3);
        form.adjust(-1);
        assert_eq!(form.draft.size, 6);
    }

    #[test]
    fn test_form_toggles_enums_and_flags() {
        let mut form = SettingsForm::new(Settings::default());
        form.selected = 1;
        form.adjust(1);
        assert_eq!(form.draft.symbol_type, SymbolType::Letters);

        form.selected = 2;
        form.adjust(-1);
        assert_eq!(form.draft.order, OrderMode::Sequential);

        form.selected = 5;
        form.adjust(1);
        assert!(!form.draft.shuffle_on_click);
    }

    #[test]
    fn test_form_scale_steps_and_clamps() {
        let mut form = SettingsForm::new(Settings::default());
        form.selected = 3;
        for _ in 0..20 {
            form.adjust(1);
        }
        assert!((form.draft.scale_factor - crate::settings::SCALE_MAX).abs() < 1e-9);
        for _ in 0..20 {
            form.adjust(-1);
        }
        assert!((form.draft.scale_factor - crate::settings::SCALE_MIN).abs() < 1e-9);
    }

    #[test]
    fn test_draft_does_not_touch_live_settings() {
        let s = state();
        let mut form = SettingsForm::new(s.settings);
        form.adjust(1);
        assert_eq!(s.settings.size, 5);
        assert_eq!(form.draft.size, 6);
    }
}

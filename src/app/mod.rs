//! Application module
//!
//! Contains the main application struct, the event loop, and input
//! handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, SettingsForm)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState, SettingsForm, FORM_FIELD_COUNT};

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::engine::timer::DISPLAY_RESOLUTION;
use crate::preferences::Preferences;
use crate::settings::Settings;
use crate::ui::UiRenderer;

/// Main application struct
pub struct App {
    state: AppState,
    rng: StdRng,
    ui_renderer: UiRenderer,
}

impl App {
    /// Create a new application instance
    pub fn new(
        settings: Settings,
        preferences: Preferences,
        prefs_path: Option<std::path::PathBuf>,
        seed: Option<u64>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Creating new App instance ({}x{} table)", settings.size, settings.size);

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = AppState::new(settings, preferences, prefs_path, &mut rng)?;

        Ok(Self {
            state,
            rng,
            ui_renderer: UiRenderer::new(),
        })
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Run the main application loop
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting main application loop");

        loop {
            // Run any delayed effects that came due (flash expiry,
            // scheduled reshuffle)
            self.state.session.tick(Instant::now(), &mut self.rng)?;

            // Handle input events
            if crossterm::event::poll(DISPLAY_RESOLUTION)? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event)? {
                            break; // Exit requested
                        }
                    }
                    Event::Mouse(mouse_event) => {
                        self.handle_mouse_event(mouse_event);
                    }
                    _ => {}
                }
            }

            // Render UI
            let now = Instant::now();
            terminal.draw(|f| {
                self.ui_renderer.render(f, &self.state, now);
            })?;
        }

        Ok(())
    }

    /// Handle keyboard input events. Returns `Ok(true)` when the user
    /// asked to quit.
    fn handle_key_event(
        &mut self,
        key_event: KeyEvent,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        // Windows terminals deliver both press and release
        if key_event.kind == KeyEventKind::Release {
            return Ok(false);
        }

        // Help overlay swallows input until dismissed
        if self.state.help_visible {
            match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
                    self.state.help_visible = false;
                }
                _ => {}
            }
            return Ok(false);
        }

        if key_event.code == KeyCode::Char('?') {
            self.toggle_help();
            return Ok(false);
        }

        match self.state.mode {
            AppMode::Table => self.handle_table_key(key_event),
            AppMode::Settings => {
                self.handle_settings_key(key_event)?;
                Ok(false)
            }
        }
    }

    /// Keys while playing
    fn handle_table_key(
        &mut self,
        key_event: KeyEvent,
    ) -> Result<bool, Box<dyn std::error::Error>> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                // Exit application
                return Ok(true);
            }
            KeyCode::Char('r') => {
                self.state.session.reset(&mut self.rng)?;
                self.state.cursor = 0;
                self.state.status_message = "New table".to_string();
            }
            KeyCode::Char('s') => {
                self.open_settings();
            }
            KeyCode::Char('t') => {
                self.toggle_theme()?;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.adjust_scale(1)?;
            }
            KeyCode::Char('-') => {
                self.adjust_scale(-1)?;
            }
            KeyCode::Up => self.state.move_cursor(0, -1),
            KeyCode::Down => self.state.move_cursor(0, 1),
            KeyCode::Left => self.state.move_cursor(-1, 0),
            KeyCode::Right => self.state.move_cursor(1, 0),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let cursor = self.state.cursor;
                self.click_cell(cursor);
            }
            _ => {}
        }
        Ok(false)
    }

    /// Keys while the settings panel is open
    fn handle_settings_key(
        &mut self,
        key_event: KeyEvent,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let Some(ref mut form) = self.state.form else {
            self.state.mode = AppMode::Table;
            return Ok(());
        };

        match key_event.code {
            KeyCode::Up => form.move_up(),
            KeyCode::Down => form.move_down(),
            KeyCode::Left => form.adjust(-1),
            KeyCode::Right => form.adjust(1),
            KeyCode::Enter => {
                self.apply_settings()?;
            }
            KeyCode::Esc => {
                // Throw the draft away
                self.state.form = None;
                self.state.mode = AppMode::Table;
                self.state.status_message = "Settings unchanged".to_string();
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle mouse input: left button press on a cell counts as a click
    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        if self.state.mode != AppMode::Table || self.state.help_visible {
            return;
        }
        if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if let Some(index) = self
            .ui_renderer
            .cell_at(mouse_event.column, mouse_event.row)
        {
            self.state.cursor = index;
            self.click_cell(index);
        }
    }

    /// Forward a cell activation to the session
    fn click_cell(&mut self, index: usize) {
        let outcome = self.state.session.handle_click(index, Instant::now());
        debug!("Cell {} clicked: {:?}", index, outcome);

        if let Some(msg) = self.state.session.status_message() {
            self.state.status_message = msg.to_string();
        }
    }

    /// Open the settings panel with a draft of the live settings
    fn open_settings(&mut self) {
        self.state.form = Some(SettingsForm::new(self.state.settings));
        self.state.mode = AppMode::Settings;
        self.state.status_message = "Adjust settings, Enter to apply".to_string();
    }

    /// Apply the settings draft and start a fresh game
    fn apply_settings(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let Some(form) = self.state.form.take() else {
            return Ok(());
        };
        let draft = form.draft;
        draft.validate()?;

        info!(
            "Applying settings: {}x{} {} {}",
            draft.size, draft.size, draft.symbol_type, draft.order
        );

        self.state.settings = draft;
        self.state.session.apply_settings(draft, &mut self.rng)?;
        self.state.cursor = 0;
        self.state.mode = AppMode::Table;
        self.state.status_message = "Settings applied".to_string();

        // Scale is a persisted preference as well as a setting
        if (self.state.preferences.scale_factor - draft.scale_factor).abs() > f64::EPSILON {
            self.state.preferences.scale_factor = draft.scale_factor;
            self.save_preferences();
        }

        Ok(())
    }

    /// Flip between light and dark and persist the choice
    fn toggle_theme(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.state.preferences.theme = self.state.preferences.theme.toggled();
        self.state.status_message = format!("Theme: {}", self.state.preferences.theme);
        self.save_preferences();
        Ok(())
    }

    /// Step the scale factor and persist it
    fn adjust_scale(&mut self, delta: i32) -> Result<(), Box<dyn std::error::Error>> {
        let stepped =
            self.state.settings.scale_factor + f64::from(delta) * crate::settings::SCALE_STEP;
        let clamped = Settings::clamp_scale(stepped);

        if (clamped - self.state.settings.scale_factor).abs() < f64::EPSILON {
            return Ok(());
        }

        self.state.settings.scale_factor = clamped;
        self.state.preferences.scale_factor = clamped;
        // The session snapshot drives rendering, so it needs the new
        // scale too; the table itself is untouched
        self.state.session.set_scale_factor(clamped);
        self.state.status_message = format!("Scale: {:.1}", clamped);
        self.save_preferences();
        Ok(())
    }

    /// Write preferences to disk, logging rather than failing on error
    fn save_preferences(&self) {
        let Some(ref path) = self.state.prefs_path else {
            return;
        };
        if let Err(e) = self.state.preferences.save_to_file(path) {
            log::warn!("Failed to save preferences: {:#}", e);
        }
    }

    /// Shared state, for tests
    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }
}

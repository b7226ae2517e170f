//! User interface rendering module
//!
//! The engine never touches the terminal; this module turns the current
//! `AppState` into widgets each frame.
//!
//! # Module Structure
//! - `table` - the cell grid plus mouse-to-cell geometry
//! - `panels` - header, status bar, settings popup, help overlay

pub mod panels;
pub mod table;

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};

use crate::app::{AppMode, AppState};
use crate::theme::{Theme, UiConstants};
pub use table::TableLayout;

/// Renders frames and remembers the grid geometry for mouse mapping
#[derive(Debug, Default)]
pub struct UiRenderer {
    table_layout: Option<TableLayout>,
}

impl UiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw one frame
    pub fn render(&mut self, f: &mut Frame, state: &AppState, now: Instant) {
        let theme = Theme::new(state.preferences.theme);

        f.render_widget(Block::default().style(theme.screen()), f.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(UiConstants::STATUS_BAR_HEIGHT),
            ])
            .split(f.area());

        panels::render_header(f, state, &theme, chunks[0]);
        self.table_layout = table::render_table(f, state, &theme, chunks[1]);
        panels::render_status_bar(f, state, &theme, chunks[2], now);

        if state.mode == AppMode::Settings {
            if let Some(ref form) = state.form {
                panels::render_settings_panel(f, form, &theme, chunks[1]);
            }
        }

        if state.help_visible {
            panels::render_help_overlay(f, &theme, f.area());
        }
    }

    /// Map a terminal coordinate to a cell index using the last frame's
    /// geometry
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        self.table_layout
            .and_then(|layout| layout.cell_at(column, row))
    }
}

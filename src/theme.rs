//! Centralized theme and styling for the TUI
//!
//! A single source of truth for all colors and styles. Unlike a fixed
//! palette this one is selected at runtime: the persisted `ThemeMode`
//! picks between the light and dark palettes and every widget asks the
//! active [`Theme`] for its style instead of hardcoding colors.

use ratatui::style::{Color, Modifier, Style};

use crate::types::ThemeMode;

/// Raw colors for one theme mode
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Screen background
    pub bg: Color,
    /// Default text
    pub fg: Color,
    /// Secondary/hint text
    pub muted: Color,
    /// Borders, titles, emphasis
    pub accent: Color,
    /// Found cells, completion message
    pub success: Color,
    /// Wrong-click flash
    pub error: Color,
    /// Cell box background
    pub cell_bg: Color,
    /// Cursor highlight background
    pub cursor_bg: Color,
    /// Text on top of highlight backgrounds
    pub highlight_fg: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                bg: Color::Rgb(245, 245, 240),
                fg: Color::Rgb(30, 30, 35),
                muted: Color::Rgb(120, 120, 125),
                accent: Color::Rgb(0, 95, 135),
                success: Color::Rgb(0, 135, 0),
                error: Color::Rgb(175, 0, 0),
                cell_bg: Color::Rgb(255, 255, 255),
                cursor_bg: Color::Rgb(215, 225, 235),
                highlight_fg: Color::Rgb(255, 255, 255),
            },
            ThemeMode::Dark => Self {
                bg: Color::Rgb(20, 20, 30),
                fg: Color::Rgb(220, 220, 225),
                muted: Color::Rgb(130, 130, 140),
                accent: Color::Cyan,
                success: Color::Green,
                error: Color::LightRed,
                cell_bg: Color::Rgb(30, 30, 40),
                cursor_bg: Color::Rgb(60, 60, 80),
                highlight_fg: Color::Rgb(20, 20, 30),
            },
        }
    }
}

/// Semantic style lookups over the active palette
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: ThemeMode,
    palette: Palette,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            palette: Palette::for_mode(mode),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Whole-screen background
    pub fn screen(&self) -> Style {
        Style::default().bg(self.palette.bg).fg(self.palette.fg)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.palette.accent)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.palette.fg)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.palette.muted)
    }

    // -------------------------------------------------------------------------
    // Cell styles
    // -------------------------------------------------------------------------

    /// Untouched cell
    pub fn cell(&self) -> Style {
        Style::default().fg(self.palette.fg).bg(self.palette.cell_bg)
    }

    /// Cell already found (or all cells, once completed)
    pub fn cell_correct(&self) -> Style {
        Style::default()
            .fg(self.palette.highlight_fg)
            .bg(self.palette.success)
            .add_modifier(Modifier::BOLD)
    }

    /// Wrong click, shown for the flash duration
    pub fn cell_incorrect(&self) -> Style {
        Style::default()
            .fg(self.palette.highlight_fg)
            .bg(self.palette.error)
            .add_modifier(Modifier::BOLD)
    }

    /// Keyboard cursor position
    pub fn cell_cursor(&self) -> Style {
        Style::default()
            .fg(self.palette.fg)
            .bg(self.palette.cursor_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// The fixation dot on the center cell
    pub fn center_dot(&self) -> Style {
        Style::default()
            .fg(self.palette.error)
            .add_modifier(Modifier::BOLD)
    }

    // -------------------------------------------------------------------------
    // Status bar styles
    // -------------------------------------------------------------------------

    /// The "next expected symbol" indicator
    pub fn next_symbol(&self) -> Style {
        Style::default()
            .fg(self.palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn timer(&self) -> Style {
        Style::default().fg(self.palette.fg)
    }

    /// Completion message
    pub fn status_success(&self) -> Style {
        Style::default()
            .fg(self.palette.success)
            .add_modifier(Modifier::BOLD)
    }

    // -------------------------------------------------------------------------
    // Settings panel styles
    // -------------------------------------------------------------------------

    /// Selected form field
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.palette.highlight_fg)
            .bg(self.palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn unselected(&self) -> Style {
        Style::default().fg(self.palette.fg)
    }
}

/// UI dimension constants
pub struct UiConstants;

impl UiConstants {
    /// Cell box width at scale 1.0 (columns)
    pub const BASE_CELL_WIDTH: u16 = 8;

    /// Cell box height at scale 1.0 (rows)
    pub const BASE_CELL_HEIGHT: u16 = 3;

    /// Minimum cell box dimensions after scaling
    pub const MIN_CELL_WIDTH: u16 = 4;
    pub const MIN_CELL_HEIGHT: u16 = 1;

    /// Settings panel dimensions
    pub const PANEL_WIDTH: u16 = 44;
    pub const PANEL_HEIGHT: u16 = 12;

    /// Status bar height
    pub const STATUS_BAR_HEIGHT: u16 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        let light = Palette::for_mode(ThemeMode::Light);
        let dark = Palette::for_mode(ThemeMode::Dark);
        assert_ne!(light.bg, dark.bg);
        assert_ne!(light.fg, dark.fg);
    }

    #[test]
    fn test_theme_lookups() {
        let theme = Theme::new(ThemeMode::Dark);
        let _ = theme.cell();
        let _ = theme.cell_correct();
        let _ = theme.selected();
        assert_eq!(theme.mode, ThemeMode::Dark);
    }
}

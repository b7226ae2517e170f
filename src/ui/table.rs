//! Table grid rendering
//!
//! Draws the cell grid centered in its area and records the resulting
//! geometry so mouse clicks can be mapped back to cell indices.

use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::engine::Phase;
use crate::theme::{Theme, UiConstants};

/// Geometry of the last rendered grid, for mouse-to-cell mapping
#[derive(Debug, Clone, Copy)]
pub struct TableLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_width: u16,
    pub cell_height: u16,
    pub size: u16,
}

impl TableLayout {
    /// Cell index under a terminal coordinate, if any
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        if column < self.origin_x || row < self.origin_y {
            return None;
        }
        let col = (column - self.origin_x) / self.cell_width;
        let r = (row - self.origin_y) / self.cell_height;
        if col >= self.size || r >= self.size {
            return None;
        }
        Some(usize::from(r) * usize::from(self.size) + usize::from(col))
    }
}

/// Render the grid. Returns the layout used, or `None` when the
/// terminal is too small to fit the table.
pub fn render_table(
    f: &mut Frame,
    state: &AppState,
    theme: &Theme,
    area: Rect,
) -> Option<TableLayout> {
    let size = state.settings.size;
    let scale = state.settings.scale_factor;

    let mut cell_width = scaled(UiConstants::BASE_CELL_WIDTH, scale, UiConstants::MIN_CELL_WIDTH);
    let mut cell_height =
        scaled(UiConstants::BASE_CELL_HEIGHT, scale, UiConstants::MIN_CELL_HEIGHT);

    // Shrink to fit the available area before giving up
    if cell_width * size > area.width {
        cell_width = (area.width / size).max(1);
    }
    if cell_height * size > area.height {
        cell_height = (area.height / size).max(1);
    }
    if cell_width < 2 || cell_width * size > area.width || cell_height * size > area.height {
        let msg = Paragraph::new("Terminal too small for this table")
            .alignment(Alignment::Center)
            .style(theme.hint());
        f.render_widget(msg, area);
        return None;
    }

    let grid_width = cell_width * size;
    let grid_height = cell_height * size;
    let origin_x = area.x + (area.width - grid_width) / 2;
    let origin_y = area.y + (area.height - grid_height) / 2;

    let layout = TableLayout {
        origin_x,
        origin_y,
        cell_width,
        cell_height,
        size,
    };

    for (index, cell) in state.session.cells().iter().enumerate() {
        let row = index as u16 / size;
        let col = index as u16 % size;
        let rect = Rect {
            x: origin_x + col * cell_width,
            y: origin_y + row * cell_height,
            width: cell_width,
            height: cell_height,
        };

        let style = cell_style(state, theme, index);
        let with_dot = cell.is_center
            && state.settings.show_center_dot
            && state.session.phase() == Phase::InProgress;

        // Bordered boxes when there is room, flat colored cells otherwise
        if cell_height >= 3 && cell_width >= 4 {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .style(style);
            let inner = block.inner(rect);
            f.render_widget(block, rect);
            render_label(f, &cell.symbol, with_dot, style, theme, inner);
        } else {
            render_label(f, &cell.symbol, with_dot, style, theme, rect);
        }
    }

    Some(layout)
}

/// Vertically centered label, with the fixation dot below when it fits
fn render_label(
    f: &mut Frame,
    symbol: &str,
    with_dot: bool,
    style: ratatui::style::Style,
    theme: &Theme,
    area: Rect,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let dot_fits = with_dot && area.height >= 2;
    let content_height = if dot_fits { 2 } else { 1 };
    let padding = (area.height.saturating_sub(content_height)) / 2;
    for _ in 0..padding {
        lines.push(Line::raw(""));
    }
    lines.push(Line::raw(symbol.to_string()));
    if dot_fits {
        lines.push(Line::styled("•", theme.center_dot()));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(style);
    f.render_widget(paragraph, area);
}

/// Style priority: incorrect flash > found > cursor > plain
fn cell_style(state: &AppState, theme: &Theme, index: usize) -> ratatui::style::Style {
    if state.session.flashing_cell() == Some(index) {
        theme.cell_incorrect()
    } else if state.session.is_cell_correct(index) {
        theme.cell_correct()
    } else if state.cursor == index && state.session.phase() == Phase::InProgress {
        theme.cell_cursor()
    } else {
        theme.cell()
    }
}

fn scaled(base: u16, scale: f64, min: u16) -> u16 {
    let value = (f64::from(base) * scale).round() as u16;
    value.max(min)
}

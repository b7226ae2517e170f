//! Status bar, settings panel, and help overlay rendering

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{AppState, SettingsForm};
use crate::theme::{Theme, UiConstants};

/// Title line across the top of the screen
pub fn render_header(f: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let title = Line::from(vec![
        Span::styled("Schulte Table Trainer", theme.title()),
        Span::styled(
            format!("  [{} theme]", state.preferences.theme),
            theme.hint(),
        ),
    ]);
    let header = Paragraph::new(title).alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Next-symbol indicator, timer, and status message
pub fn render_status_bar(f: &mut Frame, state: &AppState, theme: &Theme, area: Rect, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Min(20),
        ])
        .split(area);

    let next = match state.session.expected_symbol() {
        Some(symbol) => Line::from(vec![
            Span::styled("Next: ", theme.text()),
            Span::styled(symbol, theme.next_symbol()),
        ]),
        None => Line::styled("✓", theme.status_success()),
    };
    let next_widget = Paragraph::new(next)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border()));
    f.render_widget(next_widget, chunks[0]);

    let timer_widget = Paragraph::new(state.session.timer().display(now))
        .style(theme.timer())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(theme.border()));
    f.render_widget(timer_widget, chunks[1]);

    // Completion message wins over transient feedback
    let (message, style) = match state.session.status_message() {
        Some(done) => (done.to_string(), theme.status_success()),
        None => (state.status_message.clone(), theme.text()),
    };
    let status_widget = Paragraph::new(message)
        .style(style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(Span::styled(" q quit · ? help ", theme.hint())),
        );
    f.render_widget(status_widget, chunks[2]);
}

/// Settings form as a centered popup over the table
pub fn render_settings_panel(f: &mut Frame, form: &SettingsForm, theme: &Theme, area: Rect) {
    let popup = centered_rect(UiConstants::PANEL_WIDTH, UiConstants::PANEL_HEIGHT, area);
    f.render_widget(Clear, popup);

    let draft = &form.draft;
    let rows = [
        ("Table size", format!("{0} x {0}", draft.size)),
        ("Symbols", draft.symbol_type.to_string()),
        ("Order", draft.order.to_string()),
        ("Scale", format!("{:.1}", draft.scale_factor)),
        ("Center dot", on_off(draft.show_center_dot)),
        ("Shuffle on click", on_off(draft.shuffle_on_click)),
    ];

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(index, (label, value))| {
            let style = if index == form.selected {
                theme.selected()
            } else {
                theme.unselected()
            };
            let prefix = if index == form.selected { "▸ " } else { "  " };
            ListItem::new(format!("{}{:<18}◂ {} ▸", prefix, label, value)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(" Settings ", theme.title()))
            .title_bottom(Span::styled(" Enter apply · Esc cancel ", theme.hint())),
    );
    f.render_widget(list, popup);
}

/// Key reference overlay
pub fn render_help_overlay(f: &mut Frame, theme: &Theme, area: Rect) {
    let popup = centered_rect(40, 13, area);
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::raw("↑↓←→      move cursor"),
        Line::raw("Enter/Space  click cell"),
        Line::raw("Mouse     click cell"),
        Line::raw("s         settings"),
        Line::raw("r         reset table"),
        Line::raw("t         toggle theme"),
        Line::raw("+ / -     adjust scale"),
        Line::raw("q         quit"),
        Line::raw(""),
        Line::styled("? or Esc closes this help", theme.hint()),
    ];
    let help = Paragraph::new(lines).style(theme.text()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(" Keys ", theme.title())),
    );
    f.render_widget(help, popup);
}

fn on_off(value: bool) -> String {
    if value { "on" } else { "off" }.to_string()
}

/// Fixed-size rect centered in `area`, clamped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(44, 12, area);
        assert_eq!(popup.width, 44);
        assert_eq!(popup.height, 12);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
    }

    #[test]
    fn test_centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 20, 6);
        let popup = centered_rect(44, 12, area);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 6);
    }
}

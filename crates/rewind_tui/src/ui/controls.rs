//! Undo and reset buttons.

use super::layout::ScreenLayout;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the control bar; undo is dimmed when it would be ignored.
pub fn render_controls(f: &mut Frame, layout: &ScreenLayout, can_undo: bool) {
    let undo_style = if can_undo {
        Style::default().fg(Color::White)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };
    render_button(f, layout.undo, "⤺ Undo", undo_style);

    let reset_style = Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::BOLD);
    render_button(f, layout.reset, "↺ Reset", reset_style);
}

fn render_button(f: &mut Frame, area: Rect, label: &str, style: Style) {
    if area.is_empty() {
        return;
    }
    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    f.render_widget(button, area);
}

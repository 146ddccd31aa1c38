//! History chips for jumping between steps.

use super::layout::{ScreenLayout, chip_text};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::Snapshot;

/// Renders one chip per recorded step, highlighting the current one.
pub fn render_history(f: &mut Frame, layout: &ScreenLayout, snapshot: &Snapshot) {
    if layout.history.is_empty() {
        return;
    }

    let panel = Block::default()
        .borders(Borders::ALL)
        .title("History")
        .title_style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    f.render_widget(panel, layout.history);

    for (step, area) in layout.chips.iter().enumerate() {
        let style = if step == *snapshot.step() {
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::White)
        };
        let chip = Paragraph::new(chip_text(step, layout.compact_chips)).style(style);
        f.render_widget(chip, *area);
    }
}

//! UI rendering using ratatui.
//!
//! Every function here is a pure function of the application state:
//! it borrows the [`App`], reads one engine snapshot and draws.

mod board;
mod controls;
mod history;
pub mod layout;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Player, Snapshot};

pub use board::render_board;
pub use controls::render_controls;
pub use history::render_history;
pub use layout::{Region, ScreenLayout, chip_label, chip_text};

/// Colour used for a player's marks and badge.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Yellow,
    }
}

/// Draws the whole screen and returns the layout that was used.
pub fn draw(f: &mut Frame, app: &App) -> ScreenLayout {
    let snapshot = app.game().snapshot();
    let layout = ScreenLayout::compute(f.area(), snapshot.history().len());

    render_header(f, layout.header);
    render_status(f, layout.status, &snapshot);
    render_board(f, &layout, &snapshot, *app.cursor());
    render_controls(f, &layout, app.can_undo());
    render_history(f, &layout, &snapshot);
    render_help(f, layout.help);

    layout
}

fn render_header(f: &mut Frame, area: Rect) {
    let [title, subtitle] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let heading = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(heading, title);

    let blurb = Paragraph::new("Two-player classic. Take turns placing marks on the 3×3 grid.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(blurb, subtitle);
}

fn render_status(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let mut spans = vec![Span::styled(
        snapshot.status_text().clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    // The turn badge only makes sense while the game is still open.
    if snapshot.in_progress() {
        let player = *snapshot.current_player();
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" {} ", player),
            Style::default()
                .fg(Color::Black)
                .bg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Click or 1-9/Enter: move | U: undo | R: reset | [ ]: history | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(help, area);
}

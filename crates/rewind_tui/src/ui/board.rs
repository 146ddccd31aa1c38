//! Tic-tac-toe board rendering.

use super::layout::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout};
use super::player_color;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use rewind_tictactoe::{Position, Snapshot, Square};

/// Renders the board with the winning line and cursor highlighted.
pub fn render_board(f: &mut Frame, layout: &ScreenLayout, snapshot: &Snapshot, cursor: Position) {
    let board = layout.board;
    if board.is_empty() {
        return;
    }

    // Grid lines sit in the one-cell gaps between cells.
    for i in 1..3u16 {
        let y = board.y + i * (CELL_HEIGHT + 1) - 1;
        render_separator(f, Rect::new(board.x, y, board.width, 1).intersection(board));
        let x = board.x + i * (CELL_WIDTH + 1) - 1;
        render_vertical_sep(f, Rect::new(x, board.y, 1, board.height).intersection(board));
    }

    for pos in Position::ALL {
        render_square(f, layout.cells[pos.to_index()], snapshot, pos, cursor);
    }
}

fn render_square(f: &mut Frame, area: Rect, snapshot: &Snapshot, pos: Position, cursor: Position) {
    if area.is_empty() {
        return;
    }

    let (text, mut style) = match snapshot.board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if snapshot.is_winning_cell(pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically centre the mark inside the cell.
    let mut lines = vec![Line::from(""); (area.height / 2) as usize];
    lines.push(Line::from(text));
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    if area.is_empty() {
        return;
    }
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    if area.is_empty() {
        return;
    }
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

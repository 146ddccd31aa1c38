//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Position as ScreenPosition, Rect};
use rewind_tictactoe::Position;

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 11;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Full board width: three cells and two separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Full board height: three cells and two separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const BUTTON_WIDTH: u16 = 12;
const BUTTON_GAP: u16 = 2;

/// A clickable part of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// A board cell.
    Cell(Position),
    /// The undo button.
    Undo,
    /// The reset button.
    Reset,
    /// The history chip for a step.
    Chip(usize),
}

/// Every rectangle drawn on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title and subtitle.
    pub header: Rect,
    /// Status line with turn badge.
    pub status: Rect,
    /// Bounding box of the board.
    pub board: Rect,
    /// One rectangle per cell, in index order.
    pub cells: [Rect; 9],
    /// Undo button.
    pub undo: Rect,
    /// Reset button.
    pub reset: Rect,
    /// Bordered history panel.
    pub history: Rect,
    /// One rectangle per visible history chip, in step order.
    pub chips: Vec<Rect>,
    /// Chips use short labels (`[S] [1] ...`) because full ones did not fit.
    pub compact_chips: bool,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Lays out the screen for a terminal `area` and `history_len` chips.
    pub fn compute(area: Rect, history_len: usize) -> Self {
        let [header, status, board_area, controls, history, help] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(BOARD_HEIGHT),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let board = center_rect(board_area, BOARD_WIDTH, BOARD_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            Rect::new(
                board.x + pos.col() as u16 * (CELL_WIDTH + 1),
                board.y + pos.row() as u16 * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board)
        });

        let buttons = center_rect(controls, BUTTON_WIDTH * 2 + BUTTON_GAP, 3);
        let [undo, _, reset] = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(BUTTON_GAP),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .areas(buttons);

        let chip_area = inner(history);
        let mut compact_chips = false;
        let mut chips = chip_rects(chip_area, history_len, compact_chips);
        if chips.len() < history_len {
            compact_chips = true;
            chips = chip_rects(chip_area, history_len, compact_chips);
        }

        Self {
            header,
            status,
            board,
            cells,
            undo,
            reset,
            history,
            chips,
            compact_chips,
            help,
        }
    }

    /// Returns the clickable region under a terminal cell, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Region> {
        let point = ScreenPosition::new(column, row);

        if let Some(index) = self.cells.iter().position(|r| r.contains(point)) {
            return Position::from_index(index).map(Region::Cell);
        }
        if self.undo.contains(point) {
            return Some(Region::Undo);
        }
        if self.reset.contains(point) {
            return Some(Region::Reset);
        }
        self.chips
            .iter()
            .position(|r| r.contains(point))
            .map(Region::Chip)
    }
}

/// Label shown on the chip for a history step.
pub fn chip_label(step: usize) -> String {
    if step == 0 {
        "Start".to_string()
    } else {
        format!("Move {}", step)
    }
}

/// Bracketed chip text, optionally shortened to `S` or the move number.
pub fn chip_text(step: usize, compact: bool) -> String {
    match (compact, step) {
        (false, _) => format!("[{}]", chip_label(step)),
        (true, 0) => "[S]".to_string(),
        (true, _) => format!("[{}]", step),
    }
}

/// Packs chips left to right, wrapping rows, dropping what does not fit.
fn chip_rects(area: Rect, count: usize, compact: bool) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(count);
    let (mut x, mut y) = (area.x, area.y);

    for step in 0..count {
        let width = chip_text(step, compact).len() as u16;
        if x > area.x && x + width > area.right() {
            x = area.x;
            y += 1;
        }
        if y >= area.bottom() || x + width > area.right() {
            break;
        }
        rects.push(Rect::new(x, y, width, 1));
        x += width + 1;
    }

    rects
}

fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
///
/// Rows top to bottom, then columns left to right, then the two
/// diagonals. When several lines are complete at once the first one
/// in this order is reported.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who made it and which cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinnerInfo {
    /// The player owning all three cells.
    player: Player,
    /// The three cells of the line.
    line: [Position; 3],
}

impl WinnerInfo {
    /// Returns the winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the three cells of the winning line.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// Checks whether the position is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line of [`WIN_LINES`] whose three squares hold
/// the same player, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<WinnerInfo> {
    for line @ [a, b, c] in WIN_LINES {
        let sq = board.get(a);
        if sq == board.get(b)
            && sq == board.get(c)
            && let Square::Occupied(player) = sq
        {
            return Some(WinnerInfo { player, line });
        }
    }

    None
}

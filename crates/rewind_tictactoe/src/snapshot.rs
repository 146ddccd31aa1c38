//! Read-only view of the game handed to renderers.

use super::rules::WinnerInfo;
use super::{Board, Player, Position};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw one frame.
///
/// Snapshots are plain values; mutating the game afterwards does not
/// affect a snapshot already taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Snapshot {
    /// Board at the current step.
    board: Board,
    /// Player to move at the current step.
    current_player: Player,
    /// Completed line on the current board.
    winner: Option<WinnerInfo>,
    /// Whether the current board is a draw.
    draw: bool,
    /// Every recorded board, starting with the empty one.
    history: Vec<Board>,
    /// Index into `history` of the displayed board.
    step: usize,
    /// Status line for the current step.
    status_text: String,
}

impl Snapshot {
    /// Checks whether moves can still be made on the displayed board.
    pub fn in_progress(&self) -> bool {
        self.winner.is_none() && !self.draw
    }

    /// Checks whether `pos` belongs to the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winner.is_some_and(|info| info.contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use crate::Game;

    #[test]
    fn test_in_progress_until_win_or_draw() {
        assert!(Game::new().snapshot().in_progress());
        assert!(Game::from_moves([0, 4, 8]).snapshot().in_progress());
        assert!(!Game::from_moves([0, 3, 1, 4, 2]).snapshot().in_progress());
        assert!(!Game::from_moves([0, 1, 2, 4, 3, 5, 7, 6, 8]).snapshot().in_progress());
    }

    #[test]
    fn test_winning_cells_follow_line() {
        let snapshot = Game::from_moves([0, 3, 1, 4, 2]).snapshot();
        assert!(snapshot.is_winning_cell(crate::Position::TopCenter));
        assert!(!snapshot.is_winning_cell(crate::Position::Center));
    }
}

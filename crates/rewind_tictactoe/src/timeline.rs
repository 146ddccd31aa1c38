//! Board history with a movable cursor.
//!
//! The timeline stores every board snapshot since the empty board
//! and a `step` pointing at the one on display. Moving the step back
//! keeps the later snapshots around until something new is recorded,
//! at which point the discarded branch is dropped.

use super::{Board, Move, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Linear board history plus the displayed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub(crate) boards: Vec<Board>,
    pub(crate) step: usize,
}

impl Timeline {
    /// Creates a timeline holding only the empty board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            step: 0,
        }
    }

    /// Returns the board at the current step.
    pub fn current(&self) -> &Board {
        // `step < boards.len()` and `boards` is never empty.
        &self.boards[self.step]
    }

    /// Returns the current step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns every recorded board, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Number of recorded boards (always at least one).
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// A timeline always holds the initial board.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Records `board` as the successor of the current step.
    ///
    /// Everything after the current step is discarded first.
    #[instrument(skip(self, board), fields(step = self.step, len = self.boards.len()))]
    pub fn record(&mut self, board: Board) {
        let discarded = self.boards.len() - (self.step + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating future history");
        }
        self.boards.truncate(self.step + 1);
        self.boards.push(board);
        self.step += 1;
    }

    /// Moves the cursor to `step` if it names a recorded board.
    #[instrument(skip(self), fields(len = self.boards.len()))]
    pub fn seek(&mut self, step: usize) -> bool {
        if step < self.boards.len() {
            self.step = step;
            true
        } else {
            debug!("Seek target out of range");
            false
        }
    }

    /// Returns the move that produced the board at `step`.
    ///
    /// `None` for the initial board, for out-of-range steps, and for
    /// entries that do not differ from their predecessor by a single mark.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        if step == 0 {
            return None;
        }
        let before = self.boards.get(step - 1)?;
        let after = self.boards.get(step)?;

        let mut changed = Position::ALL
            .iter()
            .copied()
            .filter(|pos| before.get(*pos) != after.get(*pos));
        let position = changed.next()?;
        if changed.next().is_some() {
            return None;
        }
        let player = after.get(position).player()?;
        Some(Move::new(player, position))
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    fn with_mark(board: &Board, pos: Position, player: Player) -> Board {
        let mut next = *board;
        next.set(pos, Square::Occupied(player));
        next
    }

    #[test]
    fn test_new_timeline_has_empty_board() {
        let timeline = Timeline::new();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.step(), 0);
        assert_eq!(*timeline.current(), Board::new());
    }

    #[test]
    fn test_record_advances_step() {
        let mut timeline = Timeline::new();
        let next = with_mark(timeline.current(), Position::Center, Player::X);
        timeline.record(next);
        assert_eq!(timeline.step(), 1);
        assert_eq!(timeline.len(), 2);
        assert_eq!(*timeline.current(), next);
    }

    #[test]
    fn test_seek_out_of_range_is_ignored() {
        let mut timeline = Timeline::new();
        assert!(!timeline.seek(1));
        assert_eq!(timeline.step(), 0);
        assert!(timeline.seek(0));
    }

    #[test]
    fn test_record_after_seek_discards_future() {
        let mut timeline = Timeline::new();
        let a = with_mark(timeline.current(), Position::TopLeft, Player::X);
        timeline.record(a);
        let b = with_mark(timeline.current(), Position::Center, Player::O);
        timeline.record(b);
        let c = with_mark(timeline.current(), Position::TopRight, Player::X);
        timeline.record(c);
        assert_eq!(timeline.len(), 4);

        assert!(timeline.seek(1));
        assert_eq!(timeline.len(), 4, "seeking keeps the future");

        let branch = with_mark(timeline.current(), Position::BottomLeft, Player::O);
        timeline.record(branch);
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.step(), 2);
        assert_eq!(*timeline.current(), branch);
    }

    #[test]
    fn test_move_at_reports_changed_cell() {
        let mut timeline = Timeline::new();
        let a = with_mark(timeline.current(), Position::BottomRight, Player::X);
        timeline.record(a);

        assert_eq!(timeline.move_at(0), None);
        assert_eq!(
            timeline.move_at(1),
            Some(Move::new(Player::X, Position::BottomRight))
        );
        assert_eq!(timeline.move_at(2), None);
    }
}

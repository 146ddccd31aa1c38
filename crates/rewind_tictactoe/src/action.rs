//! First-class move and outcome types.
//!
//! A move is the single cell that changed between two adjacent
//! history entries. Outcomes describe what `play` did with an
//! intent; they are diagnostics, never errors.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player placed their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a play request left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredReason {
    /// The index does not name a cell.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The game already has a winner.
    #[display("Game is already won")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Result of a play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayOutcome {
    /// The mark was placed and the history advanced.
    #[display("Placed {}", _0)]
    Placed(Move),

    /// Nothing changed.
    #[display("Ignored: {}", _0)]
    Ignored(IgnoredReason),
}

impl PlayOutcome {
    /// Returns true if the move was applied.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed(_))
    }
}

//! Rewind tic-tac-toe engine - game state with time travel.
//!
//! The engine owns a linear history of boards and a step pointing at
//! the displayed one. Everything a renderer shows (winner, draw, whose
//! turn, status line) is derived from the board at that step.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 4, 1, 5, 2] {
//!     game.play(index);
//! }
//! assert_eq!(game.winner().map(|w| w.player()), Some(Player::X));
//! assert_eq!(game.status_text(), "Player X wins!");
//!
//! // Step back and branch: the old future is discarded.
//! game.jump_to(3);
//! game.play(8);
//! assert_eq!(game.history().len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod timeline;
mod types;

pub use action::{IgnoredReason, Move, PlayOutcome};
pub use game::{Game, Status};
pub use invariants::{
    AlternatingMarksInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    SingleCellGrowthInvariant, StepInBoundsInvariant, assert_invariants,
};
pub use position::Position;
pub use rules::{WIN_LINES, WinnerInfo};
pub use snapshot::Snapshot;
pub use timeline::Timeline;
pub use types::{Board, Player, Square};

//! Step bounds invariant: the cursor always names a recorded board.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: `step < history.len()` and history starts empty.
pub struct StepInBoundsInvariant;

impl Invariant<Game> for StepInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        game.step() < history.len() && history.first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "Step points into history and history starts with the empty board"
    }
}

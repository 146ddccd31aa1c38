//! Single-cell growth invariant: each step fills exactly one new square.

use super::super::{Game, Position};
use super::Invariant;

/// Invariant: every history entry is its predecessor plus one mark.
///
/// Squares filled earlier never change and exactly one empty square
/// becomes occupied per step.
pub struct SingleCellGrowthInvariant;

impl Invariant<Game> for SingleCellGrowthInvariant {
    fn holds(game: &Game) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let kept = Position::ALL
                .iter()
                .all(|&pos| before.is_empty(pos) || before.get(pos) == after.get(pos));
            kept && after.filled() == before.filled() + 1
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark and never overwrites"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_played_game_holds() {
        let game = Game::from_moves([4, 0, 8, 2, 6]);
        assert!(SingleCellGrowthInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = Game::from_moves([4, 0]);
        game.timeline.boards[2].set(Position::Center, Square::Occupied(Player::O));
        assert!(!SingleCellGrowthInvariant::holds(&game));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut game = Game::from_moves([4]);
        game.timeline.boards[1].set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!SingleCellGrowthInvariant::holds(&game));
    }
}

//! Alternating marks invariant: X fills odd entries, O fills even ones.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: the mark added at history entry `k` belongs to the
/// player whose turn it was at step `k - 1`.
pub struct AlternatingMarksInvariant;

impl Invariant<Game> for AlternatingMarksInvariant {
    fn holds(game: &Game) -> bool {
        (1..game.history().len()).all(|step| {
            game.move_at(step)
                .is_some_and(|action| action.player() == Player::for_step(step - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_played_game_holds() {
        let game = Game::from_moves([0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = Game::from_moves([0, 1]);
        game.timeline.boards[2].set(Position::TopCenter, Square::Occupied(Player::X));
        assert!(!AlternatingMarksInvariant::holds(&game));
    }
}

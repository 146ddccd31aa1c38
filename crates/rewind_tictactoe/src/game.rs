//! Game state engine with time travel.

use super::action::{IgnoredReason, Move, PlayOutcome};
use super::invariants::assert_invariants;
use super::rules::{self, WinnerInfo};
use super::snapshot::Snapshot;
use super::timeline::Timeline;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Derived game status at the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player completed a line.
    #[display("Player {} wins!", _0)]
    Won(Player),
    /// Every square is filled without a line.
    #[display("It's a draw.")]
    Draw,
    /// Waiting for the given player.
    #[display("Player {}'s turn", _0)]
    Turn(Player),
}

/// Tic-tac-toe engine.
///
/// Owns the board history and the displayed step. Every query is
/// evaluated against the board at the current step, so jumping back
/// in time also rewinds the winner, draw and turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    pub(crate) timeline: Timeline,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            timeline: Timeline::new(),
        }
    }

    /// Builds a game by playing each cell index in order.
    ///
    /// Indices that `play` would ignore are ignored here too.
    #[instrument(skip(indices))]
    pub fn from_moves(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut game = Self::new();
        for index in indices {
            game.play(index);
        }
        game
    }

    /// Places the current player's mark at cell `index` (0-8).
    ///
    /// Out-of-range indices, occupied squares and moves after a win
    /// leave the game untouched. Playing from an earlier step discards
    /// every later step before recording the new board.
    #[instrument(skip(self), fields(step = self.timeline.step()))]
    pub fn play(&mut self, index: usize) -> PlayOutcome {
        let outcome = self.try_play(index);
        match &outcome {
            PlayOutcome::Placed(action) => debug!(%action, "Move applied"),
            PlayOutcome::Ignored(reason) => debug!(%reason, "Move ignored"),
        }
        outcome
    }

    fn try_play(&mut self, index: usize) -> PlayOutcome {
        let Some(position) = Position::from_index(index) else {
            return PlayOutcome::Ignored(IgnoredReason::OutOfRange(index));
        };

        if self.winner().is_some() {
            return PlayOutcome::Ignored(IgnoredReason::GameOver);
        }

        let current = self.board();
        if !current.is_empty(position) {
            return PlayOutcome::Ignored(IgnoredReason::SquareOccupied(position));
        }

        let player = self.current_player();
        let mut next = *current;
        next.set(position, Square::Occupied(player));
        self.timeline.record(next);

        assert_invariants(self);

        PlayOutcome::Placed(Move::new(player, position))
    }

    /// Moves the displayed step to `step`.
    ///
    /// Later steps are kept so the player can navigate forward again.
    /// Returns false, changing nothing, when `step` is not recorded.
    #[instrument(skip(self), fields(from = self.timeline.step()))]
    pub fn jump_to(&mut self, step: usize) -> bool {
        let applied = self.timeline.seek(step);
        if applied {
            debug!(to = step, "Jumped");
        }
        applied
    }

    /// Starts over with an empty board and X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded = self.timeline.len(), "Resetting game");
        self.timeline = Timeline::new();
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        self.timeline.current()
    }

    /// Returns the current step.
    pub fn step(&self) -> usize {
        self.timeline.step()
    }

    /// Returns every recorded board, starting with the empty one.
    pub fn history(&self) -> &[Board] {
        self.timeline.boards()
    }

    /// Returns the move that produced history entry `step`.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        self.timeline.move_at(step)
    }

    /// Returns the player to move, derived from step parity.
    pub fn current_player(&self) -> Player {
        Player::for_step(self.step())
    }

    /// Returns the completed line on the current board, if any.
    pub fn winner(&self) -> Option<WinnerInfo> {
        rules::check_winner(self.board())
    }

    /// Checks if the current board is full without a winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.board())
    }

    /// Returns the derived status at the current step.
    pub fn status(&self) -> Status {
        if let Some(info) = self.winner() {
            Status::Won(info.player())
        } else if self.is_draw() {
            Status::Draw
        } else {
            Status::Turn(self.current_player())
        }
    }

    /// Returns the status line shown to players.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Captures a read-only view of everything a renderer needs.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            *self.board(),
            self.current_player(),
            self.winner(),
            self.is_draw(),
            self.history().to_vec(),
            self.step(),
            self.status_text(),
        )
    }
}

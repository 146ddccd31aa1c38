//! Application state and intent dispatch.

use derive_getters::Getters;
use rewind_tictactoe::{Game, Position};
use tracing::{debug, info, instrument};

/// Arrow-key direction for the cell cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

/// A user action, decoupled from the event that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Place the current player's mark at a cell index.
    Play(usize),
    /// Step back one move (only while undo is enabled).
    Undo,
    /// Start a fresh game.
    Reset,
    /// Show the board at a history step.
    JumpTo(usize),
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Leave the application.
    Quit,
}

/// Main application state.
///
/// Owns the single game instance; renderers borrow it read-only.
#[derive(Debug, Getters)]
pub struct App {
    game: Game,
    cursor: Position,
    running: bool,
}

impl App {
    /// Creates an application around an existing game.
    #[instrument(skip(game), fields(step = game.step()))]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            cursor: Position::Center,
            running: true,
        }
    }

    /// Undo is offered only with a previous step and no winner on the board.
    pub fn can_undo(&self) -> bool {
        self.game.step() > 0 && self.game.winner().is_none()
    }

    /// Applies an intent to the game or the UI state.
    #[instrument(skip(self), fields(step = self.game.step()))]
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::Play(index) => {
                let outcome = self.game.play(index);
                debug!(%outcome, board = %self.game.board().display(), "Play");
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
            }
            Intent::Undo => {
                if self.can_undo() {
                    self.game.jump_to(self.game.step() - 1);
                } else {
                    debug!("Undo disabled");
                }
            }
            Intent::Reset => {
                self.game.reset();
            }
            Intent::JumpTo(step) => {
                if !self.game.jump_to(step) {
                    debug!(step, "Jump target not in history");
                }
            }
            Intent::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Intent::Quit => {
                info!("User quit");
                self.running = false;
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Game::new())
    }
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Left), Position::BottomCenter);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
    }

    #[test]
    fn test_cursor_never_leaves_board() {
        for pos in Position::ALL {
            for direction in Direction::iter() {
                let moved = move_cursor(pos, direction);
                let distance = moved.row().abs_diff(pos.row()) + moved.col().abs_diff(pos.col());
                assert!(distance <= 1, "{pos} {direction} -> {moved}");
            }
        }
    }

    #[test]
    fn test_play_moves_cursor_to_cell() {
        let mut app = App::default();
        app.dispatch(Intent::Play(8));
        assert_eq!(*app.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_quit_stops_app() {
        let mut app = App::default();
        assert!(*app.running());
        app.dispatch(Intent::Quit);
        assert!(!*app.running());
    }
}

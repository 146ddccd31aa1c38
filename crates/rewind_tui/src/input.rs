//! Translation of terminal events into intents.

use crate::app::{App, Direction, Intent};
use crate::ui::{Region, ScreenLayout};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::trace;

/// Maps a key press to an intent.
///
/// Key releases and unbound keys produce nothing.
pub fn intent_for_key(key: KeyEvent, app: &App) -> Option<Intent> {
    // Skip key release events (crossterm fires both press and release on some platforms).
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let step = app.game().step();
    let last = app.game().history().len() - 1;

    let intent = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Intent::Quit,
        KeyCode::Char('u') | KeyCode::Char('U') => Intent::Undo,
        KeyCode::Char('r') | KeyCode::Char('R') => Intent::Reset,
        KeyCode::Char(c @ '1'..='9') => Intent::Play(c as usize - '1' as usize),
        KeyCode::Enter | KeyCode::Char(' ') => Intent::Play(app.cursor().to_index()),
        KeyCode::Up => Intent::MoveCursor(Direction::Up),
        KeyCode::Down => Intent::MoveCursor(Direction::Down),
        KeyCode::Left => Intent::MoveCursor(Direction::Left),
        KeyCode::Right => Intent::MoveCursor(Direction::Right),
        KeyCode::Char('[') if step > 0 => Intent::JumpTo(step - 1),
        KeyCode::Char(']') if step < last => Intent::JumpTo(step + 1),
        KeyCode::Home => Intent::JumpTo(0),
        KeyCode::End => Intent::JumpTo(last),
        _ => return None,
    };

    trace!(code = ?key.code, ?intent, "Key mapped");
    Some(intent)
}

/// Maps a left click to the intent of the region under it.
pub fn intent_for_mouse(mouse: MouseEvent, layout: &ScreenLayout) -> Option<Intent> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let intent = match layout.hit(mouse.column, mouse.row)? {
        Region::Cell(pos) => Intent::Play(pos.to_index()),
        Region::Undo => Intent::Undo,
        Region::Reset => Intent::Reset,
        Region::Chip(step) => Intent::JumpTo(step),
    };

    trace!(column = mouse.column, row = mouse.row, ?intent, "Click mapped");
    Some(intent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use ratatui::layout::Rect;
    use rewind_tictactoe::{Game, Position};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_digits_play_cells() {
        let app = App::default();
        assert_eq!(intent_for_key(press(KeyCode::Char('1')), &app), Some(Intent::Play(0)));
        assert_eq!(intent_for_key(press(KeyCode::Char('9')), &app), Some(Intent::Play(8)));
        assert_eq!(intent_for_key(press(KeyCode::Char('0')), &app), None);
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let app = App::default();
        assert_eq!(
            intent_for_key(press(KeyCode::Enter), &app),
            Some(Intent::Play(Position::Center.to_index()))
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let app = App::default();
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(intent_for_key(release, &app), None);
    }

    #[test]
    fn test_brackets_step_through_history() {
        let mut app = App::new(Game::from_moves([0, 4, 8]));
        assert_eq!(intent_for_key(press(KeyCode::Char(']')), &app), None);
        assert_eq!(
            intent_for_key(press(KeyCode::Char('[')), &app),
            Some(Intent::JumpTo(2))
        );

        app.dispatch(Intent::JumpTo(0));
        assert_eq!(intent_for_key(press(KeyCode::Char('[')), &app), None);
        assert_eq!(
            intent_for_key(press(KeyCode::Char(']')), &app),
            Some(Intent::JumpTo(1))
        );
        assert_eq!(intent_for_key(press(KeyCode::End), &app), Some(Intent::JumpTo(3)));
    }

    #[test]
    fn test_click_maps_regions() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 40), 3);
        let cell = layout.cells[Position::BottomLeft.to_index()];
        assert_eq!(
            intent_for_mouse(click(cell.x + 2, cell.y + 1), &layout),
            Some(Intent::Play(6))
        );
        assert_eq!(
            intent_for_mouse(click(layout.undo.x + 1, layout.undo.y + 1), &layout),
            Some(Intent::Undo)
        );
        let chip = layout.chips[1];
        assert_eq!(intent_for_mouse(click(chip.x, chip.y), &layout), Some(Intent::JumpTo(1)));
    }

    #[test]
    fn test_non_left_clicks_ignored() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 40), 1);
        let cell = layout.cells[0];
        let mut event = click(cell.x + 1, cell.y + 1);
        event.kind = MouseEventKind::Moved;
        assert_eq!(intent_for_mouse(event, &layout), None);
        event.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(intent_for_mouse(event, &layout), None);
    }
}

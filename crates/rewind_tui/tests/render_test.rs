//! Rendering tests against ratatui's in-memory backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rewind_tictactoe::Game;
use rewind_tui::ui::{self, ScreenLayout};
use rewind_tui::{App, Intent, handle_event};

const WIDTH: u16 = 90;
const HEIGHT: u16 = 40;

fn render(app: &App) -> (String, ScreenLayout) {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal");
    let mut layout = None;
    terminal
        .draw(|f| layout = Some(ui::draw(f, app)))
        .expect("draw should succeed");
    let text = buffer_text(terminal.backend().buffer());
    (text, layout.expect("layout recorded"))
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_renders_initial_status() {
    let (text, _) = render(&App::default());
    assert!(text.contains("Tic Tac Toe"));
    assert!(text.contains("Player X's turn"));
    assert!(text.contains("[Start]"));
    assert!(!text.contains("Move 1"));
}

#[test]
fn test_renders_winner_and_history() {
    let (text, _) = render(&App::new(Game::from_moves([0, 4, 1, 5, 2])));
    assert!(text.contains("Player X wins!"));
    for step in 1..=5 {
        assert!(text.contains(&format!("[Move {step}]")), "missing chip {step}");
    }
}

#[test]
fn test_renders_draw() {
    let (text, _) = render(&App::new(Game::from_moves([0, 1, 2, 4, 3, 5, 7, 6, 8])));
    assert!(text.contains("It's a draw."));
}

#[test]
fn test_click_on_drawn_cell_plays_there() {
    let mut app = App::default();
    let (_, layout) = render(&app);

    let cell = layout.cells[6];
    let click = crossterm::event::Event::Mouse(crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
        column: cell.x + 1,
        row: cell.y + 1,
        modifiers: crossterm::event::KeyModifiers::NONE,
    });

    let intent = handle_event(&click, &app, &layout).expect("cell click maps to an intent");
    assert_eq!(intent, Intent::Play(6));
    app.dispatch(intent);

    let (text, _) = render(&app);
    assert!(text.contains("Player O's turn"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let app = App::new(Game::from_moves([0, 4, 1]));
    let mut terminal = Terminal::new(TestBackend::new(20, 8)).expect("test terminal");
    terminal
        .draw(|f| {
            ui::draw(f, &app);
        })
        .expect("draw should succeed");
}

#[test]
fn test_full_game_history_visible_on_80x24() {
    let app = App::new(Game::from_moves([0, 1, 2, 4, 3, 5, 7, 6, 8]));
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");
    let mut layout = None;
    terminal
        .draw(|f| layout = Some(ui::draw(f, &app)))
        .expect("draw should succeed");
    let text = buffer_text(terminal.backend().buffer());
    let layout = layout.expect("layout recorded");

    assert!(text.contains("It's a draw."));
    assert!(text.contains("[Move 9]"));
    assert_eq!(layout.chips.len(), 10);
}

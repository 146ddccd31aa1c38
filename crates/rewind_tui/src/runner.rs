//! Terminal setup and the event loop.

use crate::app::{App, Intent};
use crate::config::TuiConfig;
use crate::input::{intent_for_key, intent_for_mouse};
use crate::ui::{self, ScreenLayout};
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::sync::Once;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

/// Installs a file-backed tracing subscriber.
///
/// Logs never go to the terminal, which the UI owns. `RUST_LOG`
/// wins over the configured filter.
pub fn init_logging(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs `restore` when dropped, including during unwinding.
pub(crate) struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        (self.restore)();
    }
}

/// Leaves raw mode, the alternate screen and mouse capture.
///
/// Errors are logged and skipped so every step gets a chance to run.
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

/// Restores the terminal before the default panic message is printed.
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}

/// Switches the terminal into UI mode; the guard switches it back.
fn enter_terminal() -> Result<TerminalGuard<fn()>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let guard = TerminalGuard::new(restore_terminal as fn());
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    Ok(guard)
}

/// Runs the UI on the real terminal until the user quits.
///
/// The terminal is restored on every exit path before an error is
/// returned.
pub fn run(config: &TuiConfig, app: App) -> Result<()> {
    info!("Starting rewind TUI");

    install_panic_hook();
    let guard = enter_terminal()?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| run_app(&mut terminal, app, config));
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("TUI stopped");
    res.map(|_| ())
}

/// Polls, dispatches and redraws until the app stops running.
#[instrument(skip_all, fields(tick_ms = *config.tick_ms()))]
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, config: &TuiConfig) -> Result<App>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while *app.running() {
        let mut layout = None;
        terminal.draw(|f| layout = Some(ui::draw(f, &app)))?;

        if event::poll(config.tick())? {
            let event = event::read()?;
            if let Some(layout) = &layout
                && let Some(intent) = handle_event(&event, &app, layout)
            {
                app.dispatch(intent);
            }
        }
    }

    Ok(app)
}

/// Maps one terminal event to an intent using the last drawn layout.
pub fn handle_event(event: &Event, app: &App, layout: &ScreenLayout) -> Option<Intent> {
    let intent = match event {
        Event::Key(key) => intent_for_key(*key, app),
        Event::Mouse(mouse) => intent_for_mouse(*mouse, layout),
        Event::Resize(width, height) => {
            debug!(width, height, "Terminal resized");
            None
        }
        _ => None,
    };
    if let Some(intent) = intent {
        debug!(?intent, "Dispatching");
    }
    intent
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn failing_setup(restored: &Cell<u32>) -> Result<()> {
        let _guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
        Err(anyhow::anyhow!("backend unavailable"))
    }

    #[test]
    fn test_guard_restores_on_error_return() {
        let restored = Cell::new(0);
        assert!(failing_setup(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let restored = Cell::new(0);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
            panic!("draw failed");
        }));
        assert!(result.is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_guard_restores_once_on_normal_exit() {
        let restored = Cell::new(0);
        {
            let _guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
            assert_eq!(restored.get(), 0);
        }
        assert_eq!(restored.get(), 1);
    }
}

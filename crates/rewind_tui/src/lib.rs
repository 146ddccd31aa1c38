//! Rewind terminal UI - hot-seat tic-tac-toe with undo and time travel.
//!
//! # Architecture
//!
//! - **App**: owns the single [`rewind_tictactoe::Game`] and the cursor
//! - **Input**: turns key and mouse events into [`Intent`]s
//! - **UI**: stateless render functions over an engine snapshot
//! - **Runner**: the synchronous poll, dispatch, redraw loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod runner;
pub mod ui;

pub use app::{App, Direction, Intent, move_cursor};
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, TuiConfig};
pub use input::{intent_for_key, intent_for_mouse};
pub use runner::{handle_event, init_logging, run, run_app};

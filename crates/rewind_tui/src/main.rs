//! Rewind - terminal tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use rewind_tictactoe::Game;
use rewind_tui::{App, Cli, TuiConfig};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(TuiConfig::load(cli.config.as_deref())?);
    rewind_tui::init_logging(&config)?;

    let game = Game::from_moves(cli.move_indices());
    info!(step = game.step(), "Game ready");

    rewind_tui::run(&config, App::new(game))?;
    Ok(())
}

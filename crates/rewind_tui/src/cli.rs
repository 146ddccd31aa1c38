//! Command-line interface for rewind.

use crate::config::TuiConfig;
use clap::Parser;
use rewind_tictactoe::Position;
use std::path::PathBuf;

/// Rewind - hot-seat tic-tac-toe with undo and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to write logs to
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive (overridden by RUST_LOG)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Input poll interval in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: Option<u64>,

    /// Moves to play before the UI starts, e.g. `4,0,center`
    #[arg(long, value_delimiter = ',', value_parser = parse_position)]
    pub moves: Vec<Position>,
}

impl Cli {
    /// Applies flags that were given on top of the loaded config.
    pub fn apply(&self, config: TuiConfig) -> TuiConfig {
        let mut config = config;
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path.clone());
        }
        if let Some(filter) = &self.log_filter {
            config = config.with_log_filter(filter.clone());
        }
        if let Some(tick_ms) = self.tick_ms {
            config = config.with_tick_ms(tick_ms);
        }
        config
    }

    /// Cell indices for the `--moves` preload.
    pub fn move_indices(&self) -> Vec<usize> {
        self.moves.iter().map(|pos| pos.to_index()).collect()
    }
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a cell (use 0-8 or a label like top-left)", s))
}

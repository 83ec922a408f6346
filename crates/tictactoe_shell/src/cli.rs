//! Command-line interface for the tic-tac-toe shell.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::{Actor, Difficulty, Mark};

/// Play tic-tac-toe against the computer in your terminal.
///
/// Flags override values from the config file.
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Your name
    #[arg(long)]
    pub player_name: Option<String>,

    /// The computer's name
    #[arg(long)]
    pub opponent_name: Option<String>,

    /// Mark you play (x or o); the computer takes the other
    #[arg(long)]
    pub human_mark: Option<Mark>,

    /// Who moves first (human or opponent)
    #[arg(long)]
    pub first: Option<Actor>,

    /// Opponent difficulty (easy, medium, hard)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the computer moves, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Print each round snapshot as JSON instead of a drawn board
    #[arg(long)]
    pub json: bool,
}

//! Tic-tac-toe shell binary.

use anyhow::Result;
use clap::Parser;
use tictactoe_shell::{Cli, Shell, ShellConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ShellConfig::resolve(&cli)?;
    info!(
        player = %config.player_name(),
        opponent = %config.opponent_name(),
        difficulty = %config.difficulty(),
        "Starting shell"
    );

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    Shell::new(config, stdin, stdout)?.run()
}

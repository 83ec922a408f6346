//! Shell configuration: TOML file plus command-line overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_engine::{Actor, Difficulty, Mark, RoundConfig};
use tracing::{debug, info, instrument};

/// Everything the shell needs before the first move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Name shown for the human.
    #[serde(default = "default_player_name")]
    player_name: String,

    /// Name shown for the computer.
    #[serde(default = "default_opponent_name")]
    opponent_name: String,

    /// Mark the human plays; the computer gets the other one.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Who opens each round.
    #[serde(default = "default_first_mover")]
    first_mover: Actor,

    /// Opponent difficulty.
    #[serde(default)]
    difficulty: Difficulty,

    /// Seed for reproducible easy/medium play.
    #[serde(default)]
    seed: Option<u64>,

    /// Pause before each computer move, in milliseconds.
    #[serde(default = "default_delay_ms")]
    opponent_delay_ms: u64,

    /// Print JSON snapshots instead of drawn boards.
    #[serde(default)]
    json: bool,
}

fn default_player_name() -> String {
    "Player".to_string()
}

fn default_opponent_name() -> String {
    "Computer".to_string()
}

fn default_human_mark() -> Mark {
    Mark::X
}

fn default_first_mover() -> Actor {
    Actor::Human
}

fn default_delay_ms() -> u64 {
    1000
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            opponent_name: default_opponent_name(),
            human_mark: default_human_mark(),
            first_mover: default_first_mover(),
            difficulty: Difficulty::default(),
            seed: None,
            opponent_delay_ms: default_delay_ms(),
            json: false,
        }
    }
}

impl ShellConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player = %config.player_name, difficulty = %config.difficulty, "Config loaded");
        Ok(config)
    }

    /// Builds the effective config: file (if given) then flag overrides.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply(cli);
        config.validate()?;
        Ok(config)
    }

    fn apply(&mut self, cli: &Cli) {
        if let Some(name) = &cli.player_name {
            self.player_name = name.clone();
        }
        if let Some(name) = &cli.opponent_name {
            self.opponent_name = name.clone();
        }
        if let Some(mark) = cli.human_mark {
            self.human_mark = mark;
        }
        if let Some(first) = cli.first {
            self.first_mover = first;
        }
        if let Some(difficulty) = cli.difficulty {
            self.difficulty = difficulty;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(delay) = cli.delay_ms {
            self.opponent_delay_ms = delay;
        }
        self.json |= cli.json;
    }

    /// Both players need a name before a game can start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_name.trim().is_empty() || self.opponent_name.trim().is_empty() {
            return Err(ConfigError::new(
                "Please enter names for both players".to_string(),
            ));
        }
        Ok(())
    }

    /// Round settings for the engine.
    pub fn round_config(&self) -> RoundConfig {
        let config = RoundConfig::new(
            self.human_mark,
            self.human_mark.other(),
            self.first_mover,
            self.difficulty,
        );
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Pause before the computer moves.
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    /// Display name for an actor.
    pub fn name_of(&self, actor: Actor) -> &str {
        match actor {
            Actor::Human => &self.player_name,
            Actor::Opponent => &self.opponent_name,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//! Terminal front end for playing tic-tac-toe against the computer.
//!
//! - **cli**: command-line flags
//! - **config**: TOML config file merged with flags
//! - **shell**: the interactive prompt loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod shell;

pub use cli::Cli;
pub use config::{ConfigError, ShellConfig};
pub use shell::{Command, Shell};

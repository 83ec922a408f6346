//! Tic-tac-toe against a computer opponent.
//!
//! The engine owns the board, decides wins and draws, and picks the
//! computer's moves. A front end drives it through [`Round`]:
//!
//! ```
//! use tictactoe_engine::{Actor, Difficulty, Mark, Round, RoundConfig, RoundState};
//!
//! let config = RoundConfig::new(Mark::X, Mark::O, Actor::Human, Difficulty::Hard);
//! let mut round = Round::start(config)?;
//!
//! round.submit_human_move(4)?;
//! let report = round.request_opponent_move()?;
//! assert_eq!(report.next_state, RoundState::AwaitingHumanMove);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Opponent policies
//!
//! - **Easy**: a random empty cell.
//! - **Medium**: blocks the human's immediate win, otherwise random.
//! - **Hard**: exhaustive minimax; never loses.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod difficulty;
pub mod invariants;
mod phases;
pub mod policy;
mod position;
mod round;
pub mod rules;
mod types;
mod view;

pub use action::{Move, MoveError, SetupError};
pub use difficulty::Difficulty;
pub use phases::{Outcome, RoundState};
pub use position::Position;
pub use round::{MoveReport, Round, RoundConfig};
pub use rules::{apply_move, check_draw, check_win, empty_cells};
pub use types::{Actor, Board, Mark, Square};
pub use view::RoundView;

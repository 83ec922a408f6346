//! Board outcomes and round phases.

use super::{Actor, Mark};
use serde::{Deserialize, Serialize};

/// What a board says about the game.
///
/// Always derived from the board by [`rules::outcome`](crate::rules::outcome);
/// never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No triple completed and empty cells remain.
    InProgress,
    /// A mark completed a triple.
    Won(Mark),
    /// Board full without a winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            _ => None,
        }
    }

    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "{mark} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Phase of a round, as seen by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for the human to pick a cell.
    AwaitingHumanMove,
    /// Waiting for the shell to request the computer's move.
    AwaitingOpponentMove,
    /// A mark completed a triple. Accepts no moves.
    Won(Mark),
    /// Board full without a winner. Accepts no moves.
    Draw,
}

impl RoundState {
    /// Combines a board outcome with the actor on turn.
    pub fn from_parts(outcome: Outcome, to_move: Actor) -> Self {
        match outcome {
            Outcome::Won(mark) => RoundState::Won(mark),
            Outcome::Draw => RoundState::Draw,
            Outcome::InProgress => match to_move {
                Actor::Human => RoundState::AwaitingHumanMove,
                Actor::Opponent => RoundState::AwaitingOpponentMove,
            },
        }
    }

    /// The actor expected to move, if the round is still open.
    pub fn to_move(&self) -> Option<Actor> {
        match self {
            RoundState::AwaitingHumanMove => Some(Actor::Human),
            RoundState::AwaitingOpponentMove => Some(Actor::Opponent),
            RoundState::Won(_) | RoundState::Draw => None,
        }
    }

    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        self.to_move().is_none()
    }
}

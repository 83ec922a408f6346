//! First-class move records and the errors a move can raise.

use super::{Actor, Mark, Position};
use serde::{Deserialize, Serialize};

/// A move: an actor placing their mark at a position.
///
/// Moves are kept in round history so invariants can replay them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who made the move.
    pub actor: Actor,
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(actor: Actor, mark: Mark, position: Position) -> Self {
        Self {
            actor,
            mark,
            position,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) -> {}", self.actor, self.mark, self.position.label())
    }
}

/// A rejected move. The round is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Index outside the nine board cells.
    #[display("Position {_0} is out of bounds (must be 0-8)")]
    InvalidIndex(#[error(not(source))] usize),

    /// The target cell already holds a mark.
    #[display("Square {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Position),

    /// The move came from the actor who is not on turn.
    #[display("It's not the {_0}'s turn")]
    WrongTurn(#[error(not(source))] Actor),

    /// The round already ended in a win or a draw.
    #[display("Round is already over")]
    RoundAlreadyTerminal,
}

/// A round configuration that cannot start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SetupError {
    /// Human and opponent were given the same mark.
    #[display("Human and opponent cannot both play {_0}")]
    SameMark(#[error(not(source))] Mark),
}

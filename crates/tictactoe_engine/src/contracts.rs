//! Contract-based validation for round moves.
//!
//! A move is checked against its preconditions before the board is touched,
//! so a rejected move never changes the round. Postconditions run in debug
//! builds after the move lands.

use super::action::MoveError;
use super::invariants::{InvariantSet, InvariantViolation, RoundInvariants};
use super::{Actor, Position, Round};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// A request to place a mark, before it has been validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    /// Who is asking to move.
    pub actor: Actor,
    /// Requested board index.
    pub index: usize,
}

impl MoveRequest {
    /// Creates a new request.
    pub fn new(actor: Actor, index: usize) -> Self {
        Self { actor, index }
    }
}

/// Precondition: the round has not ended.
pub struct RoundNotTerminal;

impl RoundNotTerminal {
    /// Rejects with `RoundAlreadyTerminal` after a win or draw.
    pub fn check(round: &Round) -> Result<(), MoveError> {
        if round.state().is_terminal() {
            Err(MoveError::RoundAlreadyTerminal)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the requesting actor is on turn.
pub struct ActorsTurn;

impl ActorsTurn {
    /// Rejects with `WrongTurn` naming the actor who asked out of turn.
    pub fn check(actor: Actor, round: &Round) -> Result<(), MoveError> {
        if round.to_move() != actor {
            Err(MoveError::WrongTurn(actor))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index names one of the nine cells.
pub struct IndexInRange;

impl IndexInRange {
    /// Resolves the index to a position.
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::InvalidIndex(index))
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects with `CellOccupied`.
    pub fn check(position: Position, round: &Round) -> Result<(), MoveError> {
        if round.board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(position))
        }
    }
}

/// Composite precondition: everything a move needs before it can land.
///
/// Checked in order: terminal round, turn, index range, occupancy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(round))]
    pub fn check(request: &MoveRequest, round: &Round) -> Result<Position, MoveError> {
        RoundNotTerminal::check(round)?;
        ActorsTurn::check(request.actor, round)?;
        let position = IndexInRange::check(request.index)?;
        CellIsEmpty::check(position, round)?;
        Ok(position)
    }
}

/// Contract for move actions.
///
/// Preconditions: [`LegalMove`].
///
/// Postconditions:
/// - Exactly one more square is filled
/// - All [`RoundInvariants`] hold
pub struct MoveContract;

impl Contract<Round, MoveRequest> for MoveContract {
    fn pre(round: &Round, action: &MoveRequest) -> Result<(), MoveError> {
        LegalMove::check(action, round).map(|_| ())
    }

    fn post(before: &Round, after: &Round) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match RoundInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };
        if after.board().filled() != before.board().filled() + 1 {
            violations.push(InvariantViolation::new("A move fills exactly one square"));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Move postcondition failed");
            Err(violations)
        }
    }
}

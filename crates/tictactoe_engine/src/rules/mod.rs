//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here knows about
//! turns or actors; the round state machine layers those on top.

pub mod draw;
pub mod win;

pub use draw::{check_draw, is_full};
pub use win::{LINES, check_win, winner};

use crate::action::MoveError;
use crate::phases::Outcome;
use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// Returns a copy of `board` with `mark` at `index`.
///
/// # Errors
///
/// `InvalidIndex` when `index` is outside 0-8, `CellOccupied` when the
/// target cell already holds a mark.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Result<Board, MoveError> {
    let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
    if !board.is_empty(pos) {
        return Err(MoveError::CellOccupied(pos));
    }
    let mut next = board.clone();
    next.set(pos, Square::Occupied(mark));
    Ok(next)
}

/// Indices of unoccupied cells in ascending order.
pub fn empty_cells(board: &Board) -> Vec<usize> {
    board.empty_cells()
}

/// Derives the outcome of a board.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

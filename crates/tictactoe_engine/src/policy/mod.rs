//! Computer opponent move selection.
//!
//! Each difficulty maps to an [`OpponentPolicy`]. Policies read the board
//! and return an index; they never commit the move themselves.

mod block;
mod minimax;
mod random;

pub use block::BlockingPolicy;
pub use minimax::{LOSS_SCORE, MinimaxPolicy, SearchResult, WIN_SCORE, minimax};
pub use random::RandomPolicy;

use crate::{Board, Difficulty, Mark};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// The two marks in play, seen from the computer's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marks {
    /// Mark the human plays.
    pub human: Mark,
    /// Mark the computer plays.
    pub opponent: Mark,
}

impl Marks {
    /// Creates the mark pair.
    pub fn new(human: Mark, opponent: Mark) -> Self {
        Self { human, opponent }
    }
}

/// Strategy the computer uses to pick a cell.
pub trait OpponentPolicy {
    /// Returns the index to play, or `None` when the board is full.
    fn select(&self, board: &Board, marks: Marks, rng: &mut ChaCha8Rng) -> Option<usize>;
}

/// Picks the computer's move for `difficulty`.
#[instrument(skip(board, rng), fields(filled = board.filled()))]
pub fn choose_move(
    board: &Board,
    difficulty: Difficulty,
    marks: Marks,
    rng: &mut ChaCha8Rng,
) -> Option<usize> {
    let choice = match difficulty {
        Difficulty::Easy => RandomPolicy.select(board, marks, rng),
        Difficulty::Medium => BlockingPolicy.select(board, marks, rng),
        Difficulty::Hard => MinimaxPolicy.select(board, marks, rng),
    };
    debug!(?choice, %difficulty, "Opponent policy chose");
    choice
}

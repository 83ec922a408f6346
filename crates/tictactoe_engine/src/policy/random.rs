//! Easy difficulty: any empty cell.

use super::{Marks, OpponentPolicy};
use crate::Board;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Uniformly random empty cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPolicy;

impl OpponentPolicy for RandomPolicy {
    fn select(&self, board: &Board, _marks: Marks, rng: &mut ChaCha8Rng) -> Option<usize> {
        board.empty_cells().choose(rng).copied()
    }
}

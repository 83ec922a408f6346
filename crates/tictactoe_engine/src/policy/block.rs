//! Medium difficulty: stop the human's next-move win, otherwise play randomly.

use super::{Marks, OpponentPolicy, RandomPolicy};
use crate::Board;
use crate::rules::check_win;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Single-ply blocker with a random fallback.
///
/// Only the human's threats are considered; the policy does not look for
/// its own winning cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingPolicy;

impl BlockingPolicy {
    /// First empty cell (ascending) where the human's mark would complete a triple.
    pub fn blocking_cell(board: &Board, marks: Marks) -> Option<usize> {
        let mut scratch = board.clone();
        board.empty_cells().into_iter().find(|&index| {
            scratch.place(index, marks.human);
            let threat = check_win(&scratch, marks.human);
            scratch.unplace(index);
            threat
        })
    }
}

impl OpponentPolicy for BlockingPolicy {
    fn select(&self, board: &Board, marks: Marks, rng: &mut ChaCha8Rng) -> Option<usize> {
        match Self::blocking_cell(board, marks) {
            Some(index) => {
                debug!(index, "Blocking human threat");
                Some(index)
            }
            None => RandomPolicy.select(board, marks, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;
    use rand::SeedableRng;

    fn marks() -> Marks {
        Marks::new(Mark::X, Mark::O)
    }

    #[test]
    fn test_blocks_row_threat() {
        let mut board = Board::new();
        board.place(0, Mark::X);
        board.place(1, Mark::X);
        board.place(4, Mark::O);

        for seed in 0..8 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            assert_eq!(BlockingPolicy.select(&board, marks(), &mut rng), Some(2));
        }
    }

    #[test]
    fn test_blocks_lowest_of_two_threats() {
        // X threatens 2 (top row) and 6 (left column).
        let mut board = Board::new();
        board.place(0, Mark::X);
        board.place(1, Mark::X);
        board.place(3, Mark::X);
        board.place(4, Mark::O);
        board.place(8, Mark::O);

        assert_eq!(BlockingPolicy::blocking_cell(&board, marks()), Some(2));
    }

    #[test]
    fn test_ignores_own_winning_cell() {
        // O could win at 2, but the policy only looks at X's threat on 4.
        let mut board = Board::new();
        board.place(0, Mark::O);
        board.place(1, Mark::O);
        board.place(3, Mark::X);
        board.place(5, Mark::X);

        assert_eq!(BlockingPolicy::blocking_cell(&board, marks()), Some(4));
    }

    #[test]
    fn test_falls_back_to_empty_cell() {
        let mut board = Board::new();
        board.place(4, Mark::X);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let index = BlockingPolicy.select(&board, marks(), &mut rng).expect("cells remain");
        assert!(board.empty_cells().contains(&index));
        assert_eq!(BlockingPolicy::blocking_cell(&board, marks()), None);
    }

    #[test]
    fn test_uses_configured_human_mark() {
        let mut board = Board::new();
        board.place(2, Mark::O);
        board.place(4, Mark::O);
        let swapped = Marks::new(Mark::O, Mark::X);
        assert_eq!(BlockingPolicy::blocking_cell(&board, swapped), Some(6));
    }
}

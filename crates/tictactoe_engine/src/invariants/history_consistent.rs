//! History consistency invariant: every filled square has a recorded move.

use super::Invariant;
use crate::{Round, Square};

/// Invariant: history length equals the number of filled squares and each
/// recorded move's mark is on the board where it was played.
pub struct HistoryConsistentInvariant;

impl Invariant<Round> for HistoryConsistentInvariant {
    fn holds(round: &Round) -> bool {
        let board = round.board();
        board.filled() == round.history().len()
            && round
                .history()
                .iter()
                .all(|mov| board.get(mov.position) == Square::Occupied(mov.mark))
    }

    fn description() -> &'static str {
        "History matches filled squares"
    }
}

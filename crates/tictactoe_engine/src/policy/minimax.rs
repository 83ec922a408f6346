//! Hard difficulty: exhaustive minimax over the remaining cells.
//!
//! Scores are from the computer's side: a computer win is [`WIN_SCORE`],
//! a human win is [`LOSS_SCORE`], a full board is 0. Scores carry no depth
//! discount, so a slow win ties with a fast one and the lower index wins
//! the tie.

use super::{Marks, OpponentPolicy};
use crate::{Board, Mark};
use crate::rules::check_win;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Score of a line the computer wins.
pub const WIN_SCORE: i32 = 10;

/// Score of a line the human wins.
pub const LOSS_SCORE: i32 = -10;

/// Best move found by [`minimax`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Cell to play; `None` at a terminal node.
    pub index: Option<usize>,
    /// Value of the position under perfect play.
    pub score: i32,
    /// Nodes visited, including the root.
    pub nodes: u64,
}

/// Always plays the minimax recommendation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxPolicy;

impl OpponentPolicy for MinimaxPolicy {
    fn select(&self, board: &Board, marks: Marks, _rng: &mut ChaCha8Rng) -> Option<usize> {
        let mut arena = board.clone();
        minimax(&mut arena, marks.opponent, marks).index
    }
}

/// Searches every continuation with `to_move` placing next.
///
/// `board` is used as a scratch arena and is restored before returning.
#[instrument(skip(board), fields(filled = board.filled()))]
pub fn minimax(board: &mut Board, to_move: Mark, marks: Marks) -> SearchResult {
    let mut nodes = 0;
    let (index, score) = search(board, to_move, marks, &mut nodes);
    debug!(?index, score, nodes, "Minimax search finished");
    SearchResult {
        index,
        score,
        nodes,
    }
}

fn search(
    board: &mut Board,
    to_move: Mark,
    marks: Marks,
    nodes: &mut u64,
) -> (Option<usize>, i32) {
    *nodes += 1;

    if check_win(board, marks.human) {
        return (None, LOSS_SCORE);
    }
    if check_win(board, marks.opponent) {
        return (None, WIN_SCORE);
    }
    let empty = board.empty_cells();
    if empty.is_empty() {
        return (None, 0);
    }

    let maximizing = to_move == marks.opponent;
    let mut best: Option<(usize, i32)> = None;

    for index in empty {
        board.place(index, to_move);
        let (_, score) = search(board, to_move.other(), marks, nodes);
        board.unplace(index);

        // Strict comparison keeps the lowest index among equal scores.
        let better = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if better {
            best = Some((index, score));
        }
    }

    match best {
        Some((index, score)) => (Some(index), score),
        None => (None, 0),
    }
}

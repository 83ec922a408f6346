//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Square};

/// The eight winning triples: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// True iff `mark` occupies every cell of some triple.
///
/// Runs at every node of the minimax search, so it is not instrumented.
pub fn check_win(board: &Board, mark: Mark) -> bool {
    let squares = board.squares();
    let target = Square::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| squares[i] == target))
}

/// Returns the mark holding a complete triple, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| check_win(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!check_win(&board, Mark::X));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::X));
        board.set(Position::TopRight, Square::Occupied(Mark::X));
        assert!(check_win(&board, Mark::X));
        assert!(!check_win(&board, Mark::O));
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Square::Occupied(Mark::O));
        board.set(Position::Center, Square::Occupied(Mark::O));
        board.set(Position::BottomLeft, Square::Occupied(Mark::O));
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut board = Board::new();
            for index in line {
                board.place(index, Mark::X);
            }
            assert!(check_win(&board, Mark::X), "line {line:?}");
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::X));
        board.set(Position::TopRight, Square::Occupied(Mark::O));
        assert_eq!(winner(&board), None);
    }
}

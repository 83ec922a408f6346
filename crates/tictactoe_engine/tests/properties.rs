//! Property-based tests for board rules and opponent policies.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe_engine::policy::{BlockingPolicy, Marks, OpponentPolicy, RandomPolicy, choose_move};
use tictactoe_engine::{Board, Difficulty, Mark, apply_move, check_draw, check_win, empty_cells, rules};

/// Generate a board reachable by alternating legal moves, X first.
/// Play stops at the first win or a full board.
fn arb_reachable_board() -> impl Strategy<Value = Board> {
    proptest::collection::vec(0usize..9, 0..=9).prop_map(|choices| {
        let mut board = Board::new();
        let mut mark = Mark::X;
        for choice in choices {
            if rules::outcome(&board).is_terminal() {
                break;
            }
            let empty = empty_cells(&board);
            let index = empty[choice % empty.len()];
            board = apply_move(&board, index, mark).expect("empty cell");
            mark = mark.other();
        }
        board
    })
}

proptest! {
    #[test]
    fn prop_at_most_one_winner(board in arb_reachable_board()) {
        prop_assert!(!(check_win(&board, Mark::X) && check_win(&board, Mark::O)));
    }

    #[test]
    fn prop_draw_means_full_and_no_winner(board in arb_reachable_board()) {
        if check_draw(&board) {
            prop_assert!(empty_cells(&board).is_empty());
            prop_assert!(!check_win(&board, Mark::X));
            prop_assert!(!check_win(&board, Mark::O));
        }
    }

    #[test]
    fn prop_empty_cells_ascending(board in arb_reachable_board()) {
        let cells = empty_cells(&board);
        prop_assert!(cells.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(cells.len(), 9 - board.filled());
    }

    #[test]
    fn prop_apply_move_changes_one_cell(board in arb_reachable_board(), index in 0usize..9) {
        match apply_move(&board, index, Mark::O) {
            Ok(next) => {
                prop_assert!(empty_cells(&board).contains(&index));
                prop_assert_eq!(next.filled(), board.filled() + 1);
                let changed = board
                    .squares()
                    .iter()
                    .zip(next.squares())
                    .filter(|(a, b)| a != b)
                    .count();
                prop_assert_eq!(changed, 1);
            }
            Err(_) => {
                prop_assert!(!empty_cells(&board).contains(&index));
            }
        }
    }

    #[test]
    fn prop_easy_picks_an_empty_cell(board in arb_reachable_board(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let marks = Marks::new(Mark::X, Mark::O);
        match RandomPolicy.select(&board, marks, &mut rng) {
            Some(index) => {
                prop_assert!(empty_cells(&board).contains(&index));
            }
            None => {
                prop_assert!(empty_cells(&board).is_empty());
            }
        }
    }

    #[test]
    fn prop_medium_blocks_first_threat(board in arb_reachable_board(), seed in any::<u64>()) {
        let marks = Marks::new(Mark::X, Mark::O);
        prop_assume!(!rules::outcome(&board).is_terminal());

        let threat = empty_cells(&board).into_iter().find(|&index| {
            let next = apply_move(&board, index, marks.human).expect("empty cell");
            check_win(&next, marks.human)
        });
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let choice = BlockingPolicy.select(&board, marks, &mut rng);

        match threat {
            Some(index) => {
                prop_assert_eq!(choice, Some(index));
            }
            None => {
                prop_assert!(choice.is_some_and(|i| empty_cells(&board).contains(&i)));
            }
        }
    }
}

proptest! {
    // Each case may run a full search from a near-empty board.
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_hard_leaves_board_untouched(board in arb_reachable_board()) {
        let before = board.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let choice = choose_move(&board, Difficulty::Hard, Marks::new(Mark::X, Mark::O), &mut rng);
        prop_assert_eq!(&board, &before);
        prop_assert_eq!(choice.is_none(), rules::outcome(&board).is_terminal());
    }
}

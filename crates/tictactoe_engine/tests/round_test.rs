//! Round lifecycle tests through the public API.

use tictactoe_engine::{
    Actor, Board, Difficulty, Mark, MoveError, Outcome, Position, Round, RoundConfig, RoundState,
    check_draw, check_win,
};

/// Plays the lowest empty cell for the human until the round ends.
fn play_out(round: &mut Round) -> Vec<usize> {
    let mut human_moves = Vec::new();
    loop {
        match round.state() {
            RoundState::AwaitingHumanMove => {
                let index = round.board().empty_cells()[0];
                round.submit_human_move(index).expect("empty cell");
                human_moves.push(index);
            }
            RoundState::AwaitingOpponentMove => {
                round.request_opponent_move().expect("opponent on turn");
            }
            RoundState::Won(_) | RoundState::Draw => return human_moves,
        }
    }
}

/// Replays recorded human moves, letting the opponent answer in between.
fn replay(round: &mut Round, human_moves: &[usize]) {
    let mut moves = human_moves.iter();
    while !round.state().is_terminal() {
        if round.state() == RoundState::AwaitingOpponentMove {
            round.request_opponent_move().expect("opponent on turn");
        } else {
            let index = *moves.next().expect("recorded move");
            round.submit_human_move(index).expect("same game");
        }
    }
}

fn assert_reset_replays(config: RoundConfig) {
    let mut round = Round::start(config).expect("distinct marks");
    let human_moves = play_out(&mut round);
    let board = round.board().clone();
    let outcome = round.outcome();

    round.reset_round();
    assert_eq!(round.board(), &Board::new());
    replay(&mut round, &human_moves);

    assert_eq!(round.board(), &board);
    assert_eq!(round.outcome(), outcome);
}

#[test]
fn test_reset_replay_is_deterministic_for_hard() {
    assert_reset_replays(RoundConfig::new(Mark::X, Mark::O, Actor::Human, Difficulty::Hard));
    assert_reset_replays(RoundConfig::new(Mark::X, Mark::O, Actor::Opponent, Difficulty::Hard));
}

#[test]
fn test_reset_replay_is_deterministic_for_seeded_random_policies() {
    for seed in 0..16 {
        for difficulty in [Difficulty::Easy, Difficulty::Medium] {
            let config =
                RoundConfig::new(Mark::O, Mark::X, Actor::Human, difficulty).with_seed(seed);
            assert_reset_replays(config);
        }
    }
}

#[test]
fn test_full_round_reports_each_step() {
    let config = RoundConfig::new(Mark::X, Mark::O, Actor::Human, Difficulty::Hard);
    let mut round = Round::start(config).expect("distinct marks");

    let report = round.submit_human_move(0).expect("legal");
    assert_eq!(report.next_state, RoundState::AwaitingOpponentMove);
    assert_eq!(report.played.actor, Actor::Human);

    let report = round.request_opponent_move().expect("opponent on turn");
    assert_eq!(report.played.actor, Actor::Opponent);
    assert_eq!(report.played.mark, Mark::O);
    assert_eq!(report.next_state, RoundState::AwaitingHumanMove);
    assert_eq!(&report.board, round.board());
}

#[test]
fn test_no_moves_after_round_ends() {
    let config = RoundConfig::new(Mark::X, Mark::O, Actor::Human, Difficulty::Hard);
    let mut round = Round::start(config).expect("distinct marks");
    play_out(&mut round);

    assert!(round.state().is_terminal());
    let board = round.board().clone();
    for index in 0..9 {
        assert_eq!(round.submit_human_move(index), Err(MoveError::RoundAlreadyTerminal));
    }
    assert_eq!(round.request_opponent_move(), Err(MoveError::RoundAlreadyTerminal));
    assert_eq!(round.board(), &board);
}

#[test]
fn test_lowest_cell_human_loses_to_hard() {
    let config = RoundConfig::new(Mark::X, Mark::O, Actor::Human, Difficulty::Hard);
    let mut round = Round::start(config).expect("distinct marks");
    play_out(&mut round);
    assert_ne!(round.outcome(), Outcome::Won(Mark::X));
}

#[test]
fn test_medium_blocks_every_single_threat() {
    for line in tictactoe_engine::rules::LINES {
        for gap in 0..3 {
            let config = RoundConfig::new(Mark::X, Mark::O, Actor::Human, Difficulty::Medium)
                .with_seed(gap as u64);
            let mut round = Round::start(config).expect("distinct marks");

            // Human fills the two other cells of the line; the opponent's
            // first reply is random, so skip lines it already broke.
            let others: Vec<usize> = (0..3).filter(|&i| i != gap).map(|i| line[i]).collect();
            round.submit_human_move(others[0]).expect("legal");
            let first = round.request_opponent_move().expect("opponent on turn");
            let taken = first.played.position.to_index();
            if taken == line[gap] || taken == others[1] {
                continue;
            }
            round.submit_human_move(others[1]).expect("legal");
            let reply = round.request_opponent_move().expect("opponent on turn");
            assert_eq!(
                reply.played.position,
                Position::from_index(line[gap]).expect("in range"),
                "line {line:?} gap {gap}"
            );
        }
    }
}

#[test]
fn test_draw_board_scenario() {
    use tictactoe_engine::Square::Occupied;
    // X O X / X O O / O X X
    let board = Board::from_squares([
        Occupied(Mark::X),
        Occupied(Mark::O),
        Occupied(Mark::X),
        Occupied(Mark::X),
        Occupied(Mark::O),
        Occupied(Mark::O),
        Occupied(Mark::O),
        Occupied(Mark::X),
        Occupied(Mark::X),
    ]);
    assert!(check_draw(&board));
    assert!(!check_win(&board, Mark::X));
    assert!(!check_win(&board, Mark::O));
}

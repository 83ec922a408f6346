//! Serializable snapshot of a round for shells to render.

use super::action::Move;
use super::phases::{Outcome, RoundState};
use super::{Actor, Difficulty, Mark, Round, RoundConfig, Square};
use serde::{Deserialize, Serialize};

/// Everything a front end draws, detached from the live round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    /// Cells in row-major order; `None` is empty.
    pub cells: [Option<Mark>; 9],
    /// Current phase.
    pub state: RoundState,
    /// Outcome of the board.
    pub outcome: Outcome,
    /// Mark the human plays.
    pub human_mark: Mark,
    /// Mark the computer plays.
    pub opponent_mark: Mark,
    /// Opponent policy.
    pub difficulty: Difficulty,
    /// Moves so far.
    pub history: Vec<Move>,
    /// One-line status.
    pub status: String,
}

impl From<&Round> for RoundView {
    fn from(round: &Round) -> Self {
        let squares = *round.board().squares();
        let cells = squares.map(|square| match square {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        });
        let config = round.config();
        let state = round.state();
        Self {
            cells,
            state,
            outcome: round.outcome(),
            human_mark: *config.human_mark(),
            opponent_mark: *config.opponent_mark(),
            difficulty: *config.difficulty(),
            history: round.history().to_vec(),
            status: status_string(state, config),
        }
    }
}

impl RoundView {
    /// True once the round is won or drawn.
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// The actor on turn, if the round is open.
    pub fn to_move(&self) -> Option<Actor> {
        self.state.to_move()
    }
}

fn status_string(state: RoundState, config: &RoundConfig) -> String {
    match state {
        RoundState::AwaitingHumanMove => {
            format!("In progress. Human ({}) to move.", config.human_mark())
        }
        RoundState::AwaitingOpponentMove => {
            format!("In progress. Opponent ({}) to move.", config.opponent_mark())
        }
        RoundState::Won(mark) if mark == *config.human_mark() => {
            format!("Game over. Human ({mark}) wins!")
        }
        RoundState::Won(mark) => format!("Game over. Opponent ({mark}) wins!"),
        RoundState::Draw => "Game over. Draw!".to_string(),
    }
}

impl Round {
    /// Snapshot for rendering.
    pub fn view(&self) -> RoundView {
        RoundView::from(self)
    }
}

//! One round of human versus computer.
//!
//! The round owns the board and the turn. Its phase is never stored: it is
//! recomputed from the board outcome and the actor on turn, so a terminal
//! board always reads as `Won` or `Draw`.

use super::action::{Move, MoveError, SetupError};
use super::contracts::{ActorsTurn, LegalMove, MoveRequest, RoundNotTerminal};
#[cfg(debug_assertions)]
use super::contracts::{Contract, MoveContract};
use super::phases::{Outcome, RoundState};
use super::policy::{Marks, choose_move};
use super::rules;
use super::{Actor, Board, Difficulty, Mark, Square};
use derive_getters::Getters;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Settings fixed for the life of a round and kept across resets.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Mark the human plays.
    human_mark: Mark,
    /// Mark the computer plays.
    opponent_mark: Mark,
    /// Who places the first mark.
    first_mover: Actor,
    /// Opponent policy.
    difficulty: Difficulty,
    /// Seed for the opponent's random choices. `None` seeds from the OS.
    #[serde(default)]
    seed: Option<u64>,
}

impl RoundConfig {
    /// Creates a configuration with an unseeded opponent.
    pub fn new(
        human_mark: Mark,
        opponent_mark: Mark,
        first_mover: Actor,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            human_mark,
            opponent_mark,
            first_mover,
            difficulty,
            seed: None,
        }
    }

    /// Fixes the opponent's random choices.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The mark an actor plays.
    pub fn mark_of(&self, actor: Actor) -> Mark {
        match actor {
            Actor::Human => self.human_mark,
            Actor::Opponent => self.opponent_mark,
        }
    }

    /// Marks as seen by the opponent policies.
    pub fn marks(&self) -> Marks {
        Marks::new(self.human_mark, self.opponent_mark)
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// What a shell needs to render after a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// The move that was applied.
    pub played: Move,
    /// Board after the move.
    pub board: Board,
    /// Outcome of that board.
    pub outcome: Outcome,
    /// Phase the round is now in.
    pub next_state: RoundState,
}

/// A round in progress or finished.
#[derive(Debug, Clone)]
pub struct Round {
    pub(crate) config: RoundConfig,
    pub(crate) board: Board,
    pub(crate) to_move: Actor,
    pub(crate) history: Vec<Move>,
    rng: ChaCha8Rng,
}

impl Round {
    /// Starts a round on an empty board.
    ///
    /// # Errors
    ///
    /// `SameMark` when human and computer were given the same mark.
    #[instrument(fields(human = %config.human_mark, first = %config.first_mover, difficulty = %config.difficulty))]
    pub fn start(config: RoundConfig) -> Result<Self, SetupError> {
        if config.human_mark == config.opponent_mark {
            warn!("Rejected round with identical marks");
            return Err(SetupError::SameMark(config.human_mark));
        }
        let round = Self {
            board: Board::new(),
            to_move: config.first_mover,
            history: Vec::new(),
            rng: config.rng(),
            config,
        };
        info!(state = ?round.state(), "Round started");
        Ok(round)
    }

    /// Places the human's mark at `index`.
    ///
    /// # Errors
    ///
    /// `RoundAlreadyTerminal`, `WrongTurn`, `InvalidIndex` or `CellOccupied`;
    /// the round is unchanged on error.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, index: usize) -> Result<MoveReport, MoveError> {
        self.play(MoveRequest::new(Actor::Human, index))
    }

    /// Lets the computer pick and place its mark.
    ///
    /// # Errors
    ///
    /// `RoundAlreadyTerminal` after a win or draw, `WrongTurn` while the
    /// human is on turn.
    #[instrument(skip(self))]
    pub fn request_opponent_move(&mut self) -> Result<MoveReport, MoveError> {
        RoundNotTerminal::check(self)?;
        ActorsTurn::check(Actor::Opponent, self)?;

        let index = choose_move(
            &self.board,
            self.config.difficulty,
            self.config.marks(),
            &mut self.rng,
        )
        .ok_or(MoveError::RoundAlreadyTerminal)?;
        self.play(MoveRequest::new(Actor::Opponent, index))
    }

    /// Clears the board for a new round with the same marks and difficulty.
    ///
    /// A seeded round restarts its random sequence, so replaying the same
    /// human moves reproduces the same game.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        self.board = Board::new();
        self.to_move = self.config.first_mover;
        self.history.clear();
        if self.config.seed.is_some() {
            self.rng = self.config.rng();
        }
        info!(state = ?self.state(), "Round reset");
    }

    /// Current phase.
    pub fn state(&self) -> RoundState {
        RoundState::from_parts(self.outcome(), self.to_move)
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The actor on turn (or the last mover once the round is over).
    pub fn to_move(&self) -> Actor {
        self.to_move
    }

    /// Moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Round settings.
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    fn play(&mut self, request: MoveRequest) -> Result<MoveReport, MoveError> {
        let position = LegalMove::check(&request, self).inspect_err(|e| {
            warn!(error = %e, actor = %request.actor, index = request.index, "Move rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.config.mark_of(request.actor);
        let played = Move::new(request.actor, mark, position);
        self.board.set(position, Square::Occupied(mark));
        self.history.push(played);

        let outcome = self.outcome();
        if !outcome.is_terminal() {
            self.to_move = self.to_move.other();
        }

        #[cfg(debug_assertions)]
        debug_assert!(
            MoveContract::post(&before, self).is_ok(),
            "move postconditions violated"
        );

        debug!(%played, ?outcome, "Move applied");
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Round finished");
        }

        Ok(MoveReport {
            played,
            board: self.board.clone(),
            outcome,
            next_state: self.state(),
        })
    }
}

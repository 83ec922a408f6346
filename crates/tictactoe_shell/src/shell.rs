//! Interactive terminal loop.
//!
//! The shell owns presentation only: prompts, names, pacing and rendering.
//! Every rule decision comes back from the engine.

use crate::config::ShellConfig;
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_engine::{Actor, Position, Round, RoundState};
use tracing::{debug, info, instrument};

/// A line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Claim the cell with this board index (0-8).
    Cell(usize),
    /// Start the round over.
    Restart,
    /// Leave the shell.
    Quit,
    /// A number outside 1-9.
    OutOfRange(i64),
    /// Anything else.
    Unknown,
}

impl Command {
    /// Parses player input: `1`-`9`, a position label, `restart` or `quit`.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Command::Quit,
            "r" | "restart" => return Command::Restart,
            _ => {}
        }
        if let Ok(number) = input.parse::<i64>() {
            return match number {
                1..=9 => Command::Cell(number as usize - 1),
                _ => Command::OutOfRange(number),
            };
        }
        match Position::from_label(input) {
            Some(position) => Command::Cell(position.to_index()),
            None => Command::Unknown,
        }
    }
}

/// Terminal front end over a [`Round`].
pub struct Shell<R, W> {
    config: ShellConfig,
    round: Round,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Starts the first round.
    pub fn new(config: ShellConfig, input: R, output: W) -> Result<Self> {
        let round = Round::start(config.round_config())?;
        Ok(Self {
            config,
            round,
            input,
            output,
        })
    }

    /// The live round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Runs until the player quits or input ends.
    #[instrument(skip(self), fields(difficulty = %self.config.difficulty()))]
    pub fn run(&mut self) -> Result<()> {
        info!("Shell started");
        self.render()?;

        loop {
            match self.round.state() {
                RoundState::AwaitingOpponentMove => self.opponent_turn()?,
                RoundState::AwaitingHumanMove => {
                    if !self.human_turn()? {
                        break;
                    }
                }
                RoundState::Won(_) | RoundState::Draw => {
                    if !self.round_over()? {
                        break;
                    }
                }
            }
        }

        info!("Shell finished");
        Ok(())
    }

    fn opponent_turn(&mut self) -> Result<()> {
        writeln!(self.output, "{}'s turn", self.config.opponent_name())?;
        self.output.flush()?;
        let delay = self.config.opponent_delay();
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        let report = self.round.request_opponent_move()?;
        writeln!(
            self.output,
            "{} plays {}",
            self.config.opponent_name(),
            report.played.position.to_index() + 1
        )?;
        self.render()
    }

    /// Returns `false` when the player quits.
    fn human_turn(&mut self) -> Result<bool> {
        writeln!(self.output, "{}'s turn", self.config.player_name())?;
        let Some(line) = self.prompt()? else {
            return Ok(false);
        };

        match Command::parse(&line) {
            Command::Quit => return Ok(false),
            Command::Restart => self.restart()?,
            Command::Cell(index) => match self.round.submit_human_move(index) {
                Ok(_) => self.render()?,
                Err(e) => writeln!(self.output, "{e}")?,
            },
            Command::OutOfRange(number) => {
                writeln!(self.output, "{number} is not a square. Pick 1 to 9.")?
            }
            Command::Unknown => self.help()?,
        }
        Ok(true)
    }

    /// Returns `false` when the player is done playing.
    fn round_over(&mut self) -> Result<bool> {
        let message = match self.round.state() {
            RoundState::Won(mark) => {
                let winner = if mark == *self.round.config().human_mark() {
                    Actor::Human
                } else {
                    Actor::Opponent
                };
                format!("{} wins! Congratulations!", self.config.name_of(winner))
            }
            _ => "Draw!".to_string(),
        };
        writeln!(self.output, "{message}")?;
        writeln!(self.output, "Type restart to play again or quit to leave.")?;

        loop {
            let Some(line) = self.prompt()? else {
                return Ok(false);
            };
            match Command::parse(&line) {
                Command::Restart => {
                    self.restart()?;
                    return Ok(true);
                }
                Command::Quit => return Ok(false),
                _ => writeln!(self.output, "The round is over.")?,
            }
        }
    }

    fn restart(&mut self) -> Result<()> {
        self.round.reset_round();
        writeln!(self.output, "New round!")?;
        self.render()
    }

    fn prompt(&mut self) -> Result<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn render(&mut self) -> Result<()> {
        if *self.config.json() {
            writeln!(self.output, "{}", serde_json::to_string(&self.round.view())?)?;
        } else {
            writeln!(self.output, "{}", self.round.board().display())?;
        }
        Ok(())
    }

    fn help(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Enter 1-9 or a square name (e.g. center), restart, or quit."
        )?;
        Ok(())
    }
}

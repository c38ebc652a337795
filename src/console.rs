//! Line-oriented presentation of a [`Session`].
//!
//! The console only renders session state and forwards the human's choices;
//! every rule decision is made by the session.

use super::config::{Config, FirstMover};
use super::players::{HumanPlayer, Player};
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_rules::{GameOutcome, Phase, Session, Turn};
use tracing::{info, instrument};

const PLAY_A_GAME: &str = "Would you care to play a game of tic-tac-toe?";
const PLAY_FIRST: &str = "Do you want the first move?";
const PLAY_AGAIN: &str = "Would you care to play again?";

/// Interactive human-versus-computer games.
pub struct Console<R, W> {
    config: Config,
    human: HumanPlayer<R, W>,
    session: Session,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(config: Config, input: R, output: W) -> Self {
        let human = HumanPlayer::new(config.human_name().clone(), input, output);
        Self {
            config,
            human,
            session: Session::new(),
        }
    }

    /// The session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Writer the console renders to.
    pub fn output(&mut self) -> &mut W {
        self.human.output()
    }

    /// Plays games until the human declines another.
    ///
    /// Returns the outcome of every finished game.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Vec<GameOutcome>> {
        let mut outcomes = Vec::new();
        let mut question = PLAY_A_GAME;

        while self.human.ask_yes_no(question)? {
            outcomes.push(self.play_one()?);
            question = PLAY_AGAIN;
        }

        info!(games = outcomes.len(), "Console session ended");
        Ok(outcomes)
    }

    fn play_one(&mut self) -> Result<GameOutcome> {
        self.session.begin()?;

        let human_first = match self.config.first() {
            Some(FirstMover::Human) => true,
            Some(FirstMover::Computer) => false,
            None => self.human.ask_yes_no(PLAY_FIRST)?,
        };
        let opening = self.session.choose_first(human_first)?;
        writeln!(self.human.output(), "You are \"{}\"", self.session.human_mark())?;
        self.report(&opening)?;

        while self.session.phase() == Phase::InProgress {
            writeln!(self.human.output(), "\n{}\n", self.session.board())?;
            let me = self.session.human_mark();
            let pos = self.human.get_move(self.session.board(), me)?;
            let turns = self.session.play_human(pos)?;
            self.report(&turns)?;
        }

        let outcome = self.session.outcome();
        writeln!(self.human.output(), "\n{}\n", self.session.board())?;
        let message = match outcome.winner() {
            Some(mark) if mark == self.session.computer_mark() => "I win!",
            Some(_) => "You win!",
            None => "It's a draw.",
        };
        writeln!(self.human.output(), "{message}")?;
        self.session.finish_acknowledged()?;
        Ok(outcome)
    }

    fn report(&mut self, turns: &[Turn]) -> Result<()> {
        let computer = self.session.computer_mark();
        let name = self.config.computer_name().clone();
        let show_strategy = *self.config.show_strategy();

        for turn in turns.iter().filter(|t| t.mark == computer) {
            match turn.strategy {
                Some(strategy) if show_strategy => writeln!(
                    self.human.output(),
                    "{name} plays {} ({strategy})",
                    turn.position.label()
                )?,
                _ => writeln!(self.human.output(), "{name} plays {}", turn.position.label())?,
            }
        }
        Ok(())
    }
}

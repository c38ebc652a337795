//! A game session between a human and the greedy opponent.
//!
//! The session owns the board plus everything the GUI used to keep in loose
//! fields: who plays which mark, whose turn it is, and the move history.
//!
//! ```text
//! NotStarted ──begin──▶ AwaitingFirstMoveChoice ──choose_first──▶ InProgress
//!     ▲                                                              │
//!     └──────────────── finish_acknowledged ◀──── Finished ◀─────────┘
//! ```

use super::error::SessionError;
use super::heuristic::{self, Strategy};
use super::invariants::{InvariantSet, SessionInvariants};
use super::rules::GameOutcome;
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Lifecycle phase of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// No game yet, or the last one was acknowledged.
    NotStarted,
    /// Waiting for the human to say whether they move first.
    AwaitingFirstMoveChoice,
    /// Moves are being played.
    InProgress,
    /// The board shows a win or a draw.
    Finished,
}

/// One applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
    /// Heuristic rule that chose the move; `None` for human moves.
    pub strategy: Option<Strategy>,
}

/// Game session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) phase: Phase,
    pub(crate) board: Board,
    pub(crate) human_mark: Mark,
    pub(crate) history: Vec<Turn>,
}

impl Session {
    /// Creates a session with no game started.
    #[instrument]
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            board: Board::new(),
            human_mark: Mark::X,
            history: Vec::new(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far this game.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Number of moves played this game.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Mark played by the human.
    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    /// Mark played by the computer.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Mark due to move next, while a game is in progress.
    pub fn to_move(&self) -> Option<Mark> {
        (self.phase == Phase::InProgress).then(|| {
            if self.history.len() % 2 == 0 {
                Mark::X
            } else {
                Mark::O
            }
        })
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// Starts a new game: clears the board and asks who moves first.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::WrongPhase`] unless the session is
    /// [`Phase::NotStarted`].
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn begin(&mut self) -> Result<(), SessionError> {
        self.expect_phase(Phase::NotStarted)?;
        self.board = Board::new();
        self.history.clear();
        self.phase = Phase::AwaitingFirstMoveChoice;
        info!("New game, awaiting first-move choice");
        Ok(())
    }

    /// Records who moves first and starts play.
    ///
    /// Whoever moves first plays X. When the computer goes first it moves
    /// immediately; that move is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::WrongPhase`] unless the session is
    /// [`Phase::AwaitingFirstMoveChoice`].
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn choose_first(&mut self, human_first: bool) -> Result<Vec<Turn>, SessionError> {
        self.expect_phase(Phase::AwaitingFirstMoveChoice)?;
        self.human_mark = if human_first { Mark::X } else { Mark::O };
        self.phase = Phase::InProgress;
        info!(human = %self.human_mark, computer = %self.computer_mark(), "Marks assigned");

        if human_first {
            Ok(Vec::new())
        } else {
            Ok(vec![self.play_computer()?])
        }
    }

    /// Plays the human's move and, if the game goes on, the computer's reply.
    ///
    /// Returns every move applied, in order.
    ///
    /// # Errors
    ///
    /// - [`SessionError::WrongPhase`] if no game is in progress.
    /// - [`SessionError::NotYourTurn`] if the computer is due to move.
    /// - [`SessionError::InvalidMove`] if the cell is occupied; nothing
    ///   changes.
    #[instrument(skip(self), fields(move_count = self.history.len()))]
    pub fn play_human(&mut self, pos: Position) -> Result<Vec<Turn>, SessionError> {
        self.expect_phase(Phase::InProgress)?;
        if self.to_move() != Some(self.human_mark) {
            return Err(SessionError::NotYourTurn(self.human_mark));
        }

        let mut turns = vec![self.apply(pos, None)?];
        if self.phase == Phase::InProgress {
            turns.push(self.play_computer()?);
        }
        Ok(turns)
    }

    /// Lets the heuristic move for the computer.
    ///
    /// # Errors
    ///
    /// - [`SessionError::WrongPhase`] if no game is in progress.
    /// - [`SessionError::NotYourTurn`] if the human is due to move.
    /// - [`SessionError::BoardFull`] if the board has no empty cell.
    #[instrument(skip(self), fields(move_count = self.history.len()))]
    pub fn play_computer(&mut self) -> Result<Turn, SessionError> {
        self.expect_phase(Phase::InProgress)?;
        let me = self.computer_mark();
        if self.to_move() != Some(me) {
            return Err(SessionError::NotYourTurn(me));
        }

        let (pos, strategy) = heuristic::explain_move(&self.board, me, me.opponent())
            .ok_or(SessionError::BoardFull)?;
        self.apply(pos, Some(strategy))
    }

    /// Acknowledges a finished game so a new one can begin.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::WrongPhase`] unless the session is
    /// [`Phase::Finished`].
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn finish_acknowledged(&mut self) -> Result<(), SessionError> {
        self.expect_phase(Phase::Finished)?;
        self.phase = Phase::NotStarted;
        Ok(())
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            warn!(%expected, actual = %self.phase, "Session used in wrong phase");
            Err(SessionError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn apply(&mut self, pos: Position, strategy: Option<Strategy>) -> Result<Turn, SessionError> {
        let mark = self
            .to_move()
            .ok_or(SessionError::WrongPhase {
                expected: Phase::InProgress,
                actual: self.phase,
            })?;
        self.board.place_at(pos, mark)?;

        let turn = Turn {
            mark,
            position: pos,
            strategy,
        };
        self.history.push(turn);
        debug!(%mark, %pos, ?strategy, move_count = self.history.len(), "Move applied");

        if let Err(violations) = SessionInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "session invariants violated");
        }

        let outcome = self.board.outcome();
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game finished");
            self.phase = Phase::Finished;
        }
        Ok(turn)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

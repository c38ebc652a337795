//! Error types for the rule engine and game sessions.

use super::position::Position;
use super::session::Phase;
use super::types::Mark;
use derive_more::{Display, Error, From};

/// A move that targets an out-of-range or already-occupied cell.
///
/// The presentation layer should never offer such a cell, so this is always a
/// caller bug. Surface it instead of retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Row or column outside `0..3`.
    #[display("Invalid move: ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Invalid move: {_0} is already occupied")]
    Occupied(#[error(not(source))] Position),
}

/// Misuse of a [`Session`](super::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The move itself was rejected by the board.
    #[display("{_0}")]
    #[from]
    InvalidMove(InvalidMove),

    /// The operation is not allowed in the current phase.
    #[display("Expected phase {expected}, session is in {actual}")]
    WrongPhase {
        /// Phase the operation requires.
        expected: Phase,
        /// Phase the session is in.
        actual: Phase,
    },

    /// The computer was asked to move but no cell is empty.
    #[display("No empty cell left to play")]
    BoardFull,

    /// It is the other side's turn.
    #[display("It's not {_0}'s turn")]
    NotYourTurn(#[error(not(source))] Mark),
}

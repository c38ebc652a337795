//! Cells never change once set.

use super::Invariant;
use crate::{Board, Session};

/// Replaying the history onto an empty board reproduces the board.
///
/// Fails if any move landed on an occupied cell or if the board holds a mark
/// the history does not account for.
pub struct MonotonicBoard;

impl Invariant<Session> for MonotonicBoard {
    fn holds(session: &Session) -> bool {
        let mut replayed = Board::new();
        for turn in session.history() {
            if replayed.place_at(turn.position, turn.mark).is_err() {
                return false;
            }
        }
        replayed == *session.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

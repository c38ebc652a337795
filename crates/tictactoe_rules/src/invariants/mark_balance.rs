//! X is never behind O, and never more than one ahead.

use super::Invariant;
use crate::{Mark, Session};

/// `count(X) - count(O)` is 0 or 1.
pub struct MarkBalance;

impl Invariant<Session> for MarkBalance {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

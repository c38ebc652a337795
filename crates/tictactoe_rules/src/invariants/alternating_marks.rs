//! Marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{Mark, Session};

/// History alternates marks, starting with X.
pub struct AlternatingMarks;

impl Invariant<Session> for AlternatingMarks {
    fn holds(session: &Session) -> bool {
        let history = session.history();
        if history.first().is_some_and(|turn| turn.mark != Mark::X) {
            return false;
        }
        history.windows(2).all(|pair| pair[0].mark != pair[1].mark)
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, O, ...)"
    }
}

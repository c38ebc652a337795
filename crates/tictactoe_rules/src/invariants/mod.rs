//! Properties a [`Session`](crate::Session) must keep after every move.
//!
//! Sessions check the whole set after each applied move and log any
//! violation; debug builds also assert.

mod alternating_marks;
mod mark_balance;
mod monotonic_board;

pub use alternating_marks::AlternatingMarks;
pub use mark_balance::MarkBalance;
pub use monotonic_board::MonotonicBoard;

/// A property of `S` that every reachable state satisfies.
pub trait Invariant<S> {
    /// True if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A failed [`Invariant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// [`Invariant::description`] of the property that failed.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a property description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked together, reporting every failure rather than the
/// first.
///
/// Implemented for pairs and triples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(check_one::<S, $inv>(state, &mut violations);)+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

/// Every session invariant.
pub type SessionInvariants = (MonotonicBoard, AlternatingMarks, MarkBalance);

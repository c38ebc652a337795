//! Pure tic-tac-toe rule engine.
//!
//! A [`Board`] of nine [`Cell`]s, win and draw detection over the eight
//! [`Line`]s, a greedy one-ply opponent ([`choose_move`]), and a [`Session`]
//! that ties them into a human-versus-computer game. No I/O happens here;
//! presentation layers observe the session and render it.
//!
//! ```
//! use tictactoe_rules::{Board, GameOutcome, Mark, choose_move};
//!
//! let mut board = Board::new();
//! let pos = choose_move(&board, Mark::X, Mark::O);
//! board.place(pos.row(), pos.col(), Mark::X)?;
//! assert_eq!(board.outcome(), GameOutcome::InProgress);
//! # Ok::<(), tictactoe_rules::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod heuristic;
mod position;
mod session;
mod types;

pub mod invariants;
pub mod rules;

pub use error::{InvalidMove, SessionError};
pub use heuristic::{Strategy, choose_move, explain_move, try_choose_move};
pub use position::Position;
pub use rules::{GameOutcome, Line};
pub use session::{Phase, Session, Turn};
pub use types::{Board, Cell, EmptyCells, Mark};

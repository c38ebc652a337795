//! Terminal tic-tac-toe against a greedy opponent.
//!
//! The rules live in [`tictactoe_rules`]; this crate adds the pieces around
//! them:
//!
//! - **Config**: TOML settings for interactive play
//! - **Players**: human (line input), greedy heuristic, first-empty-cell
//! - **Orchestrator**: runs a game between any two players
//! - **Console**: interactive play driven by a [`tictactoe_rules::Session`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod orchestrator;
mod players;

pub use config::{Config, ConfigError, FirstMover};
pub use console::Console;
pub use orchestrator::{GameEvent, Orchestrator, Tally};
pub use players::{GreedyPlayer, HumanPlayer, Opponent, Player, SimplePlayer};

//! Player trait and implementations.

mod greedy;
mod human;
mod simple;

pub use greedy::GreedyPlayer;
pub use human::HumanPlayer;
pub use simple::SimplePlayer;

use anyhow::Result;
use tictactoe_rules::{Board, Mark, Position};

/// Something that can pick moves.
pub trait Player {
    /// Gets a move for `me` on the current board.
    ///
    /// Only called while the game is in progress.
    fn get_move(&mut self, board: &Board, me: Mark) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Computer opponents selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Opponent {
    /// Win, block, or first empty cell.
    Greedy,
    /// First empty cell only.
    Simple,
}

impl Opponent {
    /// Builds the player.
    pub fn build(self, name: impl Into<String>) -> Box<dyn Player> {
        match self {
            Opponent::Greedy => Box::new(GreedyPlayer::new(name)),
            Opponent::Simple => Box::new(SimplePlayer::new(name)),
        }
    }
}

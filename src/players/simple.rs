//! Simple AI player for comparison runs.

use super::Player;
use anyhow::Result;
use tictactoe_rules::{Board, Mark, Position};
use tracing::debug;

/// Simple AI that picks first available cell.
#[derive(derive_new::new)]
pub struct SimplePlayer {
    #[new(into)]
    name: String,
}

impl Player for SimplePlayer {
    fn get_move(&mut self, board: &Board, _me: Mark) -> Result<Position> {
        let pos = board
            .empty_cells()
            .next()
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(ai = %self.name, %pos, "AI chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

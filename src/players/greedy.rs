//! The greedy heuristic as a player.

use super::Player;
use anyhow::Result;
use tictactoe_rules::{Board, Mark, Position, explain_move};
use tracing::debug;

/// Plays [`tictactoe_rules::choose_move`].
#[derive(derive_new::new)]
pub struct GreedyPlayer {
    #[new(into)]
    name: String,
}

impl Player for GreedyPlayer {
    fn get_move(&mut self, board: &Board, me: Mark) -> Result<Position> {
        let (pos, strategy) = explain_move(board, me, me.opponent())
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(ai = %self.name, %pos, %strategy, "AI chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

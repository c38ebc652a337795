//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use super::Line;
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are evaluated in [`Line::ALL`] order and the first complete one
/// decides. Under alternating play at most one mark can own a line; on a
/// hand-built board with two, the earlier line wins.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    Line::ALL.iter().find_map(|line| line.winner(board))
}

//! Greedy one-ply opponent.
//!
//! Rules are tried in a fixed priority order and the first that yields a cell
//! is played:
//!
//! 1. Opening: on an empty board, take the top-left corner.
//! 2. Win: complete any line holding two of our marks and one empty cell.
//! 3. Block: fill any line holding two opponent marks and one empty cell.
//! 4. Fallback: take the first empty cell in row-major order.
//!
//! Lines are scanned in [`Line::ALL`] order. There is no look-ahead, so forks
//! go unnoticed and the opponent can be beaten.

use super::rules::Line;
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule picked a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Strategy {
    /// Fixed top-left reply to an empty board.
    Opening,
    /// Completes one of our own lines.
    Win,
    /// Fills a line the opponent was about to complete.
    Block,
    /// First empty cell, row-major.
    Fallback,
}

/// Picks a move and reports which rule chose it.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board), fields(occupied = board.occupied_count()))]
pub fn explain_move(board: &Board, me: Mark, opponent: Mark) -> Option<(Position, Strategy)> {
    let choice = if board.occupied_count() == 0 {
        Some((Position::TopLeft, Strategy::Opening))
    } else if let Some(pos) = first_completing_cell(board, me) {
        Some((pos, Strategy::Win))
    } else if let Some(pos) = first_completing_cell(board, opponent) {
        Some((pos, Strategy::Block))
    } else {
        board
            .empty_cells()
            .next()
            .map(|pos| (pos, Strategy::Fallback))
    };

    if let Some((pos, strategy)) = choice {
        debug!(%me, %pos, %strategy, "Heuristic chose move");
    }
    choice
}

/// Picks a move, or `None` if the board is full.
pub fn try_choose_move(board: &Board, me: Mark, opponent: Mark) -> Option<Position> {
    explain_move(board, me, opponent).map(|(pos, _)| pos)
}

/// Picks the next move for `me`.
///
/// # Panics
///
/// Callers must only ask while the game is in progress. Panics if the board
/// has no empty cell.
pub fn choose_move(board: &Board, me: Mark, opponent: Mark) -> Position {
    try_choose_move(board, me, opponent).expect("choose_move called on a full board")
}

fn first_completing_cell(board: &Board, mark: Mark) -> Option<Position> {
    Line::ALL
        .iter()
        .find_map(|line| line.completing_cell(board, mark))
}

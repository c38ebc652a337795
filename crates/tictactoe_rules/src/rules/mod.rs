//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here stores state: the outcome of
//! a game is derived from the cells every time it is asked for.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::Line;
pub use win::check_winner;

use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// State of a game as read off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// The mark owns a complete line.
    Win(Mark),
    /// Every cell is occupied and no line is complete.
    Draw,
}

impl GameOutcome {
    /// Returns true once the game can take no more moves.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameOutcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(mark) => write!(f, "{mark} wins"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates the board.
///
/// A completed line wins even when the board is also full.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(mark) = check_winner(board) {
        GameOutcome::Win(mark)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// Every assignment of empty/X/O to the nine cells, legal in play or not.
#[cfg(test)]
pub(crate) fn all_boards() -> impl Iterator<Item = Board> {
    use super::Cell;

    (0..3u32.pow(9)).map(|mut code| {
        let mut cells = [Cell::Empty; 9];
        for cell in &mut cells {
            *cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::Occupied(Mark::X),
                _ => Cell::Occupied(Mark::O),
            };
            code /= 3;
        }
        Board::from_cells(cells)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    fn any_line_complete(board: &Board) -> bool {
        Line::ALL.iter().any(|line| line.winner(board).is_some())
    }

    #[test]
    fn test_in_progress_iff_no_line_and_empty_cell_for_all_boards() {
        for board in all_boards() {
            let expected = !any_line_complete(&board) && board.empty_cells().next().is_some();
            assert_eq!(
                board.outcome() == GameOutcome::InProgress,
                expected,
                "board:\n{board}"
            );
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw_for_all_boards() {
        for board in all_boards() {
            if board.is_full() && !any_line_complete(&board) {
                assert_eq!(board.outcome(), GameOutcome::Draw, "board:\n{board}");
            }
        }
    }

    #[test]
    fn test_empty_plus_occupied_is_nine_for_all_boards() {
        for board in all_boards() {
            assert_eq!(board.empty_cells().count() + board.occupied_count(), 9);
        }
    }

    #[test]
    fn test_full_board_diagonal_win() {
        // X O O / O X X / O X X
        let x = Cell::Occupied(Mark::X);
        let o = Cell::Occupied(Mark::O);
        let board = Board::from_cells([x, o, o, o, x, x, o, x, x]);
        assert!(board.is_full());
        assert_eq!(board.outcome(), GameOutcome::Win(Mark::X));
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let mut board = Board::new();
        // X O X / O X O / O X _
        for (pos, mark) in [
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::O),
            (Position::Center, Mark::X),
            (Position::MiddleRight, Mark::O),
            (Position::BottomLeft, Mark::O),
            (Position::BottomCenter, Mark::X),
        ] {
            board.place_at(pos, mark).unwrap();
        }
        assert_eq!(board.outcome(), GameOutcome::InProgress);

        board.place_at(Position::BottomRight, Mark::X).unwrap();
        assert_eq!(board.outcome(), GameOutcome::Win(Mark::X));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(GameOutcome::Win(Mark::O).to_string(), "O wins");
        assert_eq!(GameOutcome::Draw.to_string(), "Draw");
        assert!(GameOutcome::Draw.is_terminal());
        assert!(!GameOutcome::InProgress.is_terminal());
        assert_eq!(GameOutcome::Win(Mark::X).winner(), Some(Mark::X));
    }
}

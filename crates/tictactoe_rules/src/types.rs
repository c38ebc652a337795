//! Core domain types for tic-tac-toe.

use super::error::InvalidMove;
use super::position::Position;
use super::rules::{self, GameOutcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A player's symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Mark {
    /// Moves first.
    X,
    /// Moves second.
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied.
    #[default]
    Empty,
    /// Occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells only move from `Empty` to `Occupied`; the only way back is a new
/// board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from row-major cells without checking play order.
    ///
    /// Useful for analysing arbitrary positions; normal play goes through
    /// [`Board::place`].
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    #[cfg(test)]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell; 9] {
        &mut self.cells
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfRange`] if either coordinate is outside
    /// `0..3`, or [`InvalidMove::Occupied`] if the cell already holds a mark.
    /// The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), InvalidMove> {
        let pos = Position::from_coords(row, col).ok_or(InvalidMove::OutOfRange { row, col })?;
        self.place_at(pos, mark)
    }

    /// Places `mark` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::Occupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn place_at(&mut self, pos: Position, mark: Mark) -> Result<(), InvalidMove> {
        if !self.is_empty(pos) {
            debug!(?pos, occupant = ?self.get(pos), "Rejected move onto occupied cell");
            return Err(InvalidMove::Occupied(pos));
        }
        self.cells[pos.to_index()] = Cell::Occupied(mark);
        Ok(())
    }

    /// Empty cells in row-major order.
    ///
    /// The iterator is lazy and `Clone`, so a copy can be re-walked from the
    /// start; calling this again restarts the scan as well.
    pub fn empty_cells(&self) -> EmptyCells<'_> {
        EmptyCells {
            board: self,
            next: 0,
        }
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Current outcome, recomputed from the cells.
    pub fn outcome(&self) -> GameOutcome {
        rules::outcome(self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = Position::ALL[row * 3 + col];
                match self.get(pos) {
                    Cell::Empty => write!(f, "{}", pos.keypad())?,
                    Cell::Occupied(mark) => write!(f, "{mark}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Iterator over the empty cells of a [`Board`], in row-major order.
#[derive(Debug, Clone)]
pub struct EmptyCells<'a> {
    board: &'a Board,
    next: usize,
}

impl Iterator for EmptyCells<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while let Some(pos) = Position::from_index(self.next) {
            self.next += 1;
            if self.board.is_empty(pos) {
                return Some(pos);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(9usize.saturating_sub(self.next)))
    }
}

impl std::iter::FusedIterator for EmptyCells<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.empty_cells().count(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_writes_single_cell() {
        let mut board = Board::new();
        board.place(1, 2, Mark::O).unwrap();
        assert_eq!(board.get(Position::MiddleRight), Cell::Occupied(Mark::O));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.place(3, 0, Mark::X),
            Err(InvalidMove::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            board.place(0, 7, Mark::X),
            Err(InvalidMove::OutOfRange { row: 0, col: 7 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_occupied_leaves_board_unchanged() {
        let mut board = Board::new();
        board.place(0, 0, Mark::X).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place(0, 0, Mark::O),
            Err(InvalidMove::Occupied(Position::TopLeft))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_cells_row_major_and_restartable() {
        let mut board = Board::new();
        board.place_at(Position::TopLeft, Mark::X).unwrap();
        board.place_at(Position::Center, Mark::O).unwrap();

        let cells = board.empty_cells();
        let first: Vec<_> = cells.clone().collect();
        let second: Vec<_> = cells.collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ]
        );
    }

    #[test]
    fn test_display_shows_keypad_numbers() {
        let mut board = Board::new();
        board.place_at(Position::TopLeft, Mark::X).unwrap();
        board.place_at(Position::Center, Mark::O).unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_board_serializes() {
        let mut board = Board::new();
        board.place_at(Position::Center, Mark::X).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}

//! The eight winning lines of the board.

use super::super::{Board, Cell, Mark, Position};

/// Three cells that win the game when they all hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line([Position; 3]);

impl Line {
    /// Every line, in evaluation order: rows top to bottom, columns left to
    /// right, then the main diagonal and the anti-diagonal.
    pub const ALL: [Line; 8] = [
        // Rows
        Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
        Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        Line([Position::TopLeft, Position::Center, Position::BottomRight]),
        Line([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Number of cells on this line holding `mark`.
    pub fn count(&self, board: &Board, mark: Mark) -> usize {
        self.0
            .iter()
            .filter(|pos| board.get(**pos) == Cell::Occupied(mark))
            .count()
    }

    /// First empty cell on this line, if any.
    pub fn empty_cell(&self, board: &Board) -> Option<Position> {
        self.0.iter().copied().find(|pos| board.is_empty(*pos))
    }

    /// The mark that fills all three cells, if one does.
    pub fn winner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let first = board.get(a);
        if first == board.get(b) && first == board.get(c) {
            first.mark()
        } else {
            None
        }
    }

    /// The empty cell that would complete this line for `mark`.
    ///
    /// Returns a position only when two cells hold `mark` and the third is
    /// empty.
    pub fn completing_cell(&self, board: &Board, mark: Mark) -> Option<Position> {
        if self.count(board, mark) == 2 {
            self.empty_cell(board)
        } else {
            None
        }
    }
}

//! Line (three-in-a-row) detection.
//!
//! Lines are always three cells long: the first three cells of every row,
//! the first three cells of every column, and the two principal diagonals of
//! the top-left 3x3 square. Lines that run off a smaller board can never be
//! completed because off-board cells read as empty.
//!
//! Scan order (rows, then columns, then the main and anti diagonal) is the
//! priority used when reporting *which* line won.

use smallvec::SmallVec;

use super::grid::Board;
use crate::core::{PieceId, PiecePool, PlayerColor, Position};

/// The cells of one line.
pub type Line = [Position; 3];

/// A completed line: each cell and the piece on it.
pub type WinningCells = SmallVec<[(Position, PieceId); 3]>;

impl Board {
    /// Candidate lines in priority order.
    pub fn lines(&self) -> impl Iterator<Item = Line> {
        let rows = (0..self.height() as i32)
            .map(|y| [Position::new(0, y), Position::new(1, y), Position::new(2, y)]);
        let columns = (0..self.width() as i32)
            .map(|x| [Position::new(x, 0), Position::new(x, 1), Position::new(x, 2)]);
        let diagonals = [
            [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
            [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
        ];

        rows.chain(columns).chain(diagonals)
    }

    fn owned_by(&self, pieces: &PiecePool, pos: Position, color: PlayerColor) -> bool {
        self.get_piece(pos)
            .and_then(|id| pieces.owner(id))
            .is_some_and(|owner| owner == color)
    }

    /// True iff some full line is occupied by pieces of `color`.
    #[must_use]
    pub fn check_for_tic_tac_toe(&self, pieces: &PiecePool, color: PlayerColor) -> bool {
        self.winning_line(pieces, color).is_some()
    }

    /// The first full line (in priority order) owned by `color`.
    #[must_use]
    pub fn winning_line(&self, pieces: &PiecePool, color: PlayerColor) -> Option<Line> {
        self.lines()
            .find(|line| line.iter().all(|&pos| self.owned_by(pieces, pos, color)))
    }

    /// Cells and pieces of the first full line owned by `color`.
    ///
    /// Empty if `color` has no line.
    #[must_use]
    pub fn winning_cells(&self, pieces: &PiecePool, color: PlayerColor) -> WinningCells {
        self.winning_line(pieces, color)
            .map(|line| {
                line.iter()
                    .filter_map(|&pos| self.get_piece(pos).map(|id| (pos, id)))
                    .collect()
            })
            .unwrap_or_default()
    }
}

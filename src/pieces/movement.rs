//! Movement rules.
//!
//! Every rule is a pure predicate over `(from, to, board)`. The board is only
//! consulted for occupancy, so a predicate gives the same answer no matter
//! which piece (or no piece) sits on `from`.
//!
//! | Kind   | Shape                  | Path check          |
//! |--------|------------------------|---------------------|
//! | Knight | {2,1} deltas, any order | none (jumps)       |
//! | Rook   | same row or column     | all squares between |
//! | Bishop | equal deltas           | all squares between |
//!
//! In every case both squares must be on the board and the destination
//! empty. Off-board squares are rejected before any coordinate arithmetic.
//!
//! `candidate_destinations` enumerates the squares worth asking the
//! predicate about. It is shape-only; callers filter through
//! `is_valid_move`.

use smallvec::SmallVec;

use super::kind::{Piece, PieceKind};
use crate::board::Board;
use crate::core::Position;

/// Candidate destination list. Sized for a knight on a 3x3 board.
pub type Destinations = SmallVec<[Position; 8]>;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const DIAGONALS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

impl PieceKind {
    /// Check whether a piece of this kind may move from `from` to `to`.
    #[must_use]
    pub fn is_valid_move(self, from: Position, to: Position, board: &Board) -> bool {
        if from == to
            || !board.is_within_bounds(from)
            || !board.is_within_bounds(to)
            || board.get_piece(to).is_some()
        {
            return false;
        }

        let (dx, dy) = from.abs_delta(to);
        match self {
            PieceKind::Knight => matches!((dx, dy), (1, 2) | (2, 1)),
            PieceKind::Rook => (dx == 0 || dy == 0) && path_is_clear(from, to, board),
            PieceKind::Bishop => dx == dy && path_is_clear(from, to, board),
        }
    }

    /// Enumerate the in-bounds squares this kind could reach from `from`
    /// by shape alone. Empty when `from` is off the board.
    ///
    /// ```
    /// use tatedrez::board::Board;
    /// use tatedrez::core::Position;
    /// use tatedrez::pieces::PieceKind;
    ///
    /// let board = Board::new(3, 3);
    /// let corner = Position::new(0, 0);
    ///
    /// assert_eq!(PieceKind::Knight.candidate_destinations(corner, &board).len(), 2);
    /// assert_eq!(PieceKind::Rook.candidate_destinations(corner, &board).len(), 4);
    /// assert_eq!(PieceKind::Bishop.candidate_destinations(corner, &board).len(), 2);
    /// ```
    #[must_use]
    pub fn candidate_destinations(self, from: Position, board: &Board) -> Destinations {
        let mut out = Destinations::new();
        if !board.is_within_bounds(from) {
            return out;
        }

        match self {
            PieceKind::Knight => {
                out.extend(
                    KNIGHT_OFFSETS
                        .iter()
                        .map(|&(dx, dy)| from.offset(dx, dy))
                        .filter(|&pos| board.is_within_bounds(pos)),
                );
            }
            PieceKind::Rook => {
                for x in 0..board.width() as i32 {
                    if x != from.x {
                        out.push(Position::new(x, from.y));
                    }
                }
                for y in 0..board.height() as i32 {
                    if y != from.y {
                        out.push(Position::new(from.x, y));
                    }
                }
            }
            PieceKind::Bishop => {
                for (dx, dy) in DIAGONALS {
                    let mut pos = from.offset(dx, dy);
                    while board.is_within_bounds(pos) {
                        out.push(pos);
                        pos = pos.offset(dx, dy);
                    }
                }
            }
        }

        out
    }

    /// Every legal destination from `from` on the current board.
    #[must_use]
    pub fn legal_destinations(self, from: Position, board: &Board) -> Destinations {
        self.candidate_destinations(from, board)
            .into_iter()
            .filter(|&to| self.is_valid_move(from, to, board))
            .collect()
    }
}

impl Piece {
    /// Check whether this piece may move from `from` to `to`.
    #[must_use]
    pub fn is_valid_move(&self, from: Position, to: Position, board: &Board) -> bool {
        self.kind.is_valid_move(from, to, board)
    }
}

/// Every square strictly between `from` and `to` is empty.
///
/// Assumes the two squares share a row, column, or diagonal.
fn path_is_clear(from: Position, to: Position, board: &Board) -> bool {
    let (sx, sy) = from.step_toward(to);
    let mut pos = from.offset(sx, sy);

    while pos != to {
        if board.get_piece(pos).is_some() {
            return false;
        }
        pos = pos.offset(sx, sy);
    }

    true
}

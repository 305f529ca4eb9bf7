//! The board grid.
//!
//! A `width × height` grid of cells, each either empty or holding the
//! `PieceId` of the piece that sits there. Piece data lives in the
//! `PiecePool`; operations that need to know what a piece *is* (its kind for
//! movement, its owner for lines) take the pool as context.
//!
//! Cells are stored row-major: index = `y * width + x`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{PieceId, PiecePool, Position};

/// Mutable grid of optional piece references.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<PieceId>>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Panics on a zero dimension.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "Board must have at least one cell");

        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Board width (number of columns).
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height (number of rows).
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Coordinate range check.
    #[must_use]
    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    fn slot(&self, pos: Position) -> Option<usize> {
        self.is_within_bounds(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    /// The occupant of a cell. Off-board coordinates read as empty.
    #[must_use]
    pub fn get_piece(&self, pos: Position) -> Option<PieceId> {
        self.slot(pos).and_then(|i| self.cells[i])
    }

    /// Put `piece` (or nothing) on an empty in-bounds cell.
    ///
    /// Returns false without touching the board if `pos` is off-board or the
    /// cell is already occupied.
    pub fn place_piece(&mut self, piece: Option<PieceId>, pos: Position) -> bool {
        let Some(i) = self.slot(pos) else {
            return false;
        };

        if let Some(occupant) = self.cells[i] {
            debug!(%pos, %occupant, "cell already occupied");
            return false;
        }

        self.cells[i] = piece;
        true
    }

    /// Relocate the piece on `from` to `to` if its movement rule allows it.
    ///
    /// Fails (and leaves the board unchanged) if either square is off-board,
    /// `from` is empty, `to` is occupied, or the move is illegal for the
    /// occupant's kind.
    pub fn move_piece(&mut self, pieces: &PiecePool, from: Position, to: Position) -> bool {
        let (Some(src), Some(dst)) = (self.slot(from), self.slot(to)) else {
            return false;
        };

        let Some(id) = self.cells[src] else {
            return false;
        };
        if self.cells[dst].is_some() {
            return false;
        }

        let Some(piece) = pieces.get(id) else {
            warn!(%id, %from, "board references a piece missing from the pool");
            return false;
        };

        if !piece.is_valid_move(from, to, self) {
            return false;
        }

        self.cells[dst] = Some(id);
        self.cells[src] = None;
        true
    }

    /// Where a piece currently sits, if it is on the board.
    #[must_use]
    pub fn position_of(&self, id: PieceId) -> Option<Position> {
        self.cells
            .iter()
            .position(|&cell| cell == Some(id))
            .map(|i| Position::new((i % self.width) as i32, (i / self.width) as i32))
    }

    /// Every cell coordinate, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Iterate over occupied cells.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, PieceId)> + '_ {
        self.positions()
            .filter_map(|pos| self.get_piece(pos).map(|id| (pos, id)))
    }

    /// Check if no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// One line per cell: `Position (x, y): Kind (Color)` or `Empty`.
    #[must_use]
    pub fn describe(&self, pieces: &PiecePool) -> String {
        let mut out = String::new();
        for pos in self.positions() {
            let info = match self.get_piece(pos).and_then(|id| pieces.get(id)) {
                Some(piece) => piece.to_string(),
                None => "Empty".to_string(),
            };
            out.push_str(&format!("Position {}: {}\n", pos, info));
        }
        out
    }
}

impl std::fmt::Display for Board {
    /// Compact grid of piece IDs, `.` for empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height as i32 {
            let row: Vec<String> = (0..self.width as i32)
                .map(|x| match self.get_piece(Position::new(x, y)) {
                    Some(id) => id.raw().to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

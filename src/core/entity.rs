//! Piece identification and the piece arena.
//!
//! A placed piece is known to two owners at once: the board cell it sits on
//! and the owning player's piece list. Neither holds the piece itself. Both
//! hold a `PieceId` into the single `PiecePool`, which owns the piece data.
//!
//! ## ID Layout
//!
//! IDs are dense indices allocated in creation order. The pool is only ever
//! cleared as a whole (on reset), so an ID stays valid for the lifetime of a
//! game.
//!
//! ## Usage
//!
//! ```
//! use tatedrez::core::{PiecePool, PlayerColor};
//! use tatedrez::pieces::PieceKind;
//!
//! let mut pool = PiecePool::new();
//! let rook = pool.create(PieceKind::Rook, PlayerColor::White);
//!
//! assert_eq!(pool.get(rook).map(|p| p.kind), Some(PieceKind::Rook));
//! assert_eq!(pool.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use super::player::PlayerColor;
use crate::pieces::{Piece, PieceKind};

/// Unique identifier for a piece within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for PieceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// Arena owning every piece created during a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiecePool {
    pieces: Vec<Piece>,
}

impl PiecePool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new piece and return its ID.
    pub fn create(&mut self, kind: PieceKind, owner: PlayerColor) -> PieceId {
        self.insert(Piece::new(kind, owner))
    }

    /// Store an already-built piece and return its ID.
    pub fn insert(&mut self, piece: Piece) -> PieceId {
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push(piece);
        id
    }

    /// The ID the next `create`/`insert` will return.
    #[must_use]
    pub fn next_id(&self) -> PieceId {
        PieceId(self.pieces.len() as u32)
    }

    /// Look up a piece.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.slot())
    }

    /// Owner colour of a piece, if it exists.
    #[must_use]
    pub fn owner(&self, id: PieceId) -> Option<PlayerColor> {
        self.get(id).map(|p| p.owner)
    }

    /// Number of pieces allocated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Check if no pieces have been allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterate over (PieceId, &Piece) pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, p)| (PieceId(i as u32), p))
    }

    /// Drop every piece. All outstanding IDs become dangling.
    pub fn clear(&mut self) {
        self.pieces.clear();
    }
}

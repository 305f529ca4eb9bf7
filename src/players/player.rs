//! A player's pieces and placement inventory.
//!
//! ## Owned pieces
//!
//! The pieces a player currently has on the board, as `PieceId`s into the
//! game's pool, in placement order. Bounded by `max_pieces`.
//!
//! ## Inventory
//!
//! Remaining placement allowance per kind. The engine never consumes it on
//! its own: the caller deducts one unit after each *successful* placement.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::board::Board;
use crate::core::{Inventory, PieceId, PiecePool, PlayerColor};
use crate::pieces::PieceKind;

/// Owned-piece list. Sized for the standard three-piece game.
pub type OwnedPieces = SmallVec<[PieceId; 3]>;

/// One of the two players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    color: PlayerColor,
    pieces: OwnedPieces,
    max_pieces: usize,
    available: Inventory,

    /// Whether this player is to move.
    pub is_turn: bool,
}

impl Player {
    /// Create a player with no pieces and an empty inventory.
    #[must_use]
    pub fn new(color: PlayerColor, max_pieces: usize) -> Self {
        Self {
            color,
            pieces: OwnedPieces::new(),
            max_pieces,
            available: Inventory::default(),
            is_turn: false,
        }
    }

    /// This player's colour.
    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    /// Owned pieces in placement order.
    #[must_use]
    pub fn pieces(&self) -> &[PieceId] {
        &self.pieces
    }

    /// Number of pieces owned.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Check if the player owns the maximum number of pieces.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.pieces.len() >= self.max_pieces
    }

    /// Check if the player owns a given piece.
    #[must_use]
    pub fn owns(&self, id: PieceId) -> bool {
        self.pieces.contains(&id)
    }

    /// Track a newly placed piece.
    ///
    /// A no-op (logged) once the player already owns `max_pieces`.
    pub fn add_piece(&mut self, id: PieceId) {
        if self.is_full() {
            warn!(color = %self.color, %id, max = self.max_pieces, "cannot add piece: max limit reached");
            return;
        }

        self.pieces.push(id);
        debug!(color = %self.color, %id, total = self.pieces.len(), "added piece");
    }

    /// Stop tracking a piece.
    ///
    /// Returns true if the piece was found and removed.
    pub fn remove_piece(&mut self, id: PieceId) -> bool {
        if let Some(pos) = self.pieces.iter().position(|&p| p == id) {
            self.pieces.remove(pos);
            true
        } else {
            false
        }
    }

    /// Drop every owned piece.
    pub fn clear_pieces(&mut self) {
        self.pieces.clear();
    }

    // === Inventory ===

    /// Replace the placement allowance.
    pub fn init_pieces(&mut self, inventory: &Inventory) {
        self.available = inventory.clone();
    }

    /// Consume one unit of allowance for `kind`.
    ///
    /// Returns false if the kind is unknown or exhausted.
    pub fn deduct_available_piece(&mut self, kind: PieceKind) -> bool {
        match self.available.get_mut(&kind) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Remaining allowance for `kind` (zero if unknown).
    #[must_use]
    pub fn get_available_piece_count(&self, kind: PieceKind) -> u8 {
        self.available.get(&kind).copied().unwrap_or(0)
    }

    /// Remaining allowance across all kinds.
    #[must_use]
    pub fn total_available(&self) -> usize {
        self.available.values().map(|&n| n as usize).sum()
    }

    // === Stuck detection ===

    /// Whether any owned piece has at least one legal destination.
    ///
    /// Owned pieces that are not on the board are skipped.
    #[must_use]
    pub fn can_move(&self, board: &Board, pieces: &PiecePool) -> bool {
        self.pieces.iter().any(|&id| {
            let (Some(piece), Some(from)) = (pieces.get(id), board.position_of(id)) else {
                return false;
            };

            piece
                .kind
                .candidate_destinations(from, board)
                .into_iter()
                .any(|to| piece.is_valid_move(from, to, board))
        })
    }
}

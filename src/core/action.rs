//! Player intents and how they are applied.
//!
//! An `Action` is what the host layer sends after reading input: place a
//! piece of some kind, move a piece, or reset. `Action::execute` applies it
//! to a `GameState` and owns the caller-side half of the placement
//! contract: the engine only checks phase and space, so the inventory is
//! checked here before placing and consumed here after a successful
//! placement, never on failure.
//!
//! ## Example
//!
//! ```
//! use tatedrez::core::{Action, GameState};
//! use tatedrez::pieces::PieceKind;
//!
//! let mut state = GameState::standard();
//!
//! assert!(Action::place(PieceKind::Rook, 0, 0).execute(&mut state));
//! // White has no rook left; Black does.
//! assert!(Action::place(PieceKind::Rook, 1, 1).execute(&mut state));
//! assert!(!Action::place(PieceKind::Rook, 2, 2).execute(&mut state));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::position::Position;
use super::state::GameState;
use crate::pieces::PieceKind;

/// A player or host intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place a new piece for the current player.
    Place { kind: PieceKind, at: Position },
    /// Move one of the current player's pieces.
    Move { from: Position, to: Position },
    /// Start over, restoring both inventories.
    Reset,
}

impl Action {
    /// Place `kind` at `(x, y)`.
    #[must_use]
    pub const fn place(kind: PieceKind, x: i32, y: i32) -> Self {
        Action::Place {
            kind,
            at: Position::new(x, y),
        }
    }

    /// Move from `(from_x, from_y)` to `(to_x, to_y)`.
    #[must_use]
    pub const fn move_piece(from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> Self {
        Action::Move {
            from: Position::new(from_x, from_y),
            to: Position::new(to_x, to_y),
        }
    }

    /// Apply this action.
    ///
    /// Returns whether the game accepted it. A rejected action leaves the
    /// state untouched, except that a move attempt by a stuck player passes
    /// the turn (or ends the game if both players are stuck).
    pub fn execute(&self, state: &mut GameState) -> bool {
        match *self {
            Action::Place { kind, at } => {
                if state.available_piece_count(kind) == 0 {
                    debug!(%kind, "no pieces of this kind left to place");
                    return false;
                }

                let seat = state.current_id();
                if !state.place_piece(kind, at.x, at.y) {
                    return false;
                }

                // The turn has usually passed by now, so charge the placer's
                // seat explicitly.
                state.deduct_available_piece_for(seat, kind)
            }
            Action::Move { from, to } => state.move_piece(from.x, from.y, to.x, to.y),
            Action::Reset => {
                state.reset();
                state.init_inventories();
                true
            }
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place { kind, at } => write!(f, "place {} at {}", kind, at),
            Action::Move { from, to } => write!(f, "move {} -> {}", from, to),
            Action::Reset => f.write_str("reset"),
        }
    }
}

//! # tatedrez
//!
//! Rules engine for Tatedrez: tic-tac-toe win conditions with chess piece
//! movement on a 3x3 board.
//!
//! ## Game Flow
//!
//! 1. **Placement**: players alternately place a Knight, a Rook, and a
//!    Bishop on empty cells.
//! 2. **Dynamic**: once both players have placed all three, they take turns
//!    moving their own pieces by chess rules (no captures).
//! 3. **Completed**: three of a colour in a row, column, or diagonal wins.
//!    A player with no legal move is skipped; if both are stuck, the game is
//!    drawn.
//!
//! ## Design Principles
//!
//! 1. **Booleans for rule failures**: an illegal action returns `false` and
//!    changes nothing. Only constructing a piece from an unknown type tag is
//!    an error.
//!
//! 2. **One piece arena**: the board and each player refer to pieces by
//!    `PieceId` into a single `PiecePool`.
//!
//! 3. **Polled notifications**: the engine queues `GameEvent`s; the host
//!    drains them after each action.
//!
//! ## Modules
//!
//! - `core`: IDs, players, configuration, actions, `GameState`
//! - `pieces`: piece kinds and movement rules
//! - `board`: the grid and line detection
//! - `players`: owned pieces, inventory, stuck detection
//! - `rules`: game result and turn order
//! - `events`: observer notifications

pub mod core;
pub mod pieces;
pub mod board;
pub mod players;
pub mod rules;
pub mod events;

// Re-export commonly used types
pub use crate::core::{
    Action, ConfigError, GameState, Inventory, Phase, PieceId, PiecePool, PlayerColor, PlayerId,
    PlayerMap, Position, RulesConfig,
};

pub use crate::pieces::{Piece, PieceError, PieceKind};

pub use crate::board::{Board, WinningCells};

pub use crate::players::Player;

pub use crate::rules::{BonusTurn, GameResult, TurnOrder};

pub use crate::events::{EventQueue, GameEvent};

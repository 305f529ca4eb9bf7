//! Core engine types: identifiers, players, configuration, actions, state.
//!
//! Everything here is shared by the board, piece, and player modules;
//! `GameState` ties them together into the phase/turn state machine.

pub mod action;
pub mod config;
pub mod entity;
pub mod player;
pub mod position;
pub mod state;

pub use action::Action;
pub use config::{ConfigError, Inventory, Phase, RulesConfig};
pub use entity::{PieceId, PiecePool};
pub use player::{PlayerColor, PlayerId, PlayerMap, PLAYER_COUNT};
pub use position::Position;
pub use state::GameState;

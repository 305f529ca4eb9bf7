//! Players: owned pieces, placement inventory, and stuck detection.

pub mod player;

pub use player::{OwnedPieces, Player};

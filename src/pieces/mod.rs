//! Piece kinds and movement rules.
//!
//! A piece is a tagged value (`PieceKind` + owner colour). Movement legality
//! is one function dispatched by `match` on the kind, so adding a kind is a
//! compile error everywhere a rule is missing.
//!
//! ## Key Components
//!
//! - [`PieceKind`]: Knight, Rook, Bishop
//! - [`Piece`]: kind and owner
//! - [`PieceError`]: construction from an unknown type tag

pub mod kind;
pub mod movement;

pub use kind::{Piece, PieceError, PieceKind};
pub use movement::Destinations;

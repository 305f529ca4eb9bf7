//! Piece kinds and piece values.

use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::core::PlayerColor;

/// The three piece types a player can place.
///
/// Discriminants are stable and used as the wire tag by `TryFrom<u8>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    Knight = 0,
    Rook = 1,
    Bishop = 2,
}

impl PieceKind {
    /// All kinds in tag order.
    pub const ALL: [PieceKind; 3] = [PieceKind::Knight, PieceKind::Rook, PieceKind::Bishop];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Knight => "Knight",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while constructing pieces.
///
/// These signal a caller bug (an invalid type tag reached the engine), not a
/// player mistake.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum PieceError {
    /// The tag does not name any piece kind.
    #[display("Invalid piece type: {tag}")]
    UnknownKind { tag: String },
}

impl TryFrom<u8> for PieceKind {
    type Error = PieceError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(PieceKind::Knight),
            1 => Ok(PieceKind::Rook),
            2 => Ok(PieceKind::Bishop),
            other => Err(PieceError::UnknownKind {
                tag: other.to_string(),
            }),
        }
    }
}

impl FromStr for PieceKind {
    type Err = PieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PieceError::UnknownKind { tag: s.to_string() })
    }
}

/// An immutable piece: what it is and who owns it.
///
/// Identity lives in the `PieceId` assigned by the pool; two `Piece` values
/// that compare equal may still be different pieces on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: PlayerColor,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, owner: PlayerColor) -> Self {
        Self { kind, owner }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.owner)
    }
}

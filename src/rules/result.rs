//! Result of a completed game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerColor;

/// How a completed game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A player completed a line.
    Winner(PlayerColor),
    /// Both players were stuck in turn (mutual stall).
    Draw,
}

impl GameResult {
    /// Check if a colour won.
    #[must_use]
    pub fn is_winner(&self, color: PlayerColor) -> bool {
        matches!(self, GameResult::Winner(c) if *c == color)
    }

    /// The winning colour, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerColor> {
        match self {
            GameResult::Winner(c) => Some(*c),
            GameResult::Draw => None,
        }
    }
}

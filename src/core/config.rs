//! Rules configuration and game phases.
//!
//! A host configures the engine once at startup with a `RulesConfig`:
//! - Board dimensions (3x3 for the real game)
//! - How many pieces each player may own
//! - The per-kind placement allowance each player starts with
//! - Which colour moves first
//! - How many bonus turns a stuck-skip grants
//!
//! The config is serde-serialisable so hosts can keep it in a file.
//! Deserialisation applies the same checks as the builders, so a loaded
//! config is always one `GameState::new` accepts.

use derive_more::{Display, Error};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::player::PlayerColor;
use crate::pieces::PieceKind;

/// Per-kind placement allowance.
pub type Inventory = FxHashMap<PieceKind, u8>;

/// Game phase.
///
/// `PlacementPhase` → `DynamicPhase` → `Completed`. Nothing leaves
/// `Completed` except a reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players introduce pieces onto empty cells.
    #[default]
    PlacementPhase,
    /// Players relocate placed pieces.
    DynamicPhase,
    /// Game over (win or mutual stall).
    Completed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::PlacementPhase => f.write_str("Placement"),
            Phase::DynamicPhase => f.write_str("Dynamic"),
            Phase::Completed => f.write_str("Completed"),
        }
    }
}

/// Rejected rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Width or height is zero.
    #[display("Board must have at least one cell (got {width}x{height})")]
    EmptyBoard { width: usize, height: usize },
}

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedRulesConfig")]
pub struct RulesConfig {
    /// Board width.
    pub width: usize,

    /// Board height.
    pub height: usize,

    /// Maximum pieces a player owns at once.
    pub max_pieces: usize,

    /// Placement allowance each player starts with.
    pub inventory: Inventory,

    /// Colour of the first seat, which moves first.
    pub starting_color: PlayerColor,

    /// Extra consecutive turns granted to a player whose opponent was
    /// skipped for being stuck.
    pub stuck_bonus_turns: u8,
}

impl RulesConfig {
    /// Default board edge.
    pub const BOARD_SIZE: usize = 3;

    /// Default owned-piece limit.
    pub const MAX_PIECES: usize = 3;

    /// The standard 3x3 game: one Knight, Rook, and Bishop each, White first.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            width: Self::BOARD_SIZE,
            height: Self::BOARD_SIZE,
            max_pieces: Self::MAX_PIECES,
            inventory: Self::default_inventory(),
            starting_color: PlayerColor::White,
            stuck_bonus_turns: 1,
        }
    }

    /// One of each piece kind.
    #[must_use]
    pub fn default_inventory() -> Inventory {
        PieceKind::ALL.into_iter().map(|kind| (kind, 1)).collect()
    }

    /// Set the board dimensions.
    ///
    /// Panics on a zero dimension.
    #[must_use]
    pub fn with_board_size(mut self, width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "Board must have at least one cell");
        self.width = width;
        self.height = height;
        self
    }

    /// Set the owned-piece limit.
    #[must_use]
    pub fn with_max_pieces(mut self, max: usize) -> Self {
        self.max_pieces = max;
        self
    }

    /// Replace the starting inventory.
    #[must_use]
    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = inventory;
        self
    }

    /// Set the colour that moves first.
    #[must_use]
    pub fn with_starting_color(mut self, color: PlayerColor) -> Self {
        self.starting_color = color;
        self
    }

    /// Set the stuck-skip bonus. Zero restores plain alternation.
    #[must_use]
    pub fn with_stuck_bonus_turns(mut self, turns: u8) -> Self {
        self.stuck_bonus_turns = turns;
        self
    }

    /// Total pieces one player may place.
    #[must_use]
    pub fn inventory_total(&self) -> usize {
        self.inventory.values().map(|&n| n as usize).sum()
    }
}

/// Wire form of `RulesConfig`, validated on the way in.
#[derive(Deserialize)]
struct UncheckedRulesConfig {
    width: usize,
    height: usize,
    max_pieces: usize,
    inventory: Inventory,
    starting_color: PlayerColor,
    stuck_bonus_turns: u8,
}

impl TryFrom<UncheckedRulesConfig> for RulesConfig {
    type Error = ConfigError;

    fn try_from(raw: UncheckedRulesConfig) -> Result<Self, Self::Error> {
        if raw.width == 0 || raw.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: raw.width,
                height: raw.height,
            });
        }

        Ok(Self {
            width: raw.width,
            height: raw.height,
            max_pieces: raw.max_pieces,
            inventory: raw.inventory,
            starting_color: raw.starting_color,
            stuck_bonus_turns: raw.stuck_bonus_turns,
        })
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::standard()
    }
}

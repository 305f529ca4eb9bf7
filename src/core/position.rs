//! Board coordinates.
//!
//! Coordinates are signed so that callers can probe off-board squares
//! (negative or past the edge) and get an "empty" answer instead of a
//! wrap-around. `x` is the column, `y` the row.

use serde::{Deserialize, Serialize};

/// A cell coordinate, possibly outside the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a delta.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Absolute coordinate deltas to `other`.
    #[must_use]
    pub const fn abs_delta(self, other: Position) -> (i32, i32) {
        ((other.x - self.x).abs(), (other.y - self.y).abs())
    }

    /// Unit step (each component in -1..=1) pointing from `self` toward `other`.
    #[must_use]
    pub const fn step_toward(self, other: Position) -> (i32, i32) {
        ((other.x - self.x).signum(), (other.y - self.y).signum())
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

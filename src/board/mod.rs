//! The board: a grid of piece references plus line detection.
//!
//! The board never owns pieces. Cells hold `PieceId`s into the game's
//! `PiecePool`, and operations that need piece data take the pool as
//! context.

pub mod grid;
pub mod lines;

pub use grid::Board;
pub use lines::{Line, WinningCells};

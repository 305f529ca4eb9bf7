//! Game outcome and turn-order rules.
//!
//! - [`GameResult`]: how a completed game ended
//! - [`TurnOrder`]: whose turn it is, including the bonus turns granted
//!   when a stuck opponent is skipped
//!
//! `GameState` drives these; they never look at the board themselves.

pub mod result;
pub mod turns;

pub use result::GameResult;
pub use turns::{BonusTurn, TurnOrder};

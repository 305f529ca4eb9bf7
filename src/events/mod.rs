//! Notifications for observers of a game.
//!
//! The engine never calls out to observers. It queues a [`GameEvent`] for
//! every notable transition, and the host drains the queue after each
//! action (typically to refresh a presentation layer).

pub mod event;

pub use event::{EventQueue, GameEvent};

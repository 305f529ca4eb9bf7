//! Game event types and the queue that buffers them.

use serde::{Deserialize, Serialize};

use crate::core::{Phase, PlayerColor};

/// Something that happened during a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The turn passed to the other seat. Fired once per completed switch,
    /// after any bonus turn has been applied; a switch a bonus absorbs
    /// fires nothing.
    TurnSwitched,
    /// The game moved to a new phase.
    PhaseChanged { from: Phase, to: Phase },
    /// A player completed a line.
    Won { color: PlayerColor },
    /// Both players were stuck in turn; the game is drawn.
    Stalemate,
    /// The game was reset.
    Reset,
}

/// FIFO buffer of events not yet seen by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events queued so far, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take every queued event, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_order_and_drain() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::TurnSwitched);
        queue.push(GameEvent::Won { color: PlayerColor::Black });

        assert_eq!(queue.len(), 2);
        assert_eq!(
            queue.drain(),
            vec![GameEvent::TurnSwitched, GameEvent::Won { color: PlayerColor::Black }]
        );
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::PhaseChanged {
            from: Phase::PlacementPhase,
            to: Phase::DynamicPhase,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}

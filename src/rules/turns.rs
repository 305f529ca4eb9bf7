//! Turn alternation with stuck-skip bonus turns.
//!
//! Exactly one seat is current at any time. The designation changes only
//! through `switch`:
//!
//! 1. The current and opposing seats swap.
//! 2. If a bonus is pending and the seat that just became current is not
//!    the holder, the swap is undone and one bonus turn is spent.
//!
//! A bonus is armed by `skip_to_opponent` when the current player has no
//! legal move. The opponent takes over straight away and, on top of that,
//! keeps the turn for `turns` further switches.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// A pending bonus-turn entitlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTurn {
    /// Seat that keeps the turn.
    pub holder: PlayerId,
    /// Switches still to be absorbed.
    pub remaining: u8,
}

/// Whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOrder {
    first: PlayerId,
    current: PlayerId,
    bonus: Option<BonusTurn>,
}

impl TurnOrder {
    /// Start with `first` to move and no bonus pending.
    #[must_use]
    pub fn new(first: PlayerId) -> Self {
        Self {
            first,
            current: first,
            bonus: None,
        }
    }

    /// Seat to move.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// Seat not to move.
    #[must_use]
    pub fn opponent(&self) -> PlayerId {
        self.current.other()
    }

    /// Pending bonus, if any.
    #[must_use]
    pub fn pending_bonus(&self) -> Option<BonusTurn> {
        self.bonus
    }

    /// Pass the turn, honouring any pending bonus.
    ///
    /// Returns the seat to move afterwards.
    pub fn switch(&mut self) -> PlayerId {
        self.current = self.current.other();

        if let Some(mut bonus) = self.bonus {
            if self.current != bonus.holder {
                self.current = bonus.holder;
                bonus.remaining = bonus.remaining.saturating_sub(1);
            }
            self.bonus = (bonus.remaining > 0).then_some(bonus);
        }

        self.current
    }

    /// Hand the turn to the opponent of a stuck player and grant them
    /// `turns` extra consecutive turns.
    ///
    /// Any bonus still pending for the stuck player is forfeited.
    pub fn skip_to_opponent(&mut self, turns: u8) -> PlayerId {
        self.bonus = None;
        self.switch();
        if turns > 0 {
            self.bonus = Some(BonusTurn {
                holder: self.current,
                remaining: turns,
            });
        }
        self.current
    }

    /// Back to the initial designation with no bonus pending.
    pub fn reset(&mut self) {
        self.current = self.first;
        self.bonus = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: PlayerId = PlayerId::FIRST;
    const B: PlayerId = PlayerId::SECOND;

    #[test]
    fn test_plain_alternation() {
        let mut turns = TurnOrder::new(A);
        assert_eq!(turns.current(), A);
        assert_eq!(turns.opponent(), B);

        assert_eq!(turns.switch(), B);
        assert_eq!(turns.switch(), A);
        assert_eq!(turns.switch(), B);
    }

    #[test]
    fn test_skip_grants_one_extra_turn() {
        let mut turns = TurnOrder::new(A);

        // A is stuck: B takes over immediately.
        assert_eq!(turns.skip_to_opponent(1), B);
        assert_eq!(turns.pending_bonus(), Some(BonusTurn { holder: B, remaining: 1 }));

        // B moves; the switch back to A is absorbed.
        assert_eq!(turns.switch(), B);
        assert_eq!(turns.pending_bonus(), None);

        // Alternation resumes.
        assert_eq!(turns.switch(), A);
        assert_eq!(turns.switch(), B);
    }

    #[test]
    fn test_skip_without_bonus() {
        let mut turns = TurnOrder::new(A);

        assert_eq!(turns.skip_to_opponent(0), B);
        assert_eq!(turns.pending_bonus(), None);
        assert_eq!(turns.switch(), A);
    }

    #[test]
    fn test_multiple_bonus_turns() {
        let mut turns = TurnOrder::new(B);

        assert_eq!(turns.skip_to_opponent(2), A);
        assert_eq!(turns.switch(), A);
        assert_eq!(turns.switch(), A);
        assert_eq!(turns.switch(), B);
    }

    #[test]
    fn test_stuck_holder_forfeits_bonus() {
        let mut turns = TurnOrder::new(A);
        turns.skip_to_opponent(1);

        // B is stuck during its own bonus: A takes over with a fresh bonus.
        assert_eq!(turns.skip_to_opponent(1), A);
        assert_eq!(turns.pending_bonus(), Some(BonusTurn { holder: A, remaining: 1 }));
    }

    #[test]
    fn test_reset() {
        let mut turns = TurnOrder::new(A);
        turns.skip_to_opponent(1);

        turns.reset();
        assert_eq!(turns.current(), A);
        assert_eq!(turns.pending_bonus(), None);
    }
}

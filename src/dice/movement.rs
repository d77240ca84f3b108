//! Movement sub-state: whose turn it is and which drafted dice are spent.
//!
//! Dice are tracked by slot (their position in the player's drafted list),
//! so two dice with the same face are never confused.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, PlayerMap};

/// The die chosen for the next move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedDie {
    /// Index into the mover's drafted list.
    pub slot: usize,
    pub value: u8,
}

/// An unused drafted die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemainingDie {
    pub slot: usize,
    pub value: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementState {
    pub(crate) mover: PlayerId,
    pub(crate) selected: Option<SelectedDie>,
    pub(crate) used_slots: PlayerMap<SmallVec<[usize; 3]>>,
    pub(crate) complete: bool,
}

impl MovementState {
    pub(crate) fn new(first_mover: PlayerId) -> Self {
        Self {
            mover: first_mover,
            selected: None,
            used_slots: PlayerMap::with_default(),
            complete: false,
        }
    }

    pub(crate) fn reset(&mut self, first_mover: PlayerId) {
        *self = Self::new(first_mover);
    }

    #[must_use]
    pub fn mover(&self) -> PlayerId {
        self.mover
    }

    #[must_use]
    pub fn selected(&self) -> Option<SelectedDie> {
        self.selected
    }

    /// Drafted slots a player has spent this round.
    #[must_use]
    pub fn used_slots(&self, player: PlayerId) -> &[usize] {
        &self.used_slots[player]
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Unused dice from `drafted`, in slot order.
    #[must_use]
    pub fn remaining(&self, player: PlayerId, drafted: &[u8]) -> SmallVec<[RemainingDie; 3]> {
        let used = &self.used_slots[player];
        drafted
            .iter()
            .enumerate()
            .filter(|(slot, _)| !used.contains(slot))
            .map(|(slot, &value)| RemainingDie { slot, value })
            .collect()
    }

    pub(crate) fn mark_used(&mut self, player: PlayerId, slot: usize) {
        if !self.used_slots[player].contains(&slot) {
            self.used_slots[player].push(slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_skips_used_slots() {
        let mut state = MovementState::new(PlayerId::A);
        let drafted = [4, 4, 2];

        state.mark_used(PlayerId::A, 0);
        let remaining = state.remaining(PlayerId::A, &drafted);

        assert_eq!(
            remaining.as_slice(),
            &[
                RemainingDie { slot: 1, value: 4 },
                RemainingDie { slot: 2, value: 2 },
            ]
        );
        assert_eq!(state.remaining(PlayerId::B, &[1, 6]).len(), 2);
    }

    #[test]
    fn test_mark_used_is_idempotent() {
        let mut state = MovementState::new(PlayerId::B);
        state.mark_used(PlayerId::B, 1);
        state.mark_used(PlayerId::B, 1);
        assert_eq!(state.used_slots(PlayerId::B), &[1]);
    }

    #[test]
    fn test_reset() {
        let mut state = MovementState::new(PlayerId::A);
        state.mark_used(PlayerId::A, 2);
        state.selected = Some(SelectedDie { slot: 1, value: 3 });
        state.reset(PlayerId::B);

        assert_eq!(state.mover(), PlayerId::B);
        assert!(state.selected().is_none());
        assert!(state.used_slots(PlayerId::A).is_empty());
    }
}

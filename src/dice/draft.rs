//! Draft sub-state: the rolled pool and who has claimed what.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::{FIRST_MOVER_DRAFT, SECOND_MOVER_DRAFT};
use crate::core::{PlayerId, PlayerMap};

/// Dice rolled for the round and how they have been drafted.
///
/// `available` plus both drafted lists always partition `rolled`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftState {
    pub(crate) rolled: SmallVec<[u8; 6]>,
    pub(crate) available: SmallVec<[u8; 6]>,
    /// Insertion order is kept: it defines the movement slot indices.
    pub(crate) drafted: PlayerMap<SmallVec<[u8; 3]>>,
    pub(crate) drafter: PlayerId,
    pub(crate) first_mover: PlayerId,
    pub(crate) complete: bool,
}

impl DraftState {
    pub(crate) fn new(first_mover: PlayerId) -> Self {
        Self {
            rolled: SmallVec::new(),
            available: SmallVec::new(),
            drafted: PlayerMap::with_default(),
            drafter: first_mover,
            first_mover,
            complete: false,
        }
    }

    /// Start a fresh draft from a new roll.
    pub(crate) fn reset(&mut self, rolled: SmallVec<[u8; 6]>, first_mover: PlayerId) {
        self.available = rolled.clone();
        self.rolled = rolled;
        for (_, list) in self.drafted.iter_mut() {
            list.clear();
        }
        self.drafter = first_mover;
        self.first_mover = first_mover;
        self.complete = false;
    }

    /// Every die rolled this round, in roll order.
    #[must_use]
    pub fn rolled(&self) -> &[u8] {
        &self.rolled
    }

    /// Dice still in the pool.
    #[must_use]
    pub fn available(&self) -> &[u8] {
        &self.available
    }

    /// Dice a player has claimed, in draft order.
    #[must_use]
    pub fn drafted(&self, player: PlayerId) -> &[u8] {
        &self.drafted[player]
    }

    #[must_use]
    pub fn drafter(&self) -> PlayerId {
        self.drafter
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// How many dice a player drafts this round.
    #[must_use]
    pub fn quota(&self, player: PlayerId) -> usize {
        if player == self.first_mover {
            FIRST_MOVER_DRAFT
        } else {
            SECOND_MOVER_DRAFT
        }
    }

    #[must_use]
    pub fn quota_met(&self, player: PlayerId) -> bool {
        self.drafted[player].len() >= self.quota(player)
    }

    #[must_use]
    pub fn quotas_met(&self) -> bool {
        PlayerId::all().all(|p| self.quota_met(p))
    }

    /// Move the pool die at `index` into the current drafter's list.
    ///
    /// The caller has already range-checked `index`.
    pub(crate) fn take(&mut self, index: usize) -> u8 {
        let value = self.available.remove(index);
        self.drafted[self.drafter].push(value);
        value
    }

    /// Who drafts after the current drafter: the other player while they
    /// are below quota, else the same player again.
    #[must_use]
    pub(crate) fn next_drafter(&self) -> PlayerId {
        let other = self.drafter.opponent();
        if self.quota_met(other) {
            self.drafter
        } else {
            other
        }
    }
}

//! Aggregate self-play results.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::self_play::MatchSummary;
use crate::core::{PlayerId, PlayerMap};
use crate::rules::VictoryKind;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimStats {
    pub games: u32,
    pub wins: PlayerMap<u32>,
    pub victories: FxHashMap<VictoryKind, u32>,
    /// Games abandoned at the action cap.
    pub unfinished: u32,
    pub total_rounds: u64,
    pub total_actions: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            games: 0,
            wins: PlayerMap::with_value(0),
            victories: FxHashMap::default(),
            unfinished: 0,
            total_rounds: 0,
            total_actions: 0,
        }
    }
}

impl SimStats {
    pub fn record(&mut self, summary: &MatchSummary) {
        self.games += 1;
        self.total_rounds += u64::from(summary.rounds);
        self.total_actions += summary.actions as u64;

        match summary.victory {
            Some(victory) => {
                self.wins[victory.winner] += 1;
                *self.victories.entry(victory.kind).or_insert(0) += 1;
            }
            None => self.unfinished += 1,
        }
    }

    /// Combine with stats from another batch.
    pub fn merge(&mut self, other: &SimStats) {
        self.games += other.games;
        for player in PlayerId::all() {
            self.wins[player] += other.wins[player];
        }
        for (&kind, &count) in &other.victories {
            *self.victories.entry(kind).or_insert(0) += count;
        }
        self.unfinished += other.unfinished;
        self.total_rounds += other.total_rounds;
        self.total_actions += other.total_actions;
    }

    #[must_use]
    pub fn victories_by(&self, kind: VictoryKind) -> u32 {
        self.victories.get(&kind).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        f64::from(self.wins[player]) / f64::from(self.games)
    }

    #[must_use]
    pub fn average_rounds(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_rounds as f64 / f64::from(self.games)
    }
}

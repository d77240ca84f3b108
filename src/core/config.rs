//! Fixed board constants and per-game configuration.
//!
//! The board topology (track length, home bases, nexus layout) is fixed.
//! `GameConfig` only carries what varies between games: the seed, the
//! round cap and which side moves first in round one.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Number of spaces on the circular track.
pub const TRACK_LENGTH: u8 = 20;

/// Home base of player A.
pub const HOME_BASE_A: u8 = 1;

/// Home base of player B.
pub const HOME_BASE_B: u8 = 11;

/// Track positions of the seven nexus spaces, in power order.
pub const NEXUS_POSITIONS: [u8; 7] = [3, 6, 9, 12, 15, 18, 20];

/// Warriors each player starts with (plus one Champion).
pub const WARRIORS_PER_PLAYER: usize = 6;

/// Highest die face.
pub const DIE_FACES: u8 = 6;

/// Dice rolled at the start of a round without the Speed nexus.
pub const BASE_DICE_PER_ROUND: usize = 5;

/// Dice the round's first mover drafts.
pub const FIRST_MOVER_DRAFT: usize = 3;

/// Dice the round's second mover drafts.
pub const SECOND_MOVER_DRAFT: usize = 2;

/// Controlled nexus spaces needed for a control victory.
pub const CONTROL_VICTORY_THRESHOLD: u8 = 5;

/// Entries kept in the game log.
pub const LOG_CAPACITY: usize = 20;

/// Round cap used when none is configured.
pub const DEFAULT_MAX_ROUNDS: u32 = 10;

/// Per-game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the dice. Same seed and same actions replay the same game.
    pub seed: u64,

    /// Rounds played before the tiebreaker decides the game.
    pub max_rounds: u32,

    /// Player who drafts and moves first in round one.
    /// The first mover alternates every round after that.
    pub first_mover: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_rounds: DEFAULT_MAX_ROUNDS,
            first_mover: PlayerId::A,
        }
    }
}

impl GameConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dice seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the round cap.
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        assert!(max_rounds > 0, "A game needs at least one round");
        self.max_rounds = max_rounds;
        self
    }

    /// Set the round-one first mover.
    pub fn with_first_mover(mut self, player: PlayerId) -> Self {
        self.first_mover = player;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.first_mover, PlayerId::A);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_seed(7)
            .with_max_rounds(3)
            .with_first_mover(PlayerId::B);

        assert_eq!(config.seed, 7);
        assert_eq!(config.max_rounds, 3);
        assert_eq!(config.first_mover, PlayerId::B);
    }

    #[test]
    #[should_panic(expected = "at least one round")]
    fn test_zero_rounds_rejected() {
        let _ = GameConfig::new().with_max_rounds(0);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_fixed_layout() {
        assert_eq!(NEXUS_POSITIONS.len(), 7);
        assert!(NEXUS_POSITIONS.iter().all(|&p| (1..=TRACK_LENGTH).contains(&p)));
        assert!(!NEXUS_POSITIONS.contains(&HOME_BASE_A));
        assert!(!NEXUS_POSITIONS.contains(&HOME_BASE_B));
        assert_eq!(FIRST_MOVER_DRAFT + SECOND_MOVER_DRAFT, BASE_DICE_PER_ROUND);
    }
}

//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::ai::Difficulty;
use crate::core::{GameConfig, PlayerId};

/// Delays, in logical milliseconds, before each AI step fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiTiming {
    /// Before the AI drafts a die.
    pub draft_delay: u64,
    /// Before the AI chooses a move and selects its die.
    pub think_delay: u64,
    /// Between selecting the die and moving.
    pub commit_delay: u64,
}

impl Default for AiTiming {
    fn default() -> Self {
        Self {
            draft_delay: 800,
            think_delay: 1000,
            commit_delay: 400,
        }
    }
}

impl AiTiming {
    /// Every step fires as soon as the clock moves.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            draft_delay: 0,
            think_delay: 0,
            commit_delay: 0,
        }
    }
}

/// Human-versus-AI session settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub game: GameConfig,
    /// The side the human plays. The AI plays the other.
    pub human: PlayerId,
    pub difficulty: Difficulty,
    pub timing: AiTiming,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            human: PlayerId::A,
            difficulty: Difficulty::default(),
            timing: AiTiming::default(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    pub fn with_human(mut self, human: PlayerId) -> Self {
        self.human = human;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_timing(mut self, timing: AiTiming) -> Self {
        self.timing = timing;
        self
    }
}

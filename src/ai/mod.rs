//! Opponent AI.
//!
//! The AI is a pure function of the game and a difficulty tier: it reads
//! the game and returns a decision, and the caller applies it through the
//! rules engine. It always decides for whoever holds the relevant turn.
//!
//! ```
//! use nexus_wars::ai::{decide_draft, Difficulty};
//! use nexus_wars::core::{Game, GameRng};
//!
//! let mut game = Game::with_seed(42);
//! let mut rng = GameRng::new(7);
//! let index = decide_draft(&game, Difficulty::Hard, &mut rng).unwrap();
//! game.draft(game.drafting_player().unwrap(), index).unwrap();
//! ```

pub mod evaluate;
pub mod policy;

use serde::{Deserialize, Serialize};

use crate::core::{Game, GameRng};
use crate::rules::LegalMove;

pub use evaluate::{base_move_score, draft_die_score, positional_move_score, power_value};
pub use policy::{DecisionPolicy, GreedyPolicy, PositionalPolicy, RandomPolicy};

/// AI strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The policy implementing this tier.
    #[must_use]
    pub fn policy(self) -> &'static dyn DecisionPolicy {
        match self {
            Difficulty::Easy => &RandomPolicy,
            Difficulty::Medium => &GreedyPolicy,
            Difficulty::Hard => &PositionalPolicy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("EASY"),
            Difficulty::Medium => f.write_str("MEDIUM"),
            Difficulty::Hard => f.write_str("HARD"),
        }
    }
}

/// Pool index to draft, for the current drafter.
///
/// `None` outside the draft or with an empty pool.
#[must_use]
pub fn decide_draft(game: &Game, difficulty: Difficulty, rng: &mut GameRng) -> Option<usize> {
    let player = game.drafting_player()?;
    difficulty.policy().choose_draft(game, player, rng)
}

/// Move to make, for the current mover.
///
/// `None` outside movement or when no remaining die has a legal move.
#[must_use]
pub fn decide_move(game: &Game, difficulty: Difficulty, rng: &mut GameRng) -> Option<LegalMove> {
    let player = game.moving_player()?;
    difficulty.policy().choose_move(game, player, rng)
}

/// An AI player at a fixed difficulty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiOpponent {
    difficulty: Difficulty,
}

impl AiOpponent {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[must_use]
    pub fn decide_draft(&self, game: &Game, rng: &mut GameRng) -> Option<usize> {
        decide_draft(game, self.difficulty, rng)
    }

    #[must_use]
    pub fn decide_move(&self, game: &Game, rng: &mut GameRng) -> Option<LegalMove> {
        decide_move(game, self.difficulty, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(AiOpponent::default().difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_decisions_follow_phase() {
        let mut game = Game::with_seed(4);
        let mut rng = GameRng::new(0);

        assert!(decide_draft(&game, Difficulty::Hard, &mut rng).is_some());
        assert!(decide_move(&game, Difficulty::Hard, &mut rng).is_none());

        game.force_movement(&[1, 2, 3], &[4, 5]);
        assert!(decide_draft(&game, Difficulty::Hard, &mut rng).is_none());
        let mv = decide_move(&game, Difficulty::Hard, &mut rng).unwrap();
        assert!(game.legal_moves(PlayerId::A).contains(&mv));
    }

    #[test]
    fn test_deterministic_tiers_ignore_rng() {
        let game = Game::with_seed(4);
        for difficulty in [Difficulty::Medium, Difficulty::Hard] {
            let a = decide_draft(&game, difficulty, &mut GameRng::new(1));
            let b = decide_draft(&game, difficulty, &mut GameRng::new(999));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_opponent_dispatch() {
        let mut ai = AiOpponent::new(Difficulty::Easy);
        ai.set_difficulty(Difficulty::Hard);
        let game = Game::with_seed(4);
        let mut rng = GameRng::new(0);
        assert_eq!(
            ai.decide_draft(&game, &mut rng),
            decide_draft(&game, Difficulty::Hard, &mut rng)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Difficulty::Hard.to_string(), "HARD");
    }
}

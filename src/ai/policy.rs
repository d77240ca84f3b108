//! Decision policies, one per difficulty tier.
//!
//! Policies are trait-based so callers can swap tiers freely:
//! - `RandomPolicy`: uniform choices (Easy)
//! - `GreedyPolicy`: immediate gains (Medium)
//! - `PositionalPolicy`: immediate gains plus board shape (Hard)
//!
//! A policy never mutates the game. It decides for `player`, which the
//! caller has already checked holds the relevant turn.

use super::evaluate::{base_move_score, draft_die_score, first_best, positional_move_score};
use crate::core::{Game, GameRng, PlayerId};
use crate::rules::LegalMove;

/// How an AI picks dice and moves.
pub trait DecisionPolicy: Send + Sync {
    /// Index into the available pool, or `None` if it is empty.
    fn choose_draft(&self, game: &Game, player: PlayerId, rng: &mut GameRng) -> Option<usize>;

    /// A legal move for one of the player's remaining dice, or `None` if
    /// there is none.
    fn choose_move(&self, game: &Game, player: PlayerId, rng: &mut GameRng) -> Option<LegalMove>;
}

// =============================================================================
// Easy
// =============================================================================

/// Uniform random choices. The only policy that consumes the rng.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl DecisionPolicy for RandomPolicy {
    fn choose_draft(&self, game: &Game, _player: PlayerId, rng: &mut GameRng) -> Option<usize> {
        let len = game.draft_state().available().len();
        if len == 0 {
            return None;
        }
        Some(rng.gen_range_usize(0..len))
    }

    fn choose_move(&self, game: &Game, player: PlayerId, rng: &mut GameRng) -> Option<LegalMove> {
        let moves = game.legal_moves(player);
        rng.choose(&moves).copied()
    }
}

// =============================================================================
// Medium
// =============================================================================

/// Races the Champion home and grabs whatever scores best right now.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl DecisionPolicy for GreedyPolicy {
    /// The die that lands the Champion exactly when it is within one die
    /// of the opponent's home, otherwise the highest die.
    fn choose_draft(&self, game: &Game, player: PlayerId, _rng: &mut GameRng) -> Option<usize> {
        let champion = game.champion(player).position();
        let distance = champion.distance_to(game.player(player).opponent_home_base());
        let chasing = distance <= 6;

        first_best(game.draft_state().available().iter().enumerate().map(|(i, &value)| {
            let exact = chasing && value == distance;
            let score = if exact { 100.0 } else { 0.0 } + f64::from(value);
            (i, score)
        }))
    }

    fn choose_move(&self, game: &Game, player: PlayerId, _rng: &mut GameRng) -> Option<LegalMove> {
        first_best(
            game.legal_moves(player)
                .into_iter()
                .map(|mv| (mv, base_move_score(game, player, &mv))),
        )
    }
}

// =============================================================================
// Hard
// =============================================================================

/// Scores dice by the opportunities they open and moves by board shape.
#[derive(Clone, Debug, Default)]
pub struct PositionalPolicy;

impl DecisionPolicy for PositionalPolicy {
    fn choose_draft(&self, game: &Game, player: PlayerId, _rng: &mut GameRng) -> Option<usize> {
        let pool = game.draft_state().available();
        first_best(
            pool.iter()
                .enumerate()
                .map(|(i, &value)| (i, draft_die_score(game, player, value, pool.len()))),
        )
    }

    fn choose_move(&self, game: &Game, player: PlayerId, _rng: &mut GameRng) -> Option<LegalMove> {
        first_best(
            game.legal_moves(player)
                .into_iter()
                .map(|mv| (mv, positional_move_score(game, player, &mv))),
        )
    }
}

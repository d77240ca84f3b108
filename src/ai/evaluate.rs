//! Heuristic scores for dice and moves.
//!
//! All scores are from the point of view of `player`, the side deciding.
//! Higher is better; callers keep the first of equal scores.

use crate::board::NexusPower;
use crate::core::config::CONTROL_VICTORY_THRESHOLD;
use crate::core::{Game, PlayerId};
use crate::pieces::PieceId;
use crate::rules::{BumpOutcome, LegalMove};

const ARRIVAL_SCORE: f64 = 1000.0;
const CAPTURE_BONUS: f64 = 40.0;
const WINNING_CAPTURE_BONUS: f64 = 60.0;
const BUMP_BONUS: f64 = 25.0;
const CHAMPION_BUMP_BONUS: f64 = 15.0;

const CHAMPION_APPROACH_WEIGHT: f64 = 1.5;
const SPREAD_BONUS: f64 = 10.0;
const SPREAD_RANGE: u8 = 3;
const EXPOSURE_PENALTY: f64 = 15.0;
const EXPOSURE_RANGE: u8 = 2;

const DRAFT_ARRIVAL_BONUS: f64 = 50.0;
const DRAFT_CAPTURE_BONUS: f64 = 15.0;
const DRAFT_BUMP_BONUS: f64 = 10.0;
const LOW_DIE_PENALTY: f64 = 5.0;

/// How much the positional evaluator wants each power.
#[must_use]
pub fn power_value(power: NexusPower) -> f64 {
    match power {
        NexusPower::Speed => 15.0,
        NexusPower::Vision => 8.0,
        NexusPower::Strength => 12.0,
        NexusPower::Recall => 10.0,
        NexusPower::Shifting => 9.0,
        NexusPower::Barriers => 7.0,
        NexusPower::Momentum => 11.0,
    }
}

/// Immediate value of a move: arrival, captures, bumps, progress.
///
/// A Champion reaching the opponent's home base scores 1000 outright.
#[must_use]
pub fn base_move_score(game: &Game, player: PlayerId, mv: &LegalMove) -> f64 {
    let Some(piece) = game.piece(mv.piece) else {
        return f64::NEG_INFINITY;
    };
    if piece.is_champion() && mv.target == game.player(player).opponent_home_base() {
        return ARRIVAL_SCORE;
    }

    let mut score = 0.0;
    if piece.is_warrior() && captures(game, player, mv) {
        score += CAPTURE_BONUS;
        if game.controlled_nexus_count(player) == CONTROL_VICTORY_THRESHOLD - 1 {
            score += WINNING_CAPTURE_BONUS;
        }
    }

    if let BumpOutcome::Bump(victim) = game.bump_outcome(player, mv.target) {
        score += BUMP_BONUS;
        if game.piece(victim).is_some_and(|v| v.is_champion()) {
            score += CHAMPION_BUMP_BONUS;
        }
    }

    let die = f64::from(mv.die);
    score + if piece.is_champion() { die * 2.0 } else { die }
}

/// Base score plus board-shape terms: Champion approach and exposure,
/// Warrior spread, and the strategic value of the power on a nexus the
/// mover does not control.
#[must_use]
pub fn positional_move_score(game: &Game, player: PlayerId, mv: &LegalMove) -> f64 {
    let mut score = base_move_score(game, player, mv);
    let Some(piece) = game.piece(mv.piece) else {
        return score;
    };
    let opponent = player.opponent();

    if piece.is_champion() {
        let remaining = mv.target.distance_to(game.player(player).opponent_home_base());
        score += (20.0 - f64::from(remaining)) * CHAMPION_APPROACH_WEIGHT;

        if game.count_ahead(mv.target, EXPOSURE_RANGE, |owner| owner == opponent) > 0 {
            score -= EXPOSURE_PENALTY;
        }
    } else if game.count_ahead(mv.target, SPREAD_RANGE, |owner| owner == player) == 0 {
        score += SPREAD_BONUS;
    }

    // Any piece landing on a nexus we do not hold, Champion included
    if captures(game, player, mv) {
        if let Some(power) = game.space(mv.target).power() {
            score += power_value(power);
        }
    }

    score
}

/// Draft value of one pool die for `player`.
///
/// `pool_size` is the number of dice still available, including this one.
#[must_use]
pub fn draft_die_score(game: &Game, player: PlayerId, value: u8, pool_size: usize) -> f64 {
    let mut score = f64::from(value) * 2.0;

    let champion = game.champion(player);
    let home = game.player(player).opponent_home_base();
    let targets = game.legal_targets(player, champion.id(), value);
    if targets.contains(&home) {
        score += DRAFT_ARRIVAL_BONUS;
    }

    for &id in game.player(player).pieces() {
        let Some(target) = game.legal_targets(player, id, value).first().copied() else {
            continue;
        };
        let mv = LegalMove {
            die_index: 0,
            slot: 0,
            die: value,
            piece: id,
            target,
        };
        if is_warrior(game, id) && captures(game, player, &mv) {
            score += DRAFT_CAPTURE_BONUS;
        }
        if game.bump_outcome(player, target).bumped().is_some() {
            score += DRAFT_BUMP_BONUS;
        }
    }

    if pool_size > 1 && value <= 2 {
        score -= LOW_DIE_PENALTY;
    }
    score
}

/// The move lands on a nexus `player` does not already control.
fn captures(game: &Game, player: PlayerId, mv: &LegalMove) -> bool {
    let space = game.space(mv.target);
    space.is_nexus() && space.controller() != Some(player)
}

fn is_warrior(game: &Game, id: PieceId) -> bool {
    game.piece(id).is_some_and(|p| p.is_warrior())
}

/// First candidate with the highest score.
pub(crate) fn first_best<T>(candidates: impl IntoIterator<Item = (T, f64)>) -> Option<T> {
    let mut best: Option<(T, f64)> = None;
    for (item, score) in candidates {
        let better = match &best {
            Some((_, best_score)) => score > *best_score,
            None => true,
        };
        if better {
            best = Some((item, score));
        }
    }
    best.map(|(item, _)| item)
}

//! AI-versus-AI matches.
//!
//! Plays complete games with a difficulty tier on each side, for balance
//! checks and benchmarks.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::stats::SimStats;
use crate::ai::{decide_draft, decide_move, Difficulty};
use crate::core::config::DEFAULT_MAX_ROUNDS;
use crate::core::{Game, GameConfig, GameRng, Phase, PlayerId, PlayerMap};
use crate::rules::Victory;

/// Configuration for self-play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Number of games `run_self_play` plays.
    pub games: usize,

    /// Game `i` uses seed `seed_offset + i`.
    pub seed_offset: u64,

    /// Round cap for each game.
    pub max_rounds: u32,

    /// Tier playing each side.
    pub difficulties: PlayerMap<Difficulty>,

    /// Actions after which a game is abandoned as unfinished.
    pub max_actions: usize,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed_offset: 0,
            max_rounds: DEFAULT_MAX_ROUNDS,
            difficulties: PlayerMap::with_value(Difficulty::Medium),
            max_actions: 1000,
        }
    }
}

impl SelfPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        assert!(max_rounds > 0, "A game needs at least one round");
        self.max_rounds = max_rounds;
        self
    }

    /// Set the tier for one side.
    pub fn with_difficulty(mut self, player: PlayerId, difficulty: Difficulty) -> Self {
        self.difficulties[player] = difficulty;
        self
    }

    pub fn with_max_actions(mut self, max: usize) -> Self {
        self.max_actions = max;
        self
    }
}

/// Outcome of one self-play game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub seed: u64,
    /// `None` if the game hit the action cap.
    pub victory: Option<Victory>,
    pub rounds: u32,
    /// Drafts and moves made (die selections are not counted).
    pub actions: usize,
}

impl MatchSummary {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.victory.map(|v| v.winner)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.victory.is_some()
    }
}

/// Play one game to completion or the action cap.
#[instrument(level = "debug", skip(config))]
pub fn play_match(config: &SelfPlayConfig, seed: u64) -> MatchSummary {
    let mut game = Game::new(
        GameConfig::default()
            .with_seed(seed)
            .with_max_rounds(config.max_rounds),
    );
    let mut rng = GameRng::new(seed).for_context("self-play");
    let mut actions = 0;

    while !game.is_over() && actions < config.max_actions {
        let Some(player) = game.active_player() else {
            break;
        };
        let difficulty = config.difficulties[player];

        let applied = match game.phase() {
            Phase::Draft => decide_draft(&game, difficulty, &mut rng)
                .map(|index| game.draft(player, index).map(|_| ())),
            Phase::Movement => decide_move(&game, difficulty, &mut rng).map(|mv| {
                game.select_die(player, mv.die_index)
                    .and_then(|_| game.move_piece(player, mv.piece, mv.target))
                    .map(|_| ())
            }),
            Phase::NexusCheck | Phase::GameOver => None,
        };

        match applied {
            Some(Ok(())) => actions += 1,
            Some(Err(e)) => {
                warn!(seed, %player, error = %e, "AI decision rejected, abandoning match");
                break;
            }
            None => {
                warn!(seed, %player, phase = %game.phase(), "AI had no decision, abandoning match");
                break;
            }
        }
    }

    let summary = MatchSummary {
        seed,
        victory: game.victory().copied(),
        rounds: game.round(),
        actions,
    };
    debug!(victory = ?summary.victory, rounds = summary.rounds, "match finished");
    summary
}

/// Play `config.games` matches and aggregate the results.
pub fn run_self_play(config: &SelfPlayConfig) -> SimStats {
    let mut stats = SimStats::default();
    for i in 0..config.games {
        let seed = config.seed_offset.wrapping_add(i as u64);
        stats.record(&play_match(config, seed));
    }

    info!(
        games = stats.games,
        a_wins = stats.wins[PlayerId::A],
        b_wins = stats.wins[PlayerId::B],
        unfinished = stats.unfinished,
        "self-play complete"
    );
    stats
}

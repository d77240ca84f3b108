//! Human-versus-AI session.
//!
//! A `Session` owns the game and drives the AI side. AI decisions are not
//! instant: each step is queued on a logical clock and fires only when the
//! caller advances time. When a step fires it is checked against the game
//! first (same round, same phase, AI still holding the turn); a step that
//! no longer matches is dropped.
//!
//! ```
//! use nexus_wars::core::PlayerId;
//! use nexus_wars::session::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default());
//! session.draft(0).unwrap();
//! // The AI drafts 800 logical ms later
//! assert_eq!(session.game().drafting_player(), Some(PlayerId::B));
//! session.advance(800);
//! assert_eq!(session.game().drafting_player(), Some(PlayerId::A));
//! ```

pub mod config;
pub mod scheduler;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ai::{AiOpponent, Difficulty};
use crate::board::Position;
use crate::core::{Game, GameConfig, GameRng, Phase, PlayerId, RulesError};
use crate::pieces::PieceId;
use crate::rules::{LegalMove, MoveReport};

pub use config::{AiTiming, SessionConfig};
pub use scheduler::{Scheduler, SchedulerStats};

/// What the AI does when a step fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiStep {
    /// Pick and draft a die.
    Draft,
    /// Pick a move and select its die.
    ChooseMove,
    /// Make the move chosen by the preceding `ChooseMove`.
    Commit(LegalMove),
}

/// A queued AI step and the game situation it was queued for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingStep {
    pub step: AiStep,
    pub round: u32,
    pub phase: Phase,
    pub player: PlayerId,
}

#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    game: Game,
    ai: AiOpponent,
    ai_rng: GameRng,
    scheduler: Scheduler<PendingStep>,
}

impl Session {
    /// Start a session. If the AI moves first its first step is queued.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let game = Game::new(config.game.clone());
        let ai_rng = GameRng::new(config.game.seed).for_context("ai");
        let mut session = Self {
            ai: AiOpponent::new(config.difficulty),
            config,
            game,
            ai_rng,
            scheduler: Scheduler::new(),
        };
        session.schedule_ai();
        session
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn human(&self) -> PlayerId {
        self.config.human
    }

    #[must_use]
    pub fn ai_player(&self) -> PlayerId {
        self.config.human.opponent()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.ai.difficulty()
    }

    /// Applies from the AI's next decision on.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.ai.set_difficulty(difficulty);
        self.config.difficulty = difficulty;
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    /// The queued AI step, if any. There is never more than one.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingStep> {
        self.scheduler.peek()
    }

    #[must_use]
    pub fn scheduler_stats(&self) -> &SchedulerStats {
        self.scheduler.stats()
    }

    /// Throw away the current game and start a fresh one with `config`.
    pub fn restart(&mut self, config: GameConfig) {
        self.scheduler.clear();
        self.ai_rng = GameRng::new(config.seed).for_context("ai");
        self.game = Game::new(config.clone());
        self.config.game = config;
        self.schedule_ai();
    }

    // === Human entry points ===

    /// Draft for the human.
    ///
    /// # Errors
    ///
    /// Whatever `Game::draft` rejects, including `WrongTurn` while the AI
    /// holds the turn.
    pub fn draft(&mut self, die_index: usize) -> Result<u8, RulesError> {
        let value = self.game.draft(self.config.human, die_index)?;
        self.schedule_ai();
        Ok(value)
    }

    /// Select a die for the human.
    ///
    /// # Errors
    ///
    /// Whatever `Game::select_die` rejects.
    pub fn select_die(&mut self, die_index: usize) -> Result<u8, RulesError> {
        self.game.select_die(self.config.human, die_index)
    }

    /// Move for the human.
    ///
    /// # Errors
    ///
    /// Whatever `Game::move_piece` rejects.
    pub fn move_piece(&mut self, piece: PieceId, target: Position) -> Result<MoveReport, RulesError> {
        let report = self.game.move_piece(self.config.human, piece, target)?;
        self.schedule_ai();
        Ok(report)
    }

    // === Clock ===

    /// Move the clock forward by `dt` and run every step that falls due.
    /// Returns the number of steps fired.
    pub fn advance(&mut self, dt: u64) -> usize {
        let until = self.scheduler.now().saturating_add(dt);
        let mut fired = 0;
        while let Some(step) = self.scheduler.pop_due(until) {
            self.run_step(step);
            fired += 1;
        }
        self.scheduler.advance_to(until);
        fired
    }

    /// Fire steps until none is pending: the human holds the turn or the
    /// game is over. Returns the number of steps fired.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(due) = self.scheduler.next_due() {
            if let Some(step) = self.scheduler.pop_due(due) {
                self.run_step(step);
                fired += 1;
            }
        }
        fired
    }

    // === AI steps ===

    fn schedule_ai(&mut self) {
        if !self.scheduler.is_empty() || self.game.is_over() {
            return;
        }
        let ai = self.ai_player();
        if self.game.active_player() != Some(ai) {
            return;
        }
        let timing = self.config.timing;
        match self.game.phase() {
            Phase::Draft => self.push(AiStep::Draft, timing.draft_delay),
            Phase::Movement => self.push(AiStep::ChooseMove, timing.think_delay),
            Phase::NexusCheck | Phase::GameOver => {}
        }
    }

    fn push(&mut self, step: AiStep, delay: u64) {
        let pending = PendingStep {
            step,
            round: self.game.round(),
            phase: self.game.phase(),
            player: self.ai_player(),
        };
        let due = self.scheduler.schedule(delay, pending);
        debug!(?step, due, "AI step scheduled");
    }

    fn is_current(&self, pending: &PendingStep) -> bool {
        let same_turn = pending.round == self.game.round()
            && pending.phase == self.game.phase()
            && self.game.active_player() == Some(pending.player);
        match pending.step {
            AiStep::Commit(mv) => {
                same_turn && self.game.selected_die().map(|d| d.slot) == Some(mv.slot)
            }
            AiStep::Draft | AiStep::ChooseMove => same_turn,
        }
    }

    fn run_step(&mut self, pending: PendingStep) {
        if !self.is_current(&pending) {
            debug!(step = ?pending.step, round = pending.round, "discarding stale AI step");
            self.schedule_ai();
            return;
        }

        let ai = pending.player;
        match pending.step {
            AiStep::Draft => {
                let Some(index) = self.ai.decide_draft(&self.game, &mut self.ai_rng) else {
                    debug!("AI found nothing to draft");
                    return;
                };
                if let Err(e) = self.game.draft(ai, index) {
                    warn!(error = %e, "AI draft rejected");
                    return;
                }
            }
            AiStep::ChooseMove => {
                let Some(mv) = self.ai.decide_move(&self.game, &mut self.ai_rng) else {
                    debug!("AI found no legal move");
                    return;
                };
                if let Err(e) = self.game.select_die(ai, mv.die_index) {
                    warn!(error = %e, "AI die selection rejected");
                    return;
                }
                self.push(AiStep::Commit(mv), self.config.timing.commit_delay);
                return;
            }
            AiStep::Commit(mv) => {
                if let Err(e) = self.game.move_piece(ai, mv.piece, mv.target) {
                    warn!(error = %e, "AI move rejected");
                    return;
                }
            }
        }
        self.schedule_ai();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ai_first() -> Session {
        Session::new(SessionConfig::default().with_human(PlayerId::B))
    }

    #[test]
    fn test_ai_step_queued_when_ai_starts() {
        let session = ai_first();
        let pending = session.pending().unwrap();
        assert_eq!(pending.step, AiStep::Draft);
        assert_eq!(pending.player, PlayerId::A);

        let human_first = Session::new(SessionConfig::default());
        assert!(human_first.pending().is_none());
    }

    #[test]
    fn test_draft_fires_after_delay() {
        let mut session = ai_first();
        assert_eq!(session.advance(799), 0);
        assert!(session.game().draft_state().drafted(PlayerId::A).is_empty());

        assert_eq!(session.advance(1), 1);
        assert_eq!(session.game().draft_state().drafted(PlayerId::A).len(), 1);
        assert_eq!(session.game().drafting_player(), Some(PlayerId::B));
        assert!(session.pending().is_none());
    }

    #[test]
    fn test_stale_step_is_discarded() {
        let mut session = ai_first();
        // The game leaves the draft under the pending step
        session.game.force_movement(&[1, 2, 3], &[4, 5]);

        assert_eq!(session.advance(800), 1);
        assert_eq!(session.game().draft_state().drafted(PlayerId::A), &[1, 2, 3]);
        assert!(session.game().movement_state().used_slots(PlayerId::A).is_empty());
        assert_eq!(session.pending().map(|p| p.step), Some(AiStep::ChooseMove));
    }

    #[test]
    fn test_choose_then_commit() {
        let mut session = ai_first();
        session.game.force_movement(&[1, 2, 3], &[4, 5]);
        session.scheduler.clear();
        session.schedule_ai();

        session.advance(1000);
        assert!(session.game().selected_die().is_some());
        assert!(matches!(session.pending().map(|p| p.step), Some(AiStep::Commit(_))));

        session.advance(400);
        assert_eq!(session.game().movement_state().used_slots(PlayerId::A).len(), 1);
        assert_eq!(session.game().moving_player(), Some(PlayerId::B));
        assert!(session.pending().is_none());
    }

    #[test]
    fn test_human_rejected_while_ai_holds_turn() {
        let mut session = ai_first();
        assert!(matches!(session.draft(0), Err(RulesError::WrongTurn { .. })));
        assert_eq!(session.pending().map(|p| p.step), Some(AiStep::Draft));
    }

    #[test]
    fn test_restart_clears_queue() {
        let mut session = ai_first();
        session.restart(GameConfig::default().with_seed(5).with_first_mover(PlayerId::B));
        assert!(session.pending().is_none());
        assert_eq!(session.game().drafting_player(), Some(PlayerId::B));
    }
}

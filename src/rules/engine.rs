//! Rules engine: the only code that mutates a `Game`.
//!
//! Entry points validate first and mutate second, so a rejected call
//! leaves the game untouched:
//! - `draft`: claim a die from the pool
//! - `select_die`: choose which drafted die the next move spends
//! - `move_piece`: spend the selected die
//! - `apply`: dispatch an `Action` to one of the above
//!
//! Round transitions (turn passing, forfeits, the nexus check, victory)
//! happen inside these calls.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::invariants::check_invariants;
use super::legal::BumpOutcome;
use super::victory::{check_victory, tiebreaker_winner, Victory, VictoryKind};
use crate::board::{NexusPower, Position, PowerEffect};
use crate::core::config::BASE_DICE_PER_ROUND;
use crate::core::{Action, Game, Phase, PlayerId, RulesError};
use crate::dice::SelectedDie;
use crate::pieces::PieceId;

/// What a successful move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
    pub die: u8,
    /// Enemy sent back to its home base.
    pub bumped: Option<PieceId>,
    /// Enemy Warrior that stayed put thanks to bump immunity.
    pub shielded: Option<PieceId>,
    /// Power of the nexus captured by this move.
    pub captured: Option<NexusPower>,
    /// Set if the game ended during this move.
    pub victory: Option<Victory>,
}

/// Result of `Game::apply`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Drafted(u8),
    Selected(u8),
    Moved(MoveReport),
}

impl Game {
    /// Roll the round's dice and open the draft.
    pub(crate) fn start_round(&mut self) {
        let first = self.first_mover;
        let speed = self.board.grants(first, PowerEffect::ExtraDraftDie);
        let count = BASE_DICE_PER_ROUND + usize::from(speed);
        let rolled = self.rng.roll_dice(count);

        self.draft.reset(rolled, first);
        self.movement.reset(first);
        self.phase = Phase::Draft;

        info!(round = self.round, first_mover = %first, dice = count, "round started");
        self.log_event(format!("Round {} begins!", self.round));
        if speed {
            self.log_event(format!("{first} holds the {} and rolls {count} dice!", NexusPower::Speed));
        }
        let faces: Vec<String> = self.draft.rolled.iter().map(u8::to_string).collect();
        self.log_event(format!("{first} rolled: [{}]", faces.join(", ")));
    }

    /// Claim the pool die at `die_index`. Returns its value.
    ///
    /// # Errors
    ///
    /// `InvalidPhase` outside the draft, `WrongTurn` if `player` is not the
    /// drafter, `IndexOutOfRange` for a bad index.
    #[instrument(level = "debug", skip(self))]
    pub fn draft(&mut self, player: PlayerId, die_index: usize) -> Result<u8, RulesError> {
        self.try_draft(player, die_index).map_err(|e| {
            debug!(%player, error = %e, "draft rejected");
            e
        })
    }

    fn try_draft(&mut self, player: PlayerId, die_index: usize) -> Result<u8, RulesError> {
        self.ensure_phase("draft", Phase::Draft)?;
        Self::ensure_turn(player, self.draft.drafter)?;
        let len = self.draft.available.len();
        if die_index >= len {
            return Err(RulesError::IndexOutOfRange {
                what: "die",
                index: die_index,
                len,
            });
        }

        let value = self.draft.take(die_index);
        self.log_event(format!("{player} drafted a {value}"));

        if self.draft.quotas_met() {
            self.draft.complete = true;
            self.begin_movement();
        } else {
            self.draft.drafter = self.draft.next_drafter();
        }

        self.debug_check();
        Ok(value)
    }

    /// Choose the die for the next move by index into the player's
    /// remaining dice. Replaces any earlier selection.
    ///
    /// # Errors
    ///
    /// `InvalidPhase` outside movement, `WrongTurn` if `player` is not the
    /// mover, `IndexOutOfRange` for a bad index.
    #[instrument(level = "debug", skip(self))]
    pub fn select_die(&mut self, player: PlayerId, die_index: usize) -> Result<u8, RulesError> {
        self.try_select_die(player, die_index).map_err(|e| {
            debug!(%player, error = %e, "die selection rejected");
            e
        })
    }

    fn try_select_die(&mut self, player: PlayerId, die_index: usize) -> Result<u8, RulesError> {
        self.ensure_phase("select_die", Phase::Movement)?;
        Self::ensure_turn(player, self.movement.mover)?;
        let remaining = self.remaining_dice(player);
        let Some(die) = remaining.get(die_index) else {
            return Err(RulesError::IndexOutOfRange {
                what: "die",
                index: die_index,
                len: remaining.len(),
            });
        };

        self.movement.selected = Some(SelectedDie {
            slot: die.slot,
            value: die.value,
        });
        Ok(die.value)
    }

    /// Move a piece with the selected die.
    ///
    /// # Errors
    ///
    /// Checked in order: `InvalidPhase`, `WrongTurn`, `IndexOutOfRange`
    /// (unknown piece or one the player does not own), `NoDieSelected`,
    /// `IllegalTarget`.
    #[instrument(level = "debug", skip(self))]
    pub fn move_piece(
        &mut self,
        player: PlayerId,
        piece: PieceId,
        target: Position,
    ) -> Result<MoveReport, RulesError> {
        self.try_move_piece(player, piece, target).map_err(|e| {
            debug!(%player, error = %e, "move rejected");
            e
        })
    }

    fn try_move_piece(
        &mut self,
        player: PlayerId,
        piece: PieceId,
        target: Position,
    ) -> Result<MoveReport, RulesError> {
        self.ensure_phase("move_piece", Phase::Movement)?;
        Self::ensure_turn(player, self.movement.mover)?;
        if !self.player(player).owns(piece) {
            return Err(RulesError::IndexOutOfRange {
                what: "piece",
                index: piece.index(),
                len: self.pieces.len(),
            });
        }
        let die = self.movement.selected.ok_or(RulesError::NoDieSelected)?;
        if !self.legal_targets(player, piece, die.value).contains(&target) {
            return Err(RulesError::IllegalTarget {
                piece,
                target,
                die: die.value,
            });
        }

        let report = self.apply_move(player, piece, die, target);
        self.debug_check();
        Ok(report)
    }

    /// Apply a generic action.
    ///
    /// # Errors
    ///
    /// Whatever the underlying entry point returns.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> Result<ActionOutcome, RulesError> {
        match *action {
            Action::Draft { die_index } => self.draft(player, die_index).map(ActionOutcome::Drafted),
            Action::SelectDie { die_index } => {
                self.select_die(player, die_index).map(ActionOutcome::Selected)
            }
            Action::Move { piece, target } => {
                self.move_piece(player, piece, target).map(ActionOutcome::Moved)
            }
        }
    }

    /// Every action `player` may take right now.
    ///
    /// Moves are listed only once a die is selected, for that die.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        match self.phase {
            Phase::Draft if self.draft.drafter == player => (0..self.draft.available.len())
                .map(|die_index| Action::Draft { die_index })
                .collect(),
            Phase::Movement if self.movement.mover == player => {
                let mut actions: Vec<Action> = (0..self.remaining_dice(player).len())
                    .map(|die_index| Action::SelectDie { die_index })
                    .collect();
                if let Some(die) = self.movement.selected {
                    for &piece in self.player(player).pieces() {
                        for target in self.legal_targets(player, piece, die.value) {
                            actions.push(Action::Move { piece, target });
                        }
                    }
                }
                actions
            }
            _ => Vec::new(),
        }
    }

    // === Internals ===

    fn ensure_phase(&self, action: &'static str, expected: Phase) -> Result<(), RulesError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RulesError::InvalidPhase {
                action,
                phase: self.phase,
            })
        }
    }

    fn ensure_turn(player: PlayerId, expected: PlayerId) -> Result<(), RulesError> {
        if player == expected {
            Ok(())
        } else {
            Err(RulesError::WrongTurn { player, expected })
        }
    }

    fn begin_movement(&mut self) {
        self.movement.reset(self.first_mover);
        self.phase = Phase::Movement;
        self.log_event("Movement phase begins!");
        self.pass_turn(self.first_mover);
    }

    /// Relocate the piece and resolve bump, capture and arrival.
    fn apply_move(&mut self, player: PlayerId, id: PieceId, die: SelectedDie, target: Position) -> MoveReport {
        let from = self.pieces[id.index()].position;
        let kind = self.pieces[id.index()].kind;
        let mut report = MoveReport {
            piece: id,
            from,
            to: target,
            die: die.value,
            bumped: None,
            shielded: None,
            captured: None,
            victory: None,
        };

        let outcome = self.bump_outcome(player, target);
        self.board.space_mut(from).remove_occupant(id);
        self.board.space_mut(target).occupants.push(id);
        {
            let piece = &mut self.pieces[id.index()];
            piece.position = target;
            piece.distance_traveled += u32::from(die.value);
        }
        self.log_event(format!("{player} moved {kind} to {target}"));

        match outcome {
            BumpOutcome::Bump(victim) => {
                let victim_kind = self.pieces[victim.index()].kind;
                self.send_home(victim);
                self.log_event(format!("{player} bumped {victim_kind} back to home!"));
                report.bumped = Some(victim);
            }
            BumpOutcome::Shielded(victim) => {
                let owner = self.pieces[victim.index()].owner;
                self.log_event(format!(
                    "{owner}'s Warrior holds its ground under the {}",
                    NexusPower::Strength
                ));
                report.shielded = Some(victim);
            }
            BumpOutcome::None => {}
        }

        let space = self.board.space(target);
        if let (true, Some(power)) = (self.pieces[id.index()].is_warrior(), space.power()) {
            if space.controller() != Some(player) {
                self.board.space_mut(target).controller = Some(player);
                self.recount_control();
                self.log_event(format!("{player} captured the {power}!"));
                report.captured = Some(power);
            }
        }

        self.movement.mark_used(player, die.slot);
        self.movement.selected = None;

        if self.pieces[id.index()].is_champion() && target == self.players[player].opponent_home_base {
            self.declare_victory(Victory {
                winner: player,
                kind: VictoryKind::Arrival,
            });
        } else {
            self.pass_turn(player.opponent());
        }

        report.victory = self.victory;
        report
    }

    fn send_home(&mut self, id: PieceId) {
        let (from, home) = {
            let piece = &self.pieces[id.index()];
            (piece.position, self.players[piece.owner].home_base)
        };
        self.board.space_mut(from).remove_occupant(id);
        self.board.space_mut(home).occupants.push(id);
        let piece = &mut self.pieces[id.index()];
        piece.position = home;
        piece.distance_traveled = 0;
    }

    /// Hand the turn to `next` if they can move, else to the other player.
    ///
    /// A player holding dice with no legal move forfeits them. Once both
    /// players are out of dice the round goes to the nexus check.
    fn pass_turn(&mut self, next: PlayerId) {
        for candidate in [next, next.opponent()] {
            if self.remaining_dice(candidate).is_empty() {
                continue;
            }
            if self.has_any_legal_move(candidate) {
                self.movement.mover = candidate;
                return;
            }
            self.forfeit_dice(candidate);
        }

        self.movement.complete = true;
        self.resolve_nexus_check();
    }

    fn forfeit_dice(&mut self, player: PlayerId) {
        let remaining = self.remaining_dice(player);
        for die in &remaining {
            self.movement.mark_used(player, die.slot);
        }
        let faces: Vec<String> = remaining.iter().map(|d| d.value.to_string()).collect();
        debug!(%player, dice = ?faces, "no legal move, dice forfeited");
        self.log_event(format!(
            "{player} has no legal move and forfeits [{}]",
            faces.join(", ")
        ));
    }

    fn resolve_nexus_check(&mut self) {
        self.phase = Phase::NexusCheck;
        self.recount_control();

        if let Some(victory) = check_victory(self) {
            self.declare_victory(victory);
            return;
        }
        if self.round >= self.max_rounds {
            let winner = tiebreaker_winner(self);
            self.declare_victory(Victory {
                winner,
                kind: VictoryKind::Tiebreaker,
            });
            return;
        }

        self.round += 1;
        self.first_mover = self.first_mover.opponent();
        self.start_round();
    }

    fn declare_victory(&mut self, victory: Victory) {
        self.victory = Some(victory);
        self.movement.selected = None;
        self.phase = Phase::GameOver;

        info!(winner = %victory.winner, kind = %victory.kind, round = self.round, "game over");
        let message = match victory.kind {
            VictoryKind::Tiebreaker => format!(
                "GAME OVER after {} rounds! {} wins by tiebreaker!",
                self.max_rounds, victory.winner
            ),
            kind => format!("GAME OVER! {} wins by {kind}!", victory.winner),
        };
        self.log_event(message);
    }

    fn debug_check(&self) {
        if cfg!(debug_assertions) {
            let violations = check_invariants(self);
            debug_assert!(violations.is_empty(), "invariants violated: {violations:?}");
        }
    }
}

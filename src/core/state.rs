//! Game state: the single owned value every entry point works on.
//!
//! ## Game
//!
//! Complete state of one match:
//! - Round counter, phase, the round's first mover
//! - Board (20 spaces) and the piece arena
//! - Draft and movement sub-state for the current round
//! - Victory, bounded log, dice RNG
//!
//! Construction and read-only queries live here. Mutation goes through the
//! rules engine (`crate::rules`), which is the only writer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{GameConfig, WARRIORS_PER_PLAYER};
use super::log::GameLog;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::board::{Board, PowerEffect, Position, Space};
use crate::dice::{DraftState, MovementState, RemainingDie, SelectedDie};
use crate::pieces::{Piece, PieceId, PieceKind};
use crate::rules::Victory;

/// Turn-protocol phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players alternately claim rolled dice.
    Draft,
    /// Players alternately spend one drafted die to move one piece.
    Movement,
    /// End-of-round control recount and victory evaluation.
    NexusCheck,
    /// Terminal.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Draft => "DRAFT",
            Phase::Movement => "MOVEMENT",
            Phase::NexusCheck => "NEXUS_CHECK",
            Phase::GameOver => "GAME_OVER",
        };
        f.write_str(name)
    }
}

/// Full state of one game.
///
/// Cloning is cheap enough for AI evaluation: the log is a persistent
/// vector and everything else is small and fixed-size.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) round: u32,
    pub(crate) max_rounds: u32,
    pub(crate) phase: Phase,
    pub(crate) first_mover: PlayerId,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) board: Board,
    /// Indexed by `PieceId`.
    pub(crate) pieces: Vec<Piece>,
    pub(crate) draft: DraftState,
    pub(crate) movement: MovementState,
    pub(crate) victory: Option<Victory>,
    pub(crate) log: GameLog,
    pub(crate) rng: GameRng,
}

impl Game {
    /// Create a game and roll the dice for round one.
    ///
    /// Every piece starts on its owner's home base, no nexus is controlled,
    /// and the phase is `Draft`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut board = Board::new();
        let mut pieces = Vec::with_capacity(2 * (WARRIORS_PER_PLAYER + 1));

        for owner in PlayerId::all() {
            let home = Position::home_base(owner);
            let kinds = std::iter::once(PieceKind::Champion)
                .chain(std::iter::repeat(PieceKind::Warrior).take(WARRIORS_PER_PLAYER));
            for kind in kinds {
                let id = PieceId(pieces.len() as u8);
                pieces.push(Piece::new(id, kind, owner, home));
                board.space_mut(home).occupants.push(id);
            }
        }

        let players = PlayerMap::new(|id| {
            let owned: SmallVec<[PieceId; 7]> = pieces
                .iter()
                .filter(|p| p.owner == id)
                .map(|p| p.id)
                .collect();
            Player::new(id, Position::home_base(id), Position::home_base(id.opponent()), owned)
        });

        let mut game = Self {
            round: 1,
            max_rounds: config.max_rounds.max(1),
            phase: Phase::Draft,
            first_mover: config.first_mover,
            players,
            board,
            pieces,
            draft: DraftState::new(config.first_mover),
            movement: MovementState::new(config.first_mover),
            victory: None,
            log: GameLog::new(),
            rng: GameRng::new(config.seed),
        };

        game.log_event("New game started!");
        game.start_round();
        game
    }

    /// Create a game with default settings and the given dice seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::default().with_seed(seed))
    }

    // === Progression ===

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player who drafts and moves first this round.
    #[must_use]
    pub fn first_mover(&self) -> PlayerId {
        self.first_mover
    }

    /// Player who must draft next, if the game is drafting.
    #[must_use]
    pub fn drafting_player(&self) -> Option<PlayerId> {
        (self.phase == Phase::Draft).then_some(self.draft.drafter)
    }

    /// Player who must move next, if the game is in the movement phase.
    #[must_use]
    pub fn moving_player(&self) -> Option<PlayerId> {
        (self.phase == Phase::Movement).then_some(self.movement.mover)
    }

    /// Player whose decision the game is waiting on, in either phase.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        self.drafting_player().or_else(|| self.moving_player())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    #[must_use]
    pub fn victory(&self) -> Option<&Victory> {
        self.victory.as_ref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.victory.as_ref().map(|v| v.winner)
    }

    #[must_use]
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    // === Players and pieces ===

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn controlled_nexus_count(&self, player: PlayerId) -> u8 {
        self.players[player].controlled_nexus_count
    }

    /// All pieces, indexed by `PieceId`.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Pieces owned by a player, Champion first.
    pub fn pieces_of(&self, player: PlayerId) -> impl Iterator<Item = &Piece> + '_ {
        self.players[player]
            .pieces
            .iter()
            .map(move |id| &self.pieces[id.index()])
    }

    /// A player's Champion.
    ///
    /// Champions are created first in each roster, so this is the player's
    /// first piece.
    #[must_use]
    pub fn champion(&self, player: PlayerId) -> &Piece {
        &self.pieces[self.players[player].pieces[0].index()]
    }

    // === Board ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Space at a track position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not on the track (1..=20).
    #[must_use]
    pub fn space(&self, position: Position) -> &Space {
        self.board.space(position)
    }

    // === Dice ===

    #[must_use]
    pub fn draft_state(&self) -> &DraftState {
        &self.draft
    }

    #[must_use]
    pub fn movement_state(&self) -> &MovementState {
        &self.movement
    }

    /// Die the mover has selected for the next move.
    #[must_use]
    pub fn selected_die(&self) -> Option<SelectedDie> {
        self.movement.selected
    }

    /// A player's drafted dice not yet used this round, in slot order.
    ///
    /// `select_die` indexes into this list.
    #[must_use]
    pub fn remaining_dice(&self, player: PlayerId) -> SmallVec<[RemainingDie; 3]> {
        self.movement.remaining(player, self.draft.drafted(player))
    }

    /// The opponent's unused dice, visible only to a player holding a
    /// nexus that reveals them.
    #[must_use]
    pub fn revealed_opponent_dice(&self, viewer: PlayerId) -> Option<SmallVec<[u8; 3]>> {
        if !self.board.grants(viewer, PowerEffect::RevealOpponentDice) {
            return None;
        }
        Some(
            self.remaining_dice(viewer.opponent())
                .iter()
                .map(|d| d.value)
                .collect(),
        )
    }

    // === Crate-internal helpers ===

    /// Append a log entry stamped with the current round and phase.
    pub(crate) fn log_event(&mut self, message: impl Into<String>) {
        self.log.push(self.round, self.phase, message);
    }

    /// Recompute both players' controlled-nexus counts from the board.
    pub(crate) fn recount_control(&mut self) {
        for player in PlayerId::ALL {
            let count = self.board.controlled_count(player);
            self.players[player].controlled_nexus_count = count;
        }
    }

    /// Teleport a piece, keeping occupant lists in sync.
    #[cfg(test)]
    pub(crate) fn place_piece(&mut self, id: PieceId, to: Position) {
        let from = self.pieces[id.index()].position;
        self.board.space_mut(from).remove_occupant(id);
        self.board.space_mut(to).occupants.push(id);
        self.pieces[id.index()].position = to;
    }

    /// Set a nexus controller and recount.
    #[cfg(test)]
    pub(crate) fn set_controller(&mut self, position: Position, controller: Option<PlayerId>) {
        self.board.space_mut(position).controller = controller;
        self.recount_control();
    }

    /// Skip the draft: hand out the given dice and enter the movement phase
    /// with the current first mover to act.
    #[cfg(test)]
    pub(crate) fn force_movement(&mut self, first: &[u8], second: &[u8]) {
        let first_mover = self.first_mover;
        let rolled: SmallVec<[u8; 6]> = first.iter().chain(second).copied().collect();
        self.draft.reset(rolled, first_mover);
        self.draft.available.clear();
        self.draft.drafted[first_mover] = first.iter().copied().collect();
        self.draft.drafted[first_mover.opponent()] = second.iter().copied().collect();
        self.draft.complete = true;
        self.movement.reset(first_mover);
        self.phase = Phase::Movement;
    }
}

//! Move legality and board queries shared by the engine and the AI.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Position, PowerEffect};
use crate::core::{Game, PlayerId};
use crate::pieces::PieceId;

/// One way to spend one die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegalMove {
    /// Index into the mover's remaining dice (what `select_die` takes).
    pub die_index: usize,
    /// Slot in the mover's drafted list.
    pub slot: usize,
    pub die: u8,
    pub piece: PieceId,
    pub target: Position,
}

/// What landing on a space would do to the pieces already there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BumpOutcome {
    /// No lone enemy on the space.
    None,
    /// The lone enemy is sent home.
    Bump(PieceId),
    /// The lone enemy is an immune Warrior and stays.
    Shielded(PieceId),
}

impl BumpOutcome {
    #[must_use]
    pub fn bumped(self) -> Option<PieceId> {
        match self {
            BumpOutcome::Bump(id) => Some(id),
            _ => None,
        }
    }
}

impl Game {
    /// Where a piece may land with a die.
    ///
    /// At most one target: movement is exact. Empty when the die is not a
    /// face value, the piece is unknown or belongs to someone else, or the
    /// landing space holds a number of enemy pieces other than zero or the
    /// die value.
    #[must_use]
    pub fn legal_targets(&self, player: PlayerId, piece: PieceId, die: u8) -> SmallVec<[Position; 1]> {
        let mut targets = SmallVec::new();
        if !(1..=6).contains(&die) {
            return targets;
        }
        let Some(p) = self.piece(piece) else {
            return targets;
        };
        if p.owner() != player {
            return targets;
        }

        let target = p.position().advance(die);
        let enemies = self.enemy_count(target, player);
        if enemies == 0 || enemies == usize::from(die) {
            targets.push(target);
        }
        targets
    }

    /// Every legal move for a player's remaining dice: dice in slot order,
    /// pieces in id order within each die.
    ///
    /// Does not check phase or turn; `legal_actions` does.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId) -> Vec<LegalMove> {
        let mut moves = Vec::new();
        for (die_index, die) in self.remaining_dice(player).iter().enumerate() {
            for &piece in self.player(player).pieces() {
                for target in self.legal_targets(player, piece, die.value) {
                    moves.push(LegalMove {
                        die_index,
                        slot: die.slot,
                        die: die.value,
                        piece,
                        target,
                    });
                }
            }
        }
        moves
    }

    #[must_use]
    pub fn has_any_legal_move(&self, player: PlayerId) -> bool {
        self.remaining_dice(player).iter().any(|die| {
            self.player(player)
                .pieces()
                .iter()
                .any(|&piece| !self.legal_targets(player, piece, die.value).is_empty())
        })
    }

    /// Pieces on a space not owned by `player`. Zero off the track.
    #[must_use]
    pub fn enemy_count(&self, position: Position, player: PlayerId) -> usize {
        let Some(space) = self.board.get(position) else {
            return 0;
        };
        space
            .occupants()
            .iter()
            .filter(|&&id| self.pieces[id.index()].owner() != player)
            .count()
    }

    /// What a piece of `mover` landing on `target` would do to a lone enemy.
    /// `None` off the track.
    #[must_use]
    pub fn bump_outcome(&self, mover: PlayerId, target: Position) -> BumpOutcome {
        let Some(space) = self.board.get(target) else {
            return BumpOutcome::None;
        };
        let mut enemies = space
            .occupants()
            .iter()
            .filter(|&&id| self.pieces[id.index()].owner() != mover);
        let (Some(&victim), None) = (enemies.next(), enemies.next()) else {
            return BumpOutcome::None;
        };

        let piece = &self.pieces[victim.index()];
        if piece.is_warrior() && self.board.grants(piece.owner(), PowerEffect::WarriorBumpImmunity) {
            BumpOutcome::Shielded(victim)
        } else {
            BumpOutcome::Bump(victim)
        }
    }

    /// Pieces matching `filter` on the `spaces` spaces clockwise after
    /// `from` (not counting `from` itself).
    pub(crate) fn count_ahead(&self, from: Position, spaces: u8, filter: impl Fn(PlayerId) -> bool) -> usize {
        (1..=spaces)
            .map(|step| {
                self.space(from.advance(step))
                    .occupants()
                    .iter()
                    .filter(|&&id| filter(self.pieces[id.index()].owner()))
                    .count()
            })
            .sum()
    }
}

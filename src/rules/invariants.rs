//! Game invariants: sanity checks that detect engine bugs.
//!
//! These should never trigger through the public entry points. The engine
//! asserts an empty result after every mutation in debug builds.

use smallvec::SmallVec;
use thiserror::Error;

use crate::board::Position;
use crate::core::{Game, PlayerId};
use crate::pieces::PieceId;

/// One broken invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{piece} stands on {position} but is listed there {listed} time(s)")]
    OccupantMismatch {
        piece: PieceId,
        position: Position,
        listed: usize,
    },

    #[error("{space} lists {piece}, which stands elsewhere")]
    StrayOccupant { space: Position, piece: PieceId },

    #[error("{player} has {count} Champions")]
    ChampionCount { player: PlayerId, count: usize },

    #[error("{player} records {recorded} controlled nexus but the board shows {actual}")]
    ControlCount {
        player: PlayerId,
        recorded: u8,
        actual: u8,
    },

    #[error("{space} has a controller but is not a nexus")]
    ControlledNonNexus { space: Position },

    #[error("draft pool and drafted dice do not add up to the roll")]
    DraftPartition,

    #[error("{player} used slot {slot} but drafted only {drafted} dice")]
    UsedSlotOutOfRange {
        player: PlayerId,
        slot: usize,
        drafted: usize,
    },

    #[error("{player} used slot {slot} more than once")]
    DuplicateUsedSlot { player: PlayerId, slot: usize },
}

/// Check all game invariants.
///
/// Returns every violation found, or an empty list if all hold.
#[must_use]
pub fn check_invariants(game: &Game) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    // Occupant lists agree with piece positions
    for piece in game.pieces() {
        let listed = game
            .space(piece.position())
            .occupants()
            .iter()
            .filter(|&&id| id == piece.id())
            .count();
        if listed != 1 {
            violations.push(InvariantViolation::OccupantMismatch {
                piece: piece.id(),
                position: piece.position(),
                listed,
            });
        }
    }
    for space in game.board().spaces() {
        for &id in space.occupants() {
            let here = game.piece(id).is_some_and(|p| p.position() == space.index());
            if !here {
                violations.push(InvariantViolation::StrayOccupant {
                    space: space.index(),
                    piece: id,
                });
            }
        }
        if space.controller().is_some() && !space.is_nexus() {
            violations.push(InvariantViolation::ControlledNonNexus {
                space: space.index(),
            });
        }
    }

    for player in PlayerId::all() {
        let champions = game.pieces_of(player).filter(|p| p.is_champion()).count();
        if champions != 1 {
            violations.push(InvariantViolation::ChampionCount {
                player,
                count: champions,
            });
        }

        let recorded = game.controlled_nexus_count(player);
        let actual = game.board().controlled_count(player);
        if recorded != actual {
            violations.push(InvariantViolation::ControlCount {
                player,
                recorded,
                actual,
            });
        }

        let drafted = game.draft_state().drafted(player).len();
        let used = game.movement_state().used_slots(player);
        for (i, &slot) in used.iter().enumerate() {
            if slot >= drafted {
                violations.push(InvariantViolation::UsedSlotOutOfRange {
                    player,
                    slot,
                    drafted,
                });
            }
            if used[..i].contains(&slot) {
                violations.push(InvariantViolation::DuplicateUsedSlot { player, slot });
            }
        }
    }

    let draft = game.draft_state();
    let mut accounted: SmallVec<[u8; 6]> = draft.available().iter().copied().collect();
    for player in PlayerId::all() {
        accounted.extend_from_slice(draft.drafted(player));
    }
    let mut rolled: SmallVec<[u8; 6]> = draft.rolled().iter().copied().collect();
    accounted.sort_unstable();
    rolled.sort_unstable();
    if accounted != rolled {
        violations.push(InvariantViolation::DraftPartition);
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_clean() {
        let game = Game::with_seed(42);
        assert!(check_invariants(&game).is_empty());
    }

    #[test]
    fn test_detects_desynced_piece() {
        let mut game = Game::with_seed(42);
        game.pieces[3].position = Position(8);

        let violations = check_invariants(&game);
        assert!(violations.contains(&InvariantViolation::OccupantMismatch {
            piece: PieceId(3),
            position: Position(8),
            listed: 0,
        }));
        assert!(violations.contains(&InvariantViolation::StrayOccupant {
            space: Position(1),
            piece: PieceId(3),
        }));
    }

    #[test]
    fn test_detects_stale_control_count() {
        let mut game = Game::with_seed(42);
        game.board.space_mut(Position(3)).controller = Some(PlayerId::A);

        let violations = check_invariants(&game);
        assert_eq!(
            violations,
            vec![InvariantViolation::ControlCount {
                player: PlayerId::A,
                recorded: 0,
                actual: 1,
            }]
        );
    }

    #[test]
    fn test_detects_lost_die() {
        let mut game = Game::with_seed(42);
        game.draft.available.pop();
        assert_eq!(check_invariants(&game), vec![InvariantViolation::DraftPartition]);
    }

    #[test]
    fn test_detects_bad_used_slots() {
        let mut game = Game::with_seed(42);
        game.force_movement(&[1, 2, 3], &[4, 5]);
        game.movement.used_slots[PlayerId::B].push(1);
        game.movement.used_slots[PlayerId::B].push(1);
        game.movement.used_slots[PlayerId::B].push(4);

        let violations = check_invariants(&game);
        assert!(violations.contains(&InvariantViolation::DuplicateUsedSlot {
            player: PlayerId::B,
            slot: 1,
        }));
        assert!(violations.contains(&InvariantViolation::UsedSlotOutOfRange {
            player: PlayerId::B,
            slot: 4,
            drafted: 2,
        }));
    }

    #[test]
    fn test_display() {
        let v = InvariantViolation::ChampionCount {
            player: PlayerId::B,
            count: 2,
        };
        assert_eq!(v.to_string(), "Player B has 2 Champions");
    }
}

//! The 20-space circular track.

use serde::{Deserialize, Serialize};

use super::{NexusPower, Position, PowerEffect, Space, SpaceKind};
use crate::core::config::{NEXUS_POSITIONS, TRACK_LENGTH};
use crate::core::PlayerId;

/// Every space on the track, indexed by `Position::slot`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    spaces: Vec<Space>,
}

impl Board {
    /// Fresh board: two home bases, seven uncontrolled nexus spaces, no
    /// occupants.
    #[must_use]
    pub fn new() -> Self {
        let spaces = (1..=TRACK_LENGTH)
            .map(|i| {
                let position = Position(i);
                let kind = Self::kind_at(position);
                Space::new(position, kind)
            })
            .collect();
        Self { spaces }
    }

    fn kind_at(position: Position) -> SpaceKind {
        for player in PlayerId::all() {
            if position == Position::home_base(player) {
                return SpaceKind::HomeBase(player);
            }
        }
        NEXUS_POSITIONS
            .iter()
            .position(|&p| p == position.get())
            .map_or(SpaceKind::Normal, |i| SpaceKind::Nexus(NexusPower::ALL[i]))
    }

    /// # Panics
    ///
    /// Panics if `position` is off the track.
    #[must_use]
    pub fn space(&self, position: Position) -> &Space {
        &self.spaces[position.slot()]
    }

    /// Space at a position, or `None` if off the track.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Space> {
        if position.is_on_track() {
            self.spaces.get(position.slot())
        } else {
            None
        }
    }

    pub(crate) fn space_mut(&mut self, position: Position) -> &mut Space {
        &mut self.spaces[position.slot()]
    }

    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Nexus spaces in track order.
    pub fn nexus_spaces(&self) -> impl Iterator<Item = &Space> + '_ {
        self.spaces.iter().filter(|s| s.is_nexus())
    }

    /// Number of nexus spaces a player controls.
    #[must_use]
    pub fn controlled_count(&self, player: PlayerId) -> u8 {
        self.nexus_spaces()
            .filter(|s| s.controller == Some(player))
            .count() as u8
    }

    /// Whether a player controls a nexus carrying the given effect.
    #[must_use]
    pub fn grants(&self, player: PlayerId, effect: PowerEffect) -> bool {
        self.nexus_spaces().any(|s| {
            s.controller == Some(player) && s.power().map(NexusPower::effect) == Some(effect)
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let board = Board::new();
        assert_eq!(board.spaces().len(), 20);

        assert_eq!(board.space(Position(1)).kind(), SpaceKind::HomeBase(PlayerId::A));
        assert_eq!(board.space(Position(11)).kind(), SpaceKind::HomeBase(PlayerId::B));
        assert_eq!(board.space(Position(2)).kind(), SpaceKind::Normal);

        let powers: Vec<_> = board
            .nexus_spaces()
            .map(|s| (s.index().get(), s.power().unwrap()))
            .collect();
        assert_eq!(
            powers,
            vec![
                (3, NexusPower::Speed),
                (6, NexusPower::Vision),
                (9, NexusPower::Strength),
                (12, NexusPower::Recall),
                (15, NexusPower::Shifting),
                (18, NexusPower::Barriers),
                (20, NexusPower::Momentum),
            ]
        );
    }

    #[test]
    fn test_indices_match_positions() {
        let board = Board::new();
        for (i, space) in board.spaces().iter().enumerate() {
            assert_eq!(space.index().get() as usize, i + 1);
        }
    }

    #[test]
    fn test_get_off_track() {
        let board = Board::new();
        assert!(board.get(Position(0)).is_none());
        assert!(board.get(Position(21)).is_none());
        assert!(board.get(Position(20)).is_some());
    }

    #[test]
    fn test_control_and_grants() {
        let mut board = Board::new();
        assert_eq!(board.controlled_count(PlayerId::A), 0);

        board.space_mut(Position(9)).controller = Some(PlayerId::A);
        board.space_mut(Position(3)).controller = Some(PlayerId::B);
        board.space_mut(Position(20)).controller = Some(PlayerId::A);

        assert_eq!(board.controlled_count(PlayerId::A), 2);
        assert_eq!(board.controlled_count(PlayerId::B), 1);
        assert!(board.grants(PlayerId::A, PowerEffect::WarriorBumpImmunity));
        assert!(!board.grants(PlayerId::B, PowerEffect::WarriorBumpImmunity));
        assert!(board.grants(PlayerId::B, PowerEffect::ExtraDraftDie));
    }
}

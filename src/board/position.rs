//! Track positions and clockwise arithmetic.

use serde::{Deserialize, Serialize};

use crate::core::config::{HOME_BASE_A, HOME_BASE_B, TRACK_LENGTH};
use crate::core::PlayerId;

/// A space on the track, 1-based (1..=20).
///
/// ```
/// use nexus_wars::board::Position;
///
/// assert_eq!(Position(18).advance(4), Position(2));
/// assert_eq!(Position(18).distance_to(Position(2)), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(pub u8);

impl Position {
    /// Home base of a player.
    #[must_use]
    pub const fn home_base(player: PlayerId) -> Self {
        match player {
            PlayerId::A => Self(HOME_BASE_A),
            PlayerId::B => Self(HOME_BASE_B),
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_on_track(self) -> bool {
        (1..=TRACK_LENGTH).contains(&self.0)
    }

    /// Space reached by moving `steps` spaces clockwise, wrapping past 20.
    #[must_use]
    pub fn advance(self, steps: u8) -> Self {
        let len = u16::from(TRACK_LENGTH);
        let zero_based = (u16::from(self.0) + len - 1 + u16::from(steps)) % len;
        Self(zero_based as u8 + 1)
    }

    /// Clockwise distance from this space to `to` (0..20).
    #[must_use]
    pub fn distance_to(self, to: Position) -> u8 {
        let len = u16::from(TRACK_LENGTH);
        ((u16::from(to.0) + len - u16::from(self.0)) % len) as u8
    }

    /// Zero-based index into the board's space list.
    #[must_use]
    pub(crate) fn slot(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "space {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_without_wrap() {
        assert_eq!(Position(1).advance(6), Position(7));
        assert_eq!(Position(5).advance(6), Position(11));
        assert_eq!(Position(14).advance(6), Position(20));
    }

    #[test]
    fn test_advance_wraps_past_twenty() {
        assert_eq!(Position(20).advance(1), Position(1));
        assert_eq!(Position(17).advance(6), Position(3));
        assert_eq!(Position(15).advance(5), Position(20));
    }

    #[test]
    fn test_advance_matches_formula() {
        for start in 1..=TRACK_LENGTH {
            for die in 1..=6u8 {
                let expected = (u16::from(start) + u16::from(die) - 1) % 20 + 1;
                assert_eq!(Position(start).advance(die), Position(expected as u8));
            }
        }
    }

    #[test]
    fn test_distance() {
        assert_eq!(Position(1).distance_to(Position(11)), 10);
        assert_eq!(Position(11).distance_to(Position(1)), 10);
        assert_eq!(Position(5).distance_to(Position(11)), 6);
        assert_eq!(Position(19).distance_to(Position(3)), 4);
        assert_eq!(Position(7).distance_to(Position(7)), 0);
    }

    #[test]
    fn test_home_bases() {
        assert_eq!(Position::home_base(PlayerId::A), Position(1));
        assert_eq!(Position::home_base(PlayerId::B), Position(11));
    }

    #[test]
    fn test_on_track() {
        assert!(Position(1).is_on_track());
        assert!(Position(20).is_on_track());
        assert!(!Position(0).is_on_track());
        assert!(!Position(21).is_on_track());
    }

    #[test]
    fn test_display() {
        assert_eq!(Position(7).to_string(), "space 7");
    }
}

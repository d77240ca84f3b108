//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The game always has exactly two sides, so `PlayerId` is a closed enum
//! rather than a numeric index.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! Per-side bookkeeping: home bases, owned piece ids and the derived
//! controlled-nexus count.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::board::Position;
use crate::pieces::PieceId;

/// One of the two sides of the board.
///
/// Player A's home base is space 1 and player B's is space 11.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    /// The side based on space 1.
    A,
    /// The side based on space 11.
    B,
}

impl PlayerId {
    /// Both players, in the stable order used for victory checks.
    pub const ALL: [PlayerId; 2] = [PlayerId::A, PlayerId::B];

    /// Slot in a `PlayerMap`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::A => 0,
            PlayerId::B => 1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::A => PlayerId::B,
            PlayerId::B => PlayerId::A,
        }
    }

    /// `ALL` as an iterator.
    ///
    /// ```
    /// use nexus_wars::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::A, PlayerId::B]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::A => write!(f, "Player A"),
            PlayerId::B => write!(f, "Player B"),
        }
    }
}

/// One value per side, indexed by `PlayerId`.
///
/// ```
/// use nexus_wars::core::{PlayerId, PlayerMap};
///
/// let mut dice: PlayerMap<u32> = PlayerMap::with_value(0);
/// dice[PlayerId::B] = 2;
/// assert_eq!(dice[PlayerId::A], 0);
/// assert_eq!(dice[PlayerId::B], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Build both entries from a per-player closure.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::A), factory(PlayerId::B)],
        }
    }

    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Entries in `PlayerId::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A side of the board and the pieces it owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) home_base: Position,
    pub(crate) opponent_home_base: Position,
    pub(crate) pieces: SmallVec<[PieceId; 7]>,
    /// Derived from a board scan; see `Game::recount_control`.
    pub(crate) controlled_nexus_count: u8,
}

impl Player {
    pub(crate) fn new(
        id: PlayerId,
        home_base: Position,
        opponent_home_base: Position,
        pieces: SmallVec<[PieceId; 7]>,
    ) -> Self {
        Self {
            id,
            home_base,
            opponent_home_base,
            pieces,
            controlled_nexus_count: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Space this player's pieces start on and return to when bumped.
    #[must_use]
    pub fn home_base(&self) -> Position {
        self.home_base
    }

    /// Space this player's Champion must reach for an arrival victory.
    #[must_use]
    pub fn opponent_home_base(&self) -> Position {
        self.opponent_home_base
    }

    /// Arena ids of the pieces this player owns (Champion first).
    #[must_use]
    pub fn pieces(&self) -> &[PieceId] {
        &self.pieces
    }

    #[must_use]
    pub fn owns(&self, piece: PieceId) -> bool {
        self.pieces.contains(&piece)
    }

    #[must_use]
    pub fn controlled_nexus_count(&self) -> u8 {
        self.controlled_nexus_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::A.index(), 0);
        assert_eq!(PlayerId::B.index(), 1);
        assert_eq!(PlayerId::A.opponent(), PlayerId::B);
        assert_eq!(PlayerId::B.opponent(), PlayerId::A);
        assert_eq!(format!("{}", PlayerId::A), "Player A");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::A], 0);
        assert_eq!(map[PlayerId::B], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<Vec<u8>> = PlayerMap::with_default();

        map[PlayerId::A].push(3);
        map.get_mut(PlayerId::B).push(6);

        assert_eq!(map[PlayerId::A], vec![3]);
        assert_eq!(map[PlayerId::B], vec![6]);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::A, &0), (PlayerId::B, &1)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_player_owns() {
        let pieces: SmallVec<[PieceId; 7]> = (0..7).map(PieceId).collect();
        let player = Player::new(PlayerId::A, Position(1), Position(11), pieces);

        assert!(player.owns(PieceId(0)));
        assert!(player.owns(PieceId(6)));
        assert!(!player.owns(PieceId(7)));
        assert_eq!(player.controlled_nexus_count(), 0);
    }
}

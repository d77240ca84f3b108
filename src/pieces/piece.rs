//! Champions and Warriors.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::core::PlayerId;

/// Stable piece identifier, also the index into the game's piece arena.
///
/// Player A's Champion is 0 and its Warriors 1..=6; Player B's Champion is
/// 7 and its Warriors 8..=13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece {}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// Reaching the opponent's home base wins the game.
    Champion,
    /// Captures nexus spaces by landing on them.
    Warrior,
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceKind::Champion => f.write_str("Champion"),
            PieceKind::Warrior => f.write_str("Warrior"),
        }
    }
}

/// A piece on the track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub(crate) id: PieceId,
    pub(crate) kind: PieceKind,
    pub(crate) owner: PlayerId,
    pub(crate) position: Position,
    /// Accumulated movement, in spaces. Reset to 0 when the piece is sent
    /// home.
    pub(crate) distance_traveled: u32,
}

impl Piece {
    pub(crate) fn new(id: PieceId, kind: PieceKind, owner: PlayerId, position: Position) -> Self {
        Self {
            id,
            kind,
            owner,
            position,
            distance_traveled: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn distance_traveled(&self) -> u32 {
        self.distance_traveled
    }

    #[must_use]
    pub fn is_champion(&self) -> bool {
        self.kind == PieceKind::Champion
    }

    #[must_use]
    pub fn is_warrior(&self) -> bool {
        self.kind == PieceKind::Warrior
    }
}

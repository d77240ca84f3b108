//! A single track space.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{NexusPower, Position};
use crate::core::PlayerId;
use crate::pieces::PieceId;

/// What kind of space this is. Fixed when the board is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceKind {
    Normal,
    HomeBase(PlayerId),
    Nexus(NexusPower),
}

/// A space on the track and the pieces standing on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub(crate) index: Position,
    pub(crate) kind: SpaceKind,
    /// Only ever set on nexus spaces, only by capture.
    pub(crate) controller: Option<PlayerId>,
    /// A home base starts with all seven of its owner's pieces.
    pub(crate) occupants: SmallVec<[PieceId; 8]>,
}

impl Space {
    pub(crate) fn new(index: Position, kind: SpaceKind) -> Self {
        Self {
            index,
            kind,
            controller: None,
            occupants: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn index(&self) -> Position {
        self.index
    }

    #[must_use]
    pub fn kind(&self) -> SpaceKind {
        self.kind
    }

    #[must_use]
    pub fn is_nexus(&self) -> bool {
        matches!(self.kind, SpaceKind::Nexus(_))
    }

    /// Power of a nexus space.
    #[must_use]
    pub fn power(&self) -> Option<NexusPower> {
        match self.kind {
            SpaceKind::Nexus(power) => Some(power),
            _ => None,
        }
    }

    #[must_use]
    pub fn controller(&self) -> Option<PlayerId> {
        self.controller
    }

    #[must_use]
    pub fn occupants(&self) -> &[PieceId] {
        &self.occupants
    }

    /// Remove a piece from the occupant list. Returns false if absent.
    pub(crate) fn remove_occupant(&mut self, piece: PieceId) -> bool {
        match self.occupants.iter().position(|&p| p == piece) {
            Some(i) => {
                self.occupants.remove(i);
                true
            }
            None => false,
        }
    }
}

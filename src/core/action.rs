//! Actions as data.
//!
//! The engine exposes one method per action (`draft`, `select_die`,
//! `move_piece`), but callers that enumerate or replay choices (random
//! playouts, the session, tests) work with `Action` values and
//! `Game::apply`.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::pieces::PieceId;

/// A single player choice.
///
/// ```
/// use nexus_wars::board::Position;
/// use nexus_wars::core::Action;
/// use nexus_wars::pieces::PieceId;
///
/// let draft = Action::Draft { die_index: 0 };
/// let step = Action::Move { piece: PieceId(3), target: Position(8) };
/// assert!(draft.is_draft());
/// assert!(!step.is_draft());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Take the die at `die_index` from the available pool.
    Draft { die_index: usize },

    /// Pick the die at `die_index` among the mover's unused dice.
    SelectDie { die_index: usize },

    /// Move a piece with the selected die.
    Move { piece: PieceId, target: Position },
}

impl Action {
    #[must_use]
    pub fn is_draft(&self) -> bool {
        matches!(self, Action::Draft { .. })
    }

    /// Short verb used in error messages and logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Draft { .. } => "draft",
            Action::SelectDie { .. } => "select_die",
            Action::Move { .. } => "move",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        let a1 = Action::Move { piece: PieceId(1), target: Position(4) };
        let a2 = Action::Move { piece: PieceId(1), target: Position(4) };
        let a3 = Action::Move { piece: PieceId(2), target: Position(4) };

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
        assert_ne!(Action::Draft { die_index: 0 }, Action::SelectDie { die_index: 0 });
    }

    #[test]
    fn test_action_names() {
        assert_eq!(Action::Draft { die_index: 1 }.name(), "draft");
        assert_eq!(Action::SelectDie { die_index: 1 }.name(), "select_die");
        assert_eq!(Action::Move { piece: PieceId(0), target: Position(2) }.name(), "move");
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Move { piece: PieceId(9), target: Position(20) };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }
}

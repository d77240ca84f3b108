//! Errors returned by the rules engine.
//!
//! Every variant is recoverable: a rejected call leaves the game untouched
//! and the caller may retry with a different choice.

use thiserror::Error;

use super::state::Phase;
use super::PlayerId;
use crate::board::Position;
use crate::pieces::PieceId;

/// Why a draft, die selection or move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("`{action}` is not allowed during the {phase} phase")]
    InvalidPhase { action: &'static str, phase: Phase },

    #[error("it is {expected}'s turn, not {player}'s")]
    WrongTurn { player: PlayerId, expected: PlayerId },

    #[error("{what} index {index} is out of range (have {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{piece} cannot move to {target} with a {die}")]
    IllegalTarget {
        piece: PieceId,
        target: Position,
        die: u8,
    },

    #[error("no die has been selected for this move")]
    NoDieSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RulesError::InvalidPhase {
            action: "draft",
            phase: Phase::Movement,
        };
        assert_eq!(err.to_string(), "`draft` is not allowed during the MOVEMENT phase");

        let err = RulesError::WrongTurn {
            player: PlayerId::B,
            expected: PlayerId::A,
        };
        assert_eq!(err.to_string(), "it is Player A's turn, not Player B's");

        let err = RulesError::IndexOutOfRange {
            what: "die",
            index: 5,
            len: 3,
        };
        assert_eq!(err.to_string(), "die index 5 is out of range (have 3)");

        let err = RulesError::IllegalTarget {
            piece: PieceId(2),
            target: Position(7),
            die: 3,
        };
        assert_eq!(err.to_string(), "Piece 2 cannot move to space 7 with a 3");
    }
}

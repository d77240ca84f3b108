//! Rules engine: the turn protocol, move legality and victory.
//!
//! Every mutation of a `Game` goes through the entry points in `engine`.
//! `legal` and `victory` are read-only and are shared with the AI.

pub mod engine;
pub mod invariants;
pub mod legal;
pub mod victory;

pub use engine::{ActionOutcome, MoveReport};
pub use invariants::{check_invariants, InvariantViolation};
pub use legal::{BumpOutcome, LegalMove};
pub use victory::{check_victory, tiebreaker_score, tiebreaker_winner, Victory, VictoryKind};

//! # nexus-wars
//!
//! Rules engine and computer opponent for Nexus Wars, a two-player race
//! and territory game on a 20-space circular track.
//!
//! ## Rules in brief
//!
//! Each player has a Champion and six Warriors starting on their home base
//! (space 1 for A, space 11 for B). Every round five dice are rolled and
//! drafted alternately, three to the round's first mover and two to the
//! other. Players then alternate spending one die to move one piece exactly
//! that many spaces clockwise. A lone enemy on the landing space is bumped
//! home; a space holding several enemies can only be entered with a die
//! equal to their count. Warriors landing on one of the seven nexus spaces
//! capture it, and each nexus grants its controller a power.
//!
//! A player wins by controlling five nexuses at the end of a round, by
//! moving their Champion onto the opponent's home base, or on the
//! tiebreaker once the round cap is reached.
//!
//! ## Modules
//!
//! - `core`: players, `Game` state, actions, configuration, RNG, log, errors
//! - `board`: positions, spaces, the track and nexus powers
//! - `pieces`: Champions and Warriors
//! - `dice`: the draft and movement sub-states
//! - `rules`: the engine, legal move generation, victory, invariants
//! - `ai`: Easy/Medium/Hard decision policies
//! - `session`: a human-vs-AI game with AI steps paced on a logical clock
//! - `sim`: AI-versus-AI matches and aggregate statistics

pub mod ai;
pub mod board;
pub mod core;
pub mod dice;
pub mod pieces;
pub mod rules;
pub mod session;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Action, Game, GameConfig, GameLog, GameRng, LogEntry, Phase, Player, PlayerId, PlayerMap,
    RulesError,
};

pub use crate::board::{Board, NexusPower, Position, PowerEffect, Space, SpaceKind};

pub use crate::pieces::{Piece, PieceId, PieceKind};

pub use crate::dice::{DraftState, MovementState, RemainingDie, SelectedDie};

pub use crate::rules::{
    check_invariants, ActionOutcome, BumpOutcome, InvariantViolation, LegalMove, MoveReport,
    Victory, VictoryKind,
};

pub use crate::ai::{AiOpponent, DecisionPolicy, Difficulty};

pub use crate::session::{AiTiming, Session, SessionConfig};

pub use crate::sim::{play_match, run_self_play, MatchSummary, SelfPlayConfig, SimStats};

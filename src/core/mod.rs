//! Core engine types: players, state, actions, RNG, configuration, errors.
//!
//! `Game` is defined here together with its read-only queries; the rules
//! engine in `crate::rules` adds the mutation entry points.

pub mod action;
pub mod config;
pub mod error;
pub mod log;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Action;
pub use config::GameConfig;
pub use error::RulesError;
pub use log::{GameLog, LogEntry};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{Game, Phase};

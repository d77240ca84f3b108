//! Self-play: AI-versus-AI matches and aggregate statistics.

pub mod self_play;
pub mod stats;

pub use self_play::{play_match, run_self_play, MatchSummary, SelfPlayConfig};
pub use stats::SimStats;

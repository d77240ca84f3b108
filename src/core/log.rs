//! Bounded, human-readable game log.
//!
//! Keeps the most recent `LOG_CAPACITY` entries, newest last. Every entry is
//! mirrored to `tracing` so headless runs can follow a game without polling
//! the log.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::LOG_CAPACITY;
use super::state::Phase;

/// A single log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Monotonic counter across the whole game (not reset on eviction).
    pub sequence: u64,
    pub round: u32,
    pub phase: Phase,
    pub message: String,
}

/// Ring buffer of recent log entries.
///
/// Backed by `im::Vector` so cloning a `Game` does not copy the log.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GameLog {
    entries: Vector<LogEntry>,
    next_sequence: u64,
}

impl GameLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting the oldest one past capacity.
    pub fn push(&mut self, round: u32, phase: Phase, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(round, %phase, "{message}");

        self.entries.push_back(LogEntry {
            sequence: self.next_sequence,
            round,
            phase,
            message,
        });
        self.next_sequence += 1;

        while self.entries.len() > LOG_CAPACITY {
            self.entries.pop_front();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Messages oldest to newest.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_read() {
        let mut log = GameLog::new();
        assert!(log.is_empty());

        log.push(1, Phase::Draft, "Round 1 begins!");
        log.push(1, Phase::Draft, "Player A drafted a 4");

        assert_eq!(log.len(), 2);
        assert_eq!(log.last().unwrap().message, "Player A drafted a 4");
        assert_eq!(log.last().unwrap().sequence, 1);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = GameLog::new();
        for i in 0..(LOG_CAPACITY + 5) {
            log.push(1, Phase::Movement, format!("entry {i}"));
        }

        assert_eq!(log.len(), LOG_CAPACITY);
        assert_eq!(log.iter().next().unwrap().message, "entry 5");
        assert_eq!(log.last().unwrap().message, format!("entry {}", LOG_CAPACITY + 4));
        assert_eq!(log.last().unwrap().sequence, (LOG_CAPACITY + 4) as u64);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut log = GameLog::new();
        log.push(1, Phase::Draft, "a");
        let snapshot = log.clone();
        log.push(1, Phase::Draft, "b");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }
}

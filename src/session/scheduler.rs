//! Logical-clock scheduler for delayed steps.
//!
//! Steps are ordered by due time, then by scheduling order. Nothing runs
//! on its own: the owner advances the clock and pops what is due.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T> {
    due: u64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed so the max-heap yields the earliest step first
    fn cmp(&self, other: &Self) -> Ordering {
        (other.due, other.seq).cmp(&(self.due, self.seq))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    pub scheduled: u64,
    pub fired: u64,
}

/// Min-ordered queue of steps keyed on a logical clock.
#[derive(Debug)]
pub struct Scheduler<T> {
    queue: BinaryHeap<Entry<T>>,
    now: u64,
    next_seq: u64,
    stats: SchedulerStats,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            now: 0,
            next_seq: 0,
            stats: SchedulerStats::default(),
        }
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    #[must_use]
    pub fn stats(&self) -> &SchedulerStats {
        &self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Due time of the earliest step.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|e| e.due)
    }

    /// Earliest pending step.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.queue.peek().map(|e| &e.item)
    }

    /// Queue `item` to fire `delay` after now. Returns its due time.
    pub fn schedule(&mut self, delay: u64, item: T) -> u64 {
        let due = self.now.saturating_add(delay);
        self.queue.push(Entry {
            due,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
        self.stats.scheduled += 1;
        due
    }

    /// Pop the earliest step if it is due at or before `until`, moving the
    /// clock to its due time.
    pub fn pop_due(&mut self, until: u64) -> Option<T> {
        if self.next_due()? > until {
            return None;
        }
        let entry = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        self.stats.fired += 1;
        Some(entry.item)
    }

    /// Move the clock forward. Never moves it back.
    pub fn advance_to(&mut self, time: u64) {
        self.now = self.now.max(time);
    }

    /// Drop every pending step.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(300, "c");
        scheduler.schedule(100, "a");
        scheduler.schedule(200, "b");

        assert_eq!(scheduler.pop_due(1000), Some("a"));
        assert_eq!(scheduler.now(), 100);
        assert_eq!(scheduler.pop_due(1000), Some("b"));
        assert_eq!(scheduler.pop_due(1000), Some("c"));
        assert_eq!(scheduler.pop_due(1000), None);
        assert_eq!(scheduler.stats().fired, 3);
    }

    #[test]
    fn test_same_time_keeps_schedule_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(50, 1);
        scheduler.schedule(50, 2);
        scheduler.schedule(50, 3);

        let order: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(50)).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_not_due_yet() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(800, ());
        assert_eq!(scheduler.pop_due(799), None);
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.next_due(), Some(800));
        assert_eq!(scheduler.pop_due(800), Some(()));
    }

    #[test]
    fn test_delays_are_relative_to_now() {
        let mut scheduler = Scheduler::new();
        scheduler.advance_to(1000);
        assert_eq!(scheduler.schedule(400, 'x'), 1400);

        scheduler.advance_to(500);
        assert_eq!(scheduler.now(), 1000);
    }

    #[test]
    fn test_clear() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(1, 'x');
        scheduler.clear();
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.peek(), None);
    }
}

//! Seeded randomness for dice and AI choices.
//!
//! A game owns one `GameRng` for its dice. Anything else that needs
//! randomness (the Easy opponent, self-play) derives its own stream with
//! `for_context`, so AI choices never shift the dice a seed produces.
//!
//! ```
//! use nexus_wars::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let die = rng.roll_die();
//! assert!((1..=6).contains(&die));
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll_dice(5), b.roll_dice(5));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::config::DIE_FACES;

/// ChaCha8 stream that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Independent stream keyed on this RNG's seed and a label.
    ///
    /// Deterministic: the same seed and label always give the same stream,
    /// whatever has been drawn from `self`.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One six-sided die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    pub fn roll_dice(&mut self, count: usize) -> SmallVec<[u8; 6]> {
        (0..count).map(|_| self.roll_die()).collect()
    }

    /// Uniform index in `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Uniform pick from a slice, `None` if it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_rolls() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        let seq1: Vec<u8> = (0..100).map(|_| rng1.roll_die()).collect();
        let seq2: Vec<u8> = (0..100).map(|_| rng2.roll_die()).collect();
        assert_eq!(seq1, seq2);

        let mut other = GameRng::new(43);
        let seq3: Vec<u8> = (0..100).map(|_| other.roll_die()).collect();
        assert_ne!(seq1, seq3);
    }

    #[test]
    fn test_every_face_appears() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 6];
        for _ in 0..600 {
            let die = rng.roll_die();
            assert!((1..=6).contains(&die));
            seen[usize::from(die) - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_roll_dice_count() {
        let mut rng = GameRng::new(9);
        assert_eq!(rng.roll_dice(5).len(), 5);
        assert_eq!(rng.roll_dice(6).len(), 6);
        assert!(rng.roll_dice(0).is_empty());
    }

    #[test]
    fn test_context_stream_ignores_draws() {
        let mut dice = GameRng::new(42);
        let before = dice.for_context("ai");
        let _ = dice.roll_dice(6);
        let after = dice.for_context("ai");

        assert_eq!(before.seed(), after.seed());
        assert_ne!(before.seed(), dice.for_context("self-play").seed());
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let faces = [2u8, 4, 6];
        let picked = rng.choose(&faces).copied().unwrap();
        assert!(faces.contains(&picked));

        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert!(rng.gen_range_usize(0..3) < 3);
    }
}

//! xorshift64* random number generator
//!
//! Small, fast PRNG used to shuffle pick bags. Deterministic for a given
//! seed, so a draft can be replayed exactly in tests or from `--seed`.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use draft_picker_core::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let slot = rng.index_below(30);
/// assert!(slot < 30);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    state: u64,
}

impl RngManager {
    /// A zero seed is replaced with 1; xorshift never leaves the zero state.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from the wall clock
    ///
    /// Used by interactive sessions where no replay seed was supplied.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E37_79B9_7F4A_7C15);
        // Mix the low-entropy nanosecond count before use
        Self::new(nanos ^ (nanos >> 29).wrapping_mul(0xBF58_476D_1CE4_E5B9))
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform slot index in `[0, bound)`
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    pub fn index_below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "cannot pick from an empty range");
        (self.next() % bound as u64) as usize
    }

    /// Shuffle a slice in place (Fisher-Yates)
    ///
    /// # Example
    /// ```
    /// use draft_picker_core::RngManager;
    ///
    /// let mut rng = RngManager::new(7);
    /// let mut items = vec![1, 2, 3, 4, 5];
    /// rng.shuffle(&mut items);
    ///
    /// let mut sorted = items.clone();
    /// sorted.sort();
    /// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index_below(i + 1);
            items.swap(i, j);
        }
    }

    /// Current state; `RngManager::new(state)` replays from this point
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_from_saved_state() {
        let mut rng = RngManager::new(0);
        let mut teams: Vec<u8> = (0..30).collect();
        rng.shuffle(&mut teams);

        let mut replay = RngManager::new(rng.get_state());
        let mut a: Vec<u8> = (0..30).collect();
        let mut b = a.clone();
        rng.shuffle(&mut a);
        replay.shuffle(&mut b);
        assert_eq!(a, b, "saved state did not replay the next shuffle");
    }

    #[test]
    #[should_panic(expected = "cannot pick from an empty range")]
    fn test_index_below_zero_bound() {
        RngManager::new(12345).index_below(0);
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        let mut rng1 = RngManager::new(99999);
        let mut rng2 = RngManager::new(99999);

        let mut a: Vec<i32> = (1980..=2025).collect();
        let mut b = a.clone();
        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_eq!(a, b, "shuffle not deterministic for equal seeds");
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = RngManager::new(3);

        let mut empty: Vec<u8> = Vec::new();
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec!["C"];
        rng.shuffle(&mut single);
        assert_eq!(single, vec!["C"]);
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        // Each position code should open a shuffle at least once
        let mut rng = RngManager::new(2024);
        let mut seen_first = [false; 5];

        for _ in 0..500 {
            let mut items = [0usize, 1, 2, 3, 4];
            rng.shuffle(&mut items);
            seen_first[items[0]] = true;
        }

        assert!(seen_first.iter().all(|&s| s), "biased shuffle: {:?}", seen_first);
    }
}

//! Shuffled bag picker
//!
//! Sampling without immediate repetition: every slot of the source comes out
//! exactly once per cycle, and each cycle uses a fresh random order.

use crate::rng::RngManager;

/// Cyclic picker over a fixed, non-empty source
///
/// Duplicated items in the source are distinct slots. The source itself is
/// never reordered; each cycle shuffles a copy of it.
///
/// # Example
/// ```
/// use draft_picker_core::{RngManager, ShuffledBag};
///
/// let mut rng = RngManager::new(42);
/// let mut bag = ShuffledBag::new(vec!["PG", "SG", "SF", "PF", "C"]);
///
/// let mut cycle: Vec<_> = (0..5).map(|_| bag.pick(&mut rng)).collect();
/// cycle.sort();
/// assert_eq!(cycle, vec!["C", "PF", "PG", "SF", "SG"]);
/// ```
#[derive(Debug, Clone)]
pub struct ShuffledBag<T> {
    source: Vec<T>,
    order: Vec<T>,
    cursor: usize,
}

impl<T: Clone> ShuffledBag<T> {
    /// Create a bag over `items`
    ///
    /// The first permutation is drawn lazily on the first `pick`.
    ///
    /// # Panics
    /// Panics if `items` is empty.
    pub fn new(items: Vec<T>) -> Self {
        assert!(!items.is_empty(), "bag source must not be empty");
        let cursor = items.len();
        Self {
            order: items.clone(),
            source: items,
            cursor,
        }
    }

    /// Return the next item, starting a new shuffled cycle when exhausted
    pub fn pick(&mut self, rng: &mut RngManager) -> T {
        if self.cursor >= self.order.len() {
            self.reshuffle(rng);
        }
        let item = self.order[self.cursor].clone();
        self.cursor += 1;
        item
    }

    fn reshuffle(&mut self, rng: &mut RngManager) {
        self.order.clone_from(&self.source);
        rng.shuffle(&mut self.order);
        self.cursor = 0;
    }

    /// The original items, in construction order
    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// Picks left before the next reshuffle
    pub fn remaining_in_cycle(&self) -> usize {
        self.order.len().saturating_sub(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "bag source must not be empty")]
    fn test_empty_source_panics() {
        ShuffledBag::<u8>::new(Vec::new());
    }

    #[test]
    fn test_single_item_repeats() {
        let mut rng = RngManager::new(1);
        let mut bag = ShuffledBag::new(vec![1990]);
        for _ in 0..10 {
            assert_eq!(bag.pick(&mut rng), 1990);
        }
    }

    #[test]
    fn test_source_untouched_after_cycles() {
        let mut rng = RngManager::new(5);
        let items = vec!["a", "b", "c", "d"];
        let mut bag = ShuffledBag::new(items.clone());

        for _ in 0..13 {
            bag.pick(&mut rng);
        }

        assert_eq!(bag.source(), items.as_slice());
    }

    #[test]
    fn test_remaining_in_cycle_counts_down() {
        let mut rng = RngManager::new(8);
        let mut bag = ShuffledBag::new(vec![1, 2, 3]);

        assert_eq!(bag.remaining_in_cycle(), 0);
        bag.pick(&mut rng);
        assert_eq!(bag.remaining_in_cycle(), 2);
        bag.pick(&mut rng);
        bag.pick(&mut rng);
        assert_eq!(bag.remaining_in_cycle(), 0);
        bag.pick(&mut rng);
        assert_eq!(bag.remaining_in_cycle(), 2);
    }
}

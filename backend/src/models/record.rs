//! Year Record
//!
//! Cooldown state of a single historical draft year.

use serde::{Deserialize, Serialize};

/// Eligibility entry for one historical draft year
///
/// `available` is a cached result of the cooldown rule; it is recomputed
/// whenever the ledger is loaded and only written directly when a year is
/// drawn.
///
/// # Example
///
/// ```rust
/// use draft_picker_core::YearRecord;
///
/// let record = YearRecord::new(1996, true, None);
/// assert!(record.is_available());
/// assert!(!record.was_used());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRecord {
    year: i32,
    available: bool,
    last_used_year: Option<i32>,
}

impl YearRecord {
    pub fn new(year: i32, available: bool, last_used_year: Option<i32>) -> Self {
        Self {
            year,
            available,
            last_used_year,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Simulated year at which this historical year was last drawn
    pub fn last_used_year(&self) -> Option<i32> {
        self.last_used_year
    }

    pub fn was_used(&self) -> bool {
        self.last_used_year.is_some()
    }

    /// Simulated years left before the usage cooldown expires
    ///
    /// Returns `None` when unused or already expired.
    pub fn cooldown_remaining(&self, simulated_year: i32, cooldown: i32) -> Option<i32> {
        let last_used = self.last_used_year?;
        let remaining =
            i64::from(cooldown) - (i64::from(simulated_year) - i64::from(last_used));
        (remaining > 0).then(|| i32::try_from(remaining).unwrap_or(i32::MAX))
    }

    /// Record a draw at `simulated_year`
    pub(crate) fn mark_used(&mut self, simulated_year: i32) {
        self.available = false;
        self.last_used_year = Some(simulated_year);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_used() {
        let mut record = YearRecord::new(1990, true, None);
        record.mark_used(2026);

        assert!(!record.is_available());
        assert_eq!(record.last_used_year(), Some(2026));
    }

    #[test]
    fn test_cooldown_remaining() {
        let record = YearRecord::new(1990, false, Some(2026));

        assert_eq!(record.cooldown_remaining(2026, 20), Some(20));
        assert_eq!(record.cooldown_remaining(2045, 20), Some(1));
        assert_eq!(record.cooldown_remaining(2046, 20), None);

        let unused = YearRecord::new(1990, true, None);
        assert_eq!(unused.cooldown_remaining(2026, 20), None);
    }

    #[test]
    fn test_cooldown_remaining_extreme_years() {
        let ancient = YearRecord::new(1990, false, Some(i32::MIN));
        assert_eq!(ancient.cooldown_remaining(2026, 20), None);

        let far_future = YearRecord::new(1990, false, Some(i32::MAX));
        assert_eq!(far_future.cooldown_remaining(i32::MIN, 20), Some(i32::MAX));
    }
}

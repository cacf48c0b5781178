//! Simulation clock
//!
//! The simulation advances in whole years: one completed draft moves the
//! clock forward by exactly one. The value lives in the store so it
//! survives between sessions.
//!
//! Resolution order for the current year is fixed:
//!
//! 1. the persisted value, when the clock document exists and parses
//! 2. the start-year override, captured and persisted on first use
//! 3. the default year, persisted on first use

use crate::store::DraftStorage;
use log::{info, warn};

/// Persisted simulated-year counter
///
/// # Example
/// ```
/// use draft_picker_core::{MemoryStore, SimulationClock};
///
/// let clock = SimulationClock::new(2026, None);
/// let mut store = MemoryStore::new();
///
/// assert_eq!(clock.get(&mut store), 2026);
/// assert_eq!(clock.increment(&mut store), 2027);
/// assert_eq!(clock.get(&mut store), 2027);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationClock {
    default_year: i32,
    start_override: Option<i32>,
}

impl SimulationClock {
    pub fn new(default_year: i32, start_override: Option<i32>) -> Self {
        Self {
            default_year,
            start_override,
        }
    }

    /// Year used when no clock value is persisted, and by `reset`
    pub fn start_year(&self) -> i32 {
        self.start_override.unwrap_or(self.default_year)
    }

    /// Current simulated year
    pub fn get<S: DraftStorage + ?Sized>(&self, store: &mut S) -> i32 {
        if let Some(year) = store.load_year() {
            return year;
        }
        let year = self.start_year();
        self.set(store, year);
        year
    }

    /// Persist `year`; failures are logged and otherwise ignored
    ///
    /// Returns whether the write succeeded.
    pub fn set<S: DraftStorage + ?Sized>(&self, store: &mut S, year: i32) -> bool {
        match store.save_year(year) {
            Ok(()) => true,
            Err(e) => {
                warn!("Simulated year {} not saved: {}", year, e);
                false
            }
        }
    }

    /// The year after `year`
    ///
    /// A clock already at `i32::MAX` stays there.
    pub fn next_year(year: i32) -> i32 {
        year.checked_add(1).unwrap_or_else(|| {
            warn!("Simulated year {} cannot advance further", year);
            year
        })
    }

    /// Advance by one year and return the new value
    ///
    /// The caller keeps the returned value even if persisting it failed.
    pub fn increment<S: DraftStorage + ?Sized>(&self, store: &mut S) -> i32 {
        let next = Self::next_year(self.get(store));
        self.set(store, next);
        next
    }

    /// Move the clock back to the start year
    pub fn reset<S: DraftStorage + ?Sized>(&self, store: &mut S) -> i32 {
        let year = self.start_year();
        self.set(store, year);
        info!("Simulated year reset to {}", year);
        year
    }
}

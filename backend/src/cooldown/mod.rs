//! Year availability rule
//!
//! Decides, for a simulated year `Y`, which historical draft years may be
//! drawn. A year `y` is available iff
//!
//! 1. it lies outside the blocked window `(Y - cooldown, Y]`, and
//! 2. if it was last drawn at `L`, `Y - L >= cooldown`.
//!
//! The ledger is a cache of this rule and is rebuilt from raw usage data on
//! every load (see [`CooldownLedger`]).

mod keeper;

pub use keeper::CooldownLedger;

use crate::core::config::DraftConfig;
use crate::models::{Ledger, UsageHistory, YearRecord};
use serde::{Deserialize, Serialize};

/// Shape of the proximity block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityRule {
    /// Block `(Y - cooldown, Y]`; years after `Y` stay eligible
    #[default]
    Windowed,

    /// Block every year with `Y - y < cooldown`, including years after `Y`
    LookBack,
}

/// Cooldown parameters over a fixed historical range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownRule {
    earliest_year: i32,
    latest_year: i32,
    cooldown: i32,
    variant: AvailabilityRule,
}

impl CooldownRule {
    /// # Panics
    ///
    /// Panics if the range is inverted or the cooldown is not positive.
    pub fn new(earliest_year: i32, latest_year: i32, cooldown: i32) -> Self {
        assert!(earliest_year <= latest_year, "year range must not be inverted");
        assert!(cooldown > 0, "cooldown must be positive");
        Self {
            earliest_year,
            latest_year,
            cooldown,
            variant: AvailabilityRule::Windowed,
        }
    }

    pub fn with_variant(mut self, variant: AvailabilityRule) -> Self {
        self.variant = variant;
        self
    }

    pub fn from_config(config: &DraftConfig) -> Self {
        Self::new(config.earliest_year, config.latest_year, config.cooldown)
            .with_variant(config.rule)
    }

    pub fn cooldown(&self) -> i32 {
        self.cooldown
    }

    pub fn variant(&self) -> AvailabilityRule {
        self.variant
    }

    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.earliest_year..=self.latest_year
    }

    /// Whether `year` is excluded purely by proximity to `simulated_year`
    ///
    /// Year arithmetic is done in `i64` so any persisted `i32` is accepted.
    pub fn in_blocked_window(&self, year: i32, simulated_year: i32) -> bool {
        let (year, now, cooldown) = (
            i64::from(year),
            i64::from(simulated_year),
            i64::from(self.cooldown),
        );
        match self.variant {
            AvailabilityRule::Windowed => now - cooldown < year && year <= now,
            AvailabilityRule::LookBack => now - year < cooldown,
        }
    }

    /// Eligibility of `year` at `simulated_year` given its last use
    ///
    /// # Example
    ///
    /// ```rust
    /// use draft_picker_core::CooldownRule;
    ///
    /// let rule = CooldownRule::new(1980, 2025, 20);
    /// assert!(rule.compute_availability(2006, 2026, None));
    /// assert!(!rule.compute_availability(2007, 2026, None));
    /// assert!(!rule.compute_availability(1990, 2045, Some(2026)));
    /// assert!(rule.compute_availability(1990, 2046, Some(2026)));
    /// ```
    pub fn compute_availability(
        &self,
        year: i32,
        simulated_year: i32,
        last_used_year: Option<i32>,
    ) -> bool {
        if self.in_blocked_window(year, simulated_year) {
            return false;
        }
        match last_used_year {
            Some(last_used) => {
                i64::from(simulated_year) - i64::from(last_used) >= i64::from(self.cooldown)
            }
            None => true,
        }
    }

    /// Rebuild every record from raw usage data
    ///
    /// Usage entries outside the range are ignored.
    pub fn derive_ledger(&self, simulated_year: i32, usage: &UsageHistory) -> Ledger {
        let records = self
            .years()
            .map(|year| {
                let last_used = usage.get(&year).copied();
                YearRecord::new(
                    year,
                    self.compute_availability(year, simulated_year, last_used),
                    last_used,
                )
            })
            .collect();
        Ledger::from_records(self.earliest_year, records)
    }

    /// Ledger with all usage cleared (blocked-window test only)
    pub fn fresh_ledger(&self, simulated_year: i32) -> Ledger {
        self.derive_ledger(simulated_year, &UsageHistory::new())
    }
}

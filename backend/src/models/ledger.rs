//! Cooldown Ledger
//!
//! Dense, year-indexed collection of `YearRecord`s covering every historical
//! draft year in the configured range.
//!
//! # Critical Invariants
//!
//! 1. **Dense**: exactly `latest - earliest + 1` records, one per year
//! 2. **Ordered**: `records[i].year() == earliest + i`
//! 3. **Derived**: `available` is produced by the cooldown rule, never edited
//!    except through `mark_used`

use crate::models::record::YearRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Last simulated year of use, keyed by historical year
pub type UsageHistory = BTreeMap<i32, i32>;

/// Eligibility of every historical draft year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    earliest_year: i32,
    records: Vec<YearRecord>,
}

/// A year still inside its usage cooldown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoolingYear {
    pub year: i32,
    pub remaining: i32,
}

/// Snapshot for "view availability" queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySummary {
    pub simulated_year: i32,
    pub cooldown: i32,
    pub available: Vec<i32>,
    pub cooling: Vec<CoolingYear>,
}

impl Ledger {
    /// Build a ledger from records produced in year order
    ///
    /// # Panics
    ///
    /// Panics if the records are not contiguous ascending years.
    pub(crate) fn from_records(earliest_year: i32, records: Vec<YearRecord>) -> Self {
        for (offset, record) in records.iter().enumerate() {
            assert_eq!(
                record.year(),
                earliest_year + offset as i32,
                "ledger records must be contiguous"
            );
        }
        Self {
            earliest_year,
            records,
        }
    }

    pub fn get(&self, year: i32) -> Option<&YearRecord> {
        self.index_of(year).map(|i| &self.records[i])
    }

    fn index_of(&self, year: i32) -> Option<usize> {
        let offset = year.checked_sub(self.earliest_year)?;
        usize::try_from(offset)
            .ok()
            .filter(|&i| i < self.records.len())
    }

    /// All records, ascending by year
    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn earliest_year(&self) -> i32 {
        self.earliest_year
    }

    pub fn latest_year(&self) -> i32 {
        let span = i32::try_from(self.records.len()).unwrap_or(i32::MAX);
        self.earliest_year.saturating_add(span - 1)
    }

    /// True when no year can currently be drawn
    pub fn is_fully_exhausted(&self) -> bool {
        self.records.iter().all(|r| !r.is_available())
    }

    /// Years whose cached availability is true, ascending
    pub fn eligible_years(&self) -> Vec<i32> {
        self.records
            .iter()
            .filter(|r| r.is_available())
            .map(|r| r.year())
            .collect()
    }

    /// Mark `year` as drawn at `simulated_year`
    ///
    /// Returns `false` when `year` is outside the ledger range.
    pub fn mark_used(&mut self, year: i32, simulated_year: i32) -> bool {
        match self.index_of(year) {
            Some(i) => {
                self.records[i].mark_used(simulated_year);
                true
            }
            None => false,
        }
    }

    /// Raw usage data, as persisted between loads
    pub fn usage(&self) -> UsageHistory {
        self.records
            .iter()
            .filter_map(|r| r.last_used_year().map(|used| (r.year(), used)))
            .collect()
    }

    /// Available years plus years still cooling down after use
    pub fn summary(&self, simulated_year: i32, cooldown: i32) -> AvailabilitySummary {
        let mut available = Vec::new();
        let mut cooling = Vec::new();

        for record in &self.records {
            if record.is_available() {
                available.push(record.year());
            } else if let Some(remaining) = record.cooldown_remaining(simulated_year, cooldown) {
                cooling.push(CoolingYear {
                    year: record.year(),
                    remaining,
                });
            }
        }

        AvailabilitySummary {
            simulated_year,
            cooldown,
            available,
            cooling,
        }
    }
}

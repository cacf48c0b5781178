//! On-disk document shapes
//!
//! Clock: `{"current_year": 2026}`
//!
//! Ledger: `{"1980": {"available": 1, "last_used_year": null}, ...}` with
//! every year of the range present and keys written as text.

use crate::models::{Ledger, UsageHistory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Clock document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockDocument {
    #[serde(default)]
    pub current_year: Option<i32>,
}

impl ClockDocument {
    pub fn new(year: i32) -> Self {
        Self {
            current_year: Some(year),
        }
    }
}

/// Ledger entry for one historical year
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDocument {
    /// 1 when available, 0 otherwise
    #[serde(default)]
    pub available: u8,

    #[serde(default)]
    pub last_used_year: Option<i32>,
}

/// Ledger document keyed by year text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LedgerDocument(pub BTreeMap<String, RecordDocument>);

impl From<&Ledger> for LedgerDocument {
    fn from(ledger: &Ledger) -> Self {
        LedgerDocument(
            ledger
                .records()
                .iter()
                .map(|r| {
                    (
                        r.year().to_string(),
                        RecordDocument {
                            available: u8::from(r.is_available()),
                            last_used_year: r.last_used_year(),
                        },
                    )
                })
                .collect(),
        )
    }
}

impl LedgerDocument {
    /// Extract usage data; the cached `available` flags are discarded
    ///
    /// Keys that are not years are skipped.
    pub fn usage(&self) -> UsageHistory {
        self.0
            .iter()
            .filter_map(|(key, record)| {
                let year = key.trim().parse::<i32>().ok()?;
                record.last_used_year.map(|used| (year, used))
            })
            .collect()
    }
}

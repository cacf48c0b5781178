//! Persistence for the simulation clock and the cooldown ledger
//!
//! Two independent key-value documents are kept: the clock document and the
//! ledger document. Readers treat missing or unparsable documents as absent;
//! writers replace a document wholesale.
//!
//! Storage is an explicit value passed to the orchestrator. `FileStore`
//! writes JSON files, `MemoryStore` keeps the same documents in memory for
//! batch simulations and tests.

pub mod documents;
pub mod file;
pub mod memory;

pub use documents::{ClockDocument, LedgerDocument, RecordDocument};
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::models::{Ledger, UsageHistory};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from writing a document
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage is read-only")]
    ReadOnly,
}

/// Backing storage for the draft engine
///
/// Reads never fail: anything unreadable is reported as absent. Writes
/// return an error the caller may log and ignore.
pub trait DraftStorage {
    /// Persisted simulated year, if any
    fn load_year(&self) -> Option<i32>;

    fn save_year(&mut self, year: i32) -> Result<(), StoreError>;

    /// Persisted last-used data, empty when absent
    fn load_usage(&self) -> UsageHistory;

    fn save_ledger(&mut self, ledger: &Ledger) -> Result<(), StoreError>;
}

impl<S: DraftStorage + ?Sized> DraftStorage for Box<S> {
    fn load_year(&self) -> Option<i32> {
        (**self).load_year()
    }

    fn save_year(&mut self, year: i32) -> Result<(), StoreError> {
        (**self).save_year(year)
    }

    fn load_usage(&self) -> UsageHistory {
        (**self).load_usage()
    }

    fn save_ledger(&mut self, ledger: &Ledger) -> Result<(), StoreError> {
        (**self).save_ledger(ledger)
    }
}

//! In-memory storage
//!
//! Holds the same documents `FileStore` writes, without touching disk.
//! Used by batch simulations; `read_only` mode rejects every write, which
//! lets tests exercise the swallowed-failure paths.

use crate::models::{Ledger, UsageHistory};
use crate::store::{ClockDocument, DraftStorage, LedgerDocument, StoreError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    clock: Option<ClockDocument>,
    ledger: Option<LedgerDocument>,
    read_only: bool,
    failed_writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts with a persisted clock value
    pub fn with_year(year: i32) -> Self {
        Self {
            clock: Some(ClockDocument::new(year)),
            ..Self::default()
        }
    }

    /// Store whose writes all fail
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Ledger document as last written
    pub fn ledger_document(&self) -> Option<&LedgerDocument> {
        self.ledger.as_ref()
    }

    /// Writes rejected so far (read-only mode)
    pub fn failed_writes(&self) -> usize {
        self.failed_writes
    }

    fn check_writable(&mut self) -> Result<(), StoreError> {
        if self.read_only {
            self.failed_writes += 1;
            return Err(StoreError::ReadOnly);
        }
        Ok(())
    }
}

impl DraftStorage for MemoryStore {
    fn load_year(&self) -> Option<i32> {
        self.clock.as_ref().and_then(|doc| doc.current_year)
    }

    fn save_year(&mut self, year: i32) -> Result<(), StoreError> {
        self.check_writable()?;
        self.clock = Some(ClockDocument::new(year));
        Ok(())
    }

    fn load_usage(&self) -> UsageHistory {
        self.ledger
            .as_ref()
            .map(LedgerDocument::usage)
            .unwrap_or_default()
    }

    fn save_ledger(&mut self, ledger: &Ledger) -> Result<(), StoreError> {
        self.check_writable()?;
        self.ledger = Some(LedgerDocument::from(ledger));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_rejects_and_counts() {
        let mut store = MemoryStore::read_only();
        assert!(matches!(store.save_year(2030), Err(StoreError::ReadOnly)));
        assert_eq!(store.load_year(), None);
        assert_eq!(store.failed_writes(), 1);
    }

    #[test]
    fn test_with_year() {
        let store = MemoryStore::with_year(2040);
        assert_eq!(store.load_year(), Some(2040));
        assert!(store.load_usage().is_empty());
    }
}

//! Load, save, and reset the cooldown ledger against a store

use crate::cooldown::CooldownRule;
use crate::models::Ledger;
use crate::store::{DraftStorage, StoreError};
use log::{info, warn};

/// Cooldown ledger operations
///
/// Stateless apart from the rule; the ledger itself lives in the store and
/// in whatever the caller holds.
#[derive(Debug, Clone, Copy)]
pub struct CooldownLedger {
    rule: CooldownRule,
}

impl CooldownLedger {
    pub fn new(rule: CooldownRule) -> Self {
        Self { rule }
    }

    pub fn rule(&self) -> &CooldownRule {
        &self.rule
    }

    /// Rebuild the ledger for `simulated_year` from persisted usage
    ///
    /// Cached availability in the document is ignored so the result always
    /// reflects the current simulated year.
    pub fn load<S: DraftStorage + ?Sized>(&self, store: &S, simulated_year: i32) -> Ledger {
        let usage = store.load_usage();
        self.rule.derive_ledger(simulated_year, &usage)
    }

    /// Persist the full ledger, logging and swallowing failures
    ///
    /// Returns whether the write succeeded.
    pub fn save<S: DraftStorage + ?Sized>(&self, store: &mut S, ledger: &Ledger) -> bool {
        match self.try_save(store, ledger) {
            Ok(()) => true,
            Err(e) => {
                warn!("Ledger not saved, keeping previous file: {}", e);
                false
            }
        }
    }

    pub fn try_save<S: DraftStorage + ?Sized>(
        &self,
        store: &mut S,
        ledger: &Ledger,
    ) -> Result<(), StoreError> {
        store.save_ledger(ledger)
    }

    /// Clear all usage, recompute with the blocked-window test only, persist
    pub fn reset_all<S: DraftStorage + ?Sized>(&self, store: &mut S, simulated_year: i32) -> Ledger {
        let ledger = self.rule.fresh_ledger(simulated_year);
        self.save(store, &ledger);
        info!(
            "Ledger reset at simulated year {}: {} of {} years available",
            simulated_year,
            ledger.eligible_years().len(),
            ledger.len()
        );
        ledger
    }
}

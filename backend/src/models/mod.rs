//! Domain models for the draft picker

pub mod draft;
pub mod ledger;
pub mod record;

// Re-exports
pub use draft::{DraftOutcome, DraftResult, PlayerLoss, Position};
pub use ledger::{AvailabilitySummary, CoolingYear, Ledger, UsageHistory};
pub use record::YearRecord;

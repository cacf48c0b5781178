//! Draft Picker Core
//!
//! Draws a historical draft year and a set of players to lose for a roster
//! simulation, with a rolling cooldown that keeps the same historical year
//! from coming back too soon.
//!
//! # Architecture
//!
//! - **core**: Configuration and the persisted simulation clock
//! - **cooldown**: Year availability rule and ledger load/save/reset
//! - **models**: Domain types (YearRecord, Ledger, DraftResult)
//! - **orchestrator**: Draft transaction and batch simulation
//! - **rng**: Seedable RNG and the shuffled-bag picker
//! - **store**: JSON file and in-memory document storage
//!
//! # Critical Invariants
//!
//! 1. Availability is always recomputed from usage on load, never trusted
//!    from disk
//! 2. The ledger covers every year of the range, one record per year
//! 3. A draft either completes every step or aborts before drawing a year

// Module declarations
pub mod cooldown;
pub mod core;
pub mod models;
pub mod orchestrator;
pub mod rng;
pub mod store;

// Re-exports for convenience
pub use crate::core::config::{DraftConfig, EnvOverrides};
pub use crate::core::time::SimulationClock;
pub use cooldown::{AvailabilityRule, CooldownLedger, CooldownRule};
pub use models::{
    AvailabilitySummary, CoolingYear, DraftOutcome, DraftResult, Ledger, PlayerLoss, Position,
    UsageHistory, YearRecord,
};
pub use orchestrator::{simulate_fresh, DraftError, Orchestrator, OrchestratorConfig, SimulationReport};
pub use rng::{RngManager, ShuffledBag};
pub use store::{DraftStorage, FileStore, MemoryStore, StoreError};

//! Orchestrator Engine
//!
//! Runs one draft end to end:
//!
//! ```text
//! 1. Read simulated year Y
//! 2. Load the ledger; if every year is blocked, reset all usage
//! 3. Collect eligible years (abort with NoEligibleYear if none)
//! 4. Draw one year from a shuffled bag over the eligible years
//! 5. Mark it used at Y and persist the ledger
//! 6. Draw N (team, position) pairs from the session bags
//! 7. Sort the pairs by team identifier
//! 8. Advance the clock
//! 9. Return the structured result
//! ```
//!
//! Step 3 is the only abort point; nothing is written before it. Storage
//! failures in steps 5 and 8 are logged and do not change the result. After
//! a failed write the orchestrator keeps the unsaved year and usage in
//! memory and reads them instead of the store until a later write succeeds.
//!
//! # Example
//!
//! ```rust
//! use draft_picker_core::{MemoryStore, Orchestrator, OrchestratorConfig};
//!
//! let config = OrchestratorConfig {
//!     rng_seed: 12345,
//!     ..OrchestratorConfig::default()
//! };
//! let mut orchestrator = Orchestrator::new(config, MemoryStore::new()).unwrap();
//!
//! let outcome = orchestrator.run_draft();
//! let result = outcome.result().unwrap();
//! assert_eq!(result.simulated_year, 2026);
//! assert_eq!(result.new_simulated_year, 2027);
//! assert_eq!(result.players.len(), 8);
//! ```

use crate::cooldown::{CooldownLedger, CooldownRule};
use crate::core::config::DraftConfig;
use crate::core::time::SimulationClock;
use crate::models::{
    AvailabilitySummary, DraftOutcome, DraftResult, Ledger, PlayerLoss, Position, UsageHistory,
};
use crate::rng::{RngManager, ShuffledBag};
use crate::store::DraftStorage;
use log::{debug, info, warn};
use std::collections::HashSet;
use thiserror::Error;

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete orchestrator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct OrchestratorConfig {
    /// Year range, cooldown, and pick pools
    pub draft: DraftConfig,

    /// Initial simulated year override (used only when no clock is persisted)
    pub start_year_override: Option<i32>,

    /// RNG seed for the pick bags
    pub rng_seed: u64,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        OrchestratorConfig {
            draft: DraftConfig::default(),
            start_year_override: None,
            rng_seed: 1,
        }
    }
}

/// Orchestrator construction errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DraftError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Draft transaction runner
///
/// Owns the store, the clock and ledger rules, and the session-scoped team
/// and position bags. Bags persist across drafts in one session so a team
/// does not repeat until every team has come up once.
pub struct Orchestrator<S: DraftStorage> {
    config: DraftConfig,

    /// Backing documents
    store: S,

    clock: SimulationClock,

    ledger: CooldownLedger,

    /// Seeded RNG shared by every bag
    rng_manager: RngManager,

    team_bag: ShuffledBag<String>,

    position_bag: ShuffledBag<Position>,

    /// Simulated year whose write failed
    unsaved_year: Option<i32>,

    /// Usage whose write failed
    unsaved_usage: Option<UsageHistory>,
}

impl<S: DraftStorage> Orchestrator<S> {
    /// Create an orchestrator over `store`
    ///
    /// # Errors
    ///
    /// Returns `DraftError::InvalidConfig` for an inverted year range, a
    /// non-positive cooldown, zero players per draft, or empty / duplicated
    /// pick pools.
    pub fn new(config: OrchestratorConfig, store: S) -> Result<Self, DraftError> {
        Self::validate_config(&config.draft)?;

        let draft = config.draft;
        let rule = CooldownRule::from_config(&draft);

        Ok(Self {
            clock: SimulationClock::new(draft.default_year, config.start_year_override),
            ledger: CooldownLedger::new(rule),
            rng_manager: RngManager::new(config.rng_seed),
            team_bag: ShuffledBag::new(draft.teams.clone()),
            position_bag: ShuffledBag::new(draft.positions.clone()),
            config: draft,
            store,
            unsaved_year: None,
            unsaved_usage: None,
        })
    }

    fn validate_config(config: &DraftConfig) -> Result<(), DraftError> {
        if config.earliest_year > config.latest_year {
            return Err(DraftError::InvalidConfig(format!(
                "earliest_year {} is after latest_year {}",
                config.earliest_year, config.latest_year
            )));
        }

        if config.cooldown <= 0 {
            return Err(DraftError::InvalidConfig(
                "cooldown must be > 0".to_string(),
            ));
        }

        if config.players_to_lose == 0 {
            return Err(DraftError::InvalidConfig(
                "players_to_lose must be > 0".to_string(),
            ));
        }

        if config.teams.is_empty() {
            return Err(DraftError::InvalidConfig(
                "Must have at least one team".to_string(),
            ));
        }

        if config.positions.is_empty() {
            return Err(DraftError::InvalidConfig(
                "Must have at least one position".to_string(),
            ));
        }

        let mut ids = HashSet::new();
        for team in &config.teams {
            if !ids.insert(team) {
                return Err(DraftError::InvalidConfig(format!(
                    "Duplicate team ID: {}",
                    team
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn rule(&self) -> &CooldownRule {
        self.ledger.rule()
    }

    /// True while a failed write left state only in memory
    pub fn has_unsaved_state(&self) -> bool {
        self.unsaved_year.is_some() || self.unsaved_usage.is_some()
    }

    /// Current simulated year (persists the start year on first use)
    pub fn simulated_year(&mut self) -> i32 {
        match self.unsaved_year {
            Some(year) => year,
            None => self.clock.get(&mut self.store),
        }
    }

    /// Ledger rebuilt for the current simulated year
    pub fn load_ledger(&mut self) -> Ledger {
        let year = self.simulated_year();
        self.ledger_at(year)
    }

    /// Available and cooling years at the current simulated year
    pub fn availability(&mut self) -> AvailabilitySummary {
        let year = self.simulated_year();
        self.ledger_at(year).summary(year, self.config.cooldown)
    }

    fn ledger_at(&self, simulated_year: i32) -> Ledger {
        match &self.unsaved_usage {
            Some(usage) => self.ledger.rule().derive_ledger(simulated_year, usage),
            None => self.ledger.load(&self.store, simulated_year),
        }
    }

    fn persist_year(&mut self, year: i32) {
        let saved = self.clock.set(&mut self.store, year);
        self.unsaved_year = (!saved).then_some(year);
    }

    fn persist_ledger(&mut self, ledger: &Ledger) {
        let saved = self.ledger.save(&mut self.store, ledger);
        self.unsaved_usage = (!saved).then(|| ledger.usage());
    }

    // ========================================================================
    // Reset operations
    // ========================================================================

    /// Clear every year's usage record
    pub fn reset_all(&mut self) -> Ledger {
        let year = self.simulated_year();
        self.clear_usage(year)
    }

    fn clear_usage(&mut self, simulated_year: i32) -> Ledger {
        let ledger = self.ledger.rule().fresh_ledger(simulated_year);
        self.persist_ledger(&ledger);
        info!(
            "Ledger reset at simulated year {}: {} of {} years available",
            simulated_year,
            ledger.eligible_years().len(),
            ledger.len()
        );
        ledger
    }

    /// Move the clock back to the start year (override or default)
    ///
    /// Usage records are kept; availability follows on the next load.
    pub fn reset_clock(&mut self) -> i32 {
        let year = self.clock.start_year();
        self.persist_year(year);
        info!("Simulated year reset to {}", year);
        year
    }

    /// Set the clock to `year` and clear all usage
    pub fn reset_season(&mut self, year: i32) -> Ledger {
        self.persist_year(year);
        info!("Season reset: simulated year set to {}", year);
        self.clear_usage(year)
    }

    // ========================================================================
    // Draft
    // ========================================================================

    /// Draw one (team, position) pair from the session bags
    pub fn draw_player(&mut self) -> PlayerLoss {
        let team = self.team_bag.pick(&mut self.rng_manager);
        let position = self.position_bag.pick(&mut self.rng_manager);
        PlayerLoss { team, position }
    }

    /// Run one draft
    pub fn run_draft(&mut self) -> DraftOutcome {
        // STEP 1: current simulated year
        let simulated_year = self.simulated_year();

        // STEP 2: ledger, with automatic reset once the pool is depleted
        let mut ledger = self.ledger_at(simulated_year);
        let mut auto_reset = false;
        if ledger.is_fully_exhausted() {
            info!(
                "All years blocked at simulated year {}; resetting usage",
                simulated_year
            );
            ledger = self.clear_usage(simulated_year);
            auto_reset = true;
        }

        // STEP 3: eligible years (sole abort point)
        let eligible = ledger.eligible_years();
        if eligible.is_empty() {
            warn!("No eligible draft year at simulated year {}", simulated_year);
            return DraftOutcome::NoEligibleYear { simulated_year };
        }
        let eligible_count = eligible.len();

        // STEP 4: draw the year
        let mut year_bag = ShuffledBag::new(eligible);
        let selected_year = year_bag.pick(&mut self.rng_manager);

        // STEP 5: record usage
        ledger.mark_used(selected_year, simulated_year);
        self.persist_ledger(&ledger);

        // STEP 6: players to lose
        let mut players: Vec<PlayerLoss> = (0..self.config.players_to_lose)
            .map(|_| self.draw_player())
            .collect();

        // STEP 7: display order
        players.sort_by(|a, b| a.team.cmp(&b.team));

        // STEP 8: advance time
        let new_simulated_year = SimulationClock::next_year(simulated_year);
        self.persist_year(new_simulated_year);

        info!(
            "Drafted year {} at simulated year {} ({} eligible); clock now {}",
            selected_year, simulated_year, eligible_count, new_simulated_year
        );
        debug!("Players to lose: {:?}", players);

        // STEP 9
        DraftOutcome::Completed(DraftResult {
            simulated_year,
            selected_year,
            players,
            new_simulated_year,
            auto_reset,
            eligible_count,
        })
    }
}

impl<S: DraftStorage + std::fmt::Debug> std::fmt::Debug for Orchestrator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("rng_state", &self.rng_manager.get_state())
            .field("unsaved_year", &self.unsaved_year)
            .finish()
    }
}

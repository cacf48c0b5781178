//! Multi-year batch simulation
//!
//! Runs consecutive drafts and collects per-draft outcomes plus usage
//! statistics, mainly to check how the cooldown spreads historical years
//! over a long career.

use crate::models::{DraftOutcome, DraftResult};
use crate::orchestrator::engine::{DraftError, Orchestrator, OrchestratorConfig};
use crate::store::{DraftStorage, MemoryStore};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of a batch simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Simulated year of the first draft
    pub start_year: i32,

    /// Simulated year after the last draft
    pub end_year: i32,

    /// Outcome of every draft, in order
    pub drafts: Vec<DraftOutcome>,

    /// Historical year -> simulated years it was drawn in
    pub year_usage: BTreeMap<i32, Vec<i32>>,
}

impl SimulationReport {
    pub fn completed(&self) -> impl Iterator<Item = &DraftResult> {
        self.drafts.iter().filter_map(DraftOutcome::result)
    }

    pub fn completed_count(&self) -> usize {
        self.completed().count()
    }

    pub fn auto_reset_count(&self) -> usize {
        self.completed().filter(|r| r.auto_reset).count()
    }

    /// Distinct historical years drawn at least once
    pub fn distinct_years(&self) -> usize {
        self.year_usage.len()
    }

    /// Smallest gap between two uses of the same historical year
    pub fn min_reuse_gap(&self) -> Option<i32> {
        self.year_usage
            .values()
            .flat_map(|uses| uses.windows(2).map(|w| w[1] - w[0]))
            .min()
    }

    /// How many players each team lost over the whole run
    pub fn team_losses(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for player in self.completed().flat_map(|r| r.players.iter()) {
            *counts.entry(player.team.clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl<S: DraftStorage> Orchestrator<S> {
    /// Run `years` consecutive drafts against this orchestrator's store
    pub fn simulate(&mut self, years: usize) -> SimulationReport {
        let start_year = self.simulated_year();
        let mut drafts = Vec::with_capacity(years);
        let mut year_usage: BTreeMap<i32, Vec<i32>> = BTreeMap::new();

        for _ in 0..years {
            let outcome = self.run_draft();
            if let DraftOutcome::Completed(result) = &outcome {
                year_usage
                    .entry(result.selected_year)
                    .or_default()
                    .push(result.simulated_year);
            }
            drafts.push(outcome);
        }

        let end_year = self.simulated_year();
        info!(
            "Simulated {} drafts from {} to {}: {} distinct years used",
            years,
            start_year,
            end_year,
            year_usage.len()
        );

        SimulationReport {
            start_year,
            end_year,
            drafts,
            year_usage,
        }
    }
}

/// Run a batch simulation in memory, starting from a clean ledger at
/// `start_year`
pub fn simulate_fresh(
    config: OrchestratorConfig,
    start_year: i32,
    years: usize,
) -> Result<SimulationReport, DraftError> {
    let mut orchestrator = Orchestrator::new(config, MemoryStore::with_year(start_year))?;
    orchestrator.reset_all();
    Ok(orchestrator.simulate(years))
}

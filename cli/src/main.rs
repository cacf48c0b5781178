//! Draft Picker CLI
//!
//! Draws a historical draft year and the players to lose, and manages the
//! persisted simulated year and cooldown ledger.

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use draft_picker_core::{
    simulate_fresh, DraftConfig, EnvOverrides, FileStore, Orchestrator, OrchestratorConfig,
    RngManager,
};
use env_logger::Env;
use log::{debug, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "draft-picker")]
#[command(about = "Pick historical draft years with a rolling cooldown", long_about = None)]
struct Cli {
    /// Directory holding current_year.json and draft_weights.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// RNG seed for reproducible picks
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one draft and advance the simulated year
    Draw,

    /// Show available and cooling years
    Status,

    /// Clear every year's usage record
    Reset,

    /// Reset the simulated year
    ResetYear {
        /// Set this year and clear all usage (full reset)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Run consecutive drafts in memory without touching the data files
    Simulate {
        /// Number of drafts to run
        #[arg(long, default_value = "50")]
        years: usize,

        /// Simulated year of the first draft
        #[arg(long)]
        start_year: Option<i32>,

        /// Write the JSON report to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let overrides = EnvOverrides::from_env().with_data_dir(cli.data_dir);
    let rng_seed = cli
        .seed
        .unwrap_or_else(|| RngManager::from_clock().get_state());
    debug!("RNG seed {}", rng_seed);

    let config = OrchestratorConfig {
        draft: DraftConfig::default(),
        start_year_override: overrides.start_year,
        rng_seed,
    };

    match cli.command {
        Commands::Draw => {
            let mut orchestrator = open(config, &overrides)?;
            let outcome = orchestrator.run_draft();
            render::print_outcome(&outcome, orchestrator.config());
            if outcome.is_completed() {
                render::print_availability(&orchestrator.availability());
            }
        }

        Commands::Status => {
            let mut orchestrator = open(config, &overrides)?;
            render::print_availability(&orchestrator.availability());
        }

        Commands::Reset => {
            let mut orchestrator = open(config, &overrides)?;
            orchestrator.reset_all();
            println!("All year usage and cooldowns have been reset.");
            render::print_availability(&orchestrator.availability());
        }

        Commands::ResetYear { year: Some(year) } => {
            let mut orchestrator = open(config, &overrides)?;
            let ledger = orchestrator.reset_season(year);
            println!("Simulated year reset to {}; usage records cleared.", year);
            render::print_year_list(
                &format!("Available after reset ({}):", year),
                &ledger.eligible_years(),
            );
        }

        Commands::ResetYear { year: None } => {
            let mut orchestrator = open(config, &overrides)?;
            let year = orchestrator.reset_clock();
            println!("Simulated year reset to {}.", year);
            render::print_availability(&orchestrator.availability());
        }

        Commands::Simulate {
            years,
            start_year,
            out,
        } => {
            let start_year = start_year
                .or(overrides.start_year)
                .unwrap_or(config.draft.default_year);
            run_simulation(config, start_year, years, out)?;
        }
    }

    Ok(())
}

/// Orchestrator over the JSON documents in the resolved data directory
fn open(config: OrchestratorConfig, overrides: &EnvOverrides) -> Result<Orchestrator<FileStore>> {
    let data_dir = overrides.resolve_data_dir();
    info!("Using data directory {}", data_dir.display());
    Ok(Orchestrator::new(config, FileStore::new(data_dir))?)
}

/// Batch simulation in memory; the data files are never touched
fn run_simulation(
    config: OrchestratorConfig,
    start_year: i32,
    years: usize,
    out: Option<PathBuf>,
) -> Result<()> {
    let report = simulate_fresh(config, start_year, years)?;
    render::print_simulation(&report);

    if let Some(path) = out {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, json)
            .with_context(|| format!("writing report to {}", path.display()))?;
        println!("\nReport saved to: {}", path.display());
    }

    Ok(())
}

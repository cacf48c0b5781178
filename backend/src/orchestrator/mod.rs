//! Orchestrator - draft transaction and batch simulation
//!
//! See `engine.rs` for the draft steps.

pub mod engine;
pub mod simulation;


// Re-export main types for convenience
pub use engine::{DraftError, Orchestrator, OrchestratorConfig};
pub use simulation::{simulate_fresh, SimulationReport};

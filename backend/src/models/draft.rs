//! Draft result types
//!
//! Structured output of a draft run. Formatting and translation are left to
//! the caller; only symbolic identifiers appear here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Roster position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "PG")]
    PointGuard,
    #[serde(rename = "SG")]
    ShootingGuard,
    #[serde(rename = "SF")]
    SmallForward,
    #[serde(rename = "PF")]
    PowerForward,
    #[serde(rename = "C")]
    Center,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    /// Short identifier ("PG", "SG", ...)
    pub fn code(&self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }

    pub fn from_code(code: &str) -> Option<Position> {
        Position::ALL.iter().copied().find(|p| p.code() == code)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One player the roster loses: a team and the position to cut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLoss {
    pub team: String,
    pub position: Position,
}

/// Result of a completed draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftResult {
    /// Simulated year the draft ran in
    pub simulated_year: i32,

    /// Historical draft year drawn
    pub selected_year: i32,

    /// Players to lose, sorted by team identifier
    pub players: Vec<PlayerLoss>,

    /// Simulated year after the clock advanced
    pub new_simulated_year: i32,

    /// Whether the ledger was exhausted and reset during this draft
    pub auto_reset: bool,

    /// Number of years that were eligible when the year was drawn
    pub eligible_count: usize,
}

/// Outcome of `Orchestrator::run_draft`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DraftOutcome {
    Completed(DraftResult),

    /// No year could be drawn even after a reset. Nothing was modified.
    NoEligibleYear { simulated_year: i32 },
}

impl DraftOutcome {
    pub fn result(&self) -> Option<&DraftResult> {
        match self {
            DraftOutcome::Completed(result) => Some(result),
            DraftOutcome::NoEligibleYear { .. } => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, DraftOutcome::Completed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_codes_round_trip() {
        for position in Position::ALL {
            assert_eq!(Position::from_code(position.code()), Some(position));
        }
        assert_eq!(Position::from_code("G"), None);
    }

    #[test]
    fn test_position_serializes_as_code() {
        let json = serde_json::to_string(&Position::PowerForward).unwrap();
        assert_eq!(json, "\"PF\"");
    }

    #[test]
    fn test_outcome_serialization_is_tagged() {
        let outcome = DraftOutcome::NoEligibleYear {
            simulated_year: 2026,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "no_eligible_year");
        assert_eq!(json["simulated_year"], 2026);
    }
}

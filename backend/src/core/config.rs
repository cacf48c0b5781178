//! Draft configuration and environment overrides
//!
//! `DraftConfig` carries the fixed parameters of the draft engine (year range,
//! cooldown, team and position pools). `EnvOverrides` captures the two
//! environment-level inputs the surrounding application may supply.
//!
//! Environment Variables:
//! - SIMULATION_START_YEAR: initial simulated year when no clock file exists
//! - DRAFT_PICKER_DATA_DIR: directory holding the JSON documents

use crate::cooldown::AvailabilityRule;
use crate::models::Position;
use log::warn;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

pub const INITIAL_SIMULATION_YEAR: i32 = 2026;
pub const EARLIEST_DRAFT_YEAR: i32 = 1980;
pub const LATEST_HISTORICAL_DRAFT_YEAR: i32 = 2025;
pub const COOL_DOWN_PERIOD: i32 = 20;
pub const NUM_PLAYERS_TO_LOSE: usize = 8;

pub const START_YEAR_ENV: &str = "SIMULATION_START_YEAR";
pub const DATA_DIR_ENV: &str = "DRAFT_PICKER_DATA_DIR";

/// Folder created under the platform data directory
pub const APP_DIR_NAME: &str = "2KDraftPicker";

/// Team identifiers. Display names belong to the presentation layer.
pub const NBA_TEAMS: [&str; 30] = [
    "Lakers", "Celtics", "Warriors", "Nets", "76ers", "Bucks", "Suns", "Clippers", "Nuggets",
    "Heat", "Mavericks", "Jazz", "Knicks", "Bulls", "Hawks", "Raptors", "Wizards", "Pacers",
    "Hornets", "Cavaliers", "Pistons", "Magic", "Thunder", "Kings", "Timberwolves", "Pelicans",
    "Spurs", "Rockets", "Grizzlies", "Trail Blazers",
];

/// Complete draft engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftConfig {
    /// First historical draft year in the ledger (inclusive)
    pub earliest_year: i32,

    /// Last historical draft year in the ledger (inclusive)
    pub latest_year: i32,

    /// Simulated years a historical year stays blocked after use
    pub cooldown: i32,

    /// (team, position) pairs drawn per draft
    pub players_to_lose: usize,

    /// Clock value when neither a clock file nor an override exists
    pub default_year: i32,

    /// Team identifier pool
    pub teams: Vec<String>,

    /// Position pool
    pub positions: Vec<Position>,

    /// Availability rule variant
    #[serde(default)]
    pub rule: AvailabilityRule,
}

impl Default for DraftConfig {
    fn default() -> Self {
        DraftConfig {
            earliest_year: EARLIEST_DRAFT_YEAR,
            latest_year: LATEST_HISTORICAL_DRAFT_YEAR,
            cooldown: COOL_DOWN_PERIOD,
            players_to_lose: NUM_PLAYERS_TO_LOSE,
            default_year: INITIAL_SIMULATION_YEAR,
            teams: NBA_TEAMS.iter().map(|t| t.to_string()).collect(),
            positions: Position::ALL.to_vec(),
            rule: AvailabilityRule::default(),
        }
    }
}

impl DraftConfig {
    /// Number of historical years tracked by the ledger
    pub fn year_count(&self) -> usize {
        (self.latest_year - self.earliest_year + 1).max(0) as usize
    }
}

/// Environment-level inputs owned by the surrounding application
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvOverrides {
    /// Initial simulated year override
    pub start_year: Option<i32>,

    /// Storage location override
    pub data_dir: Option<PathBuf>,
}

impl EnvOverrides {
    /// Read overrides from the process environment
    ///
    /// Invalid values are ignored so resolution falls through to the next
    /// priority.
    pub fn from_env() -> Self {
        let start_year = env::var(START_YEAR_ENV)
            .ok()
            .and_then(|raw| parse_start_year(&raw));
        let data_dir = env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        EnvOverrides { start_year, data_dir }
    }

    /// Override the storage location (CLI flag wins over the environment)
    pub fn with_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        if dir.is_some() {
            self.data_dir = dir;
        }
        self
    }

    /// Resolve the directory holding the JSON documents
    ///
    /// Priority: explicit override, platform local data dir, home dir,
    /// current directory.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    }
}

/// Parse a start-year override, logging and discarding invalid input
pub fn parse_start_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<i32>() {
        Ok(year) => Some(year),
        Err(_) => {
            warn!(
                "{} value '{}' is not a valid year; ignoring",
                START_YEAR_ENV, raw
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_constants() {
        let config = DraftConfig::default();
        assert_eq!(config.year_count(), 46);
        assert_eq!(config.teams.len(), 30);
        assert_eq!(config.positions.len(), 5);
        assert_eq!(config.rule, AvailabilityRule::Windowed);
    }

    #[test]
    fn test_parse_start_year() {
        assert_eq!(parse_start_year("2030"), Some(2030));
        assert_eq!(parse_start_year(" 1999 "), Some(1999));
        assert_eq!(parse_start_year("next year"), None);
        assert_eq!(parse_start_year(""), None);
    }

    #[test]
    fn test_data_dir_override_wins() {
        let overrides = EnvOverrides {
            start_year: None,
            data_dir: Some(PathBuf::from("/tmp/picker")),
        };
        assert_eq!(overrides.resolve_data_dir(), PathBuf::from("/tmp/picker"));
    }

    #[test]
    fn test_default_data_dir_uses_app_folder() {
        let dir = EnvOverrides::default().resolve_data_dir();
        assert!(dir.ends_with(APP_DIR_NAME));
    }

    #[test]
    fn test_cli_flag_replaces_env_dir() {
        let overrides = EnvOverrides {
            start_year: Some(2030),
            data_dir: Some(PathBuf::from("/from/env")),
        }
        .with_data_dir(Some(PathBuf::from("/from/flag")));
        assert_eq!(overrides.data_dir, Some(PathBuf::from("/from/flag")));

        let untouched = overrides.clone().with_data_dir(None);
        assert_eq!(untouched.data_dir, Some(PathBuf::from("/from/flag")));
    }
}

//! Simulation clock against the JSON file store
//!
//! Resolution order: persisted file, start-year override, default.

use draft_picker_core::{DraftStorage, FileStore, SimulationClock};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_default_year_created_when_nothing_persisted() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    let clock = SimulationClock::new(2026, None);

    assert_eq!(clock.get(&mut store), 2026);

    let written = fs::read_to_string(store.clock_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["current_year"], 2026);
}

#[test]
fn test_file_beats_override() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    fs::write(store.clock_path(), r#"{"current_year": 2041}"#).unwrap();

    let clock = SimulationClock::new(2026, Some(2030));
    assert_eq!(clock.get(&mut store), 2041);
}

#[test]
fn test_override_captured_once() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path());

    let first = SimulationClock::new(2026, Some(2030));
    assert_eq!(first.get(&mut store), 2030);

    // A later session with a different override keeps the captured value
    let second = SimulationClock::new(2026, Some(1999));
    assert_eq!(second.get(&mut store), 2030);
}

#[test]
fn test_corrupt_clock_file_falls_through() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    fs::write(store.clock_path(), "{not json").unwrap();

    let clock = SimulationClock::new(2026, Some(2035));
    assert_eq!(clock.get(&mut store), 2035);
    assert_eq!(store.load_year(), Some(2035));
}

#[test]
fn test_clock_file_without_year_falls_through() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    fs::write(store.clock_path(), "{}").unwrap();

    let clock = SimulationClock::new(2026, None);
    assert_eq!(clock.get(&mut store), 2026);
}

#[test]
fn test_increment_and_set() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    let clock = SimulationClock::new(2026, None);

    assert_eq!(clock.increment(&mut store), 2027);
    assert_eq!(clock.increment(&mut store), 2028);

    clock.set(&mut store, 2100);
    assert_eq!(clock.get(&mut store), 2100);
}

#[test]
fn test_reset_returns_to_start_year() {
    let dir = tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    let clock = SimulationClock::new(2026, Some(2031));

    clock.set(&mut store, 2060);
    assert_eq!(clock.reset(&mut store), 2031);
    assert_eq!(store.load_year(), Some(2031));
}

//! Cooldown rule scenarios and properties
//!
//! Covers the blocked window, the usage cooldown, and reset behaviour over
//! the default 1980-2025 range with a 20-year cooldown.

use draft_picker_core::{CooldownLedger, CooldownRule, DraftStorage, MemoryStore};
use proptest::prelude::*;

fn default_rule() -> CooldownRule {
    CooldownRule::new(1980, 2025, 20)
}

#[test]
fn test_default_scenario_at_2026() {
    let ledger = default_rule().fresh_ledger(2026);

    assert_eq!(ledger.len(), 46);
    assert_eq!(ledger.eligible_years(), (1980..=2006).collect::<Vec<_>>());
    assert_eq!(ledger.eligible_years().len(), 27);

    for year in 2007..=2025 {
        assert!(
            !ledger.get(year).unwrap().is_available(),
            "{} should be blocked at 2026",
            year
        );
    }
}

#[test]
fn test_early_simulated_year_keeps_future_drafts_available() {
    // At 1995 the window is (1975, 1995]; 1996-2025 lie after it
    let ledger = default_rule().fresh_ledger(1995);

    assert!(!ledger.get(1980).unwrap().is_available());
    assert!(!ledger.get(1995).unwrap().is_available());
    assert!(ledger.get(1996).unwrap().is_available());
    assert_eq!(ledger.eligible_years().len(), 30);
}

#[test]
fn test_far_future_everything_available() {
    let ledger = default_rule().fresh_ledger(2050);
    assert_eq!(ledger.eligible_years().len(), 46);
}

#[test]
fn test_used_year_cooldown_19_vs_20() {
    let keeper = CooldownLedger::new(default_rule());
    let mut store = MemoryStore::new();

    let mut ledger = keeper.load(&store, 2026);
    assert!(ledger.mark_used(1990, 2026));
    keeper.save(&mut store, &ledger);

    assert!(!keeper.load(&store, 2026).get(1990).unwrap().is_available());
    assert!(!keeper.load(&store, 2045).get(1990).unwrap().is_available());
    assert!(keeper.load(&store, 2046).get(1990).unwrap().is_available());
}

#[test]
fn test_multiple_cooldowns_expire_independently() {
    let keeper = CooldownLedger::new(default_rule());
    let mut store = MemoryStore::new();

    let mut ledger = keeper.load(&store, 2026);
    ledger.mark_used(1985, 2026);
    ledger.mark_used(1995, 2030);
    keeper.save(&mut store, &ledger);

    let at_2047 = keeper.load(&store, 2047);
    assert!(at_2047.get(1985).unwrap().is_available());
    assert!(!at_2047.get(1995).unwrap().is_available());

    let at_2050 = keeper.load(&store, 2050);
    assert!(at_2050.get(1995).unwrap().is_available());
}

#[test]
fn test_reset_all_matches_blocked_window_only() {
    let rule = default_rule();
    let keeper = CooldownLedger::new(rule);
    let mut store = MemoryStore::new();

    let mut ledger = keeper.load(&store, 2030);
    for year in 1980..=2000 {
        ledger.mark_used(year, 2030);
    }
    keeper.save(&mut store, &ledger);

    let reset = keeper.reset_all(&mut store, 2030);
    for record in reset.records() {
        assert_eq!(record.last_used_year(), None);
        assert_eq!(
            record.is_available(),
            rule.compute_availability(record.year(), 2030, None)
        );
    }
    assert!(store.load_usage().is_empty());
}

#[test]
fn test_is_fully_exhausted() {
    let keeper = CooldownLedger::new(default_rule());
    let store = MemoryStore::new();

    let mut ledger = keeper.load(&store, 2026);
    assert!(!ledger.is_fully_exhausted());

    for year in 1980..=2006 {
        ledger.mark_used(year, 2026);
    }
    assert!(ledger.is_fully_exhausted());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_unused_year_follows_window(
        simulated_year in 1900i32..2200,
        year in 1980i32..=2025,
    ) {
        let rule = default_rule();
        let expected = year <= simulated_year - 20 || year > simulated_year;
        prop_assert_eq!(rule.compute_availability(year, simulated_year, None), expected);
    }

    #[test]
    fn prop_usage_blocks_until_cooldown_elapses(
        simulated_year in 1980i32..2200,
        year in 1980i32..=2025,
        since_use in 0i32..60,
    ) {
        let rule = default_rule();
        let last_used = simulated_year - since_use;
        let with_usage = rule.compute_availability(year, simulated_year, Some(last_used));

        if since_use < 20 {
            prop_assert!(!with_usage);
        } else {
            prop_assert_eq!(with_usage, rule.compute_availability(year, simulated_year, None));
        }
    }

    #[test]
    fn prop_ledger_is_dense(simulated_year in 1900i32..2200) {
        let ledger = default_rule().fresh_ledger(simulated_year);
        prop_assert_eq!(ledger.len(), 46);
        for (offset, record) in ledger.records().iter().enumerate() {
            prop_assert_eq!(record.year(), 1980 + offset as i32);
        }
    }
}

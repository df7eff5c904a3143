//! # Statistics Tests
//!
//! Verifies hit/miss tallies and rate calculations of `TableStats`.

use cachesim_core::report::AccessOutcome;
use cachesim_core::stats::TableStats;

use crate::common::{Hit, Miss};

#[test]
fn default_is_zeroed() {
    let stats = TableStats::default();
    assert_eq!(stats.accesses, 0);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 0);
}

#[test]
fn empty_rates_are_zero() {
    let stats = TableStats::default();
    assert!(stats.hit_rate().abs() < f64::EPSILON);
    assert!(stats.miss_rate().abs() < f64::EPSILON);
}

#[test]
fn record_counts_each_outcome() {
    let mut stats = TableStats::default();
    for outcome in [Miss, Hit, Hit, Miss, Hit] {
        stats.record(outcome);
    }
    assert_eq!(stats.accesses, 5);
    assert_eq!(stats.hits, 3);
    assert_eq!(stats.misses, 2);
    assert!((stats.hit_rate() - 0.6).abs() < 1e-12);
    assert!((stats.miss_rate() - 0.4).abs() < 1e-12);
}

#[test]
fn all_hits() {
    let mut stats = TableStats::default();
    stats.record(AccessOutcome::Hit);
    assert!((stats.hit_rate() - 1.0).abs() < f64::EPSILON);
    assert!(stats.miss_rate().abs() < f64::EPSILON);
}

#[test]
fn from_rows_matches_manual_tally() {
    let report = cachesim_core::run(&crate::common::reference_config(), &[0, 0, 8, 8, 0]).unwrap();
    for table in &report.tables {
        assert_eq!(table.stats, TableStats::from_rows(&table.rows));
        assert_eq!(table.stats.misses, 2);
        assert_eq!(table.stats.hits, 3);
    }
}

#[test]
fn outcome_helpers() {
    assert!(AccessOutcome::from_hit(true).is_hit());
    assert!(!AccessOutcome::from_hit(false).is_hit());
    assert_eq!(AccessOutcome::Hit.to_string(), "Hit");
    assert_eq!(AccessOutcome::Miss.to_string(), "Miss");
}

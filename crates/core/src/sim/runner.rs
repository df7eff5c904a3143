//! Simulation Runner.
//!
//! Replays one address trace through a fresh instance of each cache organization and
//! assembles the comparative report. The runner keeps no state between calls: each call
//! builds its own cold caches, so identical inputs always yield identical reports.

use tracing::{debug, info_span};

use crate::cache::{self, CacheKind, CacheModel};
use crate::common::SimResult;
use crate::config::SimConfig;
use crate::report::{Report, Table, TraceRow};
use crate::stats::TableStats;

/// Replays `trace` through direct-mapped, fully-associative and set-associative caches.
///
/// All three geometries are derived before any access is replayed, so a configuration
/// error produces no partial report.
///
/// # Arguments
///
/// * `config` - Sizing inputs; `blocks_or_ways` is the set-associative way count.
/// * `trace` - Addresses in access order, consumed as-is.
///
/// # Errors
///
/// Propagates geometry errors from [`SimConfig::geometry`].
///
/// # Examples
///
/// ```
/// use cachesim_core::config::{CacheKind, SimConfig};
/// use cachesim_core::report::AccessOutcome::{Hit, Miss};
///
/// let report = cachesim_core::run(&SimConfig::new(32, 2, 2), &[0, 8, 0]).unwrap();
/// let direct = report.table(CacheKind::DirectMapped).unwrap();
/// assert_eq!(direct.outcomes(), vec![Miss, Miss, Hit]);
/// ```
pub fn run(config: &SimConfig, trace: &[u64]) -> SimResult<Report> {
    let _span = info_span!("run", accesses = trace.len()).entered();

    let mut models = CacheKind::ALL
        .into_iter()
        .map(|kind| cache::build(config, kind))
        .collect::<SimResult<Vec<_>>>()?;

    let tables = models
        .iter_mut()
        .map(|model| run_model(model.as_mut(), trace))
        .collect();

    Ok(Report { tables })
}

/// Replays `trace` through a single model in order.
///
/// The model is used as given; pass a freshly built one for a cold-start table.
pub fn run_model(model: &mut dyn CacheModel, trace: &[u64]) -> Table {
    let rows: Vec<TraceRow> = trace.iter().map(|&address| model.access(address)).collect();
    let stats = TableStats::from_rows(&rows);
    let geometry = *model.geometry();
    debug!(
        model = %geometry.kind,
        hits = stats.hits,
        misses = stats.misses,
        "replayed trace"
    );
    Table {
        kind: geometry.kind,
        label: geometry.kind.label(),
        geometry,
        rows,
        stats,
    }
}

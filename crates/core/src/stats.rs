//! Simulation statistics.
//!
//! Tracks hit and miss counts for one replayed table and derives hit and miss rates.
//! Rates of an empty table are reported as zero.

use serde::Serialize;

use crate::report::{AccessOutcome, TraceRow};

/// Hit/miss totals for one cache model over one trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TableStats {
    /// Number of accesses replayed.
    pub accesses: u64,
    /// Accesses that found their block resident.
    pub hits: u64,
    /// Accesses that placed their block.
    pub misses: u64,
}

impl TableStats {
    /// Counts one access.
    pub const fn record(&mut self, outcome: AccessOutcome) {
        self.accesses += 1;
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Miss => self.misses += 1,
        }
    }

    /// Tallies every row of a table.
    pub fn from_rows(rows: &[TraceRow]) -> Self {
        let mut stats = Self::default();
        for row in rows {
            stats.record(row.outcome);
        }
        stats
    }

    /// Fraction of accesses that hit, in `[0, 1]`.
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    /// Fraction of accesses that missed, in `[0, 1]`.
    pub fn miss_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.misses as f64 / self.accesses as f64
        }
    }
}

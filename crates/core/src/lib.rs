//! Trace-driven cache placement simulator library.
//!
//! This crate replays a sequence of addresses through three classic cache organizations
//! and reports, per access, the decoded fields and whether the access hit. It provides:
//! 1. **Decoding:** Tag/index/offset extraction from an address and a pair of field widths.
//! 2. **Caches:** Direct-mapped, fully-associative and set-associative placement with LRU.
//! 3. **Simulation:** Trace parsing and a pure runner that assembles a comparative report.
//! 4. **Configuration:** Serde-backed input parameters and the geometry derived from them.
//! 5. **Statistics:** Hit/miss counts and hit rates per cache organization.
//!
//! Only placement and replacement are modeled; no data moves and no timing is simulated.

/// Cache models and the recency-ordered resident set they share.
pub mod cache;
/// Common types and constants (address decoding, errors, fixed widths).
pub mod common;
/// Simulation input parameters and derived cache geometry.
pub mod config;
/// Structured report produced by a simulation run.
pub mod report;
/// Trace parsing and the simulation runner.
pub mod sim;
/// Per-table hit/miss statistics.
pub mod stats;

/// Input parameters; use `SimConfig::default()` or deserialize from JSON.
pub use crate::config::SimConfig;
/// Error type returned by every fallible operation in the crate.
pub use crate::common::{SimError, SimResult};
/// Comparative report returned by [`sim::run`].
pub use crate::report::Report;
/// Entry point replaying one trace through all three cache models.
pub use crate::sim::run;

//! Simulation utilities and trace loading.
//!
//! Provides parsing of address traces and the runner that replays a trace through
//! every cache organization.

/// Address trace parsing and loading.
pub mod loader;

/// Trace replay and report assembly.
pub mod runner;

pub use loader::{load_trace_file, parse_trace};
pub use runner::{run, run_model};

//! Address Trace Loader.
//!
//! This module turns textual address lists into traces. It performs:
//! 1. **Parsing:** Whitespace-separated decimal integers, consumed as-is with no unit scaling.
//! 2. **File loading:** Reads a trace file and parses its contents the same way.
//!
//! A malformed token rejects the whole trace, so no simulation runs on partial input.

use std::fs;
use std::path::Path;

use crate::common::{SimError, SimResult};

/// Parses whitespace-separated non-negative integers into an address trace.
///
/// # Arguments
///
/// * `text` - Addresses separated by any whitespace, including newlines.
///
/// # Errors
///
/// Returns [`SimError::InvalidAddress`] for the first token that is not a non-negative
/// integer fitting in 64 bits.
///
/// # Examples
///
/// ```
/// use cachesim_core::sim::parse_trace;
///
/// assert_eq!(parse_trace("0 8\n\t16").unwrap(), vec![0, 8, 16]);
/// assert!(parse_trace("0 -4").is_err());
/// ```
pub fn parse_trace(text: &str) -> SimResult<Vec<u64>> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<u64>().map_err(|_| SimError::InvalidAddress {
                token: token.to_owned(),
                position,
            })
        })
        .collect()
}

/// Reads a trace file from disk and parses it with [`parse_trace`].
///
/// # Arguments
///
/// * `path` - Path to the trace file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, or [`SimError::InvalidAddress`]
/// if its contents are malformed.
pub fn load_trace_file(path: impl AsRef<Path>) -> SimResult<Vec<u64>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_trace(&text)
}

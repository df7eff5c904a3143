//! Simulator error definitions.
//!
//! Decoding and hit/miss logic cannot fail; every error here is raised before a replay
//! starts, while parsing input or deriving cache geometry. It provides:
//! 1. **Input errors:** Malformed address tokens, unreadable files, malformed JSON.
//! 2. **Geometry errors:** Parameters that leave a cache without blocks or sets, and
//!    non-power-of-two sizes when strict checking is enabled.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by configuration, trace parsing and the simulation runner.
#[derive(Debug, Error)]
pub enum SimError {
    /// An address token is not a non-negative integer.
    ///
    /// `position` is the zero-based index of the token in the whitespace-split input.
    #[error("invalid address {token:?} at position {position}")]
    InvalidAddress {
        /// The offending token as written.
        token: String,
        /// Zero-based token position.
        position: usize,
    },

    /// A trace or configuration file could not be read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed or produced.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A sizing parameter is zero.
    #[error("{name} must be a positive integer")]
    ZeroParameter {
        /// Name of the parameter.
        name: &'static str,
    },

    /// The derived block or set count of a model is zero.
    #[error("{model} cache has no sets: {num_blocks} block(s) cannot be split into {ways}-way sets")]
    NoSets {
        /// Label of the cache model being sized.
        model: &'static str,
        /// Derived `cache_size / block_size`.
        num_blocks: u64,
        /// Lines per set for the model.
        ways: u64,
    },

    /// A size is not a power of two under strict geometry checking.
    #[error("{name} = {value} is not a power of two")]
    NotPowerOfTwo {
        /// Name of the derived quantity.
        name: &'static str,
        /// The offending value.
        value: u64,
    },
}

/// Result alias used across the crate.
pub type SimResult<T> = Result<T, SimError>;

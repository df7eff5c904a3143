//! Configuration system for the cache simulator.
//!
//! This module defines the simulation input and the geometry derived from it. It provides:
//! 1. **Defaults:** Baseline sizing used when a field is omitted.
//! 2. **Structures:** `SimConfig` (user input) and `CacheGeometry` (per-model derived sizes).
//! 3. **Enums:** Cache organization and geometry checking mode.
//!
//! Configuration is supplied as JSON or built directly; the CLI layers its flags on top.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::{ADDRESS_WIDTH, SimError, SimResult, WORD_BYTES};

/// Default configuration constants for the simulator.
mod defaults {
    /// Default total cache capacity in bytes.
    pub const CACHE_SIZE: u64 = 32;

    /// Default blocks per set (set-associative ways).
    pub const BLOCKS_OR_WAYS: u64 = 2;

    /// Default words per block (8-byte blocks).
    pub const WORDS_PER_BLOCK: u64 = 2;
}

/// Cache organization simulated by one table of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CacheKind {
    /// One line per index.
    DirectMapped,
    /// A single set holding every block.
    FullyAssociative,
    /// Independent sets of `ways` lines each.
    SetAssociative,
}

impl CacheKind {
    /// Every organization, in report order.
    pub const ALL: [Self; 3] = [Self::DirectMapped, Self::FullyAssociative, Self::SetAssociative];

    /// Human-readable table title.
    pub const fn label(self) -> &'static str {
        match self {
            Self::DirectMapped => "Direct-Mapped",
            Self::FullyAssociative => "Fully Associative",
            Self::SetAssociative => "Set-Associative",
        }
    }
}

impl fmt::Display for CacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How sizes that are not powers of two are treated.
///
/// Field widths are integer base-two logarithms. A non-power-of-two size truncates the
/// width, which still simulates but no longer partitions the address exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum GeometryCheck {
    /// Truncate the field width and log a warning.
    #[default]
    #[serde(alias = "lenient")]
    Lenient,
    /// Reject the configuration with [`SimError::NotPowerOfTwo`].
    #[serde(alias = "strict")]
    Strict,
}

/// Simulation input parameters.
///
/// # Examples
///
/// ```
/// use cachesim_core::config::{GeometryCheck, SimConfig};
///
/// let config = SimConfig::default();
/// assert_eq!(config.cache_size, 32);
/// assert_eq!(config.block_size(), 8);
///
/// let config = SimConfig::from_json(r#"{ "cache_size": 64, "geometry_check": "Strict" }"#).unwrap();
/// assert_eq!(config.cache_size, 64);
/// assert_eq!(config.blocks_or_ways, 2);
/// assert_eq!(config.geometry_check, GeometryCheck::Strict);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Total cache capacity in bytes.
    #[serde(default = "SimConfig::default_cache_size")]
    pub cache_size: u64,

    /// Blocks per set. Only the set-associative model reads it, as its way count.
    #[serde(default = "SimConfig::default_blocks_or_ways")]
    pub blocks_or_ways: u64,

    /// Words per block; block size is this times [`WORD_BYTES`].
    #[serde(default = "SimConfig::default_words_per_block")]
    pub words_per_block: u64,

    /// Treatment of non-power-of-two sizes.
    #[serde(default)]
    pub geometry_check: GeometryCheck,
}

impl SimConfig {
    fn default_cache_size() -> u64 {
        defaults::CACHE_SIZE
    }

    fn default_blocks_or_ways() -> u64 {
        defaults::BLOCKS_OR_WAYS
    }

    fn default_words_per_block() -> u64 {
        defaults::WORDS_PER_BLOCK
    }

    /// Builds a lenient configuration from the three sizing inputs.
    pub const fn new(cache_size: u64, blocks_or_ways: u64, words_per_block: u64) -> Self {
        Self {
            cache_size,
            blocks_or_ways,
            words_per_block,
            geometry_check: GeometryCheck::Lenient,
        }
    }

    /// Parses a JSON document; omitted fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Json`] if the document is malformed.
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read, or [`SimError::Json`]
    /// if its contents are malformed.
    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Bytes per block.
    pub const fn block_size(&self) -> u64 {
        self.words_per_block.saturating_mul(WORD_BYTES)
    }

    /// Derives the geometry of one cache organization.
    ///
    /// Direct-mapped uses one way, fully-associative places every block in one set,
    /// and set-associative uses `blocks_or_ways` ways. The block count of all three is
    /// `cache_size / block_size`.
    ///
    /// # Errors
    ///
    /// * [`SimError::ZeroParameter`] if any sizing input is zero.
    /// * [`SimError::NoSets`] if the cache holds no block or no complete set.
    /// * [`SimError::NotPowerOfTwo`] under [`GeometryCheck::Strict`] when the block size
    ///   or set count is not a power of two.
    pub fn geometry(&self, kind: CacheKind) -> SimResult<CacheGeometry> {
        for (name, value) in [
            ("cache_size", self.cache_size),
            ("blocks_or_ways", self.blocks_or_ways),
            ("words_per_block", self.words_per_block),
        ] {
            if value == 0 {
                return Err(SimError::ZeroParameter { name });
            }
        }

        let block_size = self.block_size();
        let num_blocks = self.cache_size / block_size;
        let ways = match kind {
            CacheKind::DirectMapped => 1,
            CacheKind::FullyAssociative => num_blocks,
            CacheKind::SetAssociative => self.blocks_or_ways,
        };
        let num_sets = if ways == 0 { 0 } else { num_blocks / ways };
        if num_sets == 0 {
            return Err(SimError::NoSets {
                model: kind.label(),
                num_blocks,
                ways,
            });
        }

        self.check_power_of_two(kind, "block_size", block_size)?;
        self.check_power_of_two(kind, "num_sets", num_sets)?;

        let offset_bits = block_size.ilog2();
        let index_bits = match kind {
            CacheKind::FullyAssociative => 0,
            CacheKind::DirectMapped | CacheKind::SetAssociative => num_sets.ilog2(),
        };
        let geometry = CacheGeometry {
            kind,
            cache_size: self.cache_size,
            block_size,
            ways,
            num_blocks,
            num_sets,
            offset_bits,
            index_bits,
            tag_bits: ADDRESS_WIDTH.saturating_sub(index_bits + offset_bits),
        };
        debug!(?geometry, "derived cache geometry");
        Ok(geometry)
    }

    fn check_power_of_two(&self, kind: CacheKind, name: &'static str, value: u64) -> SimResult<()> {
        if value.is_power_of_two() {
            return Ok(());
        }
        match self.geometry_check {
            GeometryCheck::Strict => Err(SimError::NotPowerOfTwo { name, value }),
            GeometryCheck::Lenient => {
                warn!(model = %kind, name, value, "not a power of two; field width truncated");
                Ok(())
            }
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(
            defaults::CACHE_SIZE,
            defaults::BLOCKS_OR_WAYS,
            defaults::WORDS_PER_BLOCK,
        )
    }
}

/// Sizes and field widths of one cache model, fixed for the lifetime of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheGeometry {
    /// Organization this geometry was derived for.
    pub kind: CacheKind,
    /// Total capacity in bytes.
    pub cache_size: u64,
    /// Bytes per block.
    pub block_size: u64,
    /// Lines per set.
    pub ways: u64,
    /// `cache_size / block_size`.
    pub num_blocks: u64,
    /// `num_blocks / ways`.
    pub num_sets: u64,
    /// `log2(block_size)`, truncated.
    pub offset_bits: u32,
    /// `log2(num_sets)`, truncated; 0 for fully-associative.
    pub index_bits: u32,
    /// Remaining bits of a 32-bit address. Informational only.
    pub tag_bits: u32,
}

impl CacheGeometry {
    /// Number of lines across all sets.
    pub const fn capacity(&self) -> u64 {
        self.num_sets * self.ways
    }

    /// Whether the index field is present in decoded addresses.
    pub const fn has_index(&self) -> bool {
        !matches!(self.kind, CacheKind::FullyAssociative)
    }
}

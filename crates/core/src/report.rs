//! Simulation report structures.
//!
//! A report holds one table per cache organization, each listing the decoded fields and
//! outcome of every access in trace order. Formatting is left to the presentation layer;
//! the binary strings stored here are unpadded and unprefixed.

use std::fmt;

use serde::Serialize;

use crate::common::{DecodedAddress, INDEX_PLACEHOLDER, to_binary};
use crate::config::{CacheGeometry, CacheKind};
use crate::stats::TableStats;

/// Outcome of a single cache access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AccessOutcome {
    /// The block was resident.
    Hit,
    /// The block was placed, possibly evicting another.
    Miss,
}

impl AccessOutcome {
    /// Maps a lookup result to an outcome.
    pub const fn from_hit(hit: bool) -> Self {
        if hit { Self::Hit } else { Self::Miss }
    }

    /// Returns `true` for [`AccessOutcome::Hit`].
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => f.write_str("Hit"),
            Self::Miss => f.write_str("Miss"),
        }
    }
}

/// One decoded access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceRow {
    /// Address as supplied in the trace.
    pub address: u64,
    /// Tag field.
    pub tag: u64,
    /// Index field, absent for fully-associative caches.
    pub index: Option<u64>,
    /// Offset field.
    pub offset: u64,
    /// `address` in binary.
    pub address_bin: String,
    /// `tag` in binary.
    pub tag_bin: String,
    /// `index` in binary, or `"-"` when absent.
    pub index_bin: String,
    /// `offset` in binary.
    pub offset_bin: String,
    /// Hit or miss.
    pub outcome: AccessOutcome,
}

impl TraceRow {
    /// Builds a row from a decoded address.
    ///
    /// # Arguments
    ///
    /// * `address` - The raw address.
    /// * `decoded` - Its tag/index/offset split.
    /// * `has_index` - Whether the model has an index field; when `false` the index is
    ///   reported as a placeholder.
    /// * `hit` - Lookup result.
    pub fn new(address: u64, decoded: DecodedAddress, has_index: bool, hit: bool) -> Self {
        let index = has_index.then_some(decoded.index);
        Self {
            address,
            tag: decoded.tag,
            index,
            offset: decoded.offset,
            address_bin: to_binary(address),
            tag_bin: to_binary(decoded.tag),
            index_bin: index.map_or_else(|| INDEX_PLACEHOLDER.to_owned(), to_binary),
            offset_bin: to_binary(decoded.offset),
            outcome: AccessOutcome::from_hit(hit),
        }
    }
}

/// The replay of a trace through one cache model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Organization simulated.
    pub kind: CacheKind,
    /// Title for display.
    pub label: &'static str,
    /// Geometry of the model.
    pub geometry: CacheGeometry,
    /// One row per trace address, in trace order.
    pub rows: Vec<TraceRow>,
    /// Hit/miss totals over `rows`.
    pub stats: TableStats,
}

impl Table {
    /// Outcomes in trace order.
    pub fn outcomes(&self) -> Vec<AccessOutcome> {
        self.rows.iter().map(|row| row.outcome).collect()
    }
}

/// Comparative report: direct-mapped, fully-associative, then set-associative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Tables in fixed order.
    pub tables: Vec<Table>,
}

impl Report {
    /// Looks up the table of one organization.
    pub fn table(&self, kind: CacheKind) -> Option<&Table> {
        self.tables.iter().find(|table| table.kind == kind)
    }

    /// Serializes the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SimError::Json`] if serialization fails.
    pub fn to_json(&self) -> crate::SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

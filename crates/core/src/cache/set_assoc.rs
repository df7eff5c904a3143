//! Set-Associative Cache.
//!
//! `num_sets` independent LRU sets of `ways` lines each. The index field selects the
//! set; within it the lookup behaves like a small fully-associative cache. A miss in
//! one set never disturbs the residents of another.
//!
//! Sets are created on first access to their index.

use std::collections::HashMap;

use tracing::trace;

use super::{CacheModel, ResidentSet};
use crate::common::decode;
use crate::config::CacheGeometry;
use crate::report::TraceRow;

/// Set-associative cache with per-set LRU replacement.
#[derive(Debug, Clone)]
pub struct SetAssociativeCache {
    geometry: CacheGeometry,
    sets: HashMap<u64, ResidentSet>,
}

impl SetAssociativeCache {
    /// Creates a cold cache with no sets touched yet.
    pub fn new(geometry: CacheGeometry) -> Self {
        Self {
            geometry,
            sets: HashMap::new(),
        }
    }

    /// The set at `index`, if it has been accessed.
    pub fn set(&self, index: u64) -> Option<&ResidentSet> {
        self.sets.get(&index)
    }
}

impl CacheModel for SetAssociativeCache {
    fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    fn access(&mut self, address: u64) -> TraceRow {
        let decoded = decode(address, self.geometry.offset_bits, self.geometry.index_bits);
        let ways = self.geometry.ways as usize;
        let set = self
            .sets
            .entry(decoded.index)
            .or_insert_with(|| ResidentSet::new(ways));

        let hit = set.promote(decoded.tag);
        if !hit {
            if let Some(victim) = set.insert(decoded.tag) {
                trace!(set = decoded.index, victim, new = decoded.tag, "set-associative evict");
            }
        }

        TraceRow::new(address, decoded, true, hit)
    }
}

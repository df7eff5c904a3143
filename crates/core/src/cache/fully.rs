//! Fully-Associative Cache.
//!
//! A single pool of `num_blocks` tags with global LRU eviction. Addresses have no index
//! field; the whole address above the offset is the tag.

use tracing::trace;

use super::{CacheModel, ResidentSet};
use crate::common::decode;
use crate::config::CacheGeometry;
use crate::report::TraceRow;

/// Fully-associative cache with LRU replacement.
#[derive(Debug, Clone)]
pub struct FullyAssociativeCache {
    geometry: CacheGeometry,
    resident: ResidentSet,
}

impl FullyAssociativeCache {
    /// Creates an empty cache holding up to `num_blocks` tags.
    pub fn new(geometry: CacheGeometry) -> Self {
        Self {
            resident: ResidentSet::new(geometry.capacity() as usize),
            geometry,
        }
    }

    /// The resident pool.
    pub const fn resident(&self) -> &ResidentSet {
        &self.resident
    }
}

impl CacheModel for FullyAssociativeCache {
    fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    fn access(&mut self, address: u64) -> TraceRow {
        let decoded = decode(address, self.geometry.offset_bits, 0);

        let hit = self.resident.promote(decoded.tag);
        if !hit {
            if let Some(victim) = self.resident.insert(decoded.tag) {
                trace!(victim, new = decoded.tag, "fully-associative evict");
            }
        }

        TraceRow::new(address, decoded, false, hit)
    }
}

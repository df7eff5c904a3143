//! Direct-Mapped Cache.
//!
//! Every index owns exactly one line, so a miss always overwrites that line. There is
//! no replacement decision to make.
//!
//! Lines are materialized on first fill; an index that was never touched reads as an
//! invalid line. Memory therefore grows with the trace, not with `num_sets`.

use std::collections::HashMap;

use tracing::trace;

use super::CacheModel;
use crate::common::decode;
use crate::config::CacheGeometry;
use crate::report::TraceRow;

/// Cache line entry containing tag and validity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// Tag of the resident block; `None` until the line is first filled.
    pub tag: Option<u64>,
    /// Whether the line holds a block.
    pub valid: bool,
}

/// Direct-mapped cache with `num_blocks` lines.
#[derive(Debug, Clone)]
pub struct DirectMappedCache {
    geometry: CacheGeometry,
    /// Filled lines by index.
    lines: HashMap<u64, CacheLine>,
}

impl DirectMappedCache {
    /// Creates a cold cache; every line starts invalid.
    pub fn new(geometry: CacheGeometry) -> Self {
        Self {
            geometry,
            lines: HashMap::new(),
        }
    }

    /// The line at `index`. Unfilled or out-of-range indices read as invalid.
    pub fn line(&self, index: u64) -> CacheLine {
        self.lines.get(&index).copied().unwrap_or_default()
    }

    /// Valid lines as `(index, line)`, in index order.
    pub fn valid_lines(&self) -> Vec<(u64, CacheLine)> {
        let mut lines: Vec<(u64, CacheLine)> = self
            .lines
            .iter()
            .filter(|(_, line)| line.valid)
            .map(|(&index, &line)| (index, line))
            .collect();
        lines.sort_unstable_by_key(|&(index, _)| index);
        lines
    }
}

impl CacheModel for DirectMappedCache {
    fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    fn access(&mut self, address: u64) -> TraceRow {
        let decoded = decode(address, self.geometry.offset_bits, self.geometry.index_bits);
        let line = self.lines.entry(decoded.index).or_default();

        let hit = line.valid && line.tag == Some(decoded.tag);
        if !hit {
            if let (true, Some(old)) = (line.valid, line.tag) {
                trace!(index = decoded.index, old, new = decoded.tag, "direct-mapped replace");
            }
            *line = CacheLine {
                tag: Some(decoded.tag),
                valid: true,
            };
        }

        TraceRow::new(address, decoded, true, hit)
    }
}

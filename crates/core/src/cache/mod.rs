//! Cache Placement Models.
//!
//! This module implements the three cache organizations replayed by the simulator.
//! Each model decodes an address with its own field widths, decides hit or miss, and
//! updates its residency. No data is stored and no timing is modeled.
//!
//! - `DirectMappedCache`: one line per index, replaced unconditionally on a miss.
//! - `FullyAssociativeCache`: one LRU pool holding every block.
//! - `SetAssociativeCache`: independent LRU pools selected by the index field.

/// Direct-mapped cache.
pub mod direct;

/// Fully-associative cache.
pub mod fully;

/// Recency-ordered resident set shared by the associative models.
pub mod resident;

/// Set-associative cache.
pub mod set_assoc;

pub use direct::DirectMappedCache;
pub use fully::FullyAssociativeCache;
pub use resident::ResidentSet;
pub use set_assoc::SetAssociativeCache;

pub use crate::config::CacheKind;

use crate::common::SimResult;
use crate::config::{CacheGeometry, SimConfig};
use crate::report::TraceRow;

/// Interface shared by the cache models.
pub trait CacheModel: std::fmt::Debug + Send + Sync {
    /// Geometry the model was built with.
    fn geometry(&self) -> &CacheGeometry;

    /// Resolves one address, updating residency on a miss or recency on a hit.
    ///
    /// # Arguments
    ///
    /// * `address` - The address to resolve, taken as-is.
    ///
    /// # Returns
    ///
    /// The decoded fields and hit/miss outcome.
    fn access(&mut self, address: u64) -> TraceRow;

    /// Organization of the model.
    fn kind(&self) -> CacheKind {
        self.geometry().kind
    }
}

/// Builds a cold cache of the given organization.
///
/// # Errors
///
/// Propagates geometry errors from [`SimConfig::geometry`].
pub fn build(config: &SimConfig, kind: CacheKind) -> SimResult<Box<dyn CacheModel>> {
    let geometry = config.geometry(kind)?;
    let model: Box<dyn CacheModel> = match kind {
        CacheKind::DirectMapped => Box::new(DirectMappedCache::new(geometry)),
        CacheKind::FullyAssociative => Box::new(FullyAssociativeCache::new(geometry)),
        CacheKind::SetAssociative => Box::new(SetAssociativeCache::new(geometry)),
    };
    Ok(model)
}

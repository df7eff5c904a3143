//! Recency-Ordered Resident Set (LRU).
//!
//! Holds the tags currently resident in one fully-associative pool or one set of a
//! set-associative cache. When the set is full, inserting a new tag evicts the least
//! recently used one.
//!
//! Each touch stamps the tag with a fresh clock value and appends `(stamp, tag)` to a
//! recency queue. Entries whose stamp no longer matches the tag's current stamp are
//! stale and skipped when looking for a victim. The queue is compacted once stale
//! entries outnumber live ones.
//!
//! # Performance
//!
//! - `contains()`: O(1)
//! - `promote()`: O(1) amortized
//! - `insert()`: O(1) amortized
//! - **Space:** O(resident tags). Nothing is reserved from `capacity`.

use std::collections::{HashMap, VecDeque};

/// Queue entries tolerated beyond twice the capacity before compaction.
const COMPACT_SLACK: usize = 16;

/// A bounded set of tags ordered by recency of use.
#[derive(Debug, Clone)]
pub struct ResidentSet {
    capacity: usize,
    /// Current stamp of each resident tag.
    stamps: HashMap<u64, u64>,
    /// `(stamp, tag)` oldest first; may contain stale entries.
    order: VecDeque<(u64, u64)>,
    clock: u64,
}

impl ResidentSet {
    /// Creates an empty set holding at most `capacity` tags.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            stamps: HashMap::new(),
            order: VecDeque::new(),
            clock: 0,
        }
    }

    /// Maximum number of resident tags.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of resident tags.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    /// Returns `true` when no tag is resident.
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// Returns `true` when `tag` is resident.
    pub fn contains(&self, tag: u64) -> bool {
        self.stamps.contains_key(&tag)
    }

    /// Marks `tag` most recently used if it is resident.
    ///
    /// Returns `true` if the tag was resident.
    pub fn promote(&mut self, tag: u64) -> bool {
        if !self.contains(tag) {
            return false;
        }
        self.touch(tag);
        true
    }

    /// Inserts `tag` as most recently used, evicting the least recently used tag first
    /// when the set is full.
    ///
    /// Returns the evicted tag, if any. Inserting a resident tag only promotes it.
    pub fn insert(&mut self, tag: u64) -> Option<u64> {
        if self.promote(tag) {
            return None;
        }
        if self.capacity == 0 {
            return Some(tag);
        }
        let victim = if self.len() >= self.capacity {
            self.evict_lru()
        } else {
            None
        };
        self.touch(tag);
        victim
    }

    /// The least recently used resident tag.
    pub fn lru(&self) -> Option<u64> {
        self.order
            .iter()
            .find(|&&(stamp, tag)| self.is_live(stamp, tag))
            .map(|&(_, tag)| tag)
    }

    /// Resident tags from most to least recently used.
    pub fn tags_by_recency(&self) -> Vec<u64> {
        self.order
            .iter()
            .rev()
            .filter(|&&(stamp, tag)| self.is_live(stamp, tag))
            .map(|&(_, tag)| tag)
            .collect()
    }

    fn is_live(&self, stamp: u64, tag: u64) -> bool {
        self.stamps.get(&tag) == Some(&stamp)
    }

    fn touch(&mut self, tag: u64) {
        self.clock += 1;
        let _ = self.stamps.insert(tag, self.clock);
        self.order.push_back((self.clock, tag));
        let limit = self.capacity.saturating_mul(2).saturating_add(COMPACT_SLACK);
        if self.order.len() > limit {
            self.compact();
        }
    }

    fn evict_lru(&mut self) -> Option<u64> {
        while let Some((stamp, tag)) = self.order.pop_front() {
            if self.is_live(stamp, tag) {
                let _ = self.stamps.remove(&tag);
                return Some(tag);
            }
        }
        None
    }

    fn compact(&mut self) {
        let stamps = &self.stamps;
        self.order.retain(|(stamp, tag)| stamps.get(tag) == Some(stamp));
    }
}

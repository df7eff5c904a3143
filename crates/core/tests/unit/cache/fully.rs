//! Fully-Associative Cache Unit Tests.
//!
//! With the two-block fixture (8-byte cache, 4-byte blocks) the pool holds 2 tags and
//! tag = addr >> 2.

use cachesim_core::cache::{CacheKind, CacheModel, FullyAssociativeCache};
use pretty_assertions::assert_eq;

use crate::common::{Hit, Miss, outcomes, reference_config, two_block_config};

fn cache() -> FullyAssociativeCache {
    let geometry = two_block_config()
        .geometry(CacheKind::FullyAssociative)
        .expect("valid geometry");
    FullyAssociativeCache::new(geometry)
}

#[test]
fn geometry_is_a_single_set() {
    let cache = cache();
    let g = cache.geometry();
    assert_eq!(g.num_sets, 1);
    assert_eq!(g.ways, 2);
    assert_eq!(g.index_bits, 0);
    assert_eq!(g.tag_bits, 30);
    assert_eq!(cache.resident().capacity(), 2);
    assert!(cache.resident().is_empty());
}

#[test]
fn third_distinct_tag_evicts_the_first() {
    let mut cache = cache();
    assert_eq!(outcomes(&mut cache, &[0, 4, 8, 0]), vec![Miss, Miss, Miss, Miss]);
}

#[test]
fn second_tag_survives_the_eviction() {
    let mut cache = cache();
    assert_eq!(outcomes(&mut cache, &[0, 4, 8, 4]), vec![Miss, Miss, Miss, Hit]);
}

#[test]
fn hit_promotes_to_most_recent() {
    let mut cache = cache();
    // Re-touching 0 makes 4 the LRU victim when 8 arrives.
    assert_eq!(
        outcomes(&mut cache, &[0, 4, 0, 8, 0, 4]),
        vec![Miss, Miss, Hit, Miss, Hit, Miss]
    );
}

#[test]
fn recency_order_is_tracked() {
    let mut cache = cache();
    let _ = outcomes(&mut cache, &[0, 4, 0]);
    assert_eq!(cache.resident().tags_by_recency(), vec![0, 1]);
    assert_eq!(cache.resident().lru(), Some(1));
}

#[test]
fn index_is_reported_as_placeholder() {
    let mut cache = cache();
    let row = cache.access(13);
    assert_eq!(row.index, None);
    assert_eq!(row.index_bin, "-");
    assert_eq!(row.tag_bin, "11");
    assert_eq!(row.offset_bin, "1");
}

#[test]
fn capacity_comes_from_block_count_not_ways() {
    // blocks_or_ways = 2 in the reference config, but the pool holds all 4 blocks.
    let geometry = reference_config()
        .geometry(CacheKind::FullyAssociative)
        .expect("valid geometry");
    let mut cache = FullyAssociativeCache::new(geometry);
    assert_eq!(
        outcomes(&mut cache, &[0, 8, 16, 24, 0]),
        vec![Miss, Miss, Miss, Miss, Hit]
    );
}

//! Resident Set (LRU) Tests.
//!
//! Exercises membership, promotion and eviction in isolation, then checks the set
//! against a straightforward vector model over random operation sequences.

use cachesim_core::cache::ResidentSet;
use proptest::prelude::*;

#[test]
fn starts_empty() {
    let set = ResidentSet::new(4);
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.capacity(), 4);
    assert_eq!(set.lru(), None);
}

#[test]
fn fills_without_evicting() {
    let mut set = ResidentSet::new(3);
    assert_eq!(set.insert(10), None);
    assert_eq!(set.insert(20), None);
    assert_eq!(set.insert(30), None);
    assert_eq!(set.len(), 3);
    assert_eq!(set.tags_by_recency(), vec![30, 20, 10]);
}

#[test]
fn evicts_least_recently_used_when_full() {
    let mut set = ResidentSet::new(2);
    let _ = set.insert(1);
    let _ = set.insert(2);
    assert_eq!(set.insert(3), Some(1));
    assert!(!set.contains(1));
    assert!(set.contains(2));
    assert!(set.contains(3));
}

#[test]
fn promote_changes_the_victim() {
    let mut set = ResidentSet::new(2);
    let _ = set.insert(1);
    let _ = set.insert(2);
    assert!(set.promote(1));
    assert_eq!(set.lru(), Some(2));
    assert_eq!(set.insert(3), Some(2));
}

#[test]
fn promote_of_absent_tag_is_a_no_op() {
    let mut set = ResidentSet::new(2);
    let _ = set.insert(1);
    assert!(!set.promote(7));
    assert_eq!(set.tags_by_recency(), vec![1]);
}

#[test]
fn unbounded_capacity_holds_only_inserted_tags() {
    let mut set = ResidentSet::new(usize::MAX);
    for tag in 0..100 {
        assert_eq!(set.insert(tag), None);
    }
    for tag in 0..100 {
        assert!(set.promote(tag));
    }
    assert_eq!(set.len(), 100);
    assert_eq!(set.lru(), Some(0));
    assert_eq!(set.capacity(), usize::MAX);
}

#[test]
fn inserting_a_resident_tag_only_promotes() {
    let mut set = ResidentSet::new(2);
    let _ = set.insert(1);
    let _ = set.insert(2);
    assert_eq!(set.insert(1), None);
    assert_eq!(set.len(), 2);
    assert_eq!(set.tags_by_recency(), vec![1, 2]);
}

#[test]
fn zero_capacity_holds_nothing() {
    let mut set = ResidentSet::new(0);
    assert_eq!(set.insert(5), Some(5));
    assert!(set.is_empty());
}

#[test]
fn many_hits_keep_order_exact() {
    let mut set = ResidentSet::new(2);
    let _ = set.insert(1);
    let _ = set.insert(2);
    for _ in 0..1000 {
        assert!(set.promote(1));
        assert!(set.promote(2));
    }
    assert_eq!(set.tags_by_recency(), vec![2, 1]);
    assert_eq!(set.insert(3), Some(1));
    assert_eq!(set.tags_by_recency(), vec![3, 2]);
}

/// Reference LRU: index 0 is most recent.
fn model_access(model: &mut Vec<u64>, capacity: usize, tag: u64) -> (bool, Option<u64>) {
    if let Some(pos) = model.iter().position(|&t| t == tag) {
        let _ = model.remove(pos);
        model.insert(0, tag);
        return (true, None);
    }
    let victim = if model.len() >= capacity { model.pop() } else { None };
    model.insert(0, tag);
    (false, victim)
}

proptest! {
    #[test]
    fn matches_reference_lru(
        capacity in 1usize..6,
        tags in proptest::collection::vec(0u64..10, 0..200),
    ) {
        let mut set = ResidentSet::new(capacity);
        let mut model = Vec::new();
        for tag in tags {
            let hit = set.promote(tag);
            let victim = if hit { None } else { set.insert(tag) };
            prop_assert_eq!((hit, victim), model_access(&mut model, capacity, tag));
            prop_assert_eq!(set.tags_by_recency(), model.clone());
        }
    }
}

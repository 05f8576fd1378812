#![cfg(feature = "collection")]
//! Property-based tests for the traversal and reduction primitives.
//!
//! This module verifies that:
//!
//! - **Visit count**: `each` calls its iterator once per element
//! - **Order**: sequence traversal is by ascending index
//! - **Seedless reduction**: `reduce_first` equals `reduce` seeded with the
//!   first element over the rest

use proptest::prelude::*;
use std::collections::BTreeMap;
use underbar::collection::{Collection, Each, each, reduce, reduce_first};

// =============================================================================
// Visit Count
// =============================================================================

proptest! {
    /// Each visits every sequence element exactly once
    #[test]
    fn prop_each_visit_count_sequence(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut calls = 0_usize;
        each(&values, |_, _, _| calls += 1);
        prop_assert_eq!(calls, values.len());
    }
}

proptest! {
    /// Each visits every mapping entry exactly once
    #[test]
    fn prop_each_visit_count_mapping(entries in prop::collection::btree_map("[a-z]{1,6}", any::<u8>(), 0..32)) {
        let mut calls = 0_usize;
        each(&entries, |_, _, _| calls += 1);
        prop_assert_eq!(calls, entries.len());

        let collection = Collection::from(entries.clone());
        prop_assert_eq!(collection.length(), entries.len());
    }
}

// =============================================================================
// Order
// =============================================================================

proptest! {
    /// Sequence keys arrive as 0, 1, 2, ...
    #[test]
    fn prop_each_sequence_keys_ascend(values in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut keys = Vec::new();
        each(&values, |_, key, _| keys.push(key.as_index()));
        let expected: Vec<Option<usize>> = (0..values.len()).map(Some).collect();
        prop_assert_eq!(keys, expected);
    }
}

proptest! {
    /// Mapping entries arrive in ascending key order
    #[test]
    fn prop_each_mapping_keys_ascend(entries in prop::collection::btree_map("[a-z]{1,6}", any::<u8>(), 0..32)) {
        let mut names = Vec::new();
        each(&entries, |_, key, _| names.push(key.to_owned_name()));
        let expected: Vec<String> = entries.keys().cloned().collect::<Vec<_>>();
        prop_assert_eq!(names, expected);
    }
}

// =============================================================================
// Seedless Reduction
// =============================================================================

proptest! {
    /// reduce_first(c, f) == reduce(c[1..], f, c[0])
    #[test]
    fn prop_reduce_first_matches_seeded_reduce(values in prop::collection::vec(-1000_i64..1000, 1..64)) {
        let seedless = reduce_first(&values, |total, value| total.wrapping_mul(3).wrapping_sub(*value));
        let seeded = reduce(&values[1..], |total, value| total.wrapping_mul(3).wrapping_sub(*value), values[0]);
        prop_assert_eq!(seedless, Some(seeded));
    }
}

proptest! {
    /// Summing with reduce matches the iterator sum
    #[test]
    fn prop_reduce_sum(values in prop::collection::vec(-1000_i64..1000, 0..64)) {
        let total = reduce(&values, |total, value| total + value, 0);
        prop_assert_eq!(total, values.iter().sum::<i64>());
    }
}

proptest! {
    /// Reducing a mapping sees the same values as its BTreeMap iteration
    #[test]
    fn prop_reduce_mapping_values(entries in prop::collection::btree_map("[a-z]{1,4}", 0_u32..100, 0..16)) {
        let collected = reduce(&entries, |mut seen: Vec<u32>, value| {
            seen.push(*value);
            seen
        }, Vec::new());
        let expected: Vec<u32> = entries.values().copied().collect();
        prop_assert_eq!(collected, expected);
    }
}

#[test]
fn reduce_first_on_empty_mapping_is_none() {
    let empty: BTreeMap<String, i32> = BTreeMap::new();
    assert_eq!(reduce_first(&empty, |total, value| total + value), None);
}

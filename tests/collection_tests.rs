#![cfg(feature = "collection")]
//! Unit tests for the traversal and reduction primitives.
//!
//! Tests cover:
//! - `each` over sequences, mappings and the `Collection` sum type
//! - `reduce` with a seed
//! - `reduce_first` without a seed
//! - `Collection` construction and lookup
//! - Truthiness

use rstest::rstest;
use std::collections::{BTreeMap, HashMap};
use underbar::collection::{Collection, Each, Key, Truthy, each, reduce, reduce_first};

// =============================================================================
// each
// =============================================================================

#[rstest]
fn each_visits_sequence_in_ascending_index_order() {
    let mut visited = Vec::new();
    each(&vec!['a', 'b', 'c'], |value, key, _| visited.push((key.as_index(), *value)));

    assert_eq!(
        visited,
        vec![
            (Some(0), 'a'),
            (Some(1), 'b'),
            (Some(2), 'c'),
        ]
    );
}

#[rstest]
fn each_visits_mapping_with_names() {
    let mapping: BTreeMap<String, i32> = [("two".to_string(), 2), ("one".to_string(), 1)]
        .into_iter()
        .collect();

    let mut visited = Vec::new();
    each(&mapping, |value, key, _| {
        visited.push((key.to_owned_name(), *value));
    });

    assert_eq!(
        visited,
        vec![("one".to_string(), 1), ("two".to_string(), 2)]
    );
}

#[rstest]
fn each_visits_every_hash_map_entry_once() {
    let mapping: HashMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();

    let mut names = Vec::new();
    each(&mapping, |_, key, _| names.push(key.to_owned_name()));
    names.sort();

    assert_eq!(names, vec!["a", "b", "c"]);
}

#[rstest]
fn each_visits_integer_keyed_map_as_indices() {
    let sparse: BTreeMap<u8, &str> = [(9, "nine"), (1, "one"), (4, "four")].into_iter().collect();

    let mut visited = Vec::new();
    each(&sparse, |value, key, _| visited.push((key.as_index(), *value)));

    assert_eq!(
        visited,
        vec![(Some(1), "one"), (Some(4), "four"), (Some(9), "nine")]
    );
    assert_eq!(reduce(&sparse, |total, value| total + value.len(), 0), 11);
}

#[rstest]
fn each_visits_every_integer_keyed_hash_map_entry_once() {
    let mapping: HashMap<usize, char> = [(0, 'x'), (7, 'y')].into_iter().collect();

    let mut indices = Vec::new();
    each(&mapping, |_, key, _| indices.push(key.as_index()));
    indices.sort();

    assert_eq!(indices, vec![Some(0), Some(7)]);
}

#[rstest]
fn each_passes_the_collection_itself() {
    let values = [10, 20, 30];
    each(&values, |value, key, collection| {
        let index = key.as_index().unwrap();
        assert_eq!(collection[index], *value);
    });
}

#[rstest]
#[case::empty_vec(Vec::new(), 0)]
#[case::single(vec![7], 1)]
#[case::several(vec![1, 2, 3, 4], 4)]
fn each_calls_once_per_element(#[case] values: Vec<i32>, #[case] expected: usize) {
    let mut calls = 0;
    each(&values, |_, _, _| calls += 1);
    assert_eq!(calls, expected);
    assert_eq!(values.length(), expected);
}

#[rstest]
fn each_on_empty_mapping_never_calls() {
    let mapping: Collection<i32> = Collection::mapping(Vec::<(String, i32)>::new());
    let mut called = false;
    each(&mapping, |_, _, _| called = true);
    assert!(!called);
    assert!(mapping.is_empty());
}

// =============================================================================
// reduce
// =============================================================================

#[rstest]
fn reduce_sums_with_seed() {
    assert_eq!(reduce(&[1, 2, 3], |total, value| total + value, 0), 6);
}

#[rstest]
fn reduce_on_empty_returns_seed() {
    let empty: [i32; 0] = [];
    assert_eq!(reduce(&empty, |total, value| total + value, 42), 42);
}

#[rstest]
fn reduce_can_change_accumulator_type() {
    let words = ["underscore", "is", "fun"];
    let joined = reduce(
        &words,
        |mut sentence: String, word| {
            if !sentence.is_empty() {
                sentence.push(' ');
            }
            sentence.push_str(word);
            sentence
        },
        String::new(),
    );
    assert_eq!(joined, "underscore is fun");
}

#[rstest]
fn reduce_over_mapping_follows_key_order() {
    let mapping = Collection::mapping([("b", "2"), ("a", "1"), ("c", "3")]);
    let concatenated = reduce(&mapping, |text, value| text + *value, String::new());
    assert_eq!(concatenated, "123");
}

// =============================================================================
// reduce_first
// =============================================================================

#[rstest]
fn reduce_first_uses_first_element_as_seed() {
    assert_eq!(reduce_first(&[1, 2, 3], |total, value| total + value), Some(6));
}

#[rstest]
fn reduce_first_does_not_fold_the_first_element_twice() {
    assert_eq!(reduce_first(&[5, 1], |total, value| total * 10 + value), Some(51));
}

#[rstest]
fn reduce_first_on_single_element_never_calls() {
    let mut calls = 0;
    let result = reduce_first(&[9], |total, value| {
        calls += 1;
        total + value
    });
    assert_eq!(result, Some(9));
    assert_eq!(calls, 0);
}

#[rstest]
fn reduce_first_on_empty_is_none() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(reduce_first(&empty, |total, value| total + value), None);
}

// =============================================================================
// Collection
// =============================================================================

#[rstest]
fn collection_get_by_index_and_name() {
    let sequence = Collection::sequence(["x", "y"]);
    assert_eq!(sequence.get(Key::Index(1)), Some(&"y"));
    assert_eq!(sequence.get(Key::Name("0")), Some(&"x"));
    assert_eq!(sequence.get(Key::Index(2)), None);

    let mapping = Collection::mapping([("0", "zero"), ("name", "moe")]);
    assert_eq!(mapping.get(Key::Name("name")), Some(&"moe"));
    assert_eq!(mapping.get(Key::Index(0)), Some(&"zero"));
}

#[rstest]
#[case::plus_sign("+1")]
#[case::leading_zero("01")]
#[case::double_zero("00")]
#[case::signed_zero("+0")]
fn collection_sequence_ignores_non_canonical_index_names(#[case] name: &str) {
    let sequence = Collection::sequence(['a', 'b']);
    assert_eq!(sequence.get(Key::Name(name)), None);
}

#[rstest]
fn collection_default_is_empty_sequence() {
    let collection: Collection<u8> = Collection::default();
    assert!(collection.is_sequence());
    assert_eq!(collection.length(), 0);
}

#[rstest]
fn collection_mapping_keeps_last_repeated_key() {
    let mapping = Collection::mapping([("a", 1), ("a", 2)]);
    assert_eq!(mapping.length(), 1);
    assert_eq!(mapping.get(Key::Name("a")), Some(&2));
}

// =============================================================================
// Truthy
// =============================================================================

#[rstest]
#[case::zero(0_i64, false)]
#[case::positive(3_i64, true)]
#[case::negative(-1_i64, true)]
fn integers_are_truthy_unless_zero(#[case] value: i64, #[case] expected: bool) {
    assert_eq!(value.is_truthy(), expected);
}

#[rstest]
fn other_truthiness() {
    assert!(!"".is_truthy());
    assert!("a".is_truthy());
    assert!(!f64::NAN.is_truthy());
    assert!(!0.0_f32.is_truthy());
    assert!(Some(0).is_truthy());
    assert!(!None::<i32>.is_truthy());
    assert!(true.is_truthy());
}

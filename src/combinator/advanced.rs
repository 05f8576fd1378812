//! Sorting, zipping, flattening and set-like operations on sequences.
//!
//! Like the rest of the combinators these are written only in terms of
//! [`each`], [`reduce`] and the derived combinators.

use crate::collection::{Each, Record, reduce};

use super::{Nested, contains, every, filter, map, reject, some, uniq};

/// Returns the elements sorted ascending by the key `criterion` computes.
///
/// The sort is stable: elements with equal keys keep their traversal order.
/// Each element is inserted into an already sorted accumulator, so the cost
/// is quadratic in the worst case. `criterion` runs once per element.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::sort_by;
///
/// let words = ["banana", "kiwi", "apple", "fig"];
/// assert_eq!(sort_by(&words, |word| word.len()), vec!["fig", "kiwi", "apple", "banana"]);
/// ```
pub fn sort_by<C, K, F>(collection: &C, mut criterion: F) -> Vec<C::Item>
where
    C: Each + ?Sized,
    C::Item: Clone,
    K: Ord,
    F: FnMut(&C::Item) -> K,
{
    let ranked = reduce(
        collection,
        |mut ranked: Vec<(K, C::Item)>, value| {
            let rank = criterion(value);
            let position = ranked.partition_point(|(existing, _)| *existing <= rank);
            ranked.insert(position, (rank, value.clone()));
            ranked
        },
        Vec::new(),
    );
    ranked.into_iter().map(|(_, value)| value).collect()
}

/// Returns the elements sorted ascending by the property called `name`.
///
/// Elements lacking the property are placed after all others, in traversal
/// order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Collection;
/// use underbar::combinator::sort_by_property;
///
/// let people = vec![
///     Collection::mapping([("name", "moe")]),
///     Collection::mapping([("name", "curly")]),
///     Collection::mapping([("nickname", "larry")]),
/// ];
///
/// let sorted = sort_by_property(&people, "name");
/// assert_eq!(sorted[0], Collection::mapping([("name", "curly")]));
/// assert_eq!(sorted[2], Collection::mapping([("nickname", "larry")]));
/// ```
pub fn sort_by_property<C>(collection: &C, name: &str) -> Vec<C::Item>
where
    C: Each + ?Sized,
    C::Item: Record + Clone,
    <C::Item as Record>::Value: Ord + Clone,
{
    sort_by(collection, |item| {
        let property = item.property(name).cloned();
        (property.is_none(), property)
    })
}

/// Groups the `i`-th elements of every sequence together.
///
/// The result is as long as the longest input. A sequence too short to
/// supply position `i` contributes `None` there.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::zip;
///
/// let letters = ['a', 'b', 'c'];
/// let numbers = ['1', '2'];
/// assert_eq!(
///     zip(&[&letters[..], &numbers[..]]),
///     vec![
///         vec![Some('a'), Some('1')],
///         vec![Some('b'), Some('2')],
///         vec![Some('c'), None],
///     ]
/// );
/// ```
pub fn zip<V: Clone>(sequences: &[&[V]]) -> Vec<Vec<Option<V>>> {
    let longest = reduce(sequences, |longest, sequence| longest.max(sequence.len()), 0_usize);
    let positions: Vec<usize> = (0..longest).collect();
    map(&positions, |position, _, _| {
        map(sequences, |sequence, _, _| sequence.get(*position).cloned())
    })
}

/// Linearizes arbitrarily nested sequences, depth first, left to right.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::{flatten, Nested};
///
/// let nested = vec![
///     Nested::Item(1),
///     Nested::list([Nested::Item(2), Nested::list([Nested::Item(3), Nested::list([])])]),
///     Nested::Item(4),
/// ];
/// assert_eq!(flatten(&nested), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<V: Clone>(nested: &[Nested<V>]) -> Vec<V> {
    reduce(
        nested,
        |mut flat, element| {
            element.flatten_into(&mut flat);
            flat
        },
        Vec::new(),
    )
}

/// Returns the distinct elements of the first sequence that appear in every
/// other sequence, in first-sequence order.
///
/// With no sequences at all the result is empty.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::intersection;
///
/// let shared = intersection(&[&[1, 2, 3, 2][..], &[2, 3, 4][..], &[3, 2][..]]);
/// assert_eq!(shared, vec![2, 3]);
/// ```
pub fn intersection<V>(sequences: &[&[V]]) -> Vec<V>
where
    V: Clone + PartialEq,
{
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };
    let shared = filter(*head, |candidate| {
        every(rest, |other| contains(*other, candidate))
    });
    uniq(&shared)
}

/// Returns the elements of `sequence` that appear in none of `others`.
///
/// Order and duplicates of `sequence` are preserved.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::difference;
///
/// let remaining = difference(&[1, 2, 3, 4, 5, 1], &[&[5, 2, 10][..], &[4][..]]);
/// assert_eq!(remaining, vec![1, 3, 1]);
/// ```
pub fn difference<V>(sequence: &[V], others: &[&[V]]) -> Vec<V>
where
    V: Clone + PartialEq,
{
    reject(sequence, |candidate| {
        some(others, |other| contains(*other, candidate))
    })
}

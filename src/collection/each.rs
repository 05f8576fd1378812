//! The traversal and reduction primitives.
//!
//! [`Each`] is the single extension point of the library: every combinator,
//! merge helper and advanced operation is written against it, and none of
//! them loops over a collection on its own.
//!
//! # Laws
//!
//! ## Visit count
//!
//! ```text
//! count of iterator calls in each(c, iterator) == c.length()
//! ```
//!
//! ## Seedless reduction
//!
//! For an associative `op` with identity `e` and a non-empty `c`:
//!
//! ```text
//! reduce_first(c, op) == Some(reduce(c, op, e))
//! ```

use std::collections::{BTreeMap, HashMap};

use super::{Key, MapKey};

/// A collection whose elements can be visited one at a time.
///
/// Sequences visit their elements in ascending index order. Mappings visit
/// their entries in the map's own iteration order, which is stable for the
/// duration of one traversal.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Each;
///
/// let mut visited = Vec::new();
/// vec!["a", "b"].each(|value, key, _| visited.push((key.as_index(), *value)));
/// assert_eq!(visited, vec![(Some(0), "a"), (Some(1), "b")]);
/// ```
pub trait Each {
    /// The element type handed to callbacks.
    type Item;

    /// Invokes `iterator(value, key, collection)` once for every element.
    fn each<F>(&self, iterator: F)
    where
        F: FnMut(&Self::Item, Key<'_>, &Self);

    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Returns whether the collection has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

impl<V> Each for [V] {
    type Item = V;

    fn each<F>(&self, mut iterator: F)
    where
        F: FnMut(&V, Key<'_>, &Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, Key::Index(index), self);
        }
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<V, const N: usize> Each for [V; N] {
    type Item = V;

    fn each<F>(&self, mut iterator: F)
    where
        F: FnMut(&V, Key<'_>, &Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, Key::Index(index), self);
        }
    }

    #[inline]
    fn length(&self) -> usize {
        N
    }
}

impl<V> Each for Vec<V> {
    type Item = V;

    fn each<F>(&self, mut iterator: F)
    where
        F: FnMut(&V, Key<'_>, &Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, Key::Index(index), self);
        }
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K: MapKey, V> Each for BTreeMap<K, V> {
    type Item = V;

    fn each<F>(&self, mut iterator: F)
    where
        F: FnMut(&V, Key<'_>, &Self),
    {
        for (key, value) in self {
            iterator(value, key.as_key(), self);
        }
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K: MapKey, V, S> Each for HashMap<K, V, S> {
    type Item = V;

    fn each<F>(&self, mut iterator: F)
    where
        F: FnMut(&V, Key<'_>, &Self),
    {
        for (key, value) in self {
            iterator(value, key.as_key(), self);
        }
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

/// Calls `iterator(value, key, collection)` for each element of `collection`.
///
/// Accepts sequences and mappings alike. An empty collection produces no
/// calls.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::each;
///
/// let mut total = 0;
/// each(&[1, 2, 3], |value, _, _| total += value);
/// assert_eq!(total, 6);
/// ```
#[inline]
pub fn each<C, F>(collection: &C, iterator: F)
where
    C: Each + ?Sized,
    F: FnMut(&C::Item, Key<'_>, &C),
{
    collection.each(iterator);
}

/// Reduces a collection to a single value by repeatedly calling
/// `iterator(accumulator, item)`.
///
/// `seed` is passed to the first call; each call's return value becomes the
/// accumulator of the next.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce;
///
/// let sum = reduce(&[1, 2, 3], |total, number| total + number, 0);
/// assert_eq!(sum, 6);
///
/// let empty: [i32; 0] = [];
/// assert_eq!(reduce(&empty, |total, number| total + number, 10), 10);
/// ```
pub fn reduce<C, A, F>(collection: &C, mut iterator: F, seed: A) -> A
where
    C: Each + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    let mut accumulator = Some(seed);
    collection.each(|value, _, _| {
        accumulator = accumulator.take().map(|current| iterator(current, value));
    });
    accumulator.unwrap_or_else(|| unreachable!("accumulator is restored after every step"))
}

/// Reduces a collection without an explicit seed.
///
/// The first element seeds the accumulator and is not folded into itself;
/// folding starts at the second element. Returns `None` for an empty
/// collection.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce_first;
///
/// assert_eq!(reduce_first(&[1, 2, 3], |total, number| total + number), Some(6));
/// assert_eq!(reduce_first(&[5], |total, number| total * number), Some(5));
///
/// let empty: Vec<i32> = Vec::new();
/// assert_eq!(reduce_first(&empty, |total, number| total + number), None);
/// ```
pub fn reduce_first<C, F>(collection: &C, mut iterator: F) -> Option<C::Item>
where
    C: Each + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    reduce(
        collection,
        |accumulator, value| match accumulator {
            None => Some(value.clone()),
            Some(current) => Some(iterator(current, value)),
        },
        None,
    )
}

//! Positional access to sequences.

use crate::collection::each;

/// Returns the first element, if any.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::first;
///
/// assert_eq!(first(&[3, 2, 1]), Some(&3));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<V>(sequence: &[V]) -> Option<&V> {
    sequence.first()
}

/// Returns the first `count` elements, or the whole sequence if it is
/// shorter.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// ```
#[inline]
pub fn first_n<V>(sequence: &[V], count: usize) -> &[V] {
    &sequence[..count.min(sequence.len())]
}

/// Returns the last element, if any.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::last;
///
/// assert_eq!(last(&[3, 2, 1]), Some(&1));
/// ```
#[inline]
pub fn last<V>(sequence: &[V]) -> Option<&V> {
    sequence.last()
}

/// Returns the last `count` elements, or the whole sequence if it is
/// shorter.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// assert!(last_n(&[1, 2, 3], 0).is_empty());
/// ```
#[inline]
pub fn last_n<V>(sequence: &[V], count: usize) -> &[V] {
    &sequence[sequence.len().saturating_sub(count)..]
}

/// Returns the position of the first element equal to `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::index_of;
///
/// assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
/// assert_eq!(index_of(&[10, 20], &99), None);
/// ```
pub fn index_of<V: PartialEq>(sequence: &[V], target: &V) -> Option<usize> {
    let mut position = None;
    each(sequence, |value, key, _| {
        if position.is_none() && value == target {
            position = key.as_index();
        }
    });
    position
}

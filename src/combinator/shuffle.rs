//! Random permutations.

use rand::Rng;

use crate::collection::each;

/// Returns a randomly ordered copy of `sequence` using the thread-local
/// generator.
///
/// The input is left untouched.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::shuffle;
///
/// let original = [1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&original);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, original);
/// ```
pub fn shuffle<V: Clone>(sequence: &[V]) -> Vec<V> {
    shuffle_with(sequence, &mut rand::rng())
}

/// Returns a randomly ordered copy of `sequence` drawing from `random`.
///
/// Implements the inside-out Fisher–Yates shuffle: each visited element
/// lands at a uniformly chosen position among those filled so far, and the
/// element it displaces moves to the end. Every permutation is equally
/// likely.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::combinator::shuffle_with;
///
/// let first = shuffle_with(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<V, R>(sequence: &[V], random: &mut R) -> Vec<V>
where
    V: Clone,
    R: Rng,
{
    let mut shuffled: Vec<V> = Vec::with_capacity(sequence.len());
    each(sequence, |value, _, _| {
        let filled = shuffled.len();
        let target = random.random_range(0..=filled);
        if target == filled {
            shuffled.push(value.clone());
        } else {
            let displaced = std::mem::replace(&mut shuffled[target], value.clone());
            shuffled.push(displaced);
        }
    });
    shuffled
}

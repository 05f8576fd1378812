//! Helpers for merging mappings.
//!
//! - [`extend`]: copy every entry of each source into a target, later
//!   sources winning
//! - [`defaults`]: fill in only the keys the target does not have yet
//!
//! Both mutate their target in place and hand it back, and both read their
//! sources through [`each`](crate::collection::each), so any collection can
//! serve as a source. Sequence sources contribute their indices as decimal
//! keys.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use underbar::object::{defaults, extend};
//!
//! let mut settings: BTreeMap<String, i32> = BTreeMap::new();
//! settings.insert("width".to_string(), 80);
//!
//! let overrides: BTreeMap<String, i32> = [("width".to_string(), 120)].into_iter().collect();
//! let fallbacks: BTreeMap<String, i32> =
//!     [("width".to_string(), 40), ("height".to_string(), 24)].into_iter().collect();
//!
//! extend(&mut settings, &[&overrides]);
//! defaults(&mut settings, &[&fallbacks]);
//!
//! assert_eq!(settings["width"], 120);
//! assert_eq!(settings["height"], 24);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::collection::{Collection, Each, Key, each};

/// Mappings that entries can be written into by key.
pub trait Assign<V> {
    /// Returns whether `key` is present, whatever value it holds.
    fn has_key(&self, key: Key<'_>) -> bool;

    /// Sets `key` to `value`, replacing any previous value.
    fn assign(&mut self, key: Key<'_>, value: V);
}

impl<V> Assign<V> for BTreeMap<String, V> {
    fn has_key(&self, key: Key<'_>) -> bool {
        match key {
            Key::Name(name) => self.contains_key(name),
            Key::Index(_) => self.contains_key(&key.to_owned_name()),
        }
    }

    fn assign(&mut self, key: Key<'_>, value: V) {
        self.insert(key.to_owned_name(), value);
    }
}

impl<V, S: BuildHasher> Assign<V> for HashMap<String, V, S> {
    fn has_key(&self, key: Key<'_>) -> bool {
        match key {
            Key::Name(name) => self.contains_key(name),
            Key::Index(_) => self.contains_key(&key.to_owned_name()),
        }
    }

    fn assign(&mut self, key: Key<'_>, value: V) {
        self.insert(key.to_owned_name(), value);
    }
}

/// Writes into the mapping variant directly.
///
/// A sequence target only accepts index keys that overwrite an existing
/// element or append right after the last one; any other key is ignored,
/// since a sequence cannot hold holes or names.
impl<V> Assign<V> for Collection<V> {
    fn has_key(&self, key: Key<'_>) -> bool {
        self.get(key).is_some()
    }

    fn assign(&mut self, key: Key<'_>, value: V) {
        match self {
            Self::Mapping(entries) => {
                entries.insert(key.to_owned_name(), value);
            }
            Self::Sequence(values) => {
                match key.position() {
                    Some(index) if index < values.len() => values[index] = value,
                    Some(index) if index == values.len() => values.push(value),
                    _ => tracing::trace!(%key, "ignoring key outside sequence bounds"),
                }
            }
        }
    }
}

/// Copies every entry of each source into `target`.
///
/// Sources are applied in order, so a key present in several sources ends
/// up with the value of the last one, and pre-existing keys of `target` are
/// overwritten. Returns `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Collection;
/// use underbar::object::extend;
///
/// let mut target = Collection::mapping([("a", 1)]);
/// let first = Collection::mapping([("b", 2)]);
/// let second = Collection::mapping([("a", 3)]);
///
/// extend(&mut target, &[&first, &second]);
/// assert_eq!(target, Collection::mapping([("a", 3), ("b", 2)]));
/// ```
pub fn extend<'target, T, S>(target: &'target mut T, sources: &[&S]) -> &'target mut T
where
    T: Assign<S::Item> + ?Sized,
    S: Each + ?Sized,
    S::Item: Clone,
{
    each(sources, |source, _, _| {
        each(*source, |value, key, _| target.assign(key, value.clone()));
    });
    target
}

/// Copies entries of each source into `target` only where `target` has no
/// such key yet.
///
/// Presence is what counts: a key that is present with a `None`, zero or
/// empty value is left alone. Among the sources, the first one to supply a
/// missing key wins. Returns `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Collection;
/// use underbar::object::defaults;
///
/// let mut target = Collection::mapping([("a", 1)]);
/// let fallback = Collection::mapping([("a", 9), ("b", 2)]);
///
/// defaults(&mut target, &[&fallback]);
/// assert_eq!(target, Collection::mapping([("a", 1), ("b", 2)]));
/// ```
pub fn defaults<'target, T, S>(target: &'target mut T, sources: &[&S]) -> &'target mut T
where
    T: Assign<S::Item> + ?Sized,
    S: Each + ?Sized,
    S::Item: Clone,
{
    each(sources, |source, _, _| {
        each(*source, |value, key, _| {
            if !target.has_key(key) {
                target.assign(key, value.clone());
            }
        });
    });
    target
}

//! The tagged collection type.
//!
//! [`Collection`] is the sum of the two container shapes the library works
//! with: an ordered sequence and a string-keyed mapping. It implements
//! [`Each`] by delegating to the variant it holds, so combinators never need
//! to know which shape they were given.

use std::collections::BTreeMap;

use super::{Each, Key};

/// Either an ordered sequence or a key-value mapping.
///
/// Mapping entries are kept in a [`BTreeMap`], so traversal visits them in
/// ascending key order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Collection, Each};
///
/// let sequence = Collection::from(vec![1, 2, 3]);
/// let mapping = Collection::mapping([("one", 1), ("two", 2)]);
///
/// assert_eq!(sequence.length(), 3);
/// assert!(mapping.is_mapping());
///
/// let mut total = 0;
/// mapping.each(|value, _, _| total += value);
/// assert_eq!(total, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Collection<V> {
    /// Position-indexed elements.
    Sequence(Vec<V>),
    /// Named entries.
    Mapping(BTreeMap<String, V>),
}

impl<V> Collection<V> {
    /// Builds a sequence from the given values.
    pub fn sequence<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::Sequence(values.into_iter().collect())
    }

    /// Builds a mapping from the given entries.
    ///
    /// A repeated key keeps the last value given for it.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Returns whether this is a [`Collection::Sequence`].
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns whether this is a [`Collection::Mapping`].
    #[inline]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Looks up an element by key.
    ///
    /// A sequence answers [`Key::Index`] and names in the canonical decimal
    /// form of an index (see [`Key::position`]); a mapping answers
    /// [`Key::Name`] and indices rendered as names.
    pub fn get(&self, key: Key<'_>) -> Option<&V> {
        match (self, key) {
            (Self::Sequence(values), _) => key.position().and_then(|index| values.get(index)),
            (Self::Mapping(entries), Key::Name(name)) => entries.get(name),
            (Self::Mapping(entries), Key::Index(index)) => entries.get(&index.to_string()),
        }
    }
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self::Sequence(Vec::new())
    }
}

impl<V> From<Vec<V>> for Collection<V> {
    fn from(values: Vec<V>) -> Self {
        Self::Sequence(values)
    }
}

impl<V> From<BTreeMap<String, V>> for Collection<V> {
    fn from(entries: BTreeMap<String, V>) -> Self {
        Self::Mapping(entries)
    }
}

impl<V> Each for Collection<V> {
    type Item = V;

    fn each<F>(&self, mut iterator: F)
    where
        F: FnMut(&V, Key<'_>, &Self),
    {
        match self {
            Self::Sequence(values) => {
                for (index, value) in values.iter().enumerate() {
                    iterator(value, Key::Index(index), self);
                }
            }
            Self::Mapping(entries) => {
                for (key, value) in entries {
                    iterator(value, Key::Name(key), self);
                }
            }
        }
    }

    fn length(&self) -> usize {
        match self {
            Self::Sequence(values) => values.len(),
            Self::Mapping(entries) => entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_is_empty_sequence() {
        let collection: Collection<i32> = Collection::default();
        assert!(collection.is_sequence());
        assert!(collection.is_empty());
    }

    #[rstest]
    fn mapping_keeps_last_duplicate() {
        let collection = Collection::mapping([("a", 1), ("a", 2)]);
        assert_eq!(collection.length(), 1);
        assert_eq!(collection.get(Key::Name("a")), Some(&2));
    }

    #[rstest]
    #[case(Key::Index(1), Some(&"b"))]
    #[case(Key::Name("0"), Some(&"a"))]
    #[case(Key::Name("x"), None)]
    #[case(Key::Index(9), None)]
    fn sequence_get(#[case] key: Key<'_>, #[case] expected: Option<&&str>) {
        let collection = Collection::sequence(["a", "b"]);
        assert_eq!(collection.get(key), expected);
    }

    #[rstest]
    fn mapping_each_reports_names() {
        let collection = Collection::mapping([("b", 2), ("a", 1)]);
        let mut names = Vec::new();
        collection.each(|_, key, _| names.push(key.to_owned_name()));
        assert_eq!(names, vec!["a", "b"]);
    }
}

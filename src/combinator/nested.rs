//! Arbitrarily nested sequences.

use crate::collection::each;

/// A value or a sequence of further nested values.
///
/// With the `serde` feature, a `Nested` reads and writes as a bare value or
/// a bare array, so JSON like `[1, [2, [3]]]` maps onto it directly.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::Nested;
///
/// let nested = Nested::list([Nested::Item(1), Nested::list([Nested::Item(2)])]);
/// assert_eq!(nested.depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<V> {
    /// A single value.
    Item(V),
    /// A sequence of nested values.
    List(Vec<Nested<V>>),
}

impl<V> Nested<V> {
    /// Builds a [`Nested::List`] from the given children.
    pub fn list<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::List(children.into_iter().collect())
    }

    /// Returns how many list levels the deepest item sits under.
    ///
    /// A bare item has depth 0, an empty list depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Item(_) => 0,
            Self::List(children) => {
                let mut deepest = 0_usize;
                each(children, |child, _, _| deepest = deepest.max(child.depth()));
                deepest + 1
            }
        }
    }

    pub(crate) fn flatten_into(&self, flat: &mut Vec<V>)
    where
        V: Clone,
    {
        match self {
            Self::Item(value) => flat.push(value.clone()),
            Self::List(children) => each(children, |child, _, _| child.flatten_into(flat)),
        }
    }
}

impl<V> From<V> for Nested<V> {
    fn from(value: V) -> Self {
        Self::Item(value)
    }
}

//! Keys passed to traversal callbacks.

use std::fmt;

/// The position of an element inside a collection.
///
/// Sequences report their elements by 0-based [`Key::Index`], mappings by
/// [`Key::Name`]. The name borrows from the mapping being traversed, so a
/// key is only valid for the duration of the callback that receives it.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Key;
///
/// assert_eq!(Key::Index(3).as_index(), Some(3));
/// assert_eq!(Key::Name("age").as_name(), Some("age"));
/// assert_eq!(Key::Index(3).to_owned_name(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key<'a> {
    /// Position of an element in an ordered sequence.
    Index(usize),
    /// Key of an entry in a mapping.
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// Returns the index if this key addresses a sequence element.
    #[inline]
    pub const fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Returns the name if this key addresses a mapping entry.
    #[inline]
    pub const fn as_name(&self) -> Option<&'a str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(*name),
        }
    }

    /// Returns the sequence position this key addresses.
    ///
    /// A name counts only in the canonical decimal form of an index, the
    /// form [`to_owned_name`](Self::to_owned_name) produces: `"1"` addresses
    /// position 1, while `"01"` and `"+1"` address no position at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::collection::Key;
    ///
    /// assert_eq!(Key::Index(2).position(), Some(2));
    /// assert_eq!(Key::Name("2").position(), Some(2));
    /// assert_eq!(Key::Name("02").position(), None);
    /// assert_eq!(Key::Name("+2").position(), None);
    /// assert_eq!(Key::Name("two").position(), None);
    /// ```
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(name) => name
                .parse::<usize>()
                .ok()
                .filter(|index| index.to_string() == *name),
        }
    }

    /// Renders the key as an owned mapping key.
    ///
    /// Indices become their decimal representation, which is how sequence
    /// sources are merged into mappings by [`extend`](crate::object::extend).
    pub fn to_owned_name(&self) -> String {
        match self {
            Self::Index(index) => index.to_string(),
            Self::Name(name) => (*name).to_owned(),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => write!(formatter, "{name}"),
        }
    }
}

/// A map key type that can be reported as a [`Key`] during traversal.
///
/// String keys become [`Key::Name`]. Unsigned integer keys become
/// [`Key::Index`], so a `BTreeMap<usize, V>` is traversed like a sparse
/// sequence in ascending index order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Key, MapKey};
///
/// assert_eq!("age".as_key(), Key::Name("age"));
/// assert_eq!(String::from("age").as_key(), Key::Name("age"));
/// assert_eq!(7_u8.as_key(), Key::Index(7));
/// ```
pub trait MapKey {
    /// Borrows this map key as a traversal key.
    fn as_key(&self) -> Key<'_>;
}

impl MapKey for str {
    #[inline]
    fn as_key(&self) -> Key<'_> {
        Key::Name(self)
    }
}

impl MapKey for String {
    #[inline]
    fn as_key(&self) -> Key<'_> {
        Key::Name(self)
    }
}

impl<T: MapKey + ?Sized> MapKey for &T {
    #[inline]
    fn as_key(&self) -> Key<'_> {
        (**self).as_key()
    }
}

macro_rules! impl_map_key_for_index {
    ($($index:ty),*) => {
        $(
            impl MapKey for $index {
                #[inline]
                fn as_key(&self) -> Key<'_> {
                    Key::Index(usize::from(*self))
                }
            }
        )*
    };
}

impl_map_key_for_index!(u8, u16, usize);

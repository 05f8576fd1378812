//! Capabilities elements can expose to combinators.
//!
//! - [`Record`]: named property lookup, used by `pluck` and
//!   `sort_by_property`
//! - [`Receiver`]: operations resolved by name, used by `invoke_method`

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::{Collection, Key};

/// Values whose properties can be read by name.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::Record;
///
/// let person: BTreeMap<String, u32> = [("age".to_string(), 30)].into_iter().collect();
/// assert_eq!(person.property("age"), Some(&30));
/// assert_eq!(person.property("height"), None);
/// ```
pub trait Record {
    /// The type of property values.
    type Value;

    /// Returns the property called `name`, if present.
    fn property(&self, name: &str) -> Option<&Self::Value>;
}

impl<K, V> Record for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
{
    type Value = V;

    #[inline]
    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<K, V, S> Record for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> Record for Collection<V> {
    type Value = V;

    #[inline]
    fn property(&self, name: &str) -> Option<&V> {
        self.get(Key::Name(name))
    }
}

/// Values exposing operations that can be called by name.
///
/// This is the capability lookup behind
/// [`invoke_method`](crate::combinator::invoke_method): given a name, the
/// receiver either runs the matching operation on itself with `arguments`
/// or reports that it has no such operation by returning `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Receiver;
///
/// struct Counter(i32);
///
/// impl Receiver<i32> for Counter {
///     type Output = i32;
///
///     fn call_method(&self, name: &str, arguments: &[i32]) -> Option<i32> {
///         match name {
///             "add" => Some(self.0 + arguments.iter().sum::<i32>()),
///             "get" => Some(self.0),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Counter(1).call_method("add", &[2, 3]), Some(6));
/// assert_eq!(Counter(1).call_method("reset", &[]), None);
/// ```
pub trait Receiver<A> {
    /// The result type of every operation.
    type Output;

    /// Runs operation `name` on `self` with `arguments`.
    fn call_method(&self, name: &str, arguments: &[A]) -> Option<Self::Output>;
}

impl Receiver<usize> for String {
    type Output = String;

    /// Supports `to_uppercase`, `to_lowercase`, `trim`, `repeat` (first
    /// argument is the count) and `slice` (first two arguments are a byte
    /// range).
    fn call_method(&self, name: &str, arguments: &[usize]) -> Option<String> {
        match name {
            "to_uppercase" => Some(self.to_uppercase()),
            "to_lowercase" => Some(self.to_lowercase()),
            "trim" => Some(self.trim().to_owned()),
            "repeat" => arguments.first().map(|count| self.repeat(*count)),
            "slice" => match arguments {
                [start, end, ..] => self.get(*start..*end).map(str::to_owned),
                _ => None,
            },
            _ => None,
        }
    }
}

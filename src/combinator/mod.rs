//! Higher-order combinators over collections.
//!
//! Every function here is built from the traversal and reduction primitives
//! in [`collection`](crate::collection) and introduces no looping of its own:
//!
//! - [`map`], [`filter`], [`reject`], [`uniq`], [`contains`], [`every`],
//!   [`some`], [`every_truthy`], [`some_truthy`], [`pluck`], [`invoke`],
//!   [`invoke_method`]
//! - [`first`], [`first_n`], [`last`], [`last_n`], [`index_of`]
//! - [`sort_by`], [`sort_by_property`], [`zip`], [`flatten`],
//!   [`intersection`], [`difference`]
//! - `shuffle` and `shuffle_with` (feature `random`)
//!
//! # Examples
//!
//! ```rust
//! use underbar::combinator::{filter, map, reject, uniq};
//!
//! let values = [3, 1, 4, 1, 5, 9, 2, 6];
//!
//! let evens = filter(&values, |value| value % 2 == 0);
//! let odds = reject(&values, |value| value % 2 == 0);
//! assert_eq!(evens.len() + odds.len(), values.len());
//!
//! let squares = map(&uniq(&values), |value, _, _| value * value);
//! assert_eq!(squares, vec![9, 1, 16, 25, 81, 4, 36]);
//! ```

mod access;
mod advanced;
mod derived;
mod error;
mod nested;
#[cfg(feature = "random")]
mod shuffle;
mod utils;

pub use access::{first, first_n, index_of, last, last_n};
pub use advanced::{difference, flatten, intersection, sort_by, sort_by_property, zip};
pub use derived::{
    contains, every, every_truthy, filter, invoke, invoke_method, map, pluck, reject, some,
    some_truthy, uniq,
};
pub use error::InvokeError;
pub use nested::Nested;
#[cfg(feature = "random")]
pub use shuffle::{shuffle, shuffle_with};
pub use utils::identity;

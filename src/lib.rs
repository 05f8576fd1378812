//! # underbar
//!
//! A small functional utility library: collection combinators, object
//! merge helpers and function decorators, all built on two primitives.
//!
//! ## Overview
//!
//! Every collection operation in this crate is derived from a single
//! traversal, [`each`](collection::each), and a single reduction,
//! [`reduce`](collection::reduce). Collections are either ordered sequences
//! (slices, arrays, `Vec`) or key-value mappings (`BTreeMap`, `HashMap`);
//! [`Collection`](collection::Collection) covers both behind one type.
//!
//! - **Collection**: `each`, `reduce`, `reduce_first`, `Collection`, `Key`
//! - **Combinators**: map, filter, reject, uniq, contains, every, some,
//!   pluck, invoke, `sort_by`, zip, flatten, intersection, difference, shuffle
//! - **Objects**: extend, defaults
//! - **Decorators**: once, memoize, throttle, delay
//!
//! ## Feature Flags
//!
//! - `collection`: traversal primitives and merge helpers
//! - `combinator`: derived and advanced combinators
//! - `decorator`: `once` and `memoize`
//! - `timer`: `throttle` and `delay` (tokio)
//! - `sync`: thread-safe decorators (`parking_lot`)
//! - `random`: `shuffle` (rand)
//! - `serde`: `Serialize`/`Deserialize` for `Collection` and `Nested`
//! - `fxhash` / `ahash`: alternative hashers for memo tables
//! - `full`: enable all features except the hasher switches
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use underbar::prelude::*;
//!
//! let stooges = [
//!     BTreeMap::from([("name", "moe"), ("role", "leader")]),
//!     BTreeMap::from([("name", "larry"), ("role", "sidekick")]),
//!     BTreeMap::from([("name", "curly")]),
//! ];
//!
//! let names = pluck(&stooges, "name");
//! assert_eq!(names, vec![Some("moe"), Some("larry"), Some("curly")]);
//!
//! let lengths = map(&names, |name, _, _| name.map_or(0, str::len));
//! assert_eq!(reduce(&lengths, |total, length| total + length, 0), 13);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every public item of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "collection")]
    pub use crate::object::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    #[cfg(feature = "decorator")]
    pub use crate::decorator::*;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "collection")]
pub mod object;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "decorator")]
pub mod decorator;

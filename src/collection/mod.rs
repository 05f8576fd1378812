//! Collections and the primitives that traverse them.
//!
//! A collection is either an ordered sequence or a key-value mapping. This
//! module provides:
//!
//! - [`Each`]: the traversal interface every collection implements
//! - [`each`], [`reduce`], [`reduce_first`]: the traversal and reduction
//!   primitives the rest of the library is built on
//! - [`Collection`]: the sum type over both shapes
//! - [`Key`]: the index or name handed to callbacks
//! - [`MapKey`]: map key types that traverse as names or indices
//! - [`Truthy`], [`Record`], [`Receiver`]: capabilities of elements that
//!   some combinators rely on
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{each, reduce, Collection};
//!
//! let scores = Collection::mapping([("alice", 3), ("bob", 5)]);
//!
//! let mut names = Vec::new();
//! each(&scores, |_, key, _| names.push(key.to_owned_name()));
//! assert_eq!(names, vec!["alice", "bob"]);
//!
//! assert_eq!(reduce(&scores, |total, score| total + score, 0), 8);
//! ```

mod each;
mod key;
mod record;
mod truthy;
mod variant;

pub use each::{Each, each, reduce, reduce_first};
pub use key::{Key, MapKey};
pub use record::{Receiver, Record};
pub use truthy::Truthy;
pub use variant::Collection;

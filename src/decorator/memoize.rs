//! Result caching for single-argument functions.
//!
//! [`memoize`] wraps a function in a [`Memoize`] that remembers the result
//! computed for each distinct argument. The cache grows without bound and
//! lives as long as the wrapper.
//!
//! # Limitations
//!
//! The wrapped function takes exactly one argument, compared by value
//! (`Eq + Hash`). Functions of several arguments must pack them into a
//! tuple, and arguments that should be cached by identity rather than by
//! value are not supported.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use underbar::decorator::memoize;
//!
//! let calls = Cell::new(0);
//! let square = memoize(|value: u64| {
//!     calls.set(calls.get() + 1);
//!     value * value
//! });
//!
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.call(12), 144);
//! assert_eq!(calls.get(), 1);
//!
//! assert_eq!(square.call(3), 9);
//! assert_eq!(calls.get(), 2);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// The hasher used by memo tables.
///
/// `FxBuildHasher` with the `fxhash` feature, `ahash::RandomState` with the
/// `ahash` feature, and the standard library's `RandomState` otherwise.
#[cfg(feature = "fxhash")]
pub type MemoHasher = rustc_hash::FxBuildHasher;

/// The hasher used by memo tables.
///
/// `FxBuildHasher` with the `fxhash` feature, `ahash::RandomState` with the
/// `ahash` feature, and the standard library's `RandomState` otherwise.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type MemoHasher = ahash::RandomState;

/// The hasher used by memo tables.
///
/// `FxBuildHasher` with the `fxhash` feature, `ahash::RandomState` with the
/// `ahash` feature, and the standard library's `RandomState` otherwise.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type MemoHasher = std::collections::hash_map::RandomState;

/// A function whose results are cached by argument.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. For concurrent access, use
/// `SyncMemoize` (feature `sync`).
pub struct Memoize<F, A, R> {
    function: F,
    cache: RefCell<HashMap<A, R, MemoHasher>>,
}

impl<F, A, R> Memoize<F, A, R>
where
    F: Fn(A) -> R,
    A: Eq + Hash + Clone,
    R: Clone,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(HashMap::default()),
        }
    }

    /// Returns the cached result for `argument`, computing and storing it
    /// first if this argument has not been seen.
    ///
    /// The cache is not borrowed while the function runs, so the function
    /// may itself consult other wrappers. If it panics, nothing is cached.
    pub fn call(&self, argument: A) -> R {
        if let Some(cached) = self.cache.borrow().get(&argument) {
            return cached.clone();
        }

        tracing::trace!("memoize: cache miss");
        let result = (self.function)(argument.clone());
        self.cache
            .borrow_mut()
            .entry(argument)
            .or_insert(result)
            .clone()
    }
}

impl<F, A, R> Memoize<F, A, R>
where
    A: Eq + Hash,
{
    /// Returns whether a result for `argument` is cached.
    pub fn is_cached(&self, argument: &A) -> bool {
        self.cache.borrow().contains_key(argument)
    }

    /// Returns the number of cached results.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Drops every cached result.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl<F, A, R> fmt::Debug for Memoize<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Returns a wrapper that caches the results of `function` by argument.
///
/// Shorthand for [`Memoize::new`].
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::memoize;
///
/// let describe = memoize(|(name, age): (&str, u32)| format!("{name} ({age})"));
/// assert_eq!(describe.call(("moe", 40)), "moe (40)");
/// assert!(describe.is_cached(&("moe", 40)));
/// ```
pub fn memoize<F, A, R>(function: F) -> Memoize<F, A, R>
where
    F: Fn(A) -> R,
    A: Eq + Hash + Clone,
    R: Clone,
{
    Memoize::new(function)
}

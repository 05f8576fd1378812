//! Thread-safe variants of [`Once`](super::Once) and
//! [`Memoize`](super::Memoize).
//!
//! Both guard their state with a [`parking_lot::Mutex`] and are `Send + Sync`
//! when their function, argument and result types are, so they can be
//! shared across threads behind an `Arc`.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::thread;
//! use underbar::decorator::SyncOnce;
//!
//! let runs = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&runs);
//! let connect = Arc::new(SyncOnce::new(move |()| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     "connected"
//! }));
//!
//! let handles: Vec<_> = (0..8)
//!     .map(|_| {
//!         let connect = Arc::clone(&connect);
//!         thread::spawn(move || connect.call(()))
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert_eq!(handle.join().unwrap(), "connected");
//! }
//! assert_eq!(runs.load(Ordering::SeqCst), 1);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use parking_lot::Mutex;

use super::{MemoHasher, OncePoisonedError};

enum SyncOnceState<F, R> {
    Pending(F),
    Done(R),
    Poisoned,
}

/// A thread-safe function that can be called at most one time.
///
/// The lock is held while the function runs, so concurrent callers wait for
/// the first call to finish and then all receive its result. Calling the
/// wrapper again from inside the wrapped function deadlocks.
pub struct SyncOnce<F, A, R> {
    state: Mutex<SyncOnceState<F, R>>,
    argument: PhantomData<fn(A)>,
}

impl<F, A, R> SyncOnce<F, A, R>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    /// Wraps `function` so that it runs at most once across all threads.
    pub const fn new(function: F) -> Self {
        Self {
            state: Mutex::new(SyncOnceState::Pending(function)),
            argument: PhantomData,
        }
    }

    /// Calls the wrapped function on the first call, and returns its cached
    /// result on every call after that.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped function panicked during its call.
    pub fn call(&self, argument: A) -> R {
        match self.try_call(argument) {
            Ok(result) => result,
            Err(error) => panic!("{error}"),
        }
    }

    /// Like [`call`](Self::call), but reports a poisoned wrapper as an error.
    ///
    /// # Errors
    ///
    /// Returns [`OncePoisonedError`] if the wrapped function panicked during
    /// its call.
    pub fn try_call(&self, argument: A) -> Result<R, OncePoisonedError> {
        let mut state = self.state.lock();
        match std::mem::replace(&mut *state, SyncOnceState::Poisoned) {
            SyncOnceState::Done(result) => {
                *state = SyncOnceState::Done(result.clone());
                Ok(result)
            }
            SyncOnceState::Poisoned => Err(OncePoisonedError),
            SyncOnceState::Pending(function) => {
                let result = function(argument);
                *state = SyncOnceState::Done(result.clone());
                Ok(result)
            }
        }
    }
}

impl<F, A, R> SyncOnce<F, A, R> {
    /// Returns whether the wrapped function has completed its call.
    pub fn is_called(&self) -> bool {
        matches!(&*self.state.lock(), SyncOnceState::Done(_))
    }
}

impl<F, A, R: fmt::Debug> fmt::Debug for SyncOnce<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.lock() {
            SyncOnceState::Pending(_) => formatter.write_str("SyncOnce(<pending>)"),
            SyncOnceState::Done(result) => {
                formatter.debug_tuple("SyncOnce").field(result).finish()
            }
            SyncOnceState::Poisoned => formatter.write_str("SyncOnce(<poisoned>)"),
        }
    }
}

/// A thread-safe function whose results are cached by argument.
///
/// The lock is released while the function runs. Two threads missing the
/// cache for the same argument at the same time may both run the function;
/// the first result stored is the one every caller gets back afterwards.
pub struct SyncMemoize<F, A, R> {
    function: F,
    cache: Mutex<HashMap<A, R, MemoHasher>>,
}

impl<F, A, R> SyncMemoize<F, A, R>
where
    F: Fn(A) -> R,
    A: Eq + Hash + Clone,
    R: Clone,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: Mutex::new(HashMap::default()),
        }
    }

    /// Returns the cached result for `argument`, computing and storing it
    /// first if this argument has not been seen.
    pub fn call(&self, argument: A) -> R {
        if let Some(cached) = self.cache.lock().get(&argument) {
            return cached.clone();
        }

        tracing::trace!("sync memoize: cache miss");
        let result = (self.function)(argument.clone());
        self.cache.lock().entry(argument).or_insert(result).clone()
    }

    /// Returns the number of cached results.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

impl<F, A, R> fmt::Debug for SyncMemoize<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SyncMemoize")
            .field("cached", &self.cache.lock().len())
            .finish_non_exhaustive()
    }
}

//! One-shot function invocation.
//!
//! This module provides the [`Once`] wrapper, returned by [`once`]. The
//! wrapped function runs on the first call only; every later call returns
//! the result of that first call, whatever arguments it is given.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use underbar::decorator::once;
//!
//! let launches = Cell::new(0);
//! let launch = once(|target: &str| {
//!     launches.set(launches.get() + 1);
//!     format!("launched at {target}")
//! });
//!
//! assert_eq!(launch.call("moon"), "launched at moon");
//! assert_eq!(launch.call("mars"), "launched at moon");
//! assert_eq!(launches.get(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

use super::OncePoisonedError;

/// The internal state of a [`Once`] wrapper.
enum OnceState<F, R> {
    /// Not called yet. Holds the function.
    Pending(F),
    /// Called. Holds the cached result.
    Done(R),
    /// The function panicked, or the wrapper was re-entered while the
    /// function was running.
    Poisoned,
}

/// A function that can be called at most one time.
///
/// Arguments are passed as a single value `A`; use a tuple for several
/// arguments and `()` for none. The result is cloned out of the cache on
/// every call after the first.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. For concurrent access, use
/// `SyncOnce` (feature `sync`).
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::Once;
///
/// let initialize = Once::new(|()| vec![1, 2, 3]);
/// assert!(!initialize.is_called());
///
/// assert_eq!(initialize.call(()), vec![1, 2, 3]);
/// assert!(initialize.is_called());
/// ```
pub struct Once<F, A, R> {
    state: RefCell<OnceState<F, R>>,
    argument: PhantomData<fn(A)>,
}

impl<F, A, R> Once<F, A, R>
where
    F: FnOnce(A) -> R,
{
    /// Wraps `function` so that it runs at most once.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(function)),
            argument: PhantomData,
        }
    }

    /// Calls the wrapped function on the first call, and returns its cached
    /// result on every call after that.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped function panicked during its call, or if it
    /// calls this wrapper again while running.
    pub fn call(&self, argument: A) -> R
    where
        R: Clone,
    {
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
    /// its call, or if it is still running (re-entrant call).
    pub fn try_call(&self, argument: A) -> Result<R, OncePoisonedError>
    where
        R: Clone,
    {
        // The borrow ends before the function runs; a re-entrant call sees
        // `Poisoned`.
        let function = {
            let mut state = self.state.borrow_mut();
            match &*state {
                OnceState::Done(result) => return Ok(result.clone()),
                OnceState::Poisoned => return Err(OncePoisonedError),
                OnceState::Pending(_) => {}
            }
            let OnceState::Pending(function) =
                std::mem::replace(&mut *state, OnceState::Poisoned)
            else {
                unreachable!()
            };
            function
        };

        let result = function(argument);
        *self.state.borrow_mut() = OnceState::Done(result.clone());
        Ok(result)
    }
}

impl<F, A, R> Once<F, A, R> {
    /// Returns whether the wrapped function has completed its call.
    #[inline]
    pub fn is_called(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Done(_))
    }

    /// Returns whether the wrapped function panicked.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Poisoned)
    }

    /// Returns the cached result without calling anything.
    pub fn get(&self) -> Option<R>
    where
        R: Clone,
    {
        match &*self.state.borrow() {
            OnceState::Done(result) => Some(result.clone()),
            _ => None,
        }
    }
}

impl<F, A, R: fmt::Debug> fmt::Debug for Once<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            OnceState::Pending(_) => formatter.write_str("Once(<pending>)"),
            OnceState::Done(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Poisoned => formatter.write_str("Once(<poisoned>)"),
        }
    }
}

/// Returns a wrapper that calls `function` on its first call only.
///
/// Shorthand for [`Once::new`].
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::once;
///
/// let add = once(|(left, right): (i32, i32)| left + right);
/// assert_eq!(add.call((1, 2)), 3);
/// assert_eq!(add.call((10, 20)), 3);
/// ```
#[inline]
pub const fn once<F, A, R>(function: F) -> Once<F, A, R>
where
    F: FnOnce(A) -> R,
{
    Once::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn debug_shows_state() {
        let wrapped = once(|value: i32| value);
        assert_eq!(format!("{wrapped:?}"), "Once(<pending>)");
        wrapped.call(7);
        assert_eq!(format!("{wrapped:?}"), "Once(7)");
    }

    #[test]
    fn panic_poisons_wrapper() {
        let wrapped = once(|value: i32| -> i32 { panic!("boom {value}") });
        let outcome = catch_unwind(AssertUnwindSafe(|| wrapped.call(1)));
        assert!(outcome.is_err());
        assert!(wrapped.is_poisoned());
        assert_eq!(wrapped.try_call(2), Err(OncePoisonedError));
    }
}

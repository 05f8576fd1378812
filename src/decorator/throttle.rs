//! Rate limiting for function calls.
//!
//! [`throttle`] returns a [`Throttle`] that runs its function at most once
//! per window. The first call runs immediately; calls arriving before the
//! window has elapsed get the most recent result back without running the
//! function. No trailing call is scheduled for calls that were suppressed.
//!
//! Time is read from [`tokio::time::Instant`], so a paused tokio clock
//! (`tokio::time::pause`) controls the window in tests.

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

use tokio::time::Instant;

/// The time of the last invocation and its result.
struct LastCall<R> {
    at: Instant,
    result: R,
}

/// A function that runs at most once per `wait` window.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use std::time::Duration;
/// use underbar::decorator::throttle;
///
/// let runs = Cell::new(0);
/// let save = throttle(
///     |document: &str| {
///         runs.set(runs.get() + 1);
///         document.len()
///     },
///     Duration::from_secs(60),
/// );
///
/// assert_eq!(save.call("draft"), 5);
/// assert_eq!(save.call("draft two"), 5);
/// assert_eq!(runs.get(), 1);
/// ```
pub struct Throttle<F, A, R> {
    function: F,
    wait: Duration,
    last: RefCell<Option<LastCall<R>>>,
    argument: PhantomData<fn(A)>,
}

impl<F, A, R> Throttle<F, A, R>
where
    F: Fn(A) -> R,
    R: Clone,
{
    /// Wraps `function` so that it runs at most once per `wait`.
    pub const fn new(function: F, wait: Duration) -> Self {
        Self {
            function,
            wait,
            last: RefCell::new(None),
            argument: PhantomData,
        }
    }

    /// Runs the function if the window since its last run has elapsed, and
    /// returns the most recent result otherwise.
    pub fn call(&self, argument: A) -> R {
        let now = Instant::now();
        if let Some(last) = self.last.borrow().as_ref() {
            if now.duration_since(last.at) < self.wait {
                tracing::trace!(wait = ?self.wait, "throttle: call suppressed");
                return last.result.clone();
            }
        }

        let result = (self.function)(argument);
        *self.last.borrow_mut() = Some(LastCall {
            at: now,
            result: result.clone(),
        });
        result
    }
}

impl<F, A, R> Throttle<F, A, R> {
    /// Returns the window length.
    #[inline]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    /// Returns the time left until the function may run again, or zero if it
    /// may run now.
    pub fn remaining(&self) -> Duration {
        self.last.borrow().as_ref().map_or(Duration::ZERO, |last| {
            self.wait.saturating_sub(Instant::now().duration_since(last.at))
        })
    }
}

impl<F, A, R> fmt::Debug for Throttle<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("called", &self.last.borrow().is_some())
            .finish_non_exhaustive()
    }
}

/// Returns a wrapper that runs `function` at most once per `wait`.
///
/// Shorthand for [`Throttle::new`].
pub const fn throttle<F, A, R>(function: F, wait: Duration) -> Throttle<F, A, R>
where
    F: Fn(A) -> R,
    R: Clone,
{
    Throttle::new(function, wait)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_before_first_call_is_zero() {
        let throttled = throttle(|value: u8| value, Duration::from_secs(1));
        assert_eq!(throttled.remaining(), Duration::ZERO);
    }

    #[test]
    fn zero_wait_never_suppresses() {
        let throttled = throttle(|value: u8| value, Duration::ZERO);
        assert_eq!(throttled.call(1), 1);
        assert_eq!(throttled.call(2), 2);
    }
}

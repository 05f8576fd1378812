//! Deferred function invocation on the tokio scheduler.
//!
//! [`delay`] hands a single call of a function to the current tokio runtime,
//! to run once the given duration has elapsed. The returned [`DelayHandle`]
//! can cancel the call while it is still pending, or await its result.
//!
//! Separate delayed calls carry no ordering guarantee relative to each
//! other beyond each one firing no earlier than its own wait.

use std::fmt;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::DelayError;

/// A pending or completed delayed call.
///
/// Dropping the handle does not cancel the call.
pub struct DelayHandle<R> {
    task: JoinHandle<R>,
    wait: Duration,
}

impl<R> DelayHandle<R> {
    /// Cancels the call if it has not run yet.
    ///
    /// Has no effect on a call that already ran.
    pub fn cancel(&self) {
        tracing::debug!(wait = ?self.wait, "delay: cancelled");
        self.task.abort();
    }

    /// Returns whether the call has run or was cancelled.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Returns the wait the call was scheduled with.
    #[inline]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    /// Waits for the call and returns its result, or `None` if it was
    /// cancelled before it ran.
    ///
    /// # Panics
    ///
    /// Resumes the panic if the delayed function panicked.
    pub async fn join(self) -> Option<R> {
        match self.task.await {
            Ok(result) => Some(result),
            Err(error) if error.is_cancelled() => None,
            Err(error) => std::panic::resume_unwind(error.into_panic()),
        }
    }
}

impl<R> fmt::Debug for DelayHandle<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DelayHandle")
            .field("wait", &self.wait)
            .field("finished", &self.task.is_finished())
            .finish()
    }
}

/// Calls `function(argument)` once after `wait` has elapsed.
///
/// The call runs as a task on the tokio runtime the caller is running on.
///
/// # Errors
///
/// Returns [`DelayError::NoRuntime`] when called outside a tokio runtime.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use underbar::decorator::delay;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let handle = delay(|(left, right): (i32, i32)| left + right, Duration::from_millis(10), (1, 2)).unwrap();
/// assert_eq!(handle.join().await, Some(3));
/// # }
/// ```
pub fn delay<F, A, R>(function: F, wait: Duration, argument: A) -> Result<DelayHandle<R>, DelayError>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    let runtime = Handle::try_current().map_err(|_| DelayError::NoRuntime)?;
    tracing::debug!(?wait, "delay: scheduled");
    let task = runtime.spawn(async move {
        tokio::time::sleep(wait).await;
        tracing::debug!(?wait, "delay: firing");
        function(argument)
    });
    Ok(DelayHandle { task, wait })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_outside_runtime_fails() {
        let outcome = delay(|()| (), Duration::from_millis(1), ());
        assert_eq!(outcome.unwrap_err(), DelayError::NoRuntime);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_waits_at_least_wait() {
        let started = tokio::time::Instant::now();
        let handle = delay(|value: u32| value * 2, Duration::from_millis(250), 21).unwrap();
        assert_eq!(handle.join().await, Some(42));
        assert!(started.elapsed() >= Duration::from_millis(250));
    }
}

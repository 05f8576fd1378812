//! Error types for the function decorators.

/// Error returned when a [`Once`](super::Once) wrapper can no longer produce
/// a result.
///
/// This happens when the wrapped function panicked during its only call, or
/// when the wrapper is called again from inside that call.
///
/// Note: [`Once::call`](super::Once::call) panics instead of returning this
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OncePoisonedError;

impl std::fmt::Display for OncePoisonedError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Once: wrapped function panicked or was re-entered"
        )
    }
}

impl std::error::Error for OncePoisonedError {}

/// Represents errors that can occur when scheduling a delayed call.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::DelayError;
///
/// assert_eq!(
///     format!("{}", DelayError::NoRuntime),
///     "delay: no tokio runtime is running on this thread"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayError {
    /// `delay` was called outside of a tokio runtime, so there is no
    /// scheduler to hand the call to.
    NoRuntime,
}

impl std::fmt::Display for DelayError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRuntime => write!(
                formatter,
                "delay: no tokio runtime is running on this thread"
            ),
        }
    }
}

impl std::error::Error for DelayError {}

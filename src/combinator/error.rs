//! Error types for combinators.

use crate::collection::Key;

/// Represents a failure of [`invoke_method`](super::invoke_method).
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::InvokeError;
///
/// let error = InvokeError::UnknownMethod {
///     key: "2".to_string(),
///     method: "explode".to_string(),
/// };
/// assert_eq!(
///     format!("{error}"),
///     "invoke: element at 2 has no method named `explode`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    /// An element does not expose the requested operation.
    UnknownMethod {
        /// The key of the element, rendered as a string.
        key: String,
        /// The name that could not be resolved.
        method: String,
    },
}

impl InvokeError {
    pub(crate) fn unknown_method(key: Key<'_>, method: &str) -> Self {
        Self::UnknownMethod {
            key: key.to_owned_name(),
            method: method.to_owned(),
        }
    }
}

impl std::fmt::Display for InvokeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMethod { key, method } => write!(
                formatter,
                "invoke: element at {key} has no method named `{method}`"
            ),
        }
    }
}

impl std::error::Error for InvokeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_method_from_index_key() {
        let error = InvokeError::unknown_method(Key::Index(4), "trim");
        assert_eq!(
            error,
            InvokeError::UnknownMethod {
                key: "4".to_string(),
                method: "trim".to_string(),
            }
        );
    }

    #[test]
    fn test_invoke_error_is_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(InvokeError::unknown_method(Key::Name("a"), "b"));
        assert_eq!(
            error.to_string(),
            "invoke: element at a has no method named `b`"
        );
    }
}

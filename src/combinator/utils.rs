//! Small helpers shared by the combinators.

/// Returns the value unchanged.
///
/// This is the default iterator of the quantifiers: [`every_truthy`] and
/// [`some_truthy`] test the truthiness of `identity(value)`.
///
/// [`every_truthy`]: super::every_truthy
/// [`some_truthy`]: super::some_truthy
///
/// # Examples
///
/// ```
/// use underbar::combinator::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

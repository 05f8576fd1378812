//! Truthiness of values, used as the default predicate of quantifiers.

/// Types that can be tested for truthiness.
///
/// `false`, numeric zero, `NaN`, `None` and empty strings are falsy;
/// everything else is truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Truthy;
///
/// assert!(1_i32.is_truthy());
/// assert!(!0_u8.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(Some(false).is_truthy());
/// assert!(!None::<i32>.is_truthy());
/// ```
pub trait Truthy {
    /// Returns whether the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! impl_truthy_for_floats {
    ($($float:ty),* $(,)?) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

impl_truthy_for_floats!(f32, f64);

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

//! Function decorators.
//!
//! Each decorator takes a function and returns a wrapper with the same
//! calling shape but added behavior:
//!
//! - [`once`] / [`Once`]: run on the first call only
//! - [`memoize`] / [`Memoize`]: cache results by argument
//! - `throttle` / `Throttle`: run at most once per window (feature `timer`)
//! - `delay` / `DelayHandle`: run once after a wait on the tokio runtime
//!   (feature `timer`)
//! - `SyncOnce` / `SyncMemoize`: thread-safe forms (feature `sync`)
//!
//! Wrapped functions take a single argument. Functions of several arguments
//! take a tuple, and functions of none take `()`.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use underbar::decorator::{memoize, once};
//!
//! let loads = Cell::new(0);
//! let load_config = once(|path: &str| {
//!     loads.set(loads.get() + 1);
//!     format!("config from {path}")
//! });
//! load_config.call("/etc/app.toml");
//! load_config.call("/etc/other.toml");
//! assert_eq!(loads.get(), 1);
//!
//! let fibonacci = memoize(|n: u32| (1..=n).fold((0_u64, 1_u64), |(a, b), _| (b, a + b)).0);
//! assert_eq!(fibonacci.call(50), 12_586_269_025);
//! ```

mod error;
mod memoize;
mod once;

#[cfg(feature = "timer")]
mod delay;
#[cfg(feature = "timer")]
mod throttle;

#[cfg(feature = "sync")]
mod sync;

pub use error::{DelayError, OncePoisonedError};
pub use memoize::{MemoHasher, Memoize, memoize};
pub use once::{Once, once};

#[cfg(feature = "timer")]
pub use delay::{DelayHandle, delay};
#[cfg(feature = "timer")]
pub use throttle::{Throttle, throttle};

#[cfg(feature = "sync")]
pub use sync::{SyncMemoize, SyncOnce};

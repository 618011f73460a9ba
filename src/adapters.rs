//! Adapters for fallible closures inside iterator pipelines.
//!
//! Iterator adapters like `map` and `for_each` accept plain closures. When the
//! per-element work can fail, the error type of every step has to agree before
//! the pipeline can be collected. The functions here take a closure returning
//! `Result<R, E>` for any `E: Into<Fault>` and adapt it in one of three ways:
//!
//! - `wrap_*`: every error is converted to the uniform [`Fault`] carrier and
//!   returned. A closure that already fails with `Fault` keeps its fault as-is.
//!   Nothing is swallowed, and a panic is left to unwind.
//! - [`safe_function_either`] and [`safe_function_try`]: the error, or a panic,
//!   is captured as data.
//! - [`safe_function_optional`]: the error, or a panic, is **discarded** and
//!   the element becomes `None`. This is the only combinator in the crate that
//!   deliberately loses fault information.
//!
//! # Examples
//!
//! ```rust
//! use saferail::adapters::{safe_function_optional, wrap_function};
//! use saferail::Fault;
//!
//! let inputs = ["1", "2", "bad", "3"];
//!
//! let parsed: Vec<i32> = inputs
//!     .iter()
//!     .filter_map(safe_function_optional(|s: &&str| s.parse::<i32>()))
//!     .collect();
//! assert_eq!(parsed, vec![1, 2, 3]);
//!
//! let strict: Result<Vec<i32>, Fault> = inputs
//!     .iter()
//!     .map(wrap_function(|s: &&str| s.parse::<i32>()))
//!     .collect();
//! assert!(strict.is_err());
//! ```

use crate::attempt::Try;
use crate::either::Either;
use crate::fault::{capture, Fault};

/// Adapt a fallible unary function so that it fails with [`Fault`].
pub fn wrap_function<T, R, E, F>(mut f: F) -> impl FnMut(T) -> Result<R, Fault>
where
    F: FnMut(T) -> Result<R, E>,
    E: Into<Fault>,
{
    move |t| f(t).map_err(Into::into)
}

/// Adapt a fallible binary function so that it fails with [`Fault`].
pub fn wrap_bi_function<T, U, R, E, F>(mut f: F) -> impl FnMut(T, U) -> Result<R, Fault>
where
    F: FnMut(T, U) -> Result<R, E>,
    E: Into<Fault>,
{
    move |t, u| f(t, u).map_err(Into::into)
}

/// Adapt a fallible consumer so that it fails with [`Fault`].
///
/// ```rust
/// use saferail::adapters::wrap_consumer;
/// use saferail::Fault;
///
/// let mut total = 0;
/// let outcome: Result<(), Fault> = ["4", "5"]
///     .iter()
///     .try_for_each(wrap_consumer(|s: &&str| {
///         total += s.parse::<i32>()?;
///         Ok::<_, std::num::ParseIntError>(())
///     }));
///
/// assert!(outcome.is_ok());
/// assert_eq!(total, 9);
/// ```
pub fn wrap_consumer<T, E, F>(mut f: F) -> impl FnMut(T) -> Result<(), Fault>
where
    F: FnMut(T) -> Result<(), E>,
    E: Into<Fault>,
{
    move |t| f(t).map_err(Into::into)
}

/// Adapt a fallible two-argument consumer so that it fails with [`Fault`].
pub fn wrap_bi_consumer<T, U, E, F>(mut f: F) -> impl FnMut(T, U) -> Result<(), Fault>
where
    F: FnMut(T, U) -> Result<(), E>,
    E: Into<Fault>,
{
    move |t, u| f(t, u).map_err(Into::into)
}

/// Adapt a fallible supplier so that it fails with [`Fault`].
pub fn wrap_supplier<R, E, F>(mut f: F) -> impl FnMut() -> Result<R, Fault>
where
    F: FnMut() -> Result<R, E>,
    E: Into<Fault>,
{
    move || f().map_err(Into::into)
}

/// Adapt a fallible action so that it fails with [`Fault`].
pub fn wrap_runnable<E, F>(mut f: F) -> impl FnMut() -> Result<(), Fault>
where
    F: FnMut() -> Result<(), E>,
    E: Into<Fault>,
{
    move || f().map_err(Into::into)
}

/// Adapt a fallible function so that any failure yields `None`.
///
/// Both `Err` results and panics are discarded, with no record of the cause.
/// Use [`safe_function_either`] when the cause matters.
///
/// A caught panic still runs the process panic hook first, so the default
/// hook prints it to stderr. Install a quieter hook with
/// `std::panic::set_hook` if that output is unwanted.
pub fn safe_function_optional<T, R, E, F>(mut f: F) -> impl FnMut(T) -> Option<R>
where
    F: FnMut(T) -> Result<R, E>,
    E: Into<Fault>,
{
    move |t| match capture(|| f(t).map_err(Into::into)) {
        Ok(value) => Some(value),
        Err(_fault) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(fault = %_fault, "discarding fault");
            None
        }
    }
}

/// Adapt a fallible function so that a failure is captured as `Left(fault)`.
///
/// ```rust
/// use saferail::adapters::safe_function_either;
/// use saferail::either::partition;
///
/// let (errors, numbers) = partition(
///     ["7", "x"].iter().map(safe_function_either(|s: &&str| s.parse::<u8>())),
/// );
/// assert_eq!(numbers, vec![7]);
/// assert_eq!(errors.len(), 1);
/// ```
pub fn safe_function_either<T, R, E, F>(mut f: F) -> impl FnMut(T) -> Either<Fault, R>
where
    F: FnMut(T) -> Result<R, E>,
    E: Into<Fault>,
{
    move |t| Either::from_result(capture(|| f(t).map_err(Into::into)))
}

/// Adapt a fallible function so that each call produces a [`Try`].
pub fn safe_function_try<T, R, E, F>(mut f: F) -> impl FnMut(T) -> Try<R>
where
    F: FnMut(T) -> Result<R, E>,
    E: Into<Fault>,
{
    move |t| Try::of(|| f(t))
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_discarded_fault_is_traced() {
        let mut f = safe_function_optional(|s: &str| s.parse::<i32>());
        assert_eq!(f("nan"), None);
        assert!(logs_contain("discarding fault"));
    }
}

//! Build a [`Try`] from an `Option`, a future or a supplier.
//!
//! The fault is kept as-is; there is no mapper.

use std::future::Future;

use super::settle;
use crate::attempt::Try;
use crate::fault::Fault;

/// `Some(v)` becomes `Success(v)`; `None` becomes a `Failure` with the fault
/// built by `if_empty`.
pub fn from_optional<T, X, F>(source: Option<T>, if_empty: F) -> Try<T>
where
    F: FnOnce() -> X,
    X: Into<Fault>,
{
    match source {
        Some(value) => Try::Success(value),
        None => Try::Failure(if_empty().into()),
    }
}

/// Same as [`Try::of`].
#[inline]
pub fn from<T, E, S>(supplier: S) -> Try<T>
where
    S: FnOnce() -> Result<T, E>,
    E: Into<Fault>,
{
    Try::of(supplier)
}

/// Block until `future` settles and capture the outcome.
///
/// ```rust
/// use saferail::extensions::attempt::from_future;
/// use saferail::Fault;
///
/// let t = from_future(async { Err::<i32, _>(Fault::msg("refused")) });
/// assert_eq!(t.get_error().unwrap().to_string(), "refused");
/// ```
pub fn from_future<T, E, Fut>(future: Fut) -> Try<T>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Fault>,
{
    Try::from_result(settle(future))
}

/// Block until a spawned tokio task finishes and capture the outcome.
#[cfg(feature = "async")]
pub fn from_task<T, E>(handle: tokio::task::JoinHandle<Result<T, E>>) -> Try<T>
where
    E: Into<Fault>,
{
    Try::from_result(super::settle_task(handle))
}

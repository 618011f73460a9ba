//! Build an [`Either`] from an `Option`, a future or a supplier.
//!
//! The failure always lands on the left.

use std::future::Future;

use super::{settle, supply, supply_checked};
use crate::either::Either;
use crate::fault::Fault;

/// `Some(v)` becomes `Right(v)`; `None` becomes `Left(on_absent())`.
///
/// ```rust
/// use saferail::extensions::either::from_optional;
/// use saferail::Either;
///
/// let found: Either<String, u32> = from_optional(Some(7), || "missing".to_string());
/// assert_eq!(found, Either::right(7));
///
/// let missing: Either<String, u32> = from_optional(None, || "missing".to_string());
/// assert_eq!(missing, Either::left("missing".to_string()));
/// ```
pub fn from_optional<L, R, F>(source: Option<R>, on_absent: F) -> Either<L, R>
where
    F: FnOnce() -> L,
{
    match source {
        Some(value) => Either::Right(value),
        None => Either::Left(on_absent()),
    }
}

/// Block until `future` settles. A value becomes `Right`; a fault becomes
/// `Left(fault_mapper(fault))`.
pub fn from_future<L, R, E, Fut, M>(future: Fut, fault_mapper: M) -> Either<L, R>
where
    Fut: Future<Output = Result<R, E>>,
    E: Into<Fault>,
    M: FnOnce(Fault) -> L,
{
    Either::from_result(settle(future)).map_left(fault_mapper)
}

/// Block until a spawned tokio task finishes, as [`from_future`] does.
#[cfg(feature = "async")]
pub fn from_task<L, R, E, M>(handle: tokio::task::JoinHandle<Result<R, E>>, fault_mapper: M) -> Either<L, R>
where
    E: Into<Fault>,
    M: FnOnce(Fault) -> L,
{
    Either::from_result(super::settle_task(handle)).map_left(fault_mapper)
}

/// Call `supplier`. Its value becomes `Right`; a panic becomes
/// `Left(fault_mapper(fault))`.
pub fn from_supplier<L, R, S, M>(supplier: S, fault_mapper: M) -> Either<L, R>
where
    S: FnOnce() -> R,
    M: FnOnce(Fault) -> L,
{
    Either::from_result(supply(supplier)).map_left(fault_mapper)
}

/// Call a fallible `supplier`. `Ok` becomes `Right`; an `Err` or a panic
/// becomes `Left(fault_mapper(fault))`.
pub fn from_checked<L, R, E, S, M>(supplier: S, fault_mapper: M) -> Either<L, R>
where
    S: FnOnce() -> Result<R, E>,
    E: Into<Fault>,
    M: FnOnce(Fault) -> L,
{
    Either::from_result(supply_checked(supplier)).map_left(fault_mapper)
}

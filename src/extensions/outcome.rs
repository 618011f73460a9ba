//! Build an [`Outcome`] from an `Option`, a future or a supplier.

use std::future::Future;

use super::{settle, supply, supply_checked};
use crate::fault::Fault;
use crate::outcome::Outcome;

/// `Some(v)` becomes `Success(v)`; `None` becomes `Failure(on_absent())`.
pub fn from_optional<T, E, F>(source: Option<T>, on_absent: F) -> Outcome<T, E>
where
    F: FnOnce() -> E,
{
    match source {
        Some(value) => Outcome::Success(value),
        None => Outcome::Failure(on_absent()),
    }
}

/// Block until `future` settles. A value becomes `Success`; a fault becomes
/// `Failure(fault_mapper(fault))`.
///
/// ```rust
/// use saferail::extensions::outcome::from_future;
/// use saferail::{Fault, Outcome};
///
/// let (tx, rx) = futures::channel::oneshot::channel::<u64>();
/// std::thread::spawn(move || tx.send(42));
///
/// let answer: Outcome<u64, String> = from_future(rx, |f| f.to_string());
/// assert_eq!(answer, Outcome::success(42));
/// ```
pub fn from_future<T, E, X, Fut, M>(future: Fut, fault_mapper: M) -> Outcome<T, X>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Fault>,
    M: FnOnce(Fault) -> X,
{
    Outcome::from_result(settle(future)).map_error(fault_mapper)
}

/// Block until a spawned tokio task finishes, as [`from_future`] does.
#[cfg(feature = "async")]
pub fn from_task<T, E, X, M>(handle: tokio::task::JoinHandle<Result<T, E>>, fault_mapper: M) -> Outcome<T, X>
where
    E: Into<Fault>,
    M: FnOnce(Fault) -> X,
{
    Outcome::from_result(super::settle_task(handle)).map_error(fault_mapper)
}

/// Call `supplier`. Its value becomes `Success`; a panic becomes
/// `Failure(fault_mapper(fault))`.
pub fn from_supplier<T, X, S, M>(supplier: S, fault_mapper: M) -> Outcome<T, X>
where
    S: FnOnce() -> T,
    M: FnOnce(Fault) -> X,
{
    Outcome::from_result(supply(supplier)).map_error(fault_mapper)
}

/// Call a fallible `supplier`. `Ok` becomes `Success`; an `Err` or a panic
/// becomes `Failure(fault_mapper(fault))`.
pub fn from_checked<T, E, X, S, M>(supplier: S, fault_mapper: M) -> Outcome<T, X>
where
    S: FnOnce() -> Result<T, E>,
    E: Into<Fault>,
    M: FnOnce(Fault) -> X,
{
    Outcome::from_result(supply_checked(supplier)).map_error(fault_mapper)
}

//! Conversions from external source shapes into the containers.
//!
//! Each submodule builds one container type from three kinds of source:
//!
//! - an `Option`, with a callback for the absent case;
//! - a future that settles to `Result<T, E>`, awaited by blocking the calling
//!   thread (with the `async` feature, a tokio `JoinHandle` as well);
//! - a supplier closure, called once.
//!
//! Blocking conversions impose no timeout and cannot be cancelled. Bound the
//! wait on the future itself before handing it over.
//!
//! The fault a future settles with is reported as-is. Blocking on a future adds
//! no wrapper of its own. The only wrapper removed is tokio's `JoinError`
//! around a task that panicked, which is replaced by the panic itself.

pub mod attempt;
pub mod either;
pub mod outcome;

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::fault::{capture, Fault};

/// Block until `future` settles. A panic while polling becomes a fault.
pub(crate) fn settle<T, E, Fut>(future: Fut) -> Result<T, Fault>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Fault>,
{
    let settled = match futures::executor::block_on(AssertUnwindSafe(future).catch_unwind()) {
        Ok(result) => result.map_err(Into::into),
        Err(payload) => Err(Fault::from_panic(payload)),
    };
    settled.map_err(settled_fault)
}

/// Block until a spawned tokio task finishes.
///
/// A task that panicked reports the panic itself rather than the `JoinError`
/// around it. A cancelled task reports the `JoinError`.
#[cfg(feature = "async")]
pub(crate) fn settle_task<T, E>(handle: tokio::task::JoinHandle<Result<T, E>>) -> Result<T, Fault>
where
    E: Into<Fault>,
{
    let settled = match futures::executor::block_on(handle) {
        Ok(result) => result.map_err(Into::into),
        Err(join_error) if join_error.is_panic() => Err(Fault::from_panic(join_error.into_panic())),
        Err(join_error) => Err(Fault::from(join_error)),
    };
    settled.map_err(settled_fault)
}

fn settled_fault(fault: Fault) -> Fault {
    #[cfg(feature = "tracing")]
    tracing::debug!(fault = %fault, "async handle settled with fault");
    fault
}

/// Call `supplier` once, turning a panic into a fault.
pub(crate) fn supply<T, S>(supplier: S) -> Result<T, Fault>
where
    S: FnOnce() -> T,
{
    capture(|| Ok(supplier()))
}

/// Call a fallible `supplier` once, turning an `Err` or a panic into a fault.
pub(crate) fn supply_checked<T, E, S>(supplier: S) -> Result<T, Fault>
where
    S: FnOnce() -> Result<T, E>,
    E: Into<Fault>,
{
    capture(|| supplier().map_err(Into::into))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::{Panicked, RuntimeFault};
    use std::time::Duration;

    #[test]
    fn test_settle_ready_value() {
        assert_eq!(settle(async { Ok::<_, Fault>(5) }).ok(), Some(5));
    }

    #[test]
    fn test_settle_blocks_until_sent() {
        let (tx, rx) = futures::channel::oneshot::channel::<i32>();
        let sender = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            let _ = tx.send(11);
        });

        assert_eq!(settle(rx).ok(), Some(11));
        sender.join().unwrap();
    }

    #[test]
    fn test_settle_dropped_sender_is_fault() {
        let (tx, rx) = futures::channel::oneshot::channel::<i32>();
        drop(tx);
        let fault = settle(rx).unwrap_err();
        assert!(fault.is::<futures::channel::oneshot::Canceled>());
    }

    #[test]
    fn test_settle_captures_panic() {
        let fault = settle(async {
            if true {
                panic!("async boom");
            }
            Ok::<i32, Fault>(0)
        })
        .unwrap_err();
        assert!(fault.is::<Panicked>());
        assert_eq!(fault.to_string(), "async boom");
    }

    #[test]
    fn test_settle_keeps_caller_fault_intact() {
        let boom = Fault::msg("boom");
        let wrapped = Fault::from(RuntimeFault::with_cause("Auth failed", boom.clone()));
        let fault = settle(async {
            let wrapped = wrapped.clone();
            Err::<i32, _>(wrapped)
        })
        .unwrap_err();

        assert_eq!(fault, wrapped);
        assert_eq!(fault.to_string(), "Auth failed");
        assert_eq!(fault.into_cause(), boom);
    }

    #[test]
    fn test_supply_and_supply_checked() {
        assert_eq!(supply(|| 1).ok(), Some(1));
        assert!(supply(|| -> i32 { panic!("nope") })
            .unwrap_err()
            .is::<Panicked>());

        assert_eq!(supply_checked(|| "3".parse::<i32>()).ok(), Some(3));
        assert!(supply_checked(|| "q".parse::<i32>())
            .unwrap_err()
            .is::<std::num::ParseIntError>());
    }
}

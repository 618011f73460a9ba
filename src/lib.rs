//! # Saferail
//!
//! Value-level error handling for iterator pipelines.
//!
//! Three immutable two-variant containers carry the outcome of a step:
//!
//! - [`Either<L, R>`]: a neutral disjoint union, right-biased by convention.
//! - [`Outcome<T, E>`]: the same algebra with `Success`/`Failure` naming.
//! - [`Try<T>`]: a `Success` or the [`Fault`] raised while computing it.
//!
//! The [`adapters`] module turns fallible closures into closures that fit
//! `Iterator::map` and friends, and [`extensions`] builds the containers from
//! an `Option`, a future, or a supplier.
//!
//! ## Quick Example
//!
//! ```rust
//! use saferail::adapters::safe_function_either;
//! use saferail::either::partition;
//! use saferail::{Either, Try};
//!
//! let inputs = ["1", "2", "bad", "3"];
//!
//! let (errors, numbers): (Vec<_>, Vec<i32>) = partition(
//!     inputs
//!         .iter()
//!         .map(safe_function_either(|s: &&str| s.parse::<i32>()))
//!         .map(|e| e.map(|n| n * 10)),
//! );
//! assert_eq!(numbers, vec![10, 20, 30]);
//! assert_eq!(errors.len(), 1);
//!
//! let total = Try::of(|| "40".parse::<i32>())
//!     .map(|n| n + 2)
//!     .get_or_else(0);
//! assert_eq!(total, 42);
//!
//! let doubled = Either::<String, i32>::right(10).map(|i| i * 2);
//! assert_eq!(doubled, Either::right(20));
//! ```
//!
//! ## Cargo features
//!
//! - `tracing`: emit `tracing` events when panics are captured and when faults
//!   are discarded or settled from an async handle.
//! - `serde`: `Serialize`/`Deserialize` for `Either` and `Outcome`.
//! - `proptest`: `Arbitrary` for `Either` and `Outcome`.
//! - `async`: conversions from tokio `JoinHandle`s.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod adapters;
pub mod attempt;
pub mod either;
pub mod error;
pub mod extensions;
pub mod fault;
pub mod outcome;
pub mod testing;

// Re-exports
pub use attempt::Try;
pub use either::Either;
pub use error::ContainerError;
pub use fault::{Fault, RuntimeFault};
pub use outcome::Outcome;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::{
        safe_function_either, safe_function_optional, safe_function_try, wrap_bi_consumer,
        wrap_bi_function, wrap_consumer, wrap_function, wrap_runnable, wrap_supplier,
    };
    pub use crate::attempt::Try;
    pub use crate::either::Either;
    pub use crate::error::ContainerError;
    pub use crate::fault::{Fault, RuntimeFault};
    pub use crate::outcome::Outcome;
}

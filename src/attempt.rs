//! The `Try` container: a computation that either produced a value or raised a fault.
//!
//! `Try<T>` is entered once, at construction, and never changes state. The only
//! place that evaluates user code and catches what it raises is the *catch
//! discipline*: [`Try::of`], and the callbacks of [`Try::map`], [`Try::and_then`],
//! [`Try::recover`] and [`Try::recover_with`]. In each of these an `Err` result
//! or a panic becomes a `Failure` instead of escaping the call.
//!
//! Everything else propagates a `Failure` structurally. A fault is only raised
//! again when asked for explicitly with [`Try::get`] or [`Try::get_or_throw`].
//!
//! # Examples
//!
//! ```rust
//! use saferail::Try;
//!
//! let port = Try::of(|| "8080".parse::<u16>())
//!     .map(|p| p + 1)
//!     .filter(|p| *p < 9000, || saferail::Fault::msg("port out of range"));
//!
//! assert_eq!(port.get().ok(), Some(8081));
//!
//! let bad = Try::of(|| "http".parse::<u16>());
//! assert!(bad.is_failure_of::<std::num::ParseIntError>());
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::either::Either;
use crate::error::{ContainerError, Side};
use crate::fault::{capture, Fault, RuntimeFault};
use crate::outcome::Outcome;

/// A value, or the fault raised while trying to produce it.
#[derive(Clone, Debug, PartialEq)]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation raised a fault.
    Failure(Fault),
}

impl<T> Try<T> {
    /// Run `supplier` under the catch discipline.
    ///
    /// An `Ok` becomes `Success`. An `Err`, or a panic raised by `supplier`,
    /// becomes `Failure`.
    ///
    /// ```rust
    /// use saferail::{Fault, Try};
    ///
    /// let ok = Try::of(|| Ok::<_, Fault>(2 + 2));
    /// assert_eq!(ok, Try::success(4));
    ///
    /// let panicked = Try::of(|| -> Result<i32, Fault> { panic!("boom") });
    /// assert_eq!(panicked.get_error().unwrap().to_string(), "boom");
    /// ```
    pub fn of<F, E>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<Fault>,
    {
        Try::from_result(capture(|| supplier().map_err(Into::into)))
    }

    /// Create a successful `Try`.
    #[inline]
    pub fn success(value: T) -> Self {
        Try::Success(value)
    }

    /// Create a failed `Try`.
    #[inline]
    pub fn failure(fault: impl Into<Fault>) -> Self {
        Try::Failure(fault.into())
    }

    /// Create a successful `Try`, rejecting a missing value with
    /// [`ContainerError::NullPayload`].
    pub fn try_success(value: Option<T>) -> Result<Self, ContainerError> {
        value.map(Try::Success).ok_or(ContainerError::NullPayload)
    }

    /// Create from a `Result` whose error is already a [`Fault`].
    #[inline]
    pub fn from_result(result: Result<T, Fault>) -> Self {
        match result {
            Ok(value) => Try::Success(value),
            Err(fault) => Try::Failure(fault),
        }
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Try::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns `true` only for a `Failure` whose fault is an `E`.
    pub fn is_failure_of<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        match self {
            Try::Success(_) => false,
            Try::Failure(fault) => fault.is::<E>(),
        }
    }

    /// Return the value, or raise the captured fault.
    #[inline]
    pub fn get(self) -> Result<T, Fault> {
        match self {
            Try::Success(value) => Ok(value),
            Try::Failure(fault) => Err(fault),
        }
    }

    /// Borrow the captured fault, or report that none is present.
    pub fn get_error(&self) -> Result<&Fault, ContainerError> {
        match self {
            Try::Success(_) => Err(ContainerError::NoValuePresent {
                expected: Side::Failure,
            }),
            Try::Failure(fault) => Ok(fault),
        }
    }

    /// Return the value or `default`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        self.fold(|_| default, |value| value)
    }

    /// Return the value or compute one from the fault.
    #[inline]
    pub fn get_or_else_get<F>(self, f: F) -> T
    where
        F: FnOnce(Fault) -> T,
    {
        self.fold(f, |value| value)
    }

    /// Return the value, or raise the error `mapper` builds from the fault.
    ///
    /// ```rust
    /// use saferail::{Fault, Try};
    /// use saferail::fault::RuntimeFault;
    /// use std::error::Error;
    ///
    /// let login = Try::of(|| -> Result<(), Fault> { Err(Fault::msg("boom")) });
    /// let err = login
    ///     .get_or_throw(|fault| RuntimeFault::with_cause("Auth failed", fault))
    ///     .unwrap_err();
    ///
    /// assert_eq!(err.to_string(), "Auth failed");
    /// assert_eq!(err.source().unwrap().to_string(), "boom");
    /// ```
    pub fn get_or_throw<X, F>(self, mapper: F) -> Result<T, X>
    where
        F: FnOnce(Fault) -> X,
    {
        match self {
            Try::Success(value) => Ok(value),
            Try::Failure(fault) => Err(mapper(fault)),
        }
    }

    /// Return the value, or raise the fault wrapped in a [`RuntimeFault`]
    /// whose message is the fault's own message.
    pub fn get_or_throw_unchecked(self) -> Result<T, RuntimeFault> {
        self.get_or_throw(|fault| RuntimeFault::with_cause(fault.to_string(), fault))
    }

    /// Transform the value under the catch discipline.
    ///
    /// A panic raised by `f` becomes a `Failure`. A `Failure` passes through
    /// without calling `f`.
    pub fn map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Try::Success(value) => Try::of(|| Ok::<_, Fault>(f(value))),
            Try::Failure(fault) => Try::Failure(fault),
        }
    }

    /// Transform the value with a fallible function under the catch discipline.
    ///
    /// An `Err` or a panic from `f` becomes a `Failure`.
    pub fn try_map<U, E, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Into<Fault>,
    {
        match self {
            Try::Success(value) => Try::of(|| f(value)),
            Try::Failure(fault) => Try::Failure(fault),
        }
    }

    /// Chain a computation producing another `Try` (flatMap).
    ///
    /// A panic raised by `f` becomes a `Failure`.
    pub fn and_then<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Try::Success(value) => flatten_captured(capture(|| Ok(f(value)))),
            Try::Failure(fault) => Try::Failure(fault),
        }
    }

    /// Alias for [`Try::and_then`].
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        self.and_then(f)
    }

    /// Turn a `Failure` into a value under the catch discipline.
    ///
    /// If `f` panics the result is a `Failure` carrying the new fault.
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            Try::Failure(fault) => Try::of(|| Ok::<_, Fault>(f(fault))),
            success => success,
        }
    }

    /// Replace a `Failure` with the `Try` produced by `f`.
    ///
    /// The call to `f` is guarded; the `Try` it returns is used as-is.
    pub fn recover_with<F>(self, f: F) -> Self
    where
        F: FnOnce(Fault) -> Try<T>,
    {
        match self {
            Try::Failure(fault) => flatten_captured(capture(|| Ok(f(fault)))),
            success => success,
        }
    }

    /// Turn a `Success` whose value fails `predicate` into a `Failure` built
    /// by `fault_supplier`.
    pub fn filter<P, S, X>(self, predicate: P, fault_supplier: S) -> Self
    where
        P: FnOnce(&T) -> bool,
        S: FnOnce() -> X,
        X: Into<Fault>,
    {
        match self {
            Try::Success(value) => {
                if predicate(&value) {
                    Try::Success(value)
                } else {
                    Try::Failure(fault_supplier().into())
                }
            }
            failure => failure,
        }
    }

    /// Fold both variants into one value. Exactly one function is called.
    #[inline]
    pub fn fold<U, F, G>(self, failure_fn: F, success_fn: G) -> U
    where
        F: FnOnce(Fault) -> U,
        G: FnOnce(T) -> U,
    {
        match self {
            Try::Success(value) => success_fn(value),
            Try::Failure(fault) => failure_fn(fault),
        }
    }

    /// Run `action` on the value, if any, and return self.
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Try::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Run `action` on the fault, if any, and return self.
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&Fault),
    {
        if let Try::Failure(fault) = &self {
            action(fault);
        }
        self
    }

    /// Same as [`Try::on_success`].
    #[inline]
    pub fn peek<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.on_success(action)
    }

    /// Same as [`Try::on_failure`].
    #[inline]
    pub fn peek_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&Fault),
    {
        self.on_failure(action)
    }

    /// Keep the value and discard a fault.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.get().ok()
    }

    /// Convert to an [`Either`], mapping the fault into the left side.
    ///
    /// ```rust
    /// use saferail::{Either, Fault, Try};
    ///
    /// let failed: Try<i32> = Try::failure(Fault::msg("nope"));
    /// assert_eq!(failed.to_either(|f| f.to_string()), Either::left("nope".to_string()));
    /// ```
    pub fn to_either<L, F>(self, mapper: F) -> Either<L, T>
    where
        F: FnOnce(Fault) -> L,
    {
        match self {
            Try::Success(value) => Either::Right(value),
            Try::Failure(fault) => Either::Left(mapper(fault)),
        }
    }

    /// Convert to an [`Outcome`] whose failure is the captured fault.
    #[inline]
    pub fn into_outcome(self) -> Outcome<T, Fault> {
        Outcome::from_result(self.get())
    }

    /// Lazily yield the value, if present: zero or one item.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let value = match self {
            Try::Success(value) => Some(value),
            Try::Failure(_) => None,
        };
        value.into_iter()
    }
}

fn flatten_captured<T>(result: Result<Try<T>, Fault>) -> Try<T> {
    match result {
        Ok(inner) => inner,
        Err(fault) => Try::Failure(fault),
    }
}

impl<T> From<Result<T, Fault>> for Try<T> {
    fn from(result: Result<T, Fault>) -> Self {
        Try::from_result(result)
    }
}

impl<T> IntoIterator for Try<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

/// Renders as `Success(..)`, or `Failure(..)` around the fault's message.
impl<T: fmt::Display> fmt::Display for Try<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Try::Success(value) => write!(f, "Success({})", value),
            Try::Failure(fault) => write!(f, "Failure({})", fault),
        }
    }
}

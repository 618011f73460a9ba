//! A success-or-typed-failure container.
//!
//! `Outcome<T, E>` has the same algebra as [`Either`](crate::Either), but its
//! variants are named for what they mean: `Success(T)` or `Failure(E)`. There
//! is no question about which side is the error.
//!
//! On top of the shared algebra it offers defaulting (`get_or_else`), failure
//! transformation (`map_error`), and predicate filtering (`filter`).
//!
//! # Examples
//!
//! ```rust
//! use saferail::Outcome;
//!
//! let parsed: Outcome<i32, String> = Outcome::failure("123".to_string())
//!     .recover_with(|raw| match raw.parse::<i32>() {
//!         Ok(n) => Outcome::success(n),
//!         Err(_) => Outcome::failure(raw),
//!     });
//!
//! assert_eq!(parsed.get(), Ok(&123));
//! ```

use std::fmt;

use crate::either::Either;
use crate::error::{ContainerError, Side};

/// Either a `Success(T)` or a `Failure(E)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The operation succeeded with a value.
    Success(T),
    /// The operation failed with an error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Create a successful outcome.
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Create a failed outcome.
    #[inline]
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Create a successful outcome, rejecting a missing value with
    /// [`ContainerError::NullPayload`].
    pub fn try_success(value: Option<T>) -> Result<Self, ContainerError> {
        value.map(Outcome::Success).ok_or(ContainerError::NullPayload)
    }

    /// Create a failed outcome, rejecting a missing error with
    /// [`ContainerError::NullPayload`].
    pub fn try_failure(error: Option<E>) -> Result<Self, ContainerError> {
        error.map(Outcome::Failure).ok_or(ContainerError::NullPayload)
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the success value, or report that none is present.
    pub fn get(&self) -> Result<&T, ContainerError> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(_) => Err(ContainerError::NoValuePresent {
                expected: Side::Success,
            }),
        }
    }

    /// Borrow the failure value, or report that none is present.
    pub fn get_error(&self) -> Result<&E, ContainerError> {
        match self {
            Outcome::Success(_) => Err(ContainerError::NoValuePresent {
                expected: Side::Failure,
            }),
            Outcome::Failure(error) => Ok(error),
        }
    }

    /// Return the success value or `default`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        self.fold(|_| default, |value| value)
    }

    /// Return the success value or compute one from the error.
    #[inline]
    pub fn get_or_else_get<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.fold(f, |value| value)
    }

    /// Return the success value, or raise the fault built from the error.
    ///
    /// ```rust
    /// use saferail::Outcome;
    /// use saferail::fault::RuntimeFault;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::failure("no user");
    /// let err = failed.or_else_throw(RuntimeFault::new).unwrap_err();
    /// assert_eq!(err.message(), "no user");
    /// ```
    pub fn or_else_throw<X, F>(self, mapper: F) -> Result<T, X>
    where
        F: FnOnce(E) -> X,
    {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(mapper(error)),
        }
    }

    /// Transform the success value. A `Failure` passes through and `f` is not
    /// called.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chain a computation that may itself fail (flatMap).
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Alias for [`Outcome::and_then`].
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.and_then(f)
    }

    /// Transform the error. A `Success` keeps its value and only changes its
    /// error type.
    ///
    /// ```rust
    /// use saferail::Outcome;
    ///
    /// let failed: Outcome<(), &str> = Outcome::failure("123");
    /// let mapped = failed.map_error(|s| s.parse::<i32>().unwrap_or(-1));
    /// assert_eq!(mapped.get_error(), Ok(&123));
    /// ```
    #[inline]
    pub fn map_error<F2, F>(self, f: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Fold both variants into one value. Exactly one function is called.
    #[inline]
    pub fn fold<U, F, G>(self, failure_fn: F, success_fn: G) -> U
    where
        F: FnOnce(E) -> U,
        G: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => success_fn(value),
            Outcome::Failure(error) => failure_fn(error),
        }
    }

    /// Turn a `Success` whose value fails `predicate` into a `Failure`.
    ///
    /// ```rust
    /// use saferail::Outcome;
    ///
    /// let age: Outcome<u32, String> = Outcome::success(15);
    /// let adult = age.filter(|a| *a >= 18, |a| format!("{} is under 18", a));
    /// assert_eq!(adult, Outcome::failure("15 is under 18".to_string()));
    /// ```
    pub fn filter<P, F>(self, predicate: P, error_fn: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> E,
    {
        match self {
            Outcome::Success(value) => {
                if predicate(&value) {
                    Outcome::Success(value)
                } else {
                    Outcome::Failure(error_fn(value))
                }
            }
            failure => failure,
        }
    }

    /// Turn a `Failure` into a `Success` using `f`.
    #[inline]
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Failure(error) => Outcome::Success(f(error)),
            success => success,
        }
    }

    /// Replace a `Failure` with the outcome produced by `f`.
    #[inline]
    pub fn recover_with<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Outcome<T, E>,
    {
        match self {
            Outcome::Failure(error) => f(error),
            success => success,
        }
    }

    /// Run `action` on the success value, if any, and return self.
    pub fn on_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Run `action` on the error, if any, and return self.
    pub fn on_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Run `inspector` on the whole outcome and return self.
    pub fn peek<F>(self, inspector: F) -> Self
    where
        F: FnOnce(&Self),
    {
        inspector(&self);
        self
    }

    /// Convert to an [`Either`]: Failure becomes Left, Success becomes Right.
    #[inline]
    pub fn to_either(self) -> Either<E, T> {
        match self {
            Outcome::Success(value) => Either::Right(value),
            Outcome::Failure(error) => Either::Left(error),
        }
    }

    /// Keep the success value and discard an error.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Convert to a std `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Create from a std `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }

    /// Iterate over the success value, if present.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.get().ok().into_iter()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

/// Renders as `Success(..)` or `Failure(..)` around the payload's own `Display`.
impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success({})", value),
            Outcome::Failure(error) => write!(f, "Failure({})", error),
        }
    }
}

//! A disjoint union of two values, right-biased.
//!
//! `Either<L, R>` holds exactly one of a `Left(L)` or a `Right(R)`. Neither side
//! is privileged by the type itself, but the combinators follow the usual
//! convention: `Right` is the value flowing down the pipeline and `Left` is the
//! failure that short-circuits it. `map`, `and_then` and friends act on `Right`
//! and pass a `Left` through untouched.
//!
//! # Examples
//!
//! ```rust
//! use saferail::Either;
//!
//! fn parse(s: &str) -> Either<String, i32> {
//!     match s.parse() {
//!         Ok(n) => Either::right(n),
//!         Err(_) => Either::left(format!("not a number: {}", s)),
//!     }
//! }
//!
//! let doubled = parse("10").map(|n| n * 2);
//! assert_eq!(doubled, Either::right(20));
//!
//! let recovered = parse("ten").recover(|_| 0);
//! assert_eq!(recovered, Either::right(0));
//! ```

use std::fmt;

use crate::error::{ContainerError, Side};
use crate::outcome::Outcome;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// By convention `Left` carries an error and `Right` carries a success value.
/// Every transformation returns a new `Either`; nothing is mutated in place.
///
/// # Example
///
/// ```rust
/// use saferail::Either;
///
/// let e: Either<&str, i32> = Either::right(21);
///
/// let text = e.fold(
///     |err| format!("failed: {}", err),
///     |n| format!("got {}", n * 2),
/// );
/// assert_eq!(text, "got 42");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally the failure.
    Left(L),
    /// The right variant, conventionally the success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a Left value.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Create a Left value from a possibly missing payload.
    ///
    /// Returns [`ContainerError::NullPayload`] when `value` is `None`.
    ///
    /// ```rust
    /// use saferail::{ContainerError, Either};
    ///
    /// assert_eq!(Either::<i32, ()>::try_left(Some(1)), Ok(Either::left(1)));
    /// assert_eq!(Either::<i32, ()>::try_left(None), Err(ContainerError::NullPayload));
    /// ```
    pub fn try_left(value: Option<L>) -> Result<Self, ContainerError> {
        value.map(Either::Left).ok_or(ContainerError::NullPayload)
    }

    /// Create a Right value from a possibly missing payload.
    ///
    /// Returns [`ContainerError::NullPayload`] when `value` is `None`.
    pub fn try_right(value: Option<R>) -> Result<Self, ContainerError> {
        value.map(Either::Right).ok_or(ContainerError::NullPayload)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    // ========== Extractors ==========

    /// Borrow the left value.
    ///
    /// Returns [`ContainerError::NoValuePresent`] if this is a `Right`.
    ///
    /// ```rust
    /// use saferail::Either;
    ///
    /// let left: Either<&str, i32> = Either::left("err");
    /// assert_eq!(left.get_left(), Ok(&"err"));
    /// assert!(left.get_right().is_err());
    /// ```
    pub fn get_left(&self) -> Result<&L, ContainerError> {
        match self {
            Either::Left(l) => Ok(l),
            Either::Right(_) => Err(ContainerError::NoValuePresent {
                expected: Side::Left,
            }),
        }
    }

    /// Borrow the right value.
    ///
    /// Returns [`ContainerError::NoValuePresent`] if this is a `Left`.
    pub fn get_right(&self) -> Result<&R, ContainerError> {
        match self {
            Either::Left(_) => Err(ContainerError::NoValuePresent {
                expected: Side::Right,
            }),
            Either::Right(r) => Ok(r),
        }
    }

    /// Returns the left value if present, consuming self.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value if present, consuming self.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Convert to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Extract the left value, panicking if Right.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Right`.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Either::Left(l) => l,
            Either::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Extract the right value, panicking if Left.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Left`.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Either::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Either::Right(r) => r,
        }
    }

    /// Return the right value or `default`.
    #[inline]
    pub fn right_or(self, default: R) -> R {
        match self {
            Either::Left(_) => default,
            Either::Right(r) => r,
        }
    }

    /// Return the right value or compute one from the left.
    #[inline]
    pub fn right_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => r,
        }
    }

    // ========== Transformations ==========

    /// Transform the right value. A `Left` is returned unchanged and `f` is
    /// never called.
    ///
    /// ```rust
    /// use saferail::Either;
    ///
    /// let right: Either<&str, i32> = Either::right(10);
    /// let left: Either<&str, i32> = Either::left("err");
    ///
    /// assert_eq!(right.map(|i| i * 2), Either::right(20));
    /// assert_eq!(left.map(|i| i * 2), Either::left("err"));
    /// ```
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transform the left value, passing right values through unchanged.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform whichever side is present.
    #[inline]
    pub fn bimap<L2, R2, F, G>(self, f: F, g: G) -> Either<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(g(r)),
        }
    }

    /// Swap Left and Right.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Chain a computation on the right value (flatMap).
    ///
    /// On `Right`, the container returned by `f` is the result. On `Left`,
    /// the left value is propagated and `f` is never called.
    ///
    /// ```rust
    /// use saferail::Either;
    ///
    /// fn half(n: i32) -> Either<String, i32> {
    ///     if n % 2 == 0 {
    ///         Either::right(n / 2)
    ///     } else {
    ///         Either::left(format!("{} is odd", n))
    ///     }
    /// }
    ///
    /// assert_eq!(Either::right(8).and_then(half).and_then(half), Either::right(2));
    /// assert_eq!(Either::right(6).and_then(half).and_then(half), Either::left("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn and_then<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Alias for [`Either::and_then`].
    #[inline]
    pub fn flat_map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        self.and_then(f)
    }

    /// Like [`Either::and_then`], for callbacks that may produce no container.
    ///
    /// A `None` from `f` is a contract violation and yields
    /// [`ContainerError::NullPayload`]. A `Left` is propagated without calling `f`.
    pub fn try_and_then<R2, F>(self, f: F) -> Result<Either<L, R2>, ContainerError>
    where
        F: FnOnce(R) -> Option<Either<L, R2>>,
    {
        match self {
            Either::Left(l) => Ok(Either::Left(l)),
            Either::Right(r) => f(r).ok_or(ContainerError::NullPayload),
        }
    }

    /// Chain a computation on the left value, possibly changing its type.
    #[inline]
    pub fn or_else<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        match self {
            Either::Left(l) => f(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Turn a `Left` into a `Right` using `f`. A `Right` is returned unchanged.
    ///
    /// ```rust
    /// use saferail::Either;
    ///
    /// let e: Either<&str, i32> = Either::left("err");
    /// assert_eq!(e.recover(|_| 0), Either::right(0));
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Left(l) => Either::Right(f(l)),
            right => right,
        }
    }

    /// Replace a `Left` with the container produced by `f`.
    #[inline]
    pub fn recover_with<F>(self, f: F) -> Self
    where
        F: FnOnce(L) -> Either<L, R>,
    {
        match self {
            Either::Left(l) => f(l),
            right => right,
        }
    }

    /// Like [`Either::recover_with`], for callbacks that may produce no container.
    ///
    /// A `None` from `f` yields [`ContainerError::NullPayload`].
    pub fn try_recover_with<F>(self, f: F) -> Result<Self, ContainerError>
    where
        F: FnOnce(L) -> Option<Either<L, R>>,
    {
        match self {
            Either::Left(l) => f(l).ok_or(ContainerError::NullPayload),
            right => Ok(right),
        }
    }

    // ========== Elimination and Observation ==========

    /// Fold both variants into a single value. Exactly one of the two
    /// functions is called.
    #[inline]
    pub fn fold<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }

    /// Run `action` on the left value, if any, and return self.
    ///
    /// ```rust
    /// use saferail::Either;
    ///
    /// let mut seen = Vec::new();
    /// let e: Either<&str, i32> = Either::left("err");
    /// let e = e.if_left(|l| seen.push(l.to_string())).if_right(|_| unreachable!());
    ///
    /// assert!(e.is_left());
    /// assert_eq!(seen, vec!["err"]);
    /// ```
    pub fn if_left<F>(self, action: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Either::Left(l) = &self {
            action(l);
        }
        self
    }

    /// Run `action` on the right value, if any, and return self.
    pub fn if_right<F>(self, action: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Either::Right(r) = &self {
            action(r);
        }
        self
    }

    /// Run `inspector` on the whole container, whichever variant it is, and
    /// return self.
    pub fn peek<F>(self, inspector: F) -> Self
    where
        F: FnOnce(&Self),
    {
        inspector(&self);
        self
    }

    // ========== Conversions ==========

    /// Keep the right value and discard a left one.
    ///
    /// The left payload is lost: `Option` has no slot for it.
    #[inline]
    pub fn into_option(self) -> Option<R> {
        self.into_right()
    }

    /// Convert to `Result` (Right becomes Ok, Left becomes Err).
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Create from `Result` (Ok becomes Right, Err becomes Left).
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    /// Convert to [`Outcome`] (Right becomes Success, Left becomes Failure).
    #[inline]
    pub fn into_outcome(self) -> Outcome<R, L> {
        match self {
            Either::Left(l) => Outcome::Failure(l),
            Either::Right(r) => Outcome::Success(r),
        }
    }

    // ========== Iterator Support ==========

    /// Iterate over the right value, if present.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.as_ref().into_right().into_iter()
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Flatten a nested Either.
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.and_then(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L, R> Default for Either<L, R>
where
    R: Default,
{
    /// Returns `Either::Right(R::default())`.
    fn default() -> Self {
        Either::Right(R::default())
    }
}

impl<L, R> IntoIterator for Either<L, R> {
    type Item = R;
    type IntoIter = std::option::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_right().into_iter()
    }
}

impl<'a, L, R> IntoIterator for &'a Either<L, R> {
    type Item = &'a R;
    type IntoIter = std::option::IntoIter<&'a R>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_right().into_iter()
    }
}

// ========== Collection Utilities ==========

/// Split a sequence of `Either` values into lefts and rights, keeping order.
///
/// # Example
///
/// ```rust
/// use saferail::either::{partition, Either};
///
/// let parsed: Vec<Either<String, i32>> = ["1", "x", "3"]
///     .iter()
///     .map(|s| Either::from_result(s.parse::<i32>().map_err(|_| s.to_string())))
///     .collect();
///
/// let (bad, good) = partition(parsed);
/// assert_eq!(bad, vec!["x".to_string()]);
/// assert_eq!(good, vec![1, 3]);
/// ```
pub fn partition<L, R, I>(iter: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Either<L, R>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();

    for item in iter {
        match item {
            Either::Left(l) => lefts.push(l),
            Either::Right(r) => rights.push(r),
        }
    }

    (lefts, rights)
}

/// Keep only the left values of a sequence.
pub fn lefts<L, R, I>(iter: I) -> impl Iterator<Item = L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(Either::into_left)
}

/// Keep only the right values of a sequence.
pub fn rights<L, R, I>(iter: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    iter.into_iter().filter_map(Either::into_right)
}

/// Renders as `Left(..)` or `Right(..)` around the payload's own `Display`.
impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left({})", l),
            Either::Right(r) => write!(f, "Right({})", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_display() {
        assert_eq!(Either::<&str, i32>::right(5).to_string(), "Right(5)");
        assert_eq!(Either::<&str, i32>::left("nope").to_string(), "Left(nope)");
    }

    #[test]
    fn test_constructors_and_predicates() {
        let left: Either<i32, &str> = Either::left(42);
        let right: Either<i32, &str> = Either::right("hello");

        assert!(left.is_left());
        assert!(!left.is_right());
        assert!(right.is_right());
        assert!(!right.is_left());
    }

    #[test]
    fn test_try_constructors_reject_missing_payload() {
        assert_eq!(Either::<i32, i32>::try_right(Some(1)), Ok(Either::right(1)));
        assert_eq!(
            Either::<i32, i32>::try_right(None),
            Err(ContainerError::NullPayload)
        );
        assert_eq!(
            Either::<i32, i32>::try_left(None),
            Err(ContainerError::NullPayload)
        );
    }

    #[test]
    fn test_get_wrong_side_is_no_value_present() {
        let left: Either<&str, i32> = Either::left("err");
        assert_eq!(left.get_left(), Ok(&"err"));
        assert_eq!(
            left.get_right(),
            Err(ContainerError::NoValuePresent {
                expected: Side::Right
            })
        );

        let right: Either<&str, i32> = Either::right(1);
        assert_eq!(right.get_right(), Ok(&1));
        assert_eq!(
            right.get_left(),
            Err(ContainerError::NoValuePresent {
                expected: Side::Left
            })
        );
    }

    #[test]
    fn test_map_right_value() {
        let e: Either<&str, i32> = Either::right(10);
        assert_eq!(e.map(|i| i * 2).get_right(), Ok(&20));
    }

    #[test]
    fn test_map_left_short_circuits() {
        let calls = Cell::new(0);
        let e: Either<&str, i32> = Either::left("err");
        let mapped = e.map(|i| {
            calls.set(calls.get() + 1);
            i * 2
        });

        assert!(mapped.is_left());
        assert_eq!(mapped.get_left(), Ok(&"err"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_map_left_and_bimap() {
        let e: Either<i32, &str> = Either::left(21);
        assert_eq!(e.map_left(|x| x * 2), Either::left(42));

        let e: Either<i32, &str> = Either::right("hello");
        assert_eq!(e.bimap(|x| x + 1, |s| s.len()), Either::right(5));
    }

    #[test]
    fn test_swap() {
        let e: Either<i32, &str> = Either::left(42);
        assert_eq!(e.swap(), Either::right(42));
        assert_eq!(e.swap().swap(), e);
    }

    #[test]
    fn test_and_then() {
        let e: Either<&str, i32> = Either::right(21);
        assert_eq!(e.and_then(|x| Either::right(x * 2)), Either::right(42));
        assert_eq!(
            e.flat_map(|_| Either::<&str, i32>::left("nope")),
            Either::left("nope")
        );

        let e: Either<&str, i32> = Either::left("error");
        assert_eq!(e.and_then(|x| Either::right(x * 2)), Either::left("error"));
    }

    #[test]
    fn test_try_and_then_missing_container() {
        let e: Either<&str, i32> = Either::right(1);
        assert_eq!(
            e.try_and_then(|_| None::<Either<&str, i32>>),
            Err(ContainerError::NullPayload)
        );
        assert_eq!(
            e.try_and_then(|x| Some(Either::right(x + 1))),
            Ok(Either::right(2))
        );

        let e: Either<&str, i32> = Either::left("err");
        assert_eq!(
            e.try_and_then(|_| None::<Either<&str, i32>>),
            Ok(Either::left("err"))
        );
    }

    #[test]
    fn test_fold_calls_exactly_one_side() {
        let left_calls = Cell::new(0);
        let right_calls = Cell::new(0);

        let e: Either<&str, i32> = Either::right(5);
        let out = e.fold(
            |_| {
                left_calls.set(left_calls.get() + 1);
                0
            },
            |r| {
                right_calls.set(right_calls.get() + 1);
                r
            },
        );

        assert_eq!(out, 5);
        assert_eq!(left_calls.get(), 0);
        assert_eq!(right_calls.get(), 1);
    }

    #[test]
    fn test_if_left_if_right_return_self() {
        let hits = Cell::new(0);
        let e: Either<&str, i32> = Either::right(3);
        let same = e
            .if_left(|_| hits.set(hits.get() + 100))
            .if_right(|r| hits.set(hits.get() + r));

        assert_eq!(same, e);
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_peek_sees_both_variants() {
        let seen = Cell::new(0);
        let left: Either<&str, i32> = Either::left("err");
        let right: Either<&str, i32> = Either::right(1);

        assert_eq!(left.peek(|_| seen.set(seen.get() + 1)), left);
        assert_eq!(right.peek(|_| seen.set(seen.get() + 1)), right);
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_recover() {
        let e: Either<&str, i32> = Either::left("err");
        assert_eq!(e.recover(|_| 0), Either::right(0));

        let e: Either<&str, i32> = Either::right(7);
        assert_eq!(e.recover(|_| 0), Either::right(7));
    }

    #[test]
    fn test_recover_with() {
        let e: Either<&str, i32> = Either::left("err");
        assert_eq!(e.recover_with(|_| Either::left("still")), Either::left("still"));
        assert_eq!(e.recover_with(|l| Either::right(l.len() as i32)), Either::right(3));
        assert_eq!(
            e.try_recover_with(|_| None),
            Err(ContainerError::NullPayload)
        );

        let e: Either<&str, i32> = Either::right(7);
        assert_eq!(e.try_recover_with(|_| None), Ok(Either::right(7)));
    }

    #[test]
    fn test_or_else() {
        let e: Either<i32, &str> = Either::left(1);
        assert_eq!(
            e.or_else(|_| Either::<String, &str>::right("recovered")),
            Either::right("recovered")
        );
    }

    #[test]
    fn test_into_option_drops_left() {
        let e: Either<&str, i32> = Either::right(4);
        assert_eq!(e.into_option(), Some(4));

        let e: Either<&str, i32> = Either::left("err");
        assert_eq!(e.into_option(), None);
    }

    #[test]
    fn test_result_conversion() {
        let ok: Result<i32, &str> = Ok(42);
        let either: Either<&str, i32> = ok.into();
        assert_eq!(either, Either::right(42));

        let back: Result<i32, &str> = Either::<&str, i32>::left("error").into();
        assert_eq!(back, Err("error"));
    }

    #[test]
    fn test_into_outcome() {
        let e: Either<&str, i32> = Either::right(1);
        assert_eq!(e.into_outcome(), Outcome::success(1));

        let e: Either<&str, i32> = Either::left("bad");
        assert_eq!(e.into_outcome(), Outcome::failure("bad"));
    }

    #[test]
    fn test_flatten() {
        let nested: Either<&str, Either<&str, i32>> = Either::right(Either::left("inner"));
        assert_eq!(nested.flatten(), Either::left("inner"));

        let nested: Either<&str, Either<&str, i32>> = Either::left("outer");
        assert_eq!(nested.flatten(), Either::left("outer"));
    }

    #[test]
    fn test_iteration() {
        let right: Either<&str, i32> = Either::right(42);
        assert_eq!(right.iter().collect::<Vec<_>>(), vec![&42]);
        assert_eq!(right.into_iter().collect::<Vec<_>>(), vec![42]);

        let left: Either<&str, i32> = Either::left("error");
        assert_eq!((&left).into_iter().count(), 0);
    }

    #[test]
    fn test_partition_lefts_rights() {
        let items = vec![
            Either::left(1),
            Either::right("a"),
            Either::left(2),
            Either::right("b"),
        ];

        assert_eq!(lefts(items.clone()).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(rights(items.clone()).collect::<Vec<_>>(), vec!["a", "b"]);

        let (ls, rs) = partition(items);
        assert_eq!(ls, vec![1, 2]);
        assert_eq!(rs, vec!["a", "b"]);
    }

    #[test]
    fn test_default() {
        let e: Either<&str, i32> = Either::default();
        assert_eq!(e, Either::right(0));
    }
}

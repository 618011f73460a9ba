//! Testing helpers for code built on the containers.
//!
//! Assertion macros that print the unexpected variant on failure, plus
//! `proptest::arbitrary::Arbitrary` impls for [`Either`](crate::Either) and
//! [`Outcome`](crate::Outcome) behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use saferail::{assert_failure, assert_right, assert_success, Either, Outcome, Try};
//!
//! assert_right!(Either::<&str, i32>::right(1));
//! assert_success!(Outcome::<i32, &str>::success(1));
//! assert_success!(Try::of(|| "1".parse::<i32>()));
//! assert_failure!(Try::of(|| "one".parse::<i32>()));
//! ```

/// Assert that an `Either` is a `Right`.
///
/// Panics with the left value otherwise.
#[macro_export]
macro_rules! assert_right {
    ($either:expr) => {
        match $either {
            $crate::Either::Right(_) => {}
            $crate::Either::Left(l) => {
                panic!("Expected Right, got Left: {:?}", l);
            }
        }
    };
}

/// Assert that an `Either` is a `Left`.
///
/// Panics with the right value otherwise.
#[macro_export]
macro_rules! assert_left {
    ($either:expr) => {
        match $either {
            $crate::Either::Left(_) => {}
            $crate::Either::Right(r) => {
                panic!("Expected Left, got Right: {:?}", r);
            }
        }
    };
}

/// Assert that an `Outcome` or a `Try` succeeded.
#[macro_export]
macro_rules! assert_success {
    ($container:expr) => {
        let container = $container;
        if !container.is_success() {
            panic!("Expected Success, got {:?}", container);
        }
    };
}

/// Assert that an `Outcome` or a `Try` failed.
#[macro_export]
macro_rules! assert_failure {
    ($container:expr) => {
        let container = $container;
        if container.is_success() {
            panic!("Expected Failure, got {:?}", container);
        }
    };
}

/// Assert that a `Try` failed with a fault of the given error type.
///
/// ```rust
/// use saferail::{assert_failure_of, Try};
///
/// assert_failure_of!(Try::of(|| "x".parse::<u8>()), std::num::ParseIntError);
/// ```
#[macro_export]
macro_rules! assert_failure_of {
    ($attempt:expr, $fault:ty) => {
        let attempt = $attempt;
        if !attempt.is_failure_of::<$fault>() {
            panic!(
                "Expected Failure of {}, got {:?}",
                stringify!($fault),
                attempt
            );
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<L, R> Arbitrary for crate::Either<L, R>
where
    L: Arbitrary + 'static,
    R: Arbitrary + 'static,
{
    type Parameters = (L::Parameters, R::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (l_params, r_params) = args;
        prop_oneof![
            any_with::<L>(l_params).prop_map(crate::Either::left),
            any_with::<R>(r_params).prop_map(crate::Either::right),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for crate::Outcome<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(crate::Outcome::success),
            any_with::<E>(e_params).prop_map(crate::Outcome::failure),
        ]
        .boxed()
    }
}

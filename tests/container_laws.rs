//! Property tests for the functor and flatten laws across all three containers.

use proptest::prelude::*;
use saferail::{Either, Fault, Outcome, Try};

fn either_of(x: i32, left: bool) -> Either<String, i32> {
    if left {
        Either::left(x.to_string())
    } else {
        Either::right(x)
    }
}

fn outcome_of(x: i32, failed: bool) -> Outcome<i32, String> {
    if failed {
        Outcome::failure(x.to_string())
    } else {
        Outcome::success(x)
    }
}

fn try_of(x: i32, failed: bool) -> Try<i32> {
    if failed {
        Try::failure(Fault::msg(x.to_string()))
    } else {
        Try::success(x)
    }
}

proptest! {
    #[test]
    fn prop_identity_map(x: i32, failed: bool) {
        let e = either_of(x, failed);
        prop_assert_eq!(e.clone().map(|v| v), e);

        let o = outcome_of(x, failed);
        prop_assert_eq!(o.clone().map(|v| v), o);

        let t = try_of(x, failed);
        prop_assert_eq!(t.clone().map(|v| v), t);
    }

    #[test]
    fn prop_flat_map_into_success(x: i32, failed: bool) {
        let e = either_of(x, failed);
        prop_assert_eq!(e.clone().flat_map(Either::right), e);

        let o = outcome_of(x, failed);
        prop_assert_eq!(o.clone().flat_map(Outcome::success), o);

        let t = try_of(x, failed);
        prop_assert_eq!(t.clone().flat_map(Try::success), t);
    }

    #[test]
    fn prop_map_composition(x: i32) {
        let f = |v: i32| v.wrapping_add(7);
        let g = |v: i32| v.wrapping_mul(3);

        prop_assert_eq!(
            Either::<(), i32>::right(x).map(f).map(g),
            Either::<(), i32>::right(x).map(|v| g(f(v)))
        );
        prop_assert_eq!(
            Try::success(x).map(f).map(g),
            Try::success(x).map(|v| g(f(v)))
        );
    }

    #[test]
    fn prop_fold_runs_exactly_one_side(x: i32, failed: bool) {
        let calls = std::cell::Cell::new((0, 0));
        either_of(x, failed).fold(
            |_| calls.set((calls.get().0 + 1, calls.get().1)),
            |_| calls.set((calls.get().0, calls.get().1 + 1)),
        );
        let (lefts, rights) = calls.get();
        prop_assert_eq!(lefts + rights, 1);
        prop_assert_eq!(lefts == 1, failed);
    }

    #[test]
    fn prop_outcome_to_either_to_option(x: i32, failed: bool) {
        let expected = if failed { None } else { Some(x) };
        prop_assert_eq!(outcome_of(x, failed).to_either().into_option(), expected);
    }

    #[test]
    fn prop_try_of_keeps_fault_identity(msg in ".*") {
        let fault = Fault::msg(msg);
        let t = Try::of({
            let fault = fault.clone();
            move || Err::<i32, _>(fault)
        });
        prop_assert!(t.is_failure());
        prop_assert_eq!(t.get_error(), Ok(&fault));
    }
}

//! Unit tests for Maybe<T>.
//!
//! Maybe holds zero or one value and offers no accessor for it: callers get
//! information out through `match_with` or `fold`, which handle both cases.

#![cfg(feature = "control")]

use funcy::control::Maybe;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Introspection
// =============================================================================

#[rstest]
fn just_is_just() {
    let value = Maybe::just(42);
    assert!(value.is_just());
    assert!(!value.is_nothing());
}

#[rstest]
fn nothing_is_nothing() {
    let value: Maybe<i32> = Maybe::nothing();
    assert!(value.is_nothing());
    assert!(!value.is_just());
}

#[rstest]
#[case(Some(3), Maybe::just(3))]
#[case(None, Maybe::nothing())]
fn from_option(#[case] option: Option<i32>, #[case] expected: Maybe<i32>) {
    assert_eq!(Maybe::from(option), expected);
}

#[rstest]
fn default_is_nothing() {
    assert_eq!(Maybe::<String>::default(), Maybe::nothing());
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
#[case(0)]
#[case(7)]
#[case(-40)]
fn fmap_then_match_with_identity_applies_function(#[case] input: i32) {
    let function = |n: i32| n * 3 + 1;
    let result = Maybe::just(input).fmap(function).match_with(|n| n, || unreachable!());
    assert_eq!(result, function(input));
}

#[rstest]
fn fmap_on_nothing_never_calls_function() {
    let calls = Cell::new(0);
    let result = Maybe::<i32>::nothing().fmap(|n| {
        calls.set(calls.get() + 1);
        n.to_string()
    });
    assert!(result.is_nothing());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn fmap_changes_type() {
    let result: Maybe<String> = Maybe::just(5).fmap(|n| format!("{n}!"));
    assert_eq!(result, Maybe::just("5!".to_string()));
}

#[rstest]
fn flat_map_can_turn_just_into_nothing() {
    let halve = |n: i32| {
        if n % 2 == 0 {
            Maybe::just(n / 2)
        } else {
            Maybe::nothing()
        }
    };
    assert_eq!(Maybe::just(8).flat_map(halve), Maybe::just(4));
    assert_eq!(Maybe::just(7).flat_map(halve), Maybe::nothing());
    assert_eq!(Maybe::just(8).and_then(halve).and_then(halve), Maybe::just(2));
}

#[rstest]
fn flat_map_on_nothing_short_circuits() {
    let calls = Cell::new(0);
    let result = Maybe::<i32>::nothing().flat_map(|n| {
        calls.set(calls.get() + 1);
        Maybe::just(n)
    });
    assert!(result.is_nothing());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn or_else_only_runs_on_nothing() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        Maybe::just(0)
    };
    assert_eq!(Maybe::just(9).or_else(fallback), Maybe::just(9));
    assert_eq!(calls.get(), 0);
    assert_eq!(Maybe::nothing().or_else(fallback), Maybe::just(0));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn as_ref_borrows_without_consuming() {
    let address = Maybe::just("10.0.0.9".to_string());
    let length = address.as_ref().fmap(|s| s.len());
    assert_eq!(length, Maybe::just(8));
    assert!(address.is_just());
}

// =============================================================================
// Elimination
// =============================================================================

#[rstest]
fn match_with_invokes_exactly_one_handler() {
    let just_calls = Cell::new(0);
    let nothing_calls = Cell::new(0);

    Maybe::just(1).match_with(|_| just_calls.set(just_calls.get() + 1), || {
        nothing_calls.set(nothing_calls.get() + 1);
    });
    assert_eq!((just_calls.get(), nothing_calls.get()), (1, 0));

    Maybe::<i32>::nothing().match_with(|_| just_calls.set(just_calls.get() + 1), || {
        nothing_calls.set(nothing_calls.get() + 1);
    });
    assert_eq!((just_calls.get(), nothing_calls.get()), (1, 1));
}

#[rstest]
#[case(Maybe::just(4), 5)]
#[case(Maybe::nothing(), -1)]
fn fold_reduces_both_cases(#[case] value: Maybe<i32>, #[case] expected: i32) {
    assert_eq!(value.fold(|n| n + 1, || -1), expected);
}

// =============================================================================
// Display
// =============================================================================

#[rstest]
#[case(Maybe::just(42), "Just(42)")]
#[case(Maybe::nothing(), "Nothing")]
fn display(#[case] value: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

//! Unit tests for Maybe.
//!
//! Combinators on `Some` continue with the value; combinators on `None`
//! continue with the fallback. Callbacks for the other variant are never
//! invoked.

use kuria_collections::prelude::*;
use rstest::rstest;

fn halve(number: i32) -> Maybe<i32> {
    if number % 2 == 0 {
        Maybe::Some(number / 2)
    } else {
        Maybe::None
    }
}

// =============================================================================
// Construction and checks
// =============================================================================

#[rstest]
#[case(Some(1), true)]
#[case(None, false)]
fn maybe_from_option(#[case] option: Option<i32>, #[case] is_some: bool) {
    let maybe = Maybe::from_option(option);
    assert_eq!(maybe.is_some(), is_some);
    assert_eq!(maybe.is_none(), !is_some);
    assert_eq!(maybe.into_option(), option);
}

#[rstest]
fn maybe_default_is_none() {
    assert_eq!(Maybe::<String>::default(), Maybe::None);
}

// =============================================================================
// Chaining on Some
// =============================================================================

#[rstest]
fn maybe_and_variants() {
    assert_eq!(Maybe::Some(1).and(Maybe::Some("next")), Maybe::Some("next"));
    assert_eq!(Maybe::Some(1).and(Maybe::<&str>::None), Maybe::None);
    assert_eq!(Maybe::<i32>::None.and_some("next"), Maybe::None);
    assert_eq!(Maybe::Some(1).and_some("next"), Maybe::Some("next"));
}

#[rstest]
fn maybe_and_then_chains() {
    assert_eq!(Maybe::Some(12).and_then(halve).and_then(halve), Maybe::Some(3));
    assert_eq!(Maybe::Some(12).and_then(halve).and_then(halve).and_then(halve), Maybe::None);
    assert_eq!(Maybe::Some(4).and_then_some(|number| number * 10), Maybe::Some(40));
}

#[rstest]
fn maybe_and_do_observes_without_changing() {
    let mut seen = None;
    let maybe = Maybe::Some(5).and_do(|value| seen = Some(*value));
    assert_eq!(maybe, Maybe::Some(5));
    assert_eq!(seen, Some(5));
}

// =============================================================================
// Chaining on None
// =============================================================================

#[rstest]
fn maybe_or_variants() {
    assert_eq!(Maybe::Some(1).or(Maybe::Some(2)), Maybe::Some(1));
    assert_eq!(Maybe::None.or(Maybe::Some(2)), Maybe::Some(2));
    assert_eq!(Maybe::None.or_some(3), Maybe::Some(3));
    assert_eq!(Maybe::Some(1).or_some(3), Maybe::Some(1));
}

#[rstest]
fn maybe_or_else_variants() {
    assert_eq!(Maybe::None.or_else(|| Maybe::Some(7)), Maybe::Some(7));
    assert_eq!(Maybe::<i32>::None.or_else(|| Maybe::None), Maybe::None);
    assert_eq!(Maybe::None.or_else_some(|| 8), Maybe::Some(8));
}

#[rstest]
fn maybe_or_do_runs_only_on_none() {
    let mut calls = 0;
    let _ = Maybe::Some(1).or_do(|| calls += 1);
    let _ = Maybe::<i32>::None.or_do(|| calls += 1);
    assert_eq!(calls, 1);
}

#[rstest]
fn maybe_callbacks_for_other_variant_are_skipped() {
    let mut calls = 0;
    let kept = Maybe::Some(1)
        .or_else(|| {
            calls += 1;
            Maybe::Some(2)
        })
        .or_else_some(|| {
            calls += 1;
            3
        });
    assert_eq!(kept, Maybe::Some(1));

    let missing = Maybe::<i32>::None.and_then(|value| {
        calls += 1;
        Maybe::Some(value)
    });
    assert_eq!(missing, Maybe::None);
    assert_eq!(calls, 0);
}

// =============================================================================
// Tap and extraction
// =============================================================================

#[rstest]
fn maybe_tap_sees_either_variant() {
    let mut seen = Vec::new();
    let _ = Maybe::Some(1).tap(|maybe| seen.push(maybe.is_some()));
    let _ = Maybe::<i32>::None.tap(|maybe| seen.push(maybe.is_some()));
    assert_eq!(seen, vec![true, false]);
}

#[rstest]
#[should_panic(expected = "There is no value")]
fn maybe_unwrap_none_panics() {
    let _ = Maybe::<i32>::None.unwrap();
}

#[rstest]
#[should_panic(expected = "config missing")]
fn maybe_expect_none_panics_with_message() {
    let _ = Maybe::<i32>::None.expect("config missing");
}

#[rstest]
fn maybe_iterates_over_present_value() {
    let collected: Vec<i32> = Maybe::Some(2).into_iter().chain(Maybe::None).collect();
    assert_eq!(collected, vec![2]);
}

#[rstest]
#[case(Maybe::Some(4), "Some(4)")]
#[case(Maybe::None, "None")]
fn maybe_display(#[case] maybe: Maybe<i32>, #[case] expected: &str) {
    assert_eq!(maybe.to_string(), expected);
}

// =============================================================================
// Collection lookups
// =============================================================================

#[rstest]
fn maybe_from_collection_lookups() {
    let list = Collection::collect(["a", "b"]);
    let shouted = list
        .get(1)
        .and_then_some(|letter| letter.to_uppercase())
        .or_else_some(|| "?".to_owned());
    assert_eq!(shouted.unwrap(), "B");

    let fallback = list.get(9).cloned().or_some("z");
    assert_eq!(fallback, Maybe::Some("z"));
}

//! Unit tests for Result and its causal error chain.
//!
//! Every recovery that produces a new error links it to the failure it
//! replaced, and each link points only at the immediate predecessor.

use kuria_collections::result::{Failure, Result};
use rstest::rstest;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
enum Fetch {
    Timeout,
    NotFound,
    Refused,
}

impl fmt::Display for Fetch {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Timeout => "timed out",
            Self::NotFound => "not found",
            Self::Refused => "refused",
        };
        formatter.write_str(text)
    }
}

impl std::error::Error for Fetch {}

fn errors_of(failure: &Failure<Fetch>) -> Vec<Fetch> {
    failure.chain().map(|link| link.error().clone()).collect()
}

// =============================================================================
// Chaining on Ok
// =============================================================================

#[rstest]
fn result_and_then_runs_only_on_ok() {
    let doubled: Result<i32, Fetch> = Result::ok(4).and_then(|value| Result::ok(value * 2));
    assert_eq!(doubled, Result::ok(8));

    let mut calls = 0;
    let skipped: Result<i32, Fetch> = Result::error(Fetch::Timeout).and_then(|value| {
        calls += 1;
        Result::ok(value)
    });
    assert!(skipped.is_error());
    assert_eq!(calls, 0);
}

#[rstest]
fn result_and_replaces_ok() {
    let first: Result<i32, Fetch> = Result::ok(1);
    assert_eq!(first.and(Result::<&str, Fetch>::ok("two")), Result::ok("two"));

    let failed: Result<i32, Fetch> = Result::error(Fetch::Refused);
    assert_eq!(failed.and(Result::<&str, Fetch>::ok("two")).unwrap_error(), Fetch::Refused);
}

#[rstest]
fn result_and_do_and_or_do() {
    let mut log = Vec::new();
    let _ = Result::<i32, Fetch>::ok(3)
        .and_do(|value| log.push(format!("ok {value}")))
        .or_do(|error| log.push(format!("error {error}")));
    let _ = Result::<i32, Fetch>::error(Fetch::NotFound)
        .and_do(|value| log.push(format!("ok {value}")))
        .or_do(|error| log.push(format!("error {error}")));
    assert_eq!(log, vec!["ok 3", "error not found"]);
}

// =============================================================================
// Recovery and propagation
// =============================================================================

#[rstest]
fn result_or_links_previous_error() {
    let result: Result<i32, Fetch> =
        Result::error(Fetch::Timeout).or(Result::error(Fetch::NotFound));
    let failure = result.failure().unwrap();
    assert_eq!(errors_of(failure), vec![Fetch::NotFound, Fetch::Timeout]);
}

#[rstest]
fn result_three_chained_errors_link_immediate_predecessors() {
    let result: Result<i32, Fetch> = Result::error(Fetch::Timeout)
        .or_else(|_| Result::error(Fetch::NotFound))
        .or_else(|_| Result::error(Fetch::Refused));

    let third = result.failure().unwrap();
    let second = third.previous().unwrap();
    let first = second.previous().unwrap();
    assert_eq!(*third.error(), Fetch::Refused);
    assert_eq!(*second.error(), Fetch::NotFound);
    assert_eq!(*first.error(), Fetch::Timeout);
    assert!(first.previous().is_none());
}

#[rstest]
fn result_recovery_keeps_existing_cause() {
    let explained = Failure::caused_by(Fetch::Refused, Failure::new(Fetch::NotFound));
    let result: Result<i32, Fetch> =
        Result::error(Fetch::Timeout).or_else(|_| Result::from(explained.clone()));
    assert_eq!(result.failure(), Some(&explained));
}

#[rstest]
fn result_or_else_recovers_to_ok() {
    let recovered: Result<i32, Fetch> = Result::error(Fetch::Timeout).or_else(|_| Result::ok(0));
    assert_eq!(recovered, Result::ok(0));
}

#[rstest]
#[case(Fetch::Timeout, Result::ok(1))]
#[case(Fetch::NotFound, Result::error(Fetch::NotFound))]
fn result_catch_matches_kind(#[case] error: Fetch, #[case] expected: Result<i32, Fetch>) {
    let result: Result<i32, Fetch> = Result::error(error)
        .catch(|error| matches!(error, Fetch::Timeout), |_| Result::ok(1));
    assert_eq!(result, expected);
}

#[rstest]
fn result_catch_skips_ok() {
    let mut calls = 0;
    let result: Result<i32, Fetch> = Result::ok(5).catch(
        |_| true,
        |_| {
            calls += 1;
            Result::ok(0)
        },
    );
    assert_eq!(result, Result::ok(5));
    assert_eq!(calls, 0);
}

#[rstest]
fn result_handle_specific_value() {
    let handled: Result<i32, Fetch> =
        Result::error(Fetch::NotFound).handle(&Fetch::NotFound, |_| Result::error(Fetch::Refused));
    assert_eq!(handled.previous().map(|failure| failure.error().clone()), Some(Fetch::NotFound));

    let untouched: Result<i32, Fetch> =
        Result::error(Fetch::Timeout).handle(&Fetch::NotFound, |_| Result::ok(0));
    assert_eq!(untouched.unwrap_error(), Fetch::Timeout);
}

#[rstest]
fn result_catch_type_on_boxed_errors() {
    let boxed: Result<i32, Box<dyn std::error::Error + Send + Sync>> =
        Result::error(Box::new(Fetch::Refused));
    let wrong_type = boxed.catch_type(|_: &fmt::Error| Result::ok(0));
    assert!(wrong_type.is_error());

    let right_type = wrong_type.catch_type(|error: &Fetch| Result::ok(i32::from(*error == Fetch::Refused)));
    assert_eq!(right_type.unwrap(), 1);
}

// =============================================================================
// Projection and extraction
// =============================================================================

#[rstest]
fn result_value_and_error_value() {
    assert_eq!(Result::<i32, Fetch>::ok(2).value().unwrap(), 2);
    assert!(Result::<i32, Fetch>::ok(2).error_value().is_none());
    assert!(Result::<i32, Fetch>::error(Fetch::Timeout).value().is_none());
    assert_eq!(Result::<i32, Fetch>::error(Fetch::Timeout).error_value().unwrap(), Fetch::Timeout);
}

#[rstest]
#[should_panic(expected = "NotFound")]
fn result_unwrap_panics_with_variant_name() {
    let _ = Result::<i32, Fetch>::error(Fetch::NotFound).unwrap();
}

#[rstest]
#[should_panic(expected = "There is no error")]
fn result_unwrap_error_on_ok_panics() {
    let _ = Result::<i32, Fetch>::ok(1).unwrap_error();
}

#[rstest]
fn result_try_expect_carries_chain() {
    let result: Result<i32, Fetch> =
        Result::error(Fetch::Timeout).or(Result::error(Fetch::Refused));
    let unhandled = result.try_expect("fetch failed").unwrap_err();
    assert_eq!(unhandled.message(), "fetch failed");
    assert_eq!(unhandled.to_string(), "fetch failed");
    assert_eq!(errors_of(unhandled.failure()), vec![Fetch::Refused, Fetch::Timeout]);
}

#[rstest]
fn result_try_unwrap_string_error_message() {
    let unhandled = Result::<i32, String>::error("disk full".to_owned()).try_unwrap().unwrap_err();
    assert_eq!(unhandled.message(), "disk full");
}

#[derive(Debug)]
struct Timeout {
    millis: u64,
    host: String,
}

#[rstest]
fn result_try_unwrap_struct_error_names_the_type() {
    let error = Timeout { millis: 5, host: "db".to_owned() };
    assert_eq!((error.millis, error.host.as_str()), (5, "db"));

    let unhandled = Result::<i32, Timeout>::error(error).try_unwrap().unwrap_err();
    assert_eq!(unhandled.message(), "Timeout");
    assert_eq!(unhandled.failure().error().host, "db");
}

#[rstest]
#[should_panic(expected = "Timeout")]
fn result_unwrap_struct_error_panics_with_type_name() {
    let _ = Result::<i32, Timeout>::error(Timeout { millis: 5, host: "db".to_owned() }).unwrap();
}

#[rstest]
fn result_std_conversions() {
    let from_std: Result<i32, Fetch> = Err(Fetch::Timeout).into();
    assert_eq!(from_std.into_std(), Err(Fetch::Timeout));
    let ok: Result<i32, Fetch> = Ok(3).into();
    assert_eq!(ok.into_std(), Ok(3));
}

#[rstest]
fn result_tap_and_display() {
    let mut rendered = String::new();
    let result = Result::<i32, Fetch>::error(Fetch::Refused).tap(|current| rendered = current.to_string());
    assert_eq!(rendered, "Error(refused)");
    assert_eq!(Result::<i32, Fetch>::ok(9).to_string(), "Ok(9)");
    assert!(result.is_error());
}

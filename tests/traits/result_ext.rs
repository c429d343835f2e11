use outcome_rail::traits::ResultExt;
use outcome_rail::{ErrorKind, Outcome};
use std::io;
use std::num::ParseIntError;

#[test]
fn ok_becomes_success_with_output() {
    let result: Result<u32, io::Error> = Ok(8);
    let outcome = result.outcome(ErrorKind::Unknown);

    assert!(outcome.is_success());
    assert_eq!(outcome.output(), Some(&8));
}

#[test]
fn err_becomes_classified_error_with_cause() {
    let outcome: Outcome<i32> = "abc".parse::<i32>().outcome(ErrorKind::WrongArguments);

    let desc = outcome.error_description().unwrap();
    assert_eq!(desc.kind(), ErrorKind::WrongArguments);
    assert_eq!(desc.message(), "invalid digit found in string");
    assert!(desc.cause().unwrap().downcast_ref::<ParseIntError>().is_some());
}

#[test]
fn outcome_with_builds_message_lazily() {
    let mut calls = 0;
    let ok: Outcome<i32> = "5".parse::<i32>().outcome_with(ErrorKind::NotValid, || {
        calls += 1;
        "unused".to_string()
    });
    assert!(ok.is_success());
    assert_eq!(calls, 0);

    let err: Outcome<i32> = "x".parse::<i32>().outcome_with(ErrorKind::NotValid, || {
        calls += 1;
        "quantity must be numeric".to_string()
    });
    assert_eq!(calls, 1);
    assert_eq!(err.error_message(), Some("quantity must be numeric"));
    assert_eq!(
        err.error_description().unwrap().cause().unwrap().to_string(),
        "invalid digit found in string"
    );
}

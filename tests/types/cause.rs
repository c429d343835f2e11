use outcome_rail::{BoxedError, Cause};
use std::backtrace::Backtrace;
use std::io;

#[test]
fn cause_displays_underlying_error() {
    let cause = Cause::new(io::Error::other("connection reset"));
    assert_eq!(cause.to_string(), "connection reset");
    assert_eq!(cause.error().to_string(), "connection reset");
}

#[test]
fn cause_clones_share_error_and_backtrace() {
    let cause = Cause::from(io::Error::other("boom"));
    let copy = cause.clone();

    assert!(cause.ptr_eq(&copy));
    assert!(core::ptr::eq(cause.backtrace(), copy.backtrace()));
}

#[test]
fn distinct_causes_are_not_ptr_eq() {
    let first = Cause::new(io::Error::other("boom"));
    let second = Cause::new(io::Error::other("boom"));
    assert!(!first.ptr_eq(&second));
}

#[test]
fn cause_downcasts_to_concrete_error() {
    let cause = Cause::new(io::Error::new(io::ErrorKind::PermissionDenied, "locked"));

    let io_err = cause.downcast_ref::<io::Error>().unwrap();
    assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    assert!(cause.downcast_ref::<std::fmt::Error>().is_none());
}

#[test]
fn cause_from_boxed_error_keeps_message() {
    let boxed: BoxedError = Box::new(io::Error::other("boxed"));
    let cause = Cause::from_boxed(boxed);
    assert_eq!(cause.to_string(), "boxed");
}

#[test]
fn cause_with_forced_backtrace_is_captured() {
    let cause = Cause::with_backtrace(io::Error::other("traced"), Backtrace::force_capture());
    assert_eq!(cause.backtrace().status(), std::backtrace::BacktraceStatus::Captured);
}

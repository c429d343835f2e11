//! Conversion helpers between `Result`, [`Outcome`] and [`OutcomeException`].
//!
//! These adapters make it straightforward to adopt `outcome-rail` at the edges of a
//! codebase that otherwise speaks `Result`: wrap legacy results into outcomes, or flatten
//! outcomes back into `Result` when calling into error-returning APIs.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::{ErrorDescription, ErrorKind, Outcome};
//!
//! let result: Result<i32, ErrorDescription> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_success());
//!
//! let back = outcome_to_result(outcome);
//! assert_eq!(back.unwrap(), Some(42));
//! ```

use crate::traits::ErrorCategory;
use crate::types::{ErrorDescription, Outcome, OutcomeException};

/// Converts a `Result` whose error is an [`ErrorDescription`] into an [`Outcome`].
///
/// # Returns
///
/// * a successful outcome carrying the value if `result` is `Ok`
/// * an erroneous outcome holding the description if `result` is `Err`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::{ErrorDescription, ErrorKind};
///
/// let result: Result<(), ErrorDescription> = Err(ErrorDescription::new(ErrorKind::Unknown));
/// assert!(result_to_outcome(result).is_error_of(ErrorKind::Unknown));
/// ```
#[inline]
pub fn result_to_outcome<T, E: ErrorCategory>(result: Result<T, ErrorDescription<E>>) -> Outcome<T, E> {
    result.into()
}

/// Converts an [`Outcome`] into a `Result` without checking for an absent output.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::{ErrorKind, Outcome};
///
/// let outcome: Outcome<u8> = Outcome::error_msg(ErrorKind::NotValid, "odd");
/// let err = outcome_to_result(outcome).unwrap_err();
/// assert_eq!(err.message(), "odd");
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<Option<T>, ErrorDescription<E>> {
    outcome.into_result()
}

/// Rebuilds an erroneous [`Outcome`] from a caught [`OutcomeException`].
///
/// Kind, initial message and cause are carried over; the description gets a fresh uid.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::exception_to_outcome;
/// use outcome_rail::{ErrorDescription, ErrorKind, Outcome};
///
/// let raised = ErrorDescription::with_message(ErrorKind::NotFound, "X missing").into_exception();
/// let outcome: Outcome = exception_to_outcome(raised);
/// assert!(outcome.is_error_of(ErrorKind::NotFound));
/// assert_eq!(outcome.error_message(), Some("X missing"));
/// ```
#[inline]
pub fn exception_to_outcome<T, E: ErrorCategory>(err: OutcomeException<E>) -> Outcome<T, E> {
    err.into()
}

/// Converts the error side of a `Result` into an [`Outcome`], keeping successful values.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::exception_result_to_outcome;
/// use outcome_rail::{ErrorKind, Outcome, OutcomeException};
///
/// let result: Result<u32, OutcomeException> = Err(OutcomeException::new(ErrorKind::Timeout));
/// let outcome: Outcome<u32> = exception_result_to_outcome(result);
/// assert!(outcome.is_error_of(ErrorKind::Timeout));
/// ```
#[inline]
pub fn exception_result_to_outcome<T, E: ErrorCategory>(
    result: Result<T, OutcomeException<E>>,
) -> Outcome<T, E> {
    match result {
        Ok(value) => Outcome::ok(value),
        Err(err) => err.into(),
    }
}

//! Shorthand macros for building erroneous [`Outcome`](crate::Outcome)s.
//!
//! - [`macro@crate::fail`] - Builds an erroneous outcome, formatting the message like `format!`.
//! - [`macro@crate::bail`] - Returns such an outcome from the enclosing function.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{bail, fail, ErrorKind, Outcome};
//!
//! fn parse_age(raw: &str) -> Outcome<u8> {
//!     let Ok(age) = raw.parse::<u8>() else {
//!         bail!(ErrorKind::WrongArguments, "age `{}` is not a number", raw);
//!     };
//!     if age < 18 {
//!         return fail!(ErrorKind::NotValid, "age {age} below minimum");
//!     }
//!     Outcome::ok(age)
//! }
//!
//! assert_eq!(parse_age("42").ensure_output().unwrap(), 42);
//! assert_eq!(parse_age("x").error_message(), Some("age `x` is not a number"));
//! assert!(parse_age("9").is_error_of(ErrorKind::NotValid));
//! ```

/// Builds an erroneous [`Outcome`](crate::Outcome).
///
/// # Syntax
///
/// - `fail!(kind)` - message is the stringified kind
/// - `fail!(kind, "format {}", args...)` - message formatted like `format!`
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, ErrorKind, Outcome};
///
/// let id = 7;
/// let outcome: Outcome = fail!(ErrorKind::NotFound, "order {} missing", id);
/// assert_eq!(outcome.error_message(), Some("order 7 missing"));
///
/// let bare: Outcome = fail!(ErrorKind::Timeout);
/// assert_eq!(bare.error_message(), Some("Timeout"));
/// ```
#[macro_export]
macro_rules! fail {
    ($kind:expr $(,)?) => {
        $crate::Outcome::error($kind)
    };
    ($kind:expr, $($arg:tt)+) => {
        $crate::Outcome::error_msg($kind, format!($($arg)+))
    };
}

/// Returns an erroneous [`Outcome`](crate::Outcome) from the enclosing function.
///
/// Accepts the same arguments as [`fail!`](crate::fail).
///
/// # Examples
///
/// ```
/// use outcome_rail::{bail, ErrorKind, Outcome};
///
/// fn authorize(token: Option<&str>) -> Outcome {
///     if token.is_none() {
///         bail!(ErrorKind::NoAuthentication, "missing bearer token");
///     }
///     Outcome::success()
/// }
///
/// assert!(authorize(None).is_error_of(ErrorKind::NoAuthentication));
/// assert!(authorize(Some("t0k3n")).is_success());
/// ```
#[macro_export]
macro_rules! bail {
    ($($arg:tt)+) => {
        return $crate::fail!($($arg)+)
    };
}

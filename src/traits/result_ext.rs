//! Extension trait for turning `Result` values into [`Outcome`]s.
//!
//! This module provides [`ResultExt`], which classifies a caught error with an error kind
//! without verbose `match` blocks.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultExt;
//! use outcome_rail::{ErrorKind, Outcome};
//!
//! fn load_config() -> Outcome<String> {
//!     std::fs::read_to_string("definitely-missing.toml").outcome(ErrorKind::ConfigurationError)
//! }
//!
//! assert!(load_config().is_error_of(ErrorKind::ConfigurationError));
//! ```

use core::error::Error;

use crate::traits::ErrorCategory;
use crate::types::Outcome;

/// Extension trait for classifying `Result` errors into [`Outcome`]s.
///
/// The original error is kept as the outcome's cause, so its backtrace and `source()`
/// chain survive a later [`ensure_output`](Outcome::ensure_output).
pub trait ResultExt<T, X> {
    /// Classifies the error with `kind`, using its `Display` text as the message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::ResultExt;
    /// use outcome_rail::{ErrorKind, Outcome};
    ///
    /// let parsed: Outcome<u8> = "300".parse::<u8>().outcome(ErrorKind::WrongArguments);
    /// assert!(parsed.is_error_of(ErrorKind::WrongArguments));
    /// ```
    fn outcome<E: ErrorCategory>(self, kind: E) -> Outcome<T, E>;

    /// Classifies the error with `kind` and a lazily built message.
    ///
    /// The closure runs only on the error path.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::ResultExt;
    /// use outcome_rail::{ErrorKind, Outcome};
    ///
    /// let port = "eighty";
    /// let parsed: Outcome<u16> = port
    ///     .parse::<u16>()
    ///     .outcome_with(ErrorKind::ConfigurationError, || format!("invalid port `{port}`"));
    /// assert_eq!(parsed.error_message(), Some("invalid port `eighty`"));
    /// ```
    fn outcome_with<E, F>(self, kind: E, f: F) -> Outcome<T, E>
    where
        E: ErrorCategory,
        F: FnOnce() -> String;
}

impl<T, X> ResultExt<T, X> for Result<T, X>
where
    X: Error + Send + Sync + 'static,
{
    #[inline]
    fn outcome<E: ErrorCategory>(self, kind: E) -> Outcome<T, E> {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(err) => Outcome::from_error(kind, err),
        }
    }

    #[inline]
    fn outcome_with<E, F>(self, kind: E, f: F) -> Outcome<T, E>
    where
        E: ErrorCategory,
        F: FnOnce() -> String,
    {
        match self {
            Ok(value) => Outcome::ok(value),
            Err(err) => Outcome::error_with(kind, f(), err),
        }
    }
}

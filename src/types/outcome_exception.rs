//! Raisable form of a classified failure.
//!
//! [`OutcomeException`] is what crosses an error-returning boundary: it implements
//! [`core::error::Error`], exposes the original cause through `source()` and carries
//! enough to rebuild an equivalent [`Outcome`].
use core::error::Error;
use core::fmt::{self, Display};

use crate::traits::ErrorCategory;
use crate::types::{Cause, ErrorDescription, ErrorKind, Outcome};

/// Error type carrying an error kind, the initial message and the original cause.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ErrorKind, OutcomeException};
///
/// let err = OutcomeException::with_message(ErrorKind::Timeout, Some("db read".into()), None);
/// assert_eq!(err.to_string(), "Timeout: db read");
/// assert_eq!(err.initial_message(), Some("db read"));
///
/// let outcome = err.to_outcome::<()>();
/// assert!(outcome.is_error_of(ErrorKind::Timeout));
/// assert_eq!(outcome.error_message(), Some("db read"));
/// ```
#[derive(Debug, Clone)]
pub struct OutcomeException<E = ErrorKind> {
    kind: E,
    initial_message: Option<String>,
    message: String,
    cause: Option<Cause>,
}

impl<E: ErrorCategory> OutcomeException<E> {
    /// Creates an exception whose message is the stringified kind.
    #[inline]
    pub fn new(kind: E) -> Self {
        Self { kind, initial_message: None, message: kind.to_string(), cause: None }
    }

    /// Creates an exception formatted as `"<Kind>: <message>"`.
    pub fn with_message(kind: E, message: Option<String>, cause: Option<Cause>) -> Self {
        let formatted = match message.as_deref() {
            Some(text) => format!("{kind}: {text}"),
            None => format!("{kind}: "),
        };
        Self { kind, initial_message: message, message: formatted, cause }
    }

    /// The failure category.
    #[inline]
    pub fn kind(&self) -> E {
        self.kind
    }

    /// Message as supplied, before `"<Kind>: "` formatting.
    #[inline]
    pub fn initial_message(&self) -> Option<&str> {
        self.initial_message.as_deref()
    }

    /// Formatted message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The original cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Rebuilds an error description from the carried kind, initial message and cause.
    ///
    /// The description receives a fresh uid.
    pub fn into_description(self) -> ErrorDescription<E> {
        let message = self.initial_message.unwrap_or_default();
        ErrorDescription::with_cause(self.kind, message, self.cause)
    }

    /// Rebuilds an erroneous outcome equivalent to the one this exception was raised from.
    pub fn to_outcome<T>(&self) -> Outcome<T, E> {
        Outcome::from_description(self.clone().into_description())
    }
}

impl<E: Display> Display for OutcomeException<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl<E> Error for OutcomeException<E>
where
    E: fmt::Debug + Display,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_ref().map(|cause| cause.error() as &(dyn Error + 'static))
    }
}

impl<E: ErrorCategory> From<ErrorDescription<E>> for OutcomeException<E> {
    #[inline]
    fn from(desc: ErrorDescription<E>) -> Self {
        desc.into_exception()
    }
}

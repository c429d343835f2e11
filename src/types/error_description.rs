//! Record describing one classified failure.
//!
//! An [`ErrorDescription`] is created once per failure occurrence. Its identifier and kind
//! never change; the message may later be prefixed with contextual information and the
//! cause may be attached after the fact.
use core::fmt::{self, Display};
use std::backtrace::Backtrace;
use uuid::Uuid;

use crate::traits::ErrorCategory;
use crate::types::{Cause, ErrorKind, OutcomeException};

/// A classified failure: unique id, error kind, message and optional cause.
///
/// The message falls back to the stringified kind when empty, and the stack trace is always
/// the backtrace of the held [`Cause`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{ErrorDescription, ErrorKind};
///
/// let desc = ErrorDescription::with_message(ErrorKind::NotFound, "");
/// assert_eq!(desc.kind(), ErrorKind::NotFound);
/// assert_eq!(desc.message(), "NotFound");
/// assert!(desc.cause().is_none());
/// assert!(desc.stack_trace().is_none());
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct ErrorDescription<E = ErrorKind> {
    uid: Uuid,
    kind: E,
    message: String,
    cause: Option<Cause>,
}

impl<E: ErrorCategory> ErrorDescription<E> {
    /// Creates a description whose message is the stringified kind.
    #[inline]
    pub fn new(kind: E) -> Self {
        Self { uid: Uuid::new_v4(), kind, message: kind.to_string(), cause: None }
    }

    /// Creates a description with a message, falling back to the kind when `message` is empty.
    pub fn with_message<S: Into<String>>(kind: E, message: S) -> Self {
        let mut desc = Self::new(kind);
        desc.set_message(message);
        desc
    }

    /// Creates a description with a message and an optional underlying cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Cause, ErrorDescription, ErrorKind};
    /// use std::io;
    ///
    /// let cause = Cause::new(io::Error::other("refused"));
    /// let desc = ErrorDescription::with_cause(ErrorKind::NetworkError, "upstream", Some(cause.clone()));
    ///
    /// assert!(desc.cause().is_some_and(|held| held.ptr_eq(&cause)));
    /// assert!(core::ptr::eq(desc.stack_trace().unwrap(), cause.backtrace()));
    /// ```
    pub fn with_cause<S: Into<String>>(kind: E, message: S, cause: Option<Cause>) -> Self {
        let mut desc = Self::with_message(kind, message);
        desc.cause = cause;
        desc
    }

    /// Replaces the message; an empty message falls back to the stringified kind.
    pub fn set_message<S: Into<String>>(&mut self, message: S) {
        let message = message.into();
        self.message = if message.is_empty() { self.kind.to_string() } else { message };
    }

    /// Prefixes the current message with `prefix`.
    pub fn prepend_message(&mut self, prefix: &str) {
        self.message.insert_str(0, prefix);
    }

    /// Converts into the raisable form, keeping kind, message and cause.
    #[inline]
    pub fn into_exception(self) -> OutcomeException<E> {
        OutcomeException::with_message(self.kind, Some(self.message), self.cause)
    }

    /// Builds the raisable form without consuming the description.
    #[inline]
    pub fn to_exception(&self) -> OutcomeException<E> {
        OutcomeException::with_message(self.kind, Some(self.message.clone()), self.cause.clone())
    }
}

impl<E> ErrorDescription<E> {
    /// Globally unique identifier assigned at construction.
    #[inline]
    pub fn uid(&self) -> Uuid {
        self.uid
    }

    /// The failure category.
    #[inline]
    pub fn kind(&self) -> E
    where
        E: Copy,
    {
        self.kind
    }

    /// The human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Backtrace of the held cause; `None` exactly when there is no cause.
    #[inline]
    pub fn stack_trace(&self) -> Option<&Backtrace> {
        self.cause.as_ref().map(Cause::backtrace)
    }

    /// Attaches (or replaces) the underlying cause.
    #[inline]
    pub fn set_cause<C: Into<Cause>>(&mut self, cause: C) {
        self.cause = Some(cause.into());
    }

    /// Removes the underlying cause and with it the stack trace.
    #[inline]
    pub fn clear_cause(&mut self) -> Option<Cause> {
        self.cause.take()
    }

    /// Maps the kind into another category set, keeping uid, message and cause.
    #[inline]
    pub fn map_kind<F, G>(self, f: F) -> ErrorDescription<G>
    where
        F: FnOnce(E) -> G,
    {
        ErrorDescription { uid: self.uid, kind: f(self.kind), message: self.message, cause: self.cause }
    }
}

impl<E: Display> Display for ErrorDescription<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

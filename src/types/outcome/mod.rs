//! Success/error outcome with an optional typed output and a property bag.
//!
//! This module provides [`Outcome`], a single generic union covering three shapes:
//! - `Outcome`: no output, default [`ErrorKind`] catalog
//! - `Outcome<T>`: typed output
//! - `Outcome<T, E>`: typed output and a caller-supplied [`ErrorCategory`]
//!
//! Exactly one of the success tag and the error description is ever present; the state is
//! a sum type, so "both" and "neither" cannot be represented.

use core::any::{type_name, Any};

use crate::telemetry;
use crate::traits::ErrorCategory;
use crate::types::{
    Cause, ContractViolation, EnsureError, ErrorDescription, ErrorKind, OutcomeException,
    PropertyKind, SuccessKind,
};

mod properties;
mod traits;

pub use properties::{PropertyBag, PropertyValue, PropertyValues};

/// Delimiter placed between messages supplied as a list.
pub const MESSAGE_DELIMITER: &str = "\n";

/// Either a success (tagged with a [`SuccessKind`], optionally carrying an output) or a
/// classified failure described by an [`ErrorDescription`].
///
/// All mutators take and return `self`, so calls chain fluently.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ErrorKind, Outcome, PropertyKind};
///
/// fn find_user(id: u64) -> Outcome<String> {
///     if id == 7 {
///         Outcome::ok("ferris".to_string())
///     } else {
///         Outcome::error_msg(ErrorKind::NotFound, format!("user {id} missing"))
///             .set_property(PropertyKind::CorrelationId, "req-19")
///     }
/// }
///
/// assert_eq!(find_user(7).ensure_output().unwrap(), "ferris");
///
/// let missing = find_user(8);
/// assert!(missing.is_error_of(ErrorKind::NotFound));
/// assert!(missing.has_properties_of(&PropertyKind::CorrelationId));
/// assert_eq!(missing.error_message(), Some("user 8 missing"));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct Outcome<T = (), E = ErrorKind> {
    state: State<T, E>,
    properties: PropertyBag,
}

#[derive(Debug, Clone)]
enum State<T, E> {
    Success { kind: SuccessKind, output: Option<T> },
    Error(ErrorDescription<E>),
}

impl<T, E> Outcome<T, E> {
    #[inline]
    fn from_state(state: State<T, E>) -> Self {
        Self { state, properties: PropertyBag::default() }
    }

    /// Successful outcome tagged [`SuccessKind::Ok`], without output.
    ///
    /// The output slot stays empty for every `T`, including `()` and primitives, so
    /// [`ensure_output`](Self::ensure_output) on the result reports a missing output. Use
    /// [`ensure_success`](Self::ensure_success) for the no-payload `Outcome`, or
    /// [`ok`](Self::ok) when a value is meant to be carried.
    #[inline]
    pub fn success() -> Self {
        Self::success_as(SuccessKind::Ok)
    }

    /// Successful outcome with an explicit tag, without output.
    #[inline]
    pub fn success_as(kind: SuccessKind) -> Self {
        Self::from_state(State::Success { kind, output: None })
    }

    /// Successful outcome tagged [`SuccessKind::Ok`] carrying `output`.
    #[inline]
    pub fn ok(output: T) -> Self {
        Self::ok_as(SuccessKind::Ok, output)
    }

    /// Successful outcome with an explicit tag carrying `output`.
    #[inline]
    pub fn ok_as(kind: SuccessKind, output: T) -> Self {
        Self::from_state(State::Success { kind, output: Some(output) })
    }

    /// `true` iff a success tag is held.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.state, State::Success { .. })
    }

    /// `true` iff an error description is held.
    #[inline]
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// The success tag, or `None` while erroneous.
    #[inline]
    pub fn success_kind(&self) -> Option<SuccessKind> {
        match &self.state {
            State::Success { kind, .. } => Some(*kind),
            State::Error(_) => None,
        }
    }

    /// The error description, or `None` while successful.
    #[inline]
    pub fn error_description(&self) -> Option<&ErrorDescription<E>> {
        match &self.state {
            State::Success { .. } => None,
            State::Error(desc) => Some(desc),
        }
    }

    #[inline]
    pub fn error_description_mut(&mut self) -> Option<&mut ErrorDescription<E>> {
        match &mut self.state {
            State::Success { .. } => None,
            State::Error(desc) => Some(desc),
        }
    }

    #[inline]
    pub fn error_message(&self) -> Option<&str> {
        self.error_description().map(ErrorDescription::message)
    }

    /// The output; `None` while erroneous or when no output was supplied.
    #[inline]
    pub fn output(&self) -> Option<&T> {
        match &self.state {
            State::Success { output, .. } => output.as_ref(),
            State::Error(_) => None,
        }
    }

    /// Consumes the outcome, returning the output if successful and present.
    #[inline]
    pub fn into_output(self) -> Option<T> {
        match self.state {
            State::Success { output, .. } => output,
            State::Error(_) => None,
        }
    }

    /// Replaces the output of a successful outcome.
    ///
    /// Accepts `T` or `Option<T>`; passing `None` clears the output. Has no effect while
    /// erroneous, since an output is only meaningful on success.
    pub fn set_output<V: Into<Option<T>>>(mut self, value: V) -> Self {
        if let State::Success { output, .. } = &mut self.state {
            *output = value.into();
        }
        self
    }

    /// Removes the output of a successful outcome, leaving it tagged but empty.
    pub fn clear_output(mut self) -> Self {
        if let State::Success { output, .. } = &mut self.state {
            *output = None;
        }
        self
    }

    /// Makes the outcome successful with `kind`, dropping any error. The output starts absent.
    pub fn set_success(mut self, kind: SuccessKind) -> Self {
        self.state = State::Success { kind, output: None };
        self
    }

    /// Appends `value` to the ordered list kept under `kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, PropertyKind};
    ///
    /// let outcome: Outcome = Outcome::success()
    ///     .set_property(PropertyKind::Warning, "slow disk")
    ///     .set_property(PropertyKind::Warning, "retrying");
    ///
    /// let warnings: Vec<_> = outcome
    ///     .properties(&PropertyKind::Warning)
    ///     .unwrap()
    ///     .iter()
    ///     .filter_map(|value| value.downcast_ref::<&str>())
    ///     .collect();
    /// assert_eq!(warnings, [&"slow disk", &"retrying"]);
    /// ```
    pub fn set_property<V: Any + Send + Sync>(self, kind: PropertyKind, value: V) -> Self {
        self.set_property_value(kind, PropertyValue::new(value))
    }

    /// Appends an already wrapped value under `kind`.
    pub fn set_property_value(mut self, kind: PropertyKind, value: PropertyValue) -> Self {
        self.properties.push(kind, value);
        self
    }

    #[inline]
    pub fn has_properties_of(&self, kind: &PropertyKind) -> bool {
        self.properties.contains(kind)
    }

    /// Values attached under `kind` in insertion order, or `None` if never set.
    #[inline]
    pub fn properties(&self, kind: &PropertyKind) -> Option<&[PropertyValue]> {
        self.properties.get(kind)
    }

    #[inline]
    pub fn property_bag(&self) -> &PropertyBag {
        &self.properties
    }

    /// Maps the output, preserving tag, error and properties.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        let state = match self.state {
            State::Success { kind, output } => State::Success { kind, output: output.map(f) },
            State::Error(desc) => State::Error(desc),
        };
        Outcome { state, properties: self.properties }
    }

    /// Maps the error kind into another category set, preserving uid, message and cause.
    pub fn map_kind<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        let state = match self.state {
            State::Success { kind, output } => State::Success { kind, output },
            State::Error(desc) => State::Error(desc.map_kind(f)),
        };
        Outcome { state, properties: self.properties }
    }

    /// Converts into a plain `Result` without checking for an absent output.
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, ErrorDescription<E>> {
        match self.state {
            State::Success { output, .. } => Ok(output),
            State::Error(desc) => Err(desc),
        }
    }
}

impl<T, E: ErrorCategory> Outcome<T, E> {
    /// Erroneous outcome from a pre-built description.
    ///
    /// All erroneous constructors go through here and emit the error-transition event.
    #[inline]
    pub fn from_description(desc: ErrorDescription<E>) -> Self {
        telemetry::error_set(&desc);
        Self::from_state(State::Error(desc))
    }

    /// Erroneous outcome whose message is the stringified kind.
    #[inline]
    pub fn error(kind: E) -> Self {
        Self::from_description(ErrorDescription::new(kind))
    }

    /// Erroneous outcome with a message.
    #[inline]
    pub fn error_msg<S: Into<String>>(kind: E, message: S) -> Self {
        Self::from_description(ErrorDescription::with_message(kind, message))
    }

    /// Erroneous outcome with a message and an underlying cause.
    #[inline]
    pub fn error_with<S, C>(kind: E, message: S, cause: C) -> Self
    where
        S: Into<String>,
        C: Into<Cause>,
    {
        Self::from_description(ErrorDescription::with_cause(kind, message, Some(cause.into())))
    }

    /// Erroneous outcome from a caught error; the message is the error's `Display` text.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ErrorKind, Outcome};
    /// use std::io;
    ///
    /// let outcome: Outcome = Outcome::from_error(ErrorKind::NetworkError, io::Error::other("reset"));
    /// assert_eq!(outcome.error_message(), Some("reset"));
    /// assert!(outcome.error_description().unwrap().cause().is_some());
    /// ```
    pub fn from_error<C: Into<Cause>>(kind: E, error: C) -> Self {
        let cause = error.into();
        let message = cause.to_string();
        Self::from_description(ErrorDescription::with_cause(kind, message, Some(cause)))
    }

    /// Erroneous outcome whose message is `messages` joined with [`MESSAGE_DELIMITER`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ErrorKind, Outcome};
    ///
    /// let outcome: Outcome = Outcome::error_lines(ErrorKind::NetworkError, ["a", "b"]);
    /// assert_eq!(outcome.error_message(), Some("a\nb"));
    /// ```
    pub fn error_lines<I, S>(kind: E, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::error_msg(kind, join_lines(messages))
    }

    /// Erroneous outcome whose message is `messages` joined with [`MESSAGE_DELIMITER`], with an
    /// underlying cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ErrorKind, Outcome};
    /// use std::io;
    ///
    /// let outcome: Outcome =
    ///     Outcome::error_lines_with(ErrorKind::NetworkError, ["dns", "tls"], io::Error::other("reset"));
    /// assert_eq!(outcome.error_message(), Some("dns\ntls"));
    /// assert!(outcome.error_description().unwrap().stack_trace().is_some());
    /// ```
    pub fn error_lines_with<I, S, C>(kind: E, messages: I, cause: C) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        C: Into<Cause>,
    {
        Self::error_with(kind, join_lines(messages), cause)
    }

    /// `true` iff erroneous with exactly `kind`.
    #[inline]
    pub fn is_error_of(&self, kind: E) -> bool {
        matches!(&self.state, State::Error(desc) if desc.kind() == kind)
    }

    /// The error kind, or `None` while successful.
    #[inline]
    pub fn error_kind(&self) -> Option<E> {
        self.error_description().map(ErrorDescription::kind)
    }

    /// Replaces any state with an error of `kind`.
    #[inline]
    pub fn set_error(self, kind: E) -> Self {
        self.set_error_description(ErrorDescription::new(kind))
    }

    #[inline]
    pub fn set_error_msg<S: Into<String>>(self, kind: E, message: S) -> Self {
        self.set_error_description(ErrorDescription::with_message(kind, message))
    }

    #[inline]
    pub fn set_error_with<S, C>(self, kind: E, message: S, cause: C) -> Self
    where
        S: Into<String>,
        C: Into<Cause>,
    {
        self.set_error_description(ErrorDescription::with_cause(kind, message, Some(cause.into())))
    }

    /// Replaces any state with an error whose message is `messages` joined by newlines.
    pub fn set_error_lines<I, S>(self, kind: E, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_error_msg(kind, join_lines(messages))
    }

    /// Replaces any state with an error whose message is `messages` joined by newlines, with an
    /// underlying cause.
    pub fn set_error_lines_with<I, S, C>(self, kind: E, messages: I, cause: C) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        C: Into<Cause>,
    {
        self.set_error_with(kind, join_lines(messages), cause)
    }

    /// Replaces any state (success tag, output or previous error) with `desc`.
    pub fn set_error_description(mut self, desc: ErrorDescription<E>) -> Self {
        telemetry::error_set(&desc);
        self.state = State::Error(desc);
        self
    }

    /// Attaches `cause` to the held error; no effect while successful.
    pub fn with_cause<C: Into<Cause>>(mut self, cause: C) -> Self {
        if let State::Error(desc) = &mut self.state {
            desc.set_cause(cause);
        }
        self
    }

    /// Prefixes the error message with the output type name and `infos`.
    ///
    /// The message becomes `"<Type> <info1>, <info2>, <previous message>"`. With no infos it
    /// becomes `"<Type>, <previous message>"`, without a space before the comma. The kind is
    /// left untouched, and nothing happens while successful.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ErrorKind, Outcome};
    ///
    /// let outcome: Outcome<String> = Outcome::error_msg(ErrorKind::NotValid, "bad email")
    ///     .add_method_info(["register", "step 2"]);
    /// assert_eq!(outcome.error_message(), Some("String register, step 2, bad email"));
    /// ```
    pub fn add_method_info<I, S>(mut self, infos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let State::Error(desc) = &mut self.state {
            let infos: Vec<String> = infos.into_iter().map(|info| info.as_ref().to_owned()).collect();
            let label = short_type_name::<T>();
            let prefix = if infos.is_empty() {
                format!("{label}, ")
            } else {
                format!("{label} {}, ", infos.join(", "))
            };
            desc.prepend_message(&prefix);
        }
        self
    }

    /// Returns the outcome unchanged if successful, otherwise its error as an exception.
    pub fn ensure_success(self) -> Result<Self, OutcomeException<E>> {
        match self.state {
            State::Error(desc) => {
                telemetry::raised(&desc);
                Err(desc.into_exception())
            }
            State::Success { .. } => Ok(self),
        }
    }

    /// Returns the output if successful and present.
    ///
    /// An erroneous outcome yields [`EnsureError::Failed`] with its kind, message and cause.
    /// A successful outcome without output yields [`EnsureError::Contract`]: the caller asked
    /// for a payload that does not exist. No default value is substituted, not even for `()`
    /// or numeric `T`; only [`ok`](Self::ok) or [`set_output`](Self::set_output) fill the slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{EnsureError, ErrorKind, Outcome};
    ///
    /// assert_eq!(Outcome::<i32>::ok(42).ensure_output().unwrap(), 42);
    ///
    /// let absent = Outcome::<String>::success().ensure_output();
    /// assert!(matches!(absent, Err(EnsureError::Contract(_))));
    ///
    /// let failed = Outcome::<i32>::error_msg(ErrorKind::Timeout, "slow").ensure_output();
    /// let err = failed.unwrap_err();
    /// assert_eq!(err.as_failure().unwrap().kind(), ErrorKind::Timeout);
    /// ```
    pub fn ensure_output(self) -> Result<T, EnsureError<E>> {
        match self.state {
            State::Success { output: Some(output), .. } => Ok(output),
            State::Error(desc) => {
                telemetry::raised(&desc);
                Err(EnsureError::Failed(desc.into_exception()))
            }
            State::Success { output: None, .. } => Err(missing_output::<T, E>()),
        }
    }

    /// Borrowing form of [`ensure_output`](Self::ensure_output).
    pub fn ensure_output_ref(&self) -> Result<&T, EnsureError<E>> {
        match &self.state {
            State::Success { output: Some(output), .. } => Ok(output),
            State::Error(desc) => {
                telemetry::raised(desc);
                Err(EnsureError::Failed(desc.to_exception()))
            }
            State::Success { output: None, .. } => Err(missing_output::<T, E>()),
        }
    }
}

fn missing_output<T, E>() -> EnsureError<E>
where
    E: ErrorCategory,
{
    let violation = ContractViolation::MissingOutput { type_name: type_name::<T>() };
    telemetry::contract_violated(&violation);
    EnsureError::Contract(violation)
}

fn join_lines<I, S>(messages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (idx, message) in messages.into_iter().enumerate() {
        if idx > 0 {
            joined.push_str(MESSAGE_DELIMITER);
        }
        joined.push_str(message.as_ref());
    }
    joined
}

/// Type name with module paths stripped, e.g. `Vec<String>` for `alloc::vec::Vec<alloc::string::String>`.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                segment.clear();
            }
            c if c.is_alphanumeric() || c == '_' => segment.push(c),
            other => {
                short.push_str(&segment);
                segment.clear();
                short.push(other);
            }
        }
    }
    short.push_str(&segment);
    short
}

use core::fmt::{Debug, Display};

/// A closed, equality-comparable set of failure categories.
///
/// [`ErrorKind`](crate::ErrorKind) is the default category set. Any `Copy` enum that is
/// `Eq`, `Debug` and `Display` qualifies through the blanket implementation, so a domain
/// can bring its own vocabulary to [`Outcome`](crate::Outcome) without touching the
/// default catalog.
///
/// The `Display` form is used as the fallback error message and as the `<Kind>` prefix of
/// [`OutcomeException`](crate::OutcomeException) messages.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ErrorCategory, Outcome};
/// use core::fmt;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum PaymentError {
///     Declined,
///     Expired,
/// }
///
/// impl fmt::Display for PaymentError {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         fmt::Debug::fmt(self, f)
///     }
/// }
///
/// fn assert_category<E: ErrorCategory>() {}
/// assert_category::<PaymentError>();
///
/// let outcome: Outcome<u64, PaymentError> = Outcome::error(PaymentError::Declined);
/// assert!(outcome.is_error_of(PaymentError::Declined));
/// assert_eq!(outcome.error_message(), Some("Declined"));
/// ```
pub trait ErrorCategory: Copy + Eq + Debug + Display + Send + Sync + 'static {}

impl<E> ErrorCategory for E where E: Copy + Eq + Debug + Display + Send + Sync + 'static {}

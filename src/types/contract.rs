//! API misuse errors, kept apart from every error-kind catalog.
use thiserror::Error;

use crate::types::{ErrorKind, OutcomeException};

/// Misuse of the outcome API itself, as opposed to a classified domain failure.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// A successful outcome was asked for an output that was never supplied.
    #[error("ensure_output: successful outcome of `{type_name}` holds no output")]
    MissingOutput { type_name: &'static str },
}

/// Failure returned by [`Outcome::ensure_output`](crate::Outcome::ensure_output).
///
/// Either the outcome carried a domain error, or the API was misused.
#[derive(Debug, Error)]
pub enum EnsureError<E = ErrorKind> {
    /// The outcome was erroneous; carries its kind, message and cause.
    #[error(transparent)]
    Failed(#[from] OutcomeException<E>),
    /// The outcome was successful but unusable.
    #[error(transparent)]
    Contract(#[from] ContractViolation),
}

impl<E> EnsureError<E> {
    /// Returns the domain failure, if that is what this is.
    #[inline]
    pub fn as_failure(&self) -> Option<&OutcomeException<E>> {
        match self {
            EnsureError::Failed(err) => Some(err),
            EnsureError::Contract(_) => None,
        }
    }

    /// Returns `true` when the API was misused.
    #[inline]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, EnsureError::Contract(_))
    }
}

use super::{Outcome, State};
use crate::traits::ErrorCategory;
use crate::types::{ErrorDescription, OutcomeException};
use core::fmt::Display;

impl<T, E> Default for Outcome<T, E> {
    #[inline]
    fn default() -> Self {
        Self::success()
    }
}

impl<T, E: Display> Display for Outcome<T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.state {
            State::Success { kind, .. } => Display::fmt(kind, f),
            State::Error(desc) => Display::fmt(desc, f),
        }
    }
}

impl<T, E: ErrorCategory> From<ErrorDescription<E>> for Outcome<T, E> {
    #[inline]
    fn from(desc: ErrorDescription<E>) -> Self {
        Self::from_description(desc)
    }
}

impl<T, E: ErrorCategory> From<OutcomeException<E>> for Outcome<T, E> {
    #[inline]
    fn from(err: OutcomeException<E>) -> Self {
        Self::from_description(err.into_description())
    }
}

impl<T, E: ErrorCategory> From<Result<T, ErrorDescription<E>>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, ErrorDescription<E>>) -> Self {
        match result {
            Ok(output) => Self::ok(output),
            Err(desc) => Self::from_description(desc),
        }
    }
}

//! Shared handle to the error that caused a failure.
//!
//! A [`Cause`] pairs the underlying error with the backtrace captured at the moment the
//! error was attached to an outcome. [`ErrorDescription::stack_trace`] reads the trace from
//! here, so the two can never drift apart.
//!
//! [`ErrorDescription::stack_trace`]: crate::ErrorDescription::stack_trace
use core::error::Error;
use core::fmt::{self, Debug, Display};
use std::backtrace::Backtrace;
use std::sync::Arc;

use crate::types::alloc_type::BoxedError;

/// Cheaply cloneable handle to an underlying error and its captured backtrace.
///
/// Clones share both the error and the backtrace.
///
/// # Examples
///
/// ```
/// use outcome_rail::Cause;
/// use std::io;
///
/// let cause = Cause::new(io::Error::other("disk unplugged"));
/// let copy = cause.clone();
///
/// assert_eq!(cause.to_string(), "disk unplugged");
/// assert!(core::ptr::eq(cause.backtrace(), copy.backtrace()));
/// ```
#[derive(Clone)]
pub struct Cause {
    error: Arc<dyn Error + Send + Sync + 'static>,
    backtrace: Arc<Backtrace>,
}

impl Cause {
    /// Wraps `error`, capturing the current backtrace.
    ///
    /// Capture follows `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`; when disabled the trace is
    /// recorded as [`BacktraceStatus::Disabled`](std::backtrace::BacktraceStatus::Disabled).
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self { error: Arc::new(error), backtrace: Arc::new(Backtrace::capture()) }
    }

    /// Wraps an already boxed error, capturing the current backtrace.
    pub fn from_boxed(error: BoxedError) -> Self {
        Self { error: Arc::from(error), backtrace: Arc::new(Backtrace::capture()) }
    }

    /// Wraps `error` together with a backtrace captured elsewhere.
    pub fn with_backtrace<E>(error: E, backtrace: Backtrace) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self { error: Arc::new(error), backtrace: Arc::new(backtrace) }
    }

    /// Returns the underlying error.
    #[inline]
    pub fn error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.error
    }

    /// Returns the backtrace captured when this cause was created.
    #[inline]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// Attempts to downcast the underlying error to a concrete type.
    #[inline]
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.error.downcast_ref::<E>()
    }

    /// Returns `true` when both handles point at the same error instance.
    #[inline]
    pub fn ptr_eq(&self, other: &Cause) -> bool {
        Arc::ptr_eq(&self.error, &other.error)
    }
}

impl Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cause")
            .field("error", &self.error)
            .field("backtrace", &self.backtrace.status())
            .finish()
    }
}

impl Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.error, f)
    }
}

impl<E> From<E> for Cause
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

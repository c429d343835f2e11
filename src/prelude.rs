//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`], [`bail!`]
//! - **Types**: [`Outcome`], [`ErrorKind`], [`SuccessKind`], [`PropertyKind`],
//!   [`ErrorDescription`], [`OutcomeException`], [`EnsureError`]
//! - **Traits**: [`ErrorCategory`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn read_settings() -> Outcome<String> {
//!     std::fs::read_to_string("settings.toml").outcome(ErrorKind::ConfigurationError)
//! }
//!
//! fn boundary() -> OutcomeResult<String> {
//!     read_settings().ensure_output()
//! }
//!
//! assert!(boundary().is_err());
//! ```

// Macros
pub use crate::{bail, fail};

// Core types
pub use crate::types::{
    EnsureError, ErrorDescription, ErrorKind, Outcome, OutcomeException, PropertyKind, SuccessKind,
};

// Traits
pub use crate::traits::{ErrorCategory, ResultExt};

/// Result alias for code at an error-returning boundary.
///
/// # Examples
///
/// ```
/// use outcome_rail::prelude::*;
///
/// fn lookup(key: &str) -> OutcomeResult<u32> {
///     let outcome: Outcome<u32> = if key == "answer" {
///         Outcome::ok(42)
///     } else {
///         fail!(ErrorKind::NotFound, "no key `{key}`")
///     };
///     outcome.ensure_output()
/// }
///
/// assert_eq!(lookup("answer").unwrap(), 42);
/// assert!(lookup("question").is_err());
/// ```
pub type OutcomeResult<T, E = ErrorKind> = Result<T, EnsureError<E>>;

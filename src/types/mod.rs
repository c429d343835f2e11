//! Outcome types and their supporting records.
//!
//! This module provides the success/error [`Outcome`] union and everything it carries:
//! error kind catalogs, [`ErrorDescription`], [`Cause`], the property bag and the
//! raisable [`OutcomeException`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ErrorKind, Outcome, PropertyKind};
//!
//! let outcome: Outcome<u32> = Outcome::error_lines(ErrorKind::NotValid, ["name empty", "age negative"])
//!     .set_property(PropertyKind::Diagnostic, "form#signup");
//!
//! assert_eq!(outcome.error_message(), Some("name empty\nage negative"));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod cause;
pub mod contract;
pub mod error_description;
pub mod kinds;
pub mod outcome;
pub mod outcome_exception;

pub use cause::*;
pub use contract::*;
pub use error_description::*;
pub use kinds::*;
pub use outcome::*;
pub use outcome_exception::*;

/// SmallVec-backed collection used for per-key property values.
///
/// Uses inline storage for 1 element, since most keys are set once.
pub type InlineVec<T> = SmallVec<[T; 1]>;

//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Success and Error Outcomes
//!
//! ```
//! use outcome_rail::{ErrorKind, Outcome, SuccessKind};
//!
//! let created: Outcome<u64> = Outcome::ok_as(SuccessKind::Created, 17);
//! assert!(created.is_success());
//! assert_eq!(created.success_kind(), Some(SuccessKind::Created));
//!
//! let failed: Outcome<u64> = Outcome::error_msg(ErrorKind::NotAuthorized, "admin only");
//! assert!(failed.is_error_of(ErrorKind::NotAuthorized));
//! assert_eq!(failed.output(), None);
//! ```
//!
//! ## Crossing an Error-Returning Boundary
//!
//! ```
//! use outcome_rail::{ErrorDescription, ErrorKind, Outcome, OutcomeException};
//!
//! fn legacy_api() -> Result<(), OutcomeException> {
//!     let outcome: Outcome = Outcome::error_msg(ErrorKind::NotFound, "X missing");
//!     outcome.ensure_success().map(|_| ())
//! }
//!
//! let raised = legacy_api().unwrap_err();
//! assert_eq!(raised.to_string(), "NotFound: X missing");
//!
//! let recovered: Outcome = raised.into();
//! assert!(recovered.is_error_of(ErrorKind::NotFound));
//! assert_eq!(recovered.error_message(), Some("X missing"));
//! ```
//!
//! ## Custom Error Categories
//!
//! ```
//! use outcome_rail::Outcome;
//! use core::fmt;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Billing {
//!     CardDeclined,
//! }
//!
//! impl fmt::Display for Billing {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("CardDeclined")
//!     }
//! }
//!
//! let charge: Outcome<u64, Billing> = Outcome::error(Billing::CardDeclined);
//! assert!(charge.is_error_of(Billing::CardDeclined));
//! ```

/// Conversions between Result, Outcome and OutcomeException
pub mod convert;
/// Shorthand macros for erroneous outcomes
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for outcome handling
pub mod traits;
/// Outcome, ErrorDescription and related records
pub mod types;

mod telemetry;

pub use convert::*;
pub use traits::*;
pub use types::{
    alloc_type::BoxedError, Cause, ContractViolation, EnsureError, ErrorDescription, ErrorKind,
    InlineVec, Outcome, OutcomeException, ParseKindError, PropertyBag, PropertyKind,
    PropertyValue, PropertyValues, SuccessKind, MESSAGE_DELIMITER,
};

//! Core traits for outcome handling.
//!
//! - [`ErrorCategory`]: the bound a closed set of error kinds must satisfy
//! - [`ResultExt`]: classifies `Result` errors into [`Outcome`](crate::Outcome)s
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{ErrorCategory, ResultExt};
//! use outcome_rail::{ErrorKind, Outcome};
//!
//! fn assert_category<E: ErrorCategory>() {}
//! assert_category::<ErrorKind>();
//!
//! let outcome: Outcome<i32> = "12".parse::<i32>().outcome(ErrorKind::NotValid);
//! assert_eq!(outcome.output(), Some(&12));
//! ```

pub mod error_category;
pub mod result_ext;

pub use error_category::ErrorCategory;
pub use result_ext::ResultExt;

//! Closed tag sets used by [`Outcome`](crate::Outcome).
//!
//! - [`ErrorKind`] is the default failure catalog. It is append-only: external
//!   code may depend on exact member names, so members are never renamed or removed.
//! - [`SuccessKind`] refines a successful outcome (defaults to [`SuccessKind::Ok`]).
//! - [`PropertyKind`] keys the side-channel property bag.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::ErrorKind;
//!
//! let kind: ErrorKind = "NotFound".parse().unwrap();
//! assert_eq!(kind, ErrorKind::NotFound);
//! assert_eq!(kind.to_string(), "NotFound");
//! ```
use core::fmt::{self, Display};
use core::str::FromStr;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default catalog of failure categories.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    // caller related
    NotFound,
    WrongArguments,
    NotValid,

    // auth
    NoAuthentication,
    NotAuthorized,

    // infrastructure
    Unknown,
    ConfigurationError,
    NetworkError,
    Timeout,
    BadGateway,
    GatewayTimeout,

    Domain,
}

impl ErrorKind {
    /// Every member, in declaration order. Grows as members are appended.
    pub const ALL: &'static [ErrorKind] = &[
        ErrorKind::NotFound,
        ErrorKind::WrongArguments,
        ErrorKind::NotValid,
        ErrorKind::NoAuthentication,
        ErrorKind::NotAuthorized,
        ErrorKind::Unknown,
        ErrorKind::ConfigurationError,
        ErrorKind::NetworkError,
        ErrorKind::Timeout,
        ErrorKind::BadGateway,
        ErrorKind::GatewayTimeout,
        ErrorKind::Domain,
    ];

    /// Returns the member name, e.g. `"NotFound"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NotFound",
            ErrorKind::WrongArguments => "WrongArguments",
            ErrorKind::NotValid => "NotValid",
            ErrorKind::NoAuthentication => "NoAuthentication",
            ErrorKind::NotAuthorized => "NotAuthorized",
            ErrorKind::Unknown => "Unknown",
            ErrorKind::ConfigurationError => "ConfigurationError",
            ErrorKind::NetworkError => "NetworkError",
            ErrorKind::Timeout => "Timeout",
            ErrorKind::BadGateway => "BadGateway",
            ErrorKind::GatewayTimeout => "GatewayTimeout",
            ErrorKind::Domain => "Domain",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a name that is not a member of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error kind `{name}`")]
pub struct ParseKindError {
    name: String,
}

impl ParseKindError {
    /// The rejected input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for ErrorKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError { name: s.to_owned() })
    }
}

/// Sub-kind of a successful outcome.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SuccessKind {
    #[default]
    Ok,
    Created,
    Accepted,
    Updated,
    Deleted,
    NoContent,
}

impl SuccessKind {
    /// Returns the member name, e.g. `"Created"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SuccessKind::Ok => "Ok",
            SuccessKind::Created => "Created",
            SuccessKind::Accepted => "Accepted",
            SuccessKind::Updated => "Updated",
            SuccessKind::Deleted => "Deleted",
            SuccessKind::NoContent => "NoContent",
        }
    }
}

impl Display for SuccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key of the property bag attached to an outcome.
///
/// # Examples
///
/// ```
/// use outcome_rail::PropertyKind;
///
/// assert_eq!(PropertyKind::custom("shard"), PropertyKind::custom("shard".to_string()));
/// assert_ne!(PropertyKind::Warning, PropertyKind::Notice);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Warning,
    Notice,
    Diagnostic,
    CorrelationId,
    Custom(Cow<'static, str>),
}

impl PropertyKind {
    /// Creates a caller-named property key.
    #[inline]
    pub fn custom<S: Into<Cow<'static, str>>>(name: S) -> Self {
        Self::Custom(name.into())
    }
}

impl Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKind::Warning => f.write_str("Warning"),
            PropertyKind::Notice => f.write_str("Notice"),
            PropertyKind::Diagnostic => f.write_str("Diagnostic"),
            PropertyKind::CorrelationId => f.write_str("CorrelationId"),
            PropertyKind::Custom(name) => f.write_str(name),
        }
    }
}

//! `tracing` events emitted at boundary crossings (requires the `tracing` feature).
//!
//! Events carry the error message as their `message` field. Without the feature every hook
//! is an empty inline function.
use crate::traits::ErrorCategory;
use crate::types::{ContractViolation, ErrorDescription};

/// An outcome transitioned to the error state.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn error_set<E: ErrorCategory>(desc: &ErrorDescription<E>) {
    tracing::trace!(uid = %desc.uid(), kind = %desc.kind(), message = desc.message());
}

/// An error description is leaving value-based control flow as an `Err`.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn raised<E: ErrorCategory>(desc: &ErrorDescription<E>) {
    tracing::debug!(
        uid = %desc.uid(),
        kind = %desc.kind(),
        message = desc.message(),
        has_cause = desc.cause().is_some()
    );
}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn contract_violated(violation: &ContractViolation) {
    tracing::warn!(message = %violation);
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn error_set<E: ErrorCategory>(_desc: &ErrorDescription<E>) {}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn raised<E: ErrorCategory>(_desc: &ErrorDescription<E>) {}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn contract_violated(_violation: &ContractViolation) {}

//! Common error infrastructure for fight-core.
//!
//! Domain-specific errors (e.g. [`crate::InvalidPlayerId`],
//! [`crate::ProfileError`]) live next to the types they validate and
//! implement [`GameError`] so callers can classify them uniformly.
//!
//! Requests that are merely illegal in the current combat state (an attack
//! while on cooldown, a jump while airborne) are not errors at all: the
//! engine drops them silently, because the decision policy issues them
//! constantly during training.

/// Severity level of an error, used for categorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: player id outside `1..=2`, negative fighter dimensions
    Validation,

    /// Internal error - unexpected failure outside the caller's control.
    ///
    /// Examples: a batch worker task panicked
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all fight-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who must act: the caller (validation) or a maintainer
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

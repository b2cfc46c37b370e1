//! Common error infrastructure for hunt-core.
//!
//! Gameplay queries never fail: missing collaborators and empty pools degrade
//! to `None`/empty results. The error types in this crate cover the places
//! where the host hands us something unusable (a missing oracle, a candidate
//! pool with duplicate objects) and are defined next to the code that
//! validates them.

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The caller can carry on with degraded functionality.
    ///
    /// Examples: no spatial source for this frame's ray cast
    Recoverable,

    /// Invalid input, should not retry without changes.
    ///
    /// Examples: duplicate object in a candidate pool
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all hunt-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait HuntError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

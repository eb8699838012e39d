//! Common error infrastructure for arena-core.
//!
//! Domain-specific errors (`CombatError`, `ArchetypeError`, `GuessError`) live
//! next to the rules they guard. This module provides the shared severity
//! classification they all report through [`GameError`].

/// Severity level of an error, used for categorization and handling strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Caller broke a precondition of the rules (a driver bug)
/// - **Fatal**: The game reached a state the rules declare unreachable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: move on cooldown, malformed guess, armor above 100%
    Validation,

    /// Internal error - unexpected use of the API.
    ///
    /// Examples: resolving a round before both moves were chosen
    Internal,

    /// Fatal error - game state is inconsistent, cannot continue.
    ///
    /// Examples: the turn loop stopped while both actors are alive
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates a bug in the caller.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all arena-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who is at fault, not on impact
/// - Keep `error_code` stable; logs and tests match on it
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

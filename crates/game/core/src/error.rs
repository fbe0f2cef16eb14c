//! Common error infrastructure for board-core.
//!
//! Domain errors (e.g. [`crate::movement::MoveError`]) live next to the
//! operations that produce them. Stat updates never fail: they saturate.
//! The only fallible operations are walker calls made out of sequence,
//! which are caller bugs and are surfaced immediately instead of ignored.

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: a move of zero steps.
    Validation,

    /// The caller drove the state machine out of order.
    ///
    /// Examples: ticking a walker that is not between tiles.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates a bug in the caller.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all board-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

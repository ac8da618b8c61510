//! Error types for utility sessions.

use thiserror::Error;

/// Result type for utility operations.
pub type UtilResult<T> = Result<T, UtilError>;

/// Errors that can occur while selecting or activating a utility.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtilError {
    /// A selection named something other than dice, coin, or card.
    #[error("invalid utility kind: {0}")]
    InvalidKind(String),

    /// The random source could not produce a value.
    #[error("random source unavailable")]
    RandomSourceUnavailable,

    /// The presentation surface rejected an update.
    #[error("display unavailable: {0}")]
    DisplayUnavailable(String),

    /// An inclusive draw was asked for with `min > max`.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Lower bound requested.
        min: u32,
        /// Upper bound requested.
        max: u32,
    },

    /// Unknown command in the line interface.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl UtilError {
    /// Whether the session can continue as if the failed input never happened.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidKind(_) | Self::UnknownCommand(_))
    }
}

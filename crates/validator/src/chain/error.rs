//! Caller misuse
//!
//! A [`ContractViolation`] means the check itself was called wrongly. It is
//! returned as `Err` and never lands in the caller's error list.

use thiserror::Error;

/// A check was invoked with arguments it cannot work with.
#[derive(Debug, Clone, Error)]
pub enum ContractViolation {
    /// The not-allowed list given to a string check was not an array.
    #[error("not-allowed values must be an array, got {actual}")]
    NotAllowedNotArray {
        /// Type name of the value that was passed instead.
        actual: &'static str,
    },

    /// The allowed list given to an array match did not form a valid pattern.
    #[error("allowed values do not form a valid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

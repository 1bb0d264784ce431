//! Error types for the code crate.

use thiserror::Error;

/// Errors produced while building layouts or noise specifications.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodeError {
    /// Requested code distance is not supported.
    #[error("unsupported code distance {distance} (allowed: 3, 5, 7, 9)")]
    InvalidDistance {
        /// The offending distance.
        distance: usize,
    },

    /// Noise parameters are out of range or mutually inconsistent.
    #[error("invalid noise parameters: {0}")]
    InvalidNoiseParameters(String),
}

/// Result type for code-construction operations.
pub type CodeResult<T> = Result<T, CodeError>;

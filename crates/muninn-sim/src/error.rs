//! Error types for the sampler crate.

use thiserror::Error;

/// Errors produced by syndrome sampling.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// The number of syndrome-extraction rounds must be at least 1.
    #[error("rounds must be at least 1, got {0}")]
    InvalidRounds(usize),

    /// The number of shots must be at least 1.
    #[error("shots must be at least 1, got {0}")]
    InvalidShots(usize),

    /// The selected backend cannot represent the requested configuration.
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// No backend is registered under the requested name.
    #[error("unknown backend \"{0}\"")]
    UnknownBackend(String),

    /// Layout or noise construction failed.
    #[error(transparent)]
    Code(#[from] muninn_code::CodeError),
}

/// Result type for sampling operations.
pub type SimResult<T> = Result<T, SimError>;

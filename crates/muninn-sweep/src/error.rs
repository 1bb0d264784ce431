//! Error types for the sweep crate.

use thiserror::Error;

/// Errors produced while orchestrating experiments.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SweepError {
    /// Layout or noise construction failed.
    #[error(transparent)]
    Code(#[from] muninn_code::CodeError),

    /// Sampling failed.
    #[error(transparent)]
    Sim(#[from] muninn_sim::SimError),

    /// Decoder construction failed.
    #[error(transparent)]
    Decode(#[from] muninn_decode::DecodeError),

    /// A sweep worker thread panicked.
    #[error("sweep worker thread panicked")]
    WorkerPanicked,

    /// Writing report rows failed.
    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sweep operations.
pub type SweepResult<T> = Result<T, SweepError>;

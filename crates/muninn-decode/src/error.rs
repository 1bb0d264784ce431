//! Error types for the decoder crate.

use thiserror::Error;

/// Errors produced while constructing decoders.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// No decoder is registered under the requested name.
    #[error("unknown decoder \"{0}\"")]
    UnknownDecoder(String),

    /// Layout construction for the decoder failed.
    #[error(transparent)]
    Code(#[from] muninn_code::CodeError),
}

/// Result type for decoder operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

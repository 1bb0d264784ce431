//! `muninn-decode` — logical-error decoders.
//!
//! Decoders consume [`SampledSyndromes`] and produce one pair of logical
//! flip predictions per shot. Two implementations share the [`Decoder`]
//! contract:
//!
//! - [`LocalDecoder`] — "did anything fire at all": a zero-calibration
//!   baseline that flags a logical flip whenever the opposite family saw
//!   any detection event.
//! - [`MwpmDecoder`] — matches active detectors against a boundary node on
//!   a per-family matching graph and predicts from the correction parity.
//!
//! Both are cross-wired the same way: Z-type detections drive the
//! X-logical prediction and X-type detections drive the Z-logical
//! prediction, because a Z-stabilizer violation witnesses an X-type error
//! chain and vice versa.
//!
//! Decoding is pure and per-shot independent; decoders hold no mutable
//! state and may be shared across threads.

pub mod error;

mod local;
mod mwpm;

use muninn_code::SampledSyndromes;

pub use error::{DecodeError, DecodeResult};
pub use local::LocalDecoder;
pub use mwpm::MwpmDecoder;

/// Per-shot logical flip predictions, in shot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalPredictions {
    /// Predicted logical-X flip per shot.
    pub x_logical: Vec<u8>,
    /// Predicted logical-Z flip per shot.
    pub z_logical: Vec<u8>,
}

impl LogicalPredictions {
    /// All-zero predictions for a given shot count.
    pub fn zeros(shots: usize) -> Self {
        Self {
            x_logical: vec![0; shots],
            z_logical: vec![0; shots],
        }
    }

    /// Number of shots covered by the predictions.
    pub fn shots(&self) -> usize {
        self.x_logical.len()
    }

    /// Per-shot indicator of any predicted logical failure (X or Z).
    pub fn failures(&self) -> Vec<u8> {
        self.x_logical
            .iter()
            .zip(&self.z_logical)
            .map(|(&x, &z)| x | z)
            .collect()
    }
}

/// A logical-error decoder over sampled detection events.
pub trait Decoder: Send + Sync {
    /// Registry name of this decoder.
    fn name(&self) -> &'static str;

    /// Predict logical flips for every shot of the sampled syndromes.
    ///
    /// Total: degenerate inputs (no detectors, zero rounds) decode to
    /// all-zero rather than failing.
    fn decode(&self, syndromes: &SampledSyndromes) -> LogicalPredictions;
}

/// Names of the built-in decoders, in registry order.
pub const DECODER_NAMES: [&str; 2] = ["local", "mwpm"];

/// Construct a decoder by registry name.
///
/// The MWPM decoder needs the code distance to size its matching graphs;
/// the local decoder ignores it. Fails with [`DecodeError::UnknownDecoder`]
/// for unregistered names.
pub fn decoder(name: &str, distance: usize) -> DecodeResult<Box<dyn Decoder>> {
    match name {
        "local" => Ok(Box::new(LocalDecoder::new())),
        "mwpm" => Ok(Box::new(MwpmDecoder::from_distance(distance)?)),
        other => Err(DecodeError::UnknownDecoder(other.to_string())),
    }
}

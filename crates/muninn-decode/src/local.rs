//! Trivial parity-check decoder.

use ndarray::s;

use muninn_code::SampledSyndromes;

use crate::{Decoder, LogicalPredictions};

/// Zero-calibration baseline decoder.
///
/// Predicts a logical-X flip for a shot if any Z-type detection event fired
/// anywhere across its rounds, and symmetrically a logical-Z flip for any
/// X-type event. Ignores all spatial structure: it only answers "was the
/// code perturbed at all", which makes it a performance floor for sanity
/// checks, not a production decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDecoder;

impl LocalDecoder {
    /// Create the decoder.
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for LocalDecoder {
    fn name(&self) -> &'static str {
        "local"
    }

    fn decode(&self, syndromes: &SampledSyndromes) -> LogicalPredictions {
        let shots = syndromes.shots();
        let mut predictions = LogicalPredictions::zeros(shots);

        for shot in 0..shots {
            let any_z = syndromes
                .z_detection
                .slice(s![shot, .., ..])
                .iter()
                .any(|&bit| bit != 0);
            let any_x = syndromes
                .x_detection
                .slice(s![shot, .., ..])
                .iter()
                .any(|&bit| bit != 0);
            predictions.x_logical[shot] = u8::from(any_z);
            predictions.z_logical[shot] = u8::from(any_x);
        }

        predictions
    }
}

//! Raw measurement blocks and detection events.
//!
//! A measurement block is a `(shots, rounds, stabilizers)` bit array, one
//! per stabilizer family. Detection events are the round-to-round XOR of a
//! block: round 0 is reported as-is (a standing defect at circuit start is
//! itself a detection), round r>0 fires where the outcome changed against
//! round r−1.

use ndarray::{Array3, Zip, s};

/// Per-shot, per-round, per-stabilizer measurement bits.
pub type MeasurementBlock = Array3<u8>;

/// Round-to-round differencing of a raw measurement block.
///
/// Pure and total: the output has the shape of the input, with
/// `out[s, 0, i] = raw[s, 0, i]` and `out[s, r, i] = raw[s, r, i] XOR
/// raw[s, r−1, i]` for r > 0. No state is carried across shots.
pub fn detection_events(raw: &MeasurementBlock) -> MeasurementBlock {
    let mut events = Array3::zeros(raw.raw_dim());
    if raw.is_empty() {
        return events;
    }

    events
        .slice_mut(s![.., 0, ..])
        .assign(&raw.slice(s![.., 0, ..]));

    for round in 1..raw.shape()[1] {
        let current = raw.slice(s![.., round, ..]);
        let previous = raw.slice(s![.., round - 1, ..]);
        Zip::from(events.slice_mut(s![.., round, ..]))
            .and(&current)
            .and(&previous)
            .for_each(|event, &cur, &prev| *event = cur ^ prev);
    }

    events
}

/// Sampled syndrome-extraction output for one run.
///
/// Raw measurement blocks and their detection events, X and Z families kept
/// separate. Assembled once by the sampler and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct SampledSyndromes {
    /// Raw X-stabilizer outcomes.
    pub x_meas: MeasurementBlock,
    /// Raw Z-stabilizer outcomes.
    pub z_meas: MeasurementBlock,
    /// Detection events derived from `x_meas`.
    pub x_detection: MeasurementBlock,
    /// Detection events derived from `z_meas`.
    pub z_detection: MeasurementBlock,
}

impl SampledSyndromes {
    /// Assemble from raw blocks, computing detection events for both
    /// families.
    pub fn from_raw(x_meas: MeasurementBlock, z_meas: MeasurementBlock) -> Self {
        let x_detection = detection_events(&x_meas);
        let z_detection = detection_events(&z_meas);
        Self {
            x_meas,
            z_meas,
            x_detection,
            z_detection,
        }
    }

    /// Number of shots in the blocks.
    pub fn shots(&self) -> usize {
        self.x_meas.shape()[0]
    }

    /// Number of syndrome-extraction rounds in the blocks.
    pub fn rounds(&self) -> usize {
        self.x_meas.shape()[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_zero_is_copied_verbatim() {
        let mut raw = Array3::zeros((1, 1, 3));
        raw[[0, 0, 1]] = 1;
        let events = detection_events(&raw);
        assert_eq!(events, raw);
    }

    #[test]
    fn transform_is_independent_per_shot() {
        let mut raw = Array3::zeros((2, 2, 1));
        raw[[0, 0, 0]] = 1;
        let events = detection_events(&raw);
        // Shot 1 saw nothing; shot 0's history must not leak into it.
        assert_eq!(events[[1, 0, 0]], 0);
        assert_eq!(events[[1, 1, 0]], 0);
        assert_eq!(events[[0, 0, 0]], 1);
        assert_eq!(events[[0, 1, 0]], 1);
    }
}

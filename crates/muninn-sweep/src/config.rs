//! Experiment configuration and sweep grids.

use serde::{Deserialize, Serialize};

use muninn_code::{Layout, NoiseConfig, NoiseModel};
use muninn_decode::decoder;
use muninn_sim::{SimError, backend};

use crate::error::SweepResult;

/// One fully specified experiment point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Code distance.
    pub distance: usize,
    /// Syndrome-extraction rounds per shot.
    pub rounds: usize,
    /// Number of shots.
    pub shots: usize,
    /// Flat noise parameters; validated as part of [`validate`].
    ///
    /// [`validate`]: ExperimentConfig::validate
    pub noise: NoiseConfig,
    /// Decoder registry name.
    pub decoder: String,
    /// Backend registry name.
    pub backend: String,
    /// Seed for the sampler's random stream.
    pub seed: u64,
}

impl ExperimentConfig {
    /// Validate the whole configuration eagerly, before any sampling.
    ///
    /// Checks the distance, the noise parameters, the round and shot
    /// counts, and that the decoder and backend names resolve. Nothing is
    /// clamped or coerced; the first violation is returned as-is.
    pub fn validate(&self) -> SweepResult<()> {
        Layout::build(self.distance)?;
        self.noise.build()?;
        if self.rounds == 0 {
            return Err(SimError::InvalidRounds(0).into());
        }
        if self.shots == 0 {
            return Err(SimError::InvalidShots(0).into());
        }
        backend(&self.backend)?;
        decoder(&self.decoder, self.distance)?;
        Ok(())
    }
}

/// Cartesian sweep description: every combination of distance, backend,
/// decoder, and error probability becomes one experiment point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepGrid {
    /// Code distances to sweep.
    pub distances: Vec<usize>,
    /// Error probabilities to sweep (depolarizing `p`; ignored by the
    /// biased model, which takes its axis probabilities from the fields
    /// below).
    pub p_values: Vec<f64>,
    /// Backend registry names to sweep.
    pub backends: Vec<String>,
    /// Decoder registry names to sweep.
    pub decoders: Vec<String>,
    /// Rounds per shot, shared by every point.
    pub rounds: usize,
    /// Shots per point, shared by every point.
    pub shots: usize,
    /// Biased-Pauli X probability; setting any axis switches the model.
    pub px: Option<f64>,
    /// Biased-Pauli Y probability.
    pub py: Option<f64>,
    /// Biased-Pauli Z probability.
    pub pz: Option<f64>,
    /// Symmetric readout flip probability.
    pub readout_error: f64,
    /// Asymmetric readout flip 0→1.
    pub readout_error_0to1: Option<f64>,
    /// Asymmetric readout flip 1→0.
    pub readout_error_1to0: Option<f64>,
    /// Seed of the first point; later points use consecutive offsets.
    pub base_seed: u64,
}

impl SweepGrid {
    /// Whether the axis fields select the biased-Pauli model.
    fn model(&self) -> NoiseModel {
        if self.px.is_some() || self.py.is_some() || self.pz.is_some() {
            NoiseModel::BiasedPauli
        } else {
            NoiseModel::Depolarizing
        }
    }

    /// Expand the grid into experiment points.
    ///
    /// Iteration order is distance-major (distance, backend, decoder, p),
    /// and each point receives `base_seed + offset` with offsets counted in
    /// that order, so a grid is reproducible from its description alone.
    pub fn configs(&self) -> Vec<ExperimentConfig> {
        let model = self.model();
        let mut configs = Vec::new();
        let mut seed_offset = 0_u64;

        for &distance in &self.distances {
            for backend in &self.backends {
                for decoder in &self.decoders {
                    for &p in &self.p_values {
                        let noise = NoiseConfig {
                            model,
                            p,
                            px: self.px,
                            py: self.py,
                            pz: self.pz,
                            readout_error: self.readout_error,
                            readout_error_0to1: self.readout_error_0to1,
                            readout_error_1to0: self.readout_error_1to0,
                        };
                        configs.push(ExperimentConfig {
                            distance,
                            rounds: self.rounds,
                            shots: self.shots,
                            noise,
                            decoder: decoder.clone(),
                            backend: backend.clone(),
                            seed: self.base_seed + seed_offset,
                        });
                        seed_offset += 1;
                    }
                }
            }
        }

        configs
    }
}

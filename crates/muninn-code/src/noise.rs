//! Noise channel specification.
//!
//! The sampler consumes a validated [`NoiseSpec`]; decoders never see it.
//! The type is a sum type: a depolarizing channel carries `p` only and a
//! biased-Pauli channel carries the per-axis probabilities only, so fields
//! of the inactive model cannot exist at all. The flat, serde-facing
//! [`NoiseConfig`] mirrors the CLI parameter set and is validated exactly
//! once into the sum type by [`NoiseConfig::build`].

use serde::{Deserialize, Serialize};

use crate::error::{CodeError, CodeResult};

/// Pauli error channel attached to gate operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PauliNoise {
    /// With probability `p`, a uniformly random non-identity Pauli.
    Depolarizing {
        /// Total error probability.
        p: f64,
    },
    /// X, Y, Z applied with separate probabilities in one mutually
    /// exclusive draw.
    Biased {
        /// X-flip probability.
        px: f64,
        /// Y-flip probability.
        py: f64,
        /// Z-flip probability.
        pz: f64,
    },
}

/// Classical flip channel applied to measurement outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReadoutNoise {
    /// The measured bit flips with the same probability in both directions.
    Symmetric {
        /// Flip probability.
        p: f64,
    },
    /// The flip probability depends on the true bit value.
    Asymmetric {
        /// Probability that a true 0 reads as 1.
        p_0to1: f64,
        /// Probability that a true 1 reads as 0.
        p_1to0: f64,
    },
}

/// Validated noise specification: one Pauli channel and one readout channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseSpec {
    pauli: PauliNoise,
    readout: ReadoutNoise,
}

impl NoiseSpec {
    /// Validate and assemble a noise specification.
    ///
    /// All probabilities must lie in `[0, 1]`; for the biased channel the
    /// per-axis probabilities must additionally sum to at most 1. Validation
    /// is idempotent — the returned value needs no further checking.
    pub fn new(pauli: PauliNoise, readout: ReadoutNoise) -> CodeResult<Self> {
        match pauli {
            PauliNoise::Depolarizing { p } => check_probability("p", p)?,
            PauliNoise::Biased { px, py, pz } => {
                check_probability("px", px)?;
                check_probability("py", py)?;
                check_probability("pz", pz)?;
                if px + py + pz > 1.0 {
                    return Err(CodeError::InvalidNoiseParameters(format!(
                        "px+py+pz must be <= 1, got {}",
                        px + py + pz
                    )));
                }
            }
        }
        match readout {
            ReadoutNoise::Symmetric { p } => check_probability("readout_error", p)?,
            ReadoutNoise::Asymmetric { p_0to1, p_1to0 } => {
                check_probability("readout_error_0to1", p_0to1)?;
                check_probability("readout_error_1to0", p_1to0)?;
            }
        }
        Ok(Self { pauli, readout })
    }

    /// The gate-level Pauli channel.
    pub fn pauli(&self) -> PauliNoise {
        self.pauli
    }

    /// The measurement flip channel.
    pub fn readout(&self) -> ReadoutNoise {
        self.readout
    }
}

fn check_probability(name: &str, value: f64) -> CodeResult<()> {
    if value.is_nan() || !(0.0..=1.0).contains(&value) {
        return Err(CodeError::InvalidNoiseParameters(format!(
            "{name} must be in [0, 1], got {value}"
        )));
    }
    Ok(())
}

/// Noise model tag of the flat configuration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseModel {
    /// Uniform depolarizing channel driven by a single probability `p`.
    #[default]
    Depolarizing,
    /// Biased Pauli channel driven by `px`, `py`, `pz`.
    BiasedPauli,
}

/// Flat noise parameter set as it arrives from a CLI or a config file.
///
/// Carries every field the sweep row schema reports; [`build`] rejects
/// inconsistent combinations and produces the sum-typed [`NoiseSpec`] the
/// samplers consume.
///
/// [`build`]: NoiseConfig::build
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Channel family selector.
    #[serde(default)]
    pub model: NoiseModel,
    /// Depolarizing probability (ignored by the biased model).
    #[serde(default)]
    pub p: f64,
    /// Biased-Pauli X probability.
    #[serde(default)]
    pub px: Option<f64>,
    /// Biased-Pauli Y probability.
    #[serde(default)]
    pub py: Option<f64>,
    /// Biased-Pauli Z probability.
    #[serde(default)]
    pub pz: Option<f64>,
    /// Symmetric readout flip probability.
    #[serde(default)]
    pub readout_error: f64,
    /// Asymmetric readout flip 0→1; must be paired with `readout_error_1to0`.
    #[serde(default)]
    pub readout_error_0to1: Option<f64>,
    /// Asymmetric readout flip 1→0; must be paired with `readout_error_0to1`.
    #[serde(default)]
    pub readout_error_1to0: Option<f64>,
}

impl NoiseConfig {
    /// A depolarizing configuration with symmetric readout error.
    pub fn depolarizing(p: f64, readout_error: f64) -> Self {
        Self {
            model: NoiseModel::Depolarizing,
            p,
            readout_error,
            ..Self::default()
        }
    }

    /// A biased-Pauli configuration with symmetric readout error.
    pub fn biased(px: f64, py: f64, pz: f64, readout_error: f64) -> Self {
        Self {
            model: NoiseModel::BiasedPauli,
            px: Some(px),
            py: Some(py),
            pz: Some(pz),
            readout_error,
            ..Self::default()
        }
    }

    /// Validate the flat form and produce the sum-typed specification.
    ///
    /// Fails with [`CodeError::InvalidNoiseParameters`] if any probability
    /// is out of range, the biased axis probabilities are missing or sum
    /// above 1, or exactly one of the asymmetric readout fields is set.
    pub fn build(&self) -> CodeResult<NoiseSpec> {
        let readout = match (self.readout_error_0to1, self.readout_error_1to0) {
            (Some(p_0to1), Some(p_1to0)) => ReadoutNoise::Asymmetric { p_0to1, p_1to0 },
            (None, None) => ReadoutNoise::Symmetric {
                p: self.readout_error,
            },
            _ => {
                return Err(CodeError::InvalidNoiseParameters(
                    "readout_error_0to1 and readout_error_1to0 must both be set or both be absent"
                        .into(),
                ));
            }
        };

        let pauli = match self.model {
            NoiseModel::Depolarizing => PauliNoise::Depolarizing { p: self.p },
            NoiseModel::BiasedPauli => {
                let (px, py, pz) = match (self.px, self.py, self.pz) {
                    (Some(px), Some(py), Some(pz)) => (px, py, pz),
                    _ => {
                        return Err(CodeError::InvalidNoiseParameters(
                            "px, py and pz must all be set for biased Pauli noise".into(),
                        ));
                    }
                };
                PauliNoise::Biased { px, py, pz }
            }
        };

        NoiseSpec::new(pauli, readout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depolarizing_ignores_axis_fields() {
        // The flat form may carry stale axis values; the sum type drops them.
        let config = NoiseConfig {
            px: Some(0.2),
            ..NoiseConfig::depolarizing(0.01, 0.0)
        };
        let spec = config.build().unwrap();
        assert_eq!(spec.pauli(), PauliNoise::Depolarizing { p: 0.01 });
    }

    #[test]
    fn nan_probability_rejected() {
        let config = NoiseConfig::depolarizing(f64::NAN, 0.0);
        assert!(config.build().is_err());
    }
}

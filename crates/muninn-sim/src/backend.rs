//! Sampler backend contract and registry.
//!
//! A backend turns a sampling request into raw per-round stabilizer
//! measurements. The two built-in strategies draw from the same stochastic
//! model but with different machinery — full statevector trajectories
//! versus Pauli-frame propagation — and are drop-in substitutable behind
//! [`SamplerBackend`]. Backends are selected by registry name, mirroring
//! how decoders are selected in `muninn-decode`.

use rustc_hash::FxHashMap;
use tracing::debug;

use muninn_code::{Layout, NoiseSpec, SampledSyndromes};

use crate::error::{SimError, SimResult};
use crate::frame::FrameBackend;
use crate::statevector::StatevectorBackend;

/// A single sampling request.
///
/// The seed fully determines the pseudo-random stream: repeated calls with
/// identical requests produce bit-identical blocks within one backend.
#[derive(Debug, Clone, Copy)]
pub struct SampleRequest<'a> {
    /// Stabilizer layout to measure.
    pub layout: &'a Layout,
    /// Number of syndrome-extraction rounds, at least 1.
    pub rounds: usize,
    /// Number of shots, at least 1.
    pub shots: usize,
    /// Validated noise specification.
    pub noise: &'a NoiseSpec,
    /// Seed for the backend's private random stream.
    pub seed: u64,
}

impl SampleRequest<'_> {
    pub(crate) fn validate(&self) -> SimResult<()> {
        if self.rounds == 0 {
            return Err(SimError::InvalidRounds(0));
        }
        if self.shots == 0 {
            return Err(SimError::InvalidShots(0));
        }
        Ok(())
    }
}

/// Interchangeable syndrome-extraction simulation strategy.
///
/// Implementations own no shared mutable state: concurrent `sample` calls
/// with independent requests are safe.
pub trait SamplerBackend: Send + Sync {
    /// Registry name of this backend.
    fn name(&self) -> &'static str;

    /// Sample raw syndrome measurements for every shot of the request.
    ///
    /// Deterministic per seed. Distinct backends realise the same
    /// stochastic model but are not bit-compatible with each other.
    fn sample(&self, request: &SampleRequest<'_>) -> SimResult<SampledSyndromes>;
}

/// Names of the built-in backends, in registry order.
pub const BACKEND_NAMES: [&str; 2] = ["statevector", "frame"];

type BackendFactory = fn() -> Box<dyn SamplerBackend>;

fn make_statevector() -> Box<dyn SamplerBackend> {
    Box::new(StatevectorBackend::new())
}

fn make_frame() -> Box<dyn SamplerBackend> {
    Box::new(FrameBackend::new())
}

fn builtin_factories() -> FxHashMap<&'static str, BackendFactory> {
    let mut factories: FxHashMap<&'static str, BackendFactory> = FxHashMap::default();
    factories.insert("statevector", make_statevector);
    factories.insert("frame", make_frame);
    factories
}

/// Construct a sampler backend by registry name.
///
/// Fails with [`SimError::UnknownBackend`] for unregistered names.
pub fn backend(name: &str) -> SimResult<Box<dyn SamplerBackend>> {
    match builtin_factories().get(name) {
        Some(factory) => {
            debug!(backend = name, "constructing sampler backend");
            Ok(factory())
        }
        None => Err(SimError::UnknownBackend(name.to_string())),
    }
}

//! `muninn-sim` — syndrome-extraction sampling backends.
//!
//! Produces raw per-round, per-stabilizer measurement bits for a rotated
//! surface code memory experiment under a validated noise specification.
//! Two interchangeable strategies implement the [`SamplerBackend`]
//! contract:
//!
//! - **`statevector`** — dense amplitude-vector trajectories with
//!   projective measurement; exact but exponential in qubit count.
//! - **`frame`** — Pauli-frame (stabilizer formalism) propagation;
//!   linear cost, restricted to symmetric readout noise.
//!
//! Both backends execute the same per-round schedule and draw faults from
//! the same channel semantics, so their output distributions agree; their
//! bit streams do not, because the sampling algorithms differ. Each is
//! individually deterministic for a fixed seed — the seed is threaded as a
//! plain argument, never held in global state.
//!
//! # Example
//!
//! ```ignore
//! use muninn_code::{Layout, NoiseConfig};
//! use muninn_sim::{SampleRequest, backend};
//!
//! let layout = Layout::build(3)?;
//! let noise = NoiseConfig::depolarizing(0.001, 0.01).build()?;
//! let sampler = backend("frame")?;
//! let syndromes = sampler.sample(&SampleRequest {
//!     layout: &layout,
//!     rounds: 3,
//!     shots: 100,
//!     noise: &noise,
//!     seed: 42,
//! })?;
//! assert_eq!(syndromes.shots(), 100);
//! ```

pub mod backend;
pub mod error;

mod channel;
mod frame;
mod schedule;
mod statevector;

pub use backend::{BACKEND_NAMES, SampleRequest, SamplerBackend, backend};
pub use error::{SimError, SimResult};
pub use frame::FrameBackend;
pub use statevector::StatevectorBackend;

//! `muninn-code` — rotated surface code foundation types.
//!
//! This crate holds the pure, stateless building blocks the rest of Muninn
//! is assembled from:
//!
//! - [`Layout`] — deterministic stabilizer layout of a rotated surface code
//! - [`NoiseSpec`] / [`NoiseConfig`] — validated, sum-typed noise channels
//! - [`MeasurementBlock`] / [`detection_events`] — raw syndrome bits and
//!   their round-to-round differencing
//!
//! Nothing here performs I/O or owns random state; samplers and decoders
//! live in `muninn-sim` and `muninn-decode`.
//!
//! # Quick start
//!
//! ```rust
//! use muninn_code::Layout;
//!
//! let layout = Layout::build(3).unwrap();
//! assert_eq!(layout.num_data_qubits(), 9);
//! // 4 interior cells split into the two stabilizer families.
//! assert_eq!(layout.x_stabilizers().len() + layout.z_stabilizers().len(), 4);
//! ```

pub mod error;
pub mod layout;
pub mod noise;
pub mod syndrome;

pub use error::{CodeError, CodeResult};
pub use layout::{ALLOWED_DISTANCES, Layout};
pub use noise::{NoiseConfig, NoiseModel, NoiseSpec, PauliNoise, ReadoutNoise};
pub use syndrome::{MeasurementBlock, SampledSyndromes, detection_events};

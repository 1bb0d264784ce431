//! `muninn-sweep` — experiment orchestration over the Muninn core.
//!
//! Expands sweep grids into experiment points, runs each point (sample →
//! decode → aggregate), and produces provenance-tagged report rows:
//!
//! - [`ExperimentConfig`] / [`SweepGrid`] — eager whole-config validation
//!   and Cartesian grid expansion with reproducible per-point seeds
//! - [`run_once`] / [`run_batch`] — single-point execution and
//!   thread-per-worker fan-out over independent points
//! - [`stats`] — logical-error-rate mean and seeded bootstrap confidence
//!   intervals
//! - [`RunRecord`] / [`append_records`] — the stable report row schema and
//!   append-style persistence
//!
//! The core stays free of I/O and process state; everything environmental
//! (git SHA, timestamps, files) lives here, at the orchestration boundary.

pub mod config;
pub mod error;
pub mod presets;
pub mod report;
pub mod run;
pub mod stats;

pub use config::{ExperimentConfig, SweepGrid};
pub use error::{SweepError, SweepResult};
pub use report::{REPORT_FIELDS, RunMetadata, RunRecord, append_records, resolve_git_sha};
pub use run::{run_batch, run_once};

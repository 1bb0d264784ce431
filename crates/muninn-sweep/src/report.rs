//! Report rows and run provenance.
//!
//! Every experiment point produces one [`RunRecord`] carrying the fixed
//! field schema the external persistence layer consumes. The schema and
//! its column order are stable: downstream tooling appends rows from
//! separate runs into one file.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;
use std::process::Command;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SweepResult;

/// Column order of the report row schema.
pub const REPORT_FIELDS: [&str; 20] = [
    "run_id",
    "git_sha",
    "seed",
    "distance",
    "rounds",
    "shots",
    "decoder",
    "backend",
    "p",
    "px",
    "py",
    "pz",
    "readout_error",
    "readout_error_0to1",
    "readout_error_1to0",
    "logical_error_rate",
    "ci_low",
    "ci_high",
    "wall_time_seconds",
    "timestamp_utc",
];

/// One report row: configuration, provenance, and aggregated outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Identifier of this experiment point within its run.
    pub run_id: String,
    /// Short git SHA of the producing working tree, or "unknown".
    pub git_sha: String,
    /// Sampler seed.
    pub seed: u64,
    /// Code distance.
    pub distance: usize,
    /// Rounds per shot.
    pub rounds: usize,
    /// Shots in the point.
    pub shots: usize,
    /// Decoder registry name.
    pub decoder: String,
    /// Backend registry name.
    pub backend: String,
    /// Depolarizing probability (0 for biased-Pauli points).
    pub p: f64,
    /// Biased-Pauli X probability, when active.
    pub px: Option<f64>,
    /// Biased-Pauli Y probability, when active.
    pub py: Option<f64>,
    /// Biased-Pauli Z probability, when active.
    pub pz: Option<f64>,
    /// Symmetric readout flip probability.
    pub readout_error: f64,
    /// Asymmetric readout flip 0→1, when active.
    pub readout_error_0to1: Option<f64>,
    /// Asymmetric readout flip 1→0, when active.
    pub readout_error_1to0: Option<f64>,
    /// Fraction of shots with a predicted logical failure.
    pub logical_error_rate: f64,
    /// Lower bootstrap confidence bound, when computable.
    pub ci_low: Option<f64>,
    /// Upper bootstrap confidence bound, when computable.
    pub ci_high: Option<f64>,
    /// Wall-clock duration of sampling plus decoding.
    pub wall_time_seconds: f64,
    /// UTC timestamp of the row.
    pub timestamp_utc: String,
}

impl RunRecord {
    /// The schema header line.
    pub fn csv_header() -> String {
        REPORT_FIELDS.join(",")
    }

    /// Render the row in schema column order. Absent optional values render
    /// as empty cells.
    pub fn to_csv_row(&self) -> String {
        let mut row = String::new();
        let _ = write!(
            row,
            "{},{},{},{},{},{},{},{},{}",
            self.run_id,
            self.git_sha,
            self.seed,
            self.distance,
            self.rounds,
            self.shots,
            self.decoder,
            self.backend,
            self.p,
        );
        for value in [self.px, self.py, self.pz] {
            push_optional(&mut row, value);
        }
        let _ = write!(row, ",{}", self.readout_error);
        for value in [self.readout_error_0to1, self.readout_error_1to0] {
            push_optional(&mut row, value);
        }
        let _ = write!(row, ",{}", self.logical_error_rate);
        for value in [self.ci_low, self.ci_high] {
            push_optional(&mut row, value);
        }
        let _ = write!(row, ",{},{}", self.wall_time_seconds, self.timestamp_utc);
        row
    }
}

fn push_optional(row: &mut String, value: Option<f64>) {
    match value {
        Some(v) => {
            let _ = write!(row, ",{v}");
        }
        None => row.push(','),
    }
}

/// Append records to a report file, writing the header only when the file
/// is new or empty.
pub fn append_records(path: &Path, records: &[RunRecord]) -> SweepResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let needs_header = std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if needs_header {
        writeln!(file, "{}", RunRecord::csv_header())?;
    }
    for record in records {
        writeln!(file, "{}", record.to_csv_row())?;
    }
    Ok(())
}

/// Provenance attached to every row of a run.
#[derive(Debug, Clone)]
pub struct RunMetadata {
    /// Prefix for the run ids of this run's points.
    pub run_prefix: String,
    /// Short git SHA, or "unknown".
    pub git_sha: String,
    /// When the run started.
    pub started_at: DateTime<Utc>,
}

impl RunMetadata {
    /// Capture provenance for a new run.
    pub fn capture(run_prefix: impl Into<String>) -> Self {
        Self {
            run_prefix: run_prefix.into(),
            git_sha: resolve_git_sha(),
            started_at: Utc::now(),
        }
    }

    /// Run id for the point at `index`.
    pub fn run_id(&self, index: usize) -> String {
        format!("{}-{index:04}", self.run_prefix)
    }

    /// RFC 3339 timestamp of the run start.
    pub fn timestamp(&self) -> String {
        self.started_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Short git SHA of the current working tree, or "unknown" outside a
/// repository. Provenance only — nothing in the core consults it.
pub fn resolve_git_sha() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|sha| sha.trim().to_string())
        .filter(|sha| !sha.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RunRecord {
        RunRecord {
            run_id: "run-0001".into(),
            git_sha: "abc1234".into(),
            seed: 7,
            distance: 3,
            rounds: 2,
            shots: 100,
            decoder: "mwpm".into(),
            backend: "frame".into(),
            p: 0.01,
            px: None,
            py: None,
            pz: None,
            readout_error: 0.0,
            readout_error_0to1: None,
            readout_error_1to0: None,
            logical_error_rate: 0.05,
            ci_low: Some(0.01),
            ci_high: Some(0.09),
            wall_time_seconds: 0.25,
            timestamp_utc: "2026-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn header_matches_schema_width() {
        let header = RunRecord::csv_header();
        assert_eq!(header.split(',').count(), REPORT_FIELDS.len());
        assert!(header.starts_with("run_id,git_sha,seed"));
        assert!(header.ends_with("wall_time_seconds,timestamp_utc"));
    }

    #[test]
    fn row_has_one_cell_per_field() {
        let row = record().to_csv_row();
        assert_eq!(row.split(',').count(), REPORT_FIELDS.len());
    }

    #[test]
    fn absent_optionals_render_empty() {
        let row = record().to_csv_row();
        // px, py, pz sit right after the p column and are all absent.
        let cells: Vec<&str> = row.split(',').collect();
        assert_eq!(cells[8], "0.01");
        assert_eq!(cells[9], "");
        assert_eq!(cells[10], "");
        assert_eq!(cells[11], "");
    }

    #[test]
    fn run_ids_are_zero_padded() {
        let metadata = RunMetadata {
            run_prefix: "run-abcdef".into(),
            git_sha: "unknown".into(),
            started_at: Utc::now(),
        };
        assert_eq!(metadata.run_id(3), "run-abcdef-0003");
        assert_eq!(metadata.run_id(12), "run-abcdef-0012");
    }
}

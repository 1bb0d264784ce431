//! Single-point run command.

use std::path::PathBuf;

use console::style;

use muninn_code::{NoiseConfig, NoiseModel};
use muninn_sweep::{ExperimentConfig, RunMetadata, append_records, run_once};

/// Parsed arguments of the `run` command.
pub struct RunArgs {
    pub distance: usize,
    pub rounds: usize,
    pub shots: usize,
    pub backend: String,
    pub decoder: String,
    pub p: f64,
    pub px: Option<f64>,
    pub py: Option<f64>,
    pub pz: Option<f64>,
    pub readout_error: f64,
    pub readout_error_0to1: Option<f64>,
    pub readout_error_1to0: Option<f64>,
    pub seed: u64,
    pub output: Option<PathBuf>,
}

/// Execute the run command.
pub fn execute(args: RunArgs) -> anyhow::Result<()> {
    let model = if args.px.is_some() || args.py.is_some() || args.pz.is_some() {
        NoiseModel::BiasedPauli
    } else {
        NoiseModel::Depolarizing
    };

    let config = ExperimentConfig {
        distance: args.distance,
        rounds: args.rounds,
        shots: args.shots,
        noise: NoiseConfig {
            model,
            p: args.p,
            px: args.px,
            py: args.py,
            pz: args.pz,
            readout_error: args.readout_error,
            readout_error_0to1: args.readout_error_0to1,
            readout_error_1to0: args.readout_error_1to0,
        },
        decoder: args.decoder,
        backend: args.backend,
        seed: args.seed,
    };
    config.validate()?;

    let metadata = RunMetadata::capture(format!(
        "run-{}",
        &uuid::Uuid::new_v4().simple().to_string()[..6]
    ));
    let record = run_once(&config, &metadata, metadata.run_id(0))?;

    println!(
        "{} d={} backend={} decoder={} p_L={} ({} shots, {:.2}s)",
        style("done").green().bold(),
        record.distance,
        record.backend,
        record.decoder,
        style(format!("{:.4}", record.logical_error_rate)).yellow(),
        record.shots,
        record.wall_time_seconds,
    );
    println!("{}", serde_json::to_string_pretty(&record)?);

    if let Some(path) = args.output {
        append_records(&path, std::slice::from_ref(&record))?;
        println!("Appended 1 row to {}", path.display());
    }

    Ok(())
}

//! Cartesian sweep command.

use std::path::PathBuf;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use muninn_sweep::{RunMetadata, SweepGrid, append_records, run_batch, run_once};

/// Parsed arguments of the `sweep` command.
pub struct SweepArgs {
    pub distances: Vec<usize>,
    pub rounds: usize,
    pub shots: usize,
    pub backends: Vec<String>,
    pub decoders: Vec<String>,
    pub p_values: Vec<f64>,
    pub px: Option<f64>,
    pub py: Option<f64>,
    pub pz: Option<f64>,
    pub readout_error: f64,
    pub readout_error_0to1: Option<f64>,
    pub readout_error_1to0: Option<f64>,
    pub seed: u64,
    pub jobs: usize,
    pub output: PathBuf,
    pub run_prefix: Option<String>,
}

/// Execute the sweep command.
pub fn execute(args: SweepArgs) -> anyhow::Result<()> {
    let grid = SweepGrid {
        distances: args.distances,
        p_values: args.p_values,
        backends: args.backends,
        decoders: args.decoders,
        rounds: args.rounds,
        shots: args.shots,
        px: args.px,
        py: args.py,
        pz: args.pz,
        readout_error: args.readout_error,
        readout_error_0to1: args.readout_error_0to1,
        readout_error_1to0: args.readout_error_1to0,
        base_seed: args.seed,
    };

    let configs = grid.configs();
    for config in &configs {
        config.validate()?;
    }
    tracing::info!(points = configs.len(), jobs = args.jobs, "starting sweep");

    let run_prefix = args.run_prefix.unwrap_or_else(|| {
        format!("run-{}", &uuid::Uuid::new_v4().simple().to_string()[..6])
    });
    let metadata = RunMetadata::capture(run_prefix);

    let records = if args.jobs <= 1 {
        // Sequential path drives the progress bar point by point.
        let bar = ProgressBar::new(configs.len() as u64);
        bar.set_style(ProgressStyle::with_template(
            "{bar:40.cyan/blue} {pos}/{len} {msg}",
        )?);
        let mut records = Vec::with_capacity(configs.len());
        for (index, config) in configs.iter().enumerate() {
            bar.set_message(format!(
                "d={} {} {}",
                config.distance, config.backend, config.decoder
            ));
            records.push(run_once(config, &metadata, metadata.run_id(index))?);
            bar.inc(1);
        }
        bar.finish_and_clear();
        records
    } else {
        run_batch(&configs, &metadata, args.jobs)?
    };

    append_records(&args.output, &records)?;
    println!(
        "{} {} rows to {}",
        style("wrote").green().bold(),
        records.len(),
        args.output.display()
    );

    Ok(())
}

//! Muninn command-line interface.
//!
//! Runs single memory-experiment points, Cartesian sweeps, and the curated
//! preset grids, appending provenance-tagged rows to a report file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{preset, run, sweep, version};

/// Muninn - surface-code memory-experiment sweeps
#[derive(Parser)]
#[command(name = "muninn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single experiment point and print its row
    Run {
        /// Code distance
        #[arg(short, long, default_value = "3")]
        distance: usize,

        /// Number of stabilizer measurement rounds
        #[arg(short, long)]
        rounds: usize,

        /// Number of shots
        #[arg(short, long)]
        shots: usize,

        /// Backend: statevector, frame
        #[arg(short, long, default_value = "frame")]
        backend: String,

        /// Decoder: local, mwpm
        #[arg(long, default_value = "mwpm")]
        decoder: String,

        /// Depolarizing probability p
        #[arg(short, long, default_value = "0.0")]
        p: f64,

        /// Biased Pauli px (switches the noise model)
        #[arg(long)]
        px: Option<f64>,

        /// Biased Pauli py
        #[arg(long)]
        py: Option<f64>,

        /// Biased Pauli pz
        #[arg(long)]
        pz: Option<f64>,

        /// Symmetric readout flip probability
        #[arg(long, default_value = "0.0")]
        readout_error: f64,

        /// Asymmetric readout flip 0->1
        #[arg(long)]
        readout_error_0to1: Option<f64>,

        /// Asymmetric readout flip 1->0
        #[arg(long)]
        readout_error_1to0: Option<f64>,

        /// Sampler seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Append the row to this report file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a Cartesian sweep and append rows to the report file
    Sweep {
        /// Code distance; repeat to sweep
        #[arg(short, long, default_values_t = [3_usize])]
        distance: Vec<usize>,

        /// Number of stabilizer measurement rounds
        #[arg(short, long)]
        rounds: usize,

        /// Number of shots per point
        #[arg(short, long)]
        shots: usize,

        /// Backend; repeat to sweep
        #[arg(short, long, default_values_t = [String::from("frame")])]
        backend: Vec<String>,

        /// Decoder; repeat to sweep
        #[arg(long, default_values_t = [String::from("mwpm")])]
        decoder: Vec<String>,

        /// Depolarizing probability p; repeat to sweep
        #[arg(short, long, default_values_t = [0.0_f64])]
        p: Vec<f64>,

        /// Biased Pauli px (switches the noise model)
        #[arg(long)]
        px: Option<f64>,

        /// Biased Pauli py
        #[arg(long)]
        py: Option<f64>,

        /// Biased Pauli pz
        #[arg(long)]
        pz: Option<f64>,

        /// Symmetric readout flip probability
        #[arg(long, default_value = "0.0")]
        readout_error: f64,

        /// Asymmetric readout flip 0->1
        #[arg(long)]
        readout_error_0to1: Option<f64>,

        /// Asymmetric readout flip 1->0
        #[arg(long)]
        readout_error_1to0: Option<f64>,

        /// Base seed; points use consecutive offsets
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Parallel worker threads
        #[arg(short, long, default_value = "1")]
        jobs: usize,

        /// Report file to append to
        #[arg(short, long, default_value = "experiments/runs.csv")]
        output: PathBuf,

        /// Prefix for run_id values (random if omitted)
        #[arg(long)]
        run_prefix: Option<String>,
    },

    /// Run the curated preset grids
    Preset {
        /// Report file to append to
        #[arg(short, long, default_value = "experiments/presets.csv")]
        output: PathBuf,

        /// Parallel worker threads
        #[arg(short, long, default_value = "1")]
        jobs: usize,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Run {
            distance,
            rounds,
            shots,
            backend,
            decoder,
            p,
            px,
            py,
            pz,
            readout_error,
            readout_error_0to1,
            readout_error_1to0,
            seed,
            output,
        } => run::execute(run::RunArgs {
            distance,
            rounds,
            shots,
            backend,
            decoder,
            p,
            px,
            py,
            pz,
            readout_error,
            readout_error_0to1,
            readout_error_1to0,
            seed,
            output,
        }),

        Commands::Sweep {
            distance,
            rounds,
            shots,
            backend,
            decoder,
            p,
            px,
            py,
            pz,
            readout_error,
            readout_error_0to1,
            readout_error_1to0,
            seed,
            jobs,
            output,
            run_prefix,
        } => sweep::execute(sweep::SweepArgs {
            distances: distance,
            rounds,
            shots,
            backends: backend,
            decoders: decoder,
            p_values: p,
            px,
            py,
            pz,
            readout_error,
            readout_error_0to1,
            readout_error_1to0,
            seed,
            jobs,
            output,
            run_prefix,
        }),

        Commands::Preset { output, jobs } => preset::execute(&output, jobs),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}

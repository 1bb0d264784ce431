//! Experiment execution.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use tracing::info;

use muninn_code::Layout;
use muninn_decode::decoder;
use muninn_sim::{SampleRequest, backend};

use crate::config::ExperimentConfig;
use crate::error::{SweepError, SweepResult};
use crate::report::{RunMetadata, RunRecord};
use crate::stats;

/// Bootstrap resamples behind every row's confidence interval.
const BOOTSTRAP_RESAMPLES: usize = 1000;
/// Two-sided significance level of the interval.
const BOOTSTRAP_ALPHA: f64 = 0.05;

/// Run one experiment point: sample, decode, aggregate.
pub fn run_once(
    config: &ExperimentConfig,
    metadata: &RunMetadata,
    run_id: String,
) -> SweepResult<RunRecord> {
    let start = Instant::now();

    let layout = Layout::build(config.distance)?;
    let noise = config.noise.build()?;
    let sampler = backend(&config.backend)?;
    let syndromes = sampler.sample(&SampleRequest {
        layout: &layout,
        rounds: config.rounds,
        shots: config.shots,
        noise: &noise,
        seed: config.seed,
    })?;

    let decoder = decoder(&config.decoder, config.distance)?;
    let predictions = decoder.decode(&syndromes);
    let failures = predictions.failures();

    let logical_error_rate = stats::mean(&failures);
    let interval = stats::bootstrap_ci(
        &failures,
        BOOTSTRAP_RESAMPLES,
        BOOTSTRAP_ALPHA,
        config.seed,
    );
    let wall_time_seconds = start.elapsed().as_secs_f64();

    info!(
        run_id,
        distance = config.distance,
        backend = %config.backend,
        decoder = %config.decoder,
        logical_error_rate,
        wall_time_seconds,
        "experiment point finished"
    );

    Ok(RunRecord {
        run_id,
        git_sha: metadata.git_sha.clone(),
        seed: config.seed,
        distance: config.distance,
        rounds: config.rounds,
        shots: config.shots,
        decoder: config.decoder.clone(),
        backend: config.backend.clone(),
        p: config.noise.p,
        px: config.noise.px,
        py: config.noise.py,
        pz: config.noise.pz,
        readout_error: config.noise.readout_error,
        readout_error_0to1: config.noise.readout_error_0to1,
        readout_error_1to0: config.noise.readout_error_1to0,
        logical_error_rate,
        ci_low: interval.map(|(low, _)| low),
        ci_high: interval.map(|(_, high)| high),
        wall_time_seconds,
        timestamp_utc: metadata.timestamp(),
    })
}

/// Run a batch of experiment points across `jobs` worker threads.
///
/// Every point is independent — its own seed, no shared mutable state — so
/// plain scoped threads draining an atomic work index are sufficient.
/// Records come back in point order regardless of completion order.
pub fn run_batch(
    configs: &[ExperimentConfig],
    metadata: &RunMetadata,
    jobs: usize,
) -> SweepResult<Vec<RunRecord>> {
    let workers = jobs.max(1).min(configs.len().max(1));

    let next = AtomicUsize::new(0);
    let mut collected: Vec<(usize, SweepResult<RunRecord>)> =
        std::thread::scope(|scope| -> SweepResult<_> {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    scope.spawn(|| {
                        let mut local = Vec::new();
                        loop {
                            let index = next.fetch_add(1, Ordering::Relaxed);
                            if index >= configs.len() {
                                break;
                            }
                            let run_id = metadata.run_id(index);
                            local.push((index, run_once(&configs[index], metadata, run_id)));
                        }
                        local
                    })
                })
                .collect();

            let mut collected = Vec::with_capacity(configs.len());
            for handle in handles {
                let local = handle.join().map_err(|_| SweepError::WorkerPanicked)?;
                collected.extend(local);
            }
            Ok(collected)
        })?;

    collected.sort_by_key(|(index, _)| *index);
    collected
        .into_iter()
        .map(|(_, result)| result)
        .collect()
}

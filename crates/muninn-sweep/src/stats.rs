//! Aggregate statistics over per-shot outcomes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Mean of a bit vector.
pub fn mean(bits: &[u8]) -> f64 {
    if bits.is_empty() {
        return 0.0;
    }
    bits.iter().map(|&b| b as usize).sum::<usize>() as f64 / bits.len() as f64
}

/// Percentile bootstrap confidence interval for the mean of `bits`.
///
/// Resamples with replacement `resamples` times from an explicitly seeded
/// stream and returns the `alpha/2` and `1 − alpha/2` quantiles of the
/// resampled means. Returns `None` with fewer than two samples, where the
/// interval is meaningless.
pub fn bootstrap_ci(
    bits: &[u8],
    resamples: usize,
    alpha: f64,
    seed: u64,
) -> Option<(f64, f64)> {
    if bits.len() < 2 || resamples == 0 {
        return None;
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut means: Vec<f64> = (0..resamples)
        .map(|_| {
            let sum: usize = (0..bits.len())
                .map(|_| bits[rng.gen_range(0..bits.len())] as usize)
                .sum();
            sum as f64 / bits.len() as f64
        })
        .collect();
    means.sort_by(|a, b| a.total_cmp(b));

    Some((
        quantile(&means, alpha / 2.0),
        quantile(&means, 1.0 - alpha / 2.0),
    ))
}

/// Linear-interpolation quantile over a sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let low = position.floor() as usize;
    let high = position.ceil() as usize;
    if low == high {
        sorted[low]
    } else {
        let fraction = position - low as f64;
        sorted[low] * (1.0 - fraction) + sorted[high] * fraction
    }
}

//! Curated sweep grids for the standing experiment suite.

use crate::config::SweepGrid;

/// Depolarizing reference curve: every supported distance against a small
/// ladder of physical error rates, MWPM-decoded on the frame backend.
pub fn depolarizing_preset() -> SweepGrid {
    SweepGrid {
        distances: vec![3, 5, 7, 9],
        p_values: vec![0.001, 0.002, 0.005, 0.01],
        backends: vec!["frame".into()],
        decoders: vec!["mwpm".into()],
        rounds: 3,
        shots: 200,
        px: None,
        py: None,
        pz: None,
        readout_error: 0.01,
        readout_error_0to1: None,
        readout_error_1to0: None,
        base_seed: 0,
    }
}

/// Biased-Pauli reference curve: Z-dominated noise (px = 0.05, pz = 0.15)
/// across the same distances.
pub fn biased_preset() -> SweepGrid {
    SweepGrid {
        distances: vec![3, 5, 7, 9],
        p_values: vec![0.0],
        backends: vec!["frame".into()],
        decoders: vec!["mwpm".into()],
        rounds: 3,
        shots: 200,
        px: Some(0.05),
        py: Some(0.0),
        pz: Some(0.15),
        readout_error: 0.01,
        readout_error_0to1: None,
        readout_error_1to0: None,
        base_seed: 1000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_expand_to_valid_configs() {
        for grid in [depolarizing_preset(), biased_preset()] {
            let configs = grid.configs();
            assert!(!configs.is_empty());
            for config in &configs {
                config.validate().unwrap();
            }
        }
    }

    #[test]
    fn preset_seed_ranges_do_not_collide() {
        let depolarizing = depolarizing_preset().configs();
        let biased = biased_preset().configs();
        let max_dep = depolarizing.iter().map(|c| c.seed).max().unwrap();
        let min_biased = biased.iter().map(|c| c.seed).min().unwrap();
        assert!(max_dep < min_biased);
    }
}

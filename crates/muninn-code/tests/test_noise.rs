//! Tests for noise configuration validation.

use muninn_code::{CodeError, NoiseConfig, NoiseModel, PauliNoise, ReadoutNoise};

// ---------------------------------------------------------------------------
// Valid configurations
// ---------------------------------------------------------------------------

#[test]
fn depolarizing_round_trips_into_sum_type() {
    let spec = NoiseConfig::depolarizing(0.01, 0.002).build().unwrap();
    assert_eq!(spec.pauli(), PauliNoise::Depolarizing { p: 0.01 });
    assert_eq!(spec.readout(), ReadoutNoise::Symmetric { p: 0.002 });
}

#[test]
fn biased_round_trips_into_sum_type() {
    let spec = NoiseConfig::biased(0.05, 0.0, 0.15, 0.01).build().unwrap();
    assert_eq!(
        spec.pauli(),
        PauliNoise::Biased {
            px: 0.05,
            py: 0.0,
            pz: 0.15
        }
    );
}

#[test]
fn asymmetric_readout_requires_both_fields() {
    let config = NoiseConfig {
        readout_error_0to1: Some(0.1),
        readout_error_1to0: Some(0.2),
        ..NoiseConfig::depolarizing(0.0, 0.0)
    };
    let spec = config.build().unwrap();
    assert_eq!(
        spec.readout(),
        ReadoutNoise::Asymmetric {
            p_0to1: 0.1,
            p_1to0: 0.2
        }
    );
}

#[test]
fn probability_bounds_are_inclusive() {
    assert!(NoiseConfig::depolarizing(0.0, 0.0).build().is_ok());
    assert!(NoiseConfig::depolarizing(1.0, 1.0).build().is_ok());
    assert!(NoiseConfig::biased(1.0, 0.0, 0.0, 0.0).build().is_ok());
}

#[test]
fn validation_is_idempotent() {
    let config = NoiseConfig::biased(0.05, 0.0, 0.15, 0.01);
    assert_eq!(config.build().unwrap(), config.build().unwrap());
}

// ---------------------------------------------------------------------------
// Rejection
// ---------------------------------------------------------------------------

#[test]
fn out_of_range_probabilities_rejected() {
    assert!(NoiseConfig::depolarizing(-0.1, 0.0).build().is_err());
    assert!(NoiseConfig::depolarizing(1.5, 0.0).build().is_err());
    assert!(NoiseConfig::depolarizing(0.0, -0.01).build().is_err());
    assert!(NoiseConfig::biased(0.0, 2.0, 0.0, 0.0).build().is_err());
}

#[test]
fn biased_axis_sum_above_one_rejected() {
    let err = NoiseConfig::biased(0.5, 0.4, 0.3, 0.0).build().unwrap_err();
    assert!(matches!(err, CodeError::InvalidNoiseParameters(_)));
}

#[test]
fn lone_asymmetric_field_rejected() {
    let config = NoiseConfig {
        readout_error_0to1: Some(0.1),
        ..NoiseConfig::depolarizing(0.0, 0.0)
    };
    assert!(matches!(
        config.build(),
        Err(CodeError::InvalidNoiseParameters(_))
    ));

    let config = NoiseConfig {
        readout_error_1to0: Some(0.1),
        ..NoiseConfig::depolarizing(0.0, 0.0)
    };
    assert!(config.build().is_err());
}

#[test]
fn biased_model_without_axis_probabilities_rejected() {
    let config = NoiseConfig {
        model: NoiseModel::BiasedPauli,
        ..NoiseConfig::default()
    };
    assert!(config.build().is_err());
}

// ---------------------------------------------------------------------------
// Serde boundary
// ---------------------------------------------------------------------------

#[test]
fn unknown_model_tag_rejected_at_deserialization() {
    let raw = r#"{ "model": "amplitude_damping", "p": 0.1 }"#;
    assert!(serde_json::from_str::<NoiseConfig>(raw).is_err());
}

#[test]
fn model_tags_use_snake_case() {
    let config: NoiseConfig =
        serde_json::from_str(r#"{ "model": "biased_pauli", "px": 0.1, "py": 0.0, "pz": 0.0 }"#)
            .unwrap();
    assert_eq!(config.model, NoiseModel::BiasedPauli);
}

//! Tests for the boundary-matching decoder.

use muninn_code::{Layout, SampledSyndromes};
use muninn_decode::{Decoder, DecodeError, MwpmDecoder, decoder};
use ndarray::Array3;

fn blocks_for(layout: &Layout, shots: usize, rounds: usize) -> (Array3<u8>, Array3<u8>) {
    (
        Array3::zeros((shots, rounds, layout.x_stabilizers().len())),
        Array3::zeros((shots, rounds, layout.z_stabilizers().len())),
    )
}

#[test]
fn all_zero_syndrome_decodes_to_zero_for_every_layout() {
    for distance in [3, 5, 7, 9] {
        let layout = Layout::build(distance).unwrap();
        let decoder = MwpmDecoder::from_layout(&layout);
        let (x_raw, z_raw) = blocks_for(&layout, 4, 3);
        let out = decoder.decode(&SampledSyndromes::from_raw(x_raw, z_raw));
        assert_eq!(out.x_logical, vec![0; 4], "d={distance}");
        assert_eq!(out.z_logical, vec![0; 4], "d={distance}");
    }
}

#[test]
fn single_z_detection_flips_x_logical() {
    let layout = Layout::build(3).unwrap();
    let decoder = MwpmDecoder::from_layout(&layout);
    let (x_raw, mut z_raw) = blocks_for(&layout, 1, 2);
    z_raw[[0, 0, 0]] = 1;
    // Raw bit at round 0 only: events fire at rounds 0 and 1, XOR-ing to an
    // even parity for the detector — no net syndrome.
    let out = decoder.decode(&SampledSyndromes::from_raw(x_raw.clone(), z_raw));

    assert_eq!(out.x_logical, vec![0]);

    // A defect appearing in round 1 of 2 leaves odd aggregate parity: the
    // single event at round 1 is the detector's only firing.
    let (_, mut z_raw) = blocks_for(&layout, 1, 2);
    z_raw[[0, 1, 0]] = 1;
    let out = decoder.decode(&SampledSyndromes::from_raw(x_raw, z_raw));
    assert_eq!(out.x_logical, vec![1]);
    assert_eq!(out.z_logical, vec![0]);
}

#[test]
fn two_active_z_detectors_cancel() {
    let layout = Layout::build(3).unwrap();
    let decoder = MwpmDecoder::from_layout(&layout);
    let (x_raw, mut z_raw) = blocks_for(&layout, 1, 1);
    z_raw[[0, 0, 0]] = 1;
    z_raw[[0, 0, 1]] = 1;
    let out = decoder.decode(&SampledSyndromes::from_raw(x_raw, z_raw));
    // Two corrected fault ids: even parity, no predicted flip.
    assert_eq!(out.x_logical, vec![0]);
}

#[test]
fn x_detections_drive_z_logical() {
    let layout = Layout::build(3).unwrap();
    let decoder = MwpmDecoder::from_layout(&layout);
    let (mut x_raw, z_raw) = blocks_for(&layout, 1, 1);
    x_raw[[0, 0, 1]] = 1;
    let out = decoder.decode(&SampledSyndromes::from_raw(x_raw, z_raw));
    assert_eq!(out.z_logical, vec![1]);
    assert_eq!(out.x_logical, vec![0]);
}

#[test]
fn shot_order_is_preserved() {
    let layout = Layout::build(3).unwrap();
    let decoder = MwpmDecoder::from_layout(&layout);
    let (x_raw, mut z_raw) = blocks_for(&layout, 3, 1);
    z_raw[[1, 0, 0]] = 1;
    let out = decoder.decode(&SampledSyndromes::from_raw(x_raw, z_raw));
    assert_eq!(out.x_logical, vec![0, 1, 0]);
}

#[test]
fn decoding_is_deterministic() {
    let layout = Layout::build(5).unwrap();
    let decoder = MwpmDecoder::from_layout(&layout);
    let (mut x_raw, mut z_raw) = blocks_for(&layout, 2, 3);
    x_raw[[0, 1, 3]] = 1;
    z_raw[[1, 2, 5]] = 1;
    let syndromes = SampledSyndromes::from_raw(x_raw, z_raw);
    assert_eq!(decoder.decode(&syndromes), decoder.decode(&syndromes));
}

#[test]
fn mismatched_block_width_degrades_to_zero() {
    // Blocks wider than the graph must not panic; extra columns are ignored.
    let decoder = MwpmDecoder::from_distance(3).unwrap();
    let x_raw = Array3::zeros((1, 1, 16));
    let mut z_raw = Array3::zeros((1, 1, 16));
    z_raw[[0, 0, 15]] = 1;
    let out = decoder.decode(&SampledSyndromes::from_raw(x_raw, z_raw));
    assert_eq!(out.x_logical, vec![0]);
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

#[test]
fn factory_resolves_registered_names() {
    assert_eq!(decoder("local", 3).unwrap().name(), "local");
    assert_eq!(decoder("mwpm", 5).unwrap().name(), "mwpm");
}

#[test]
fn factory_rejects_unknown_names() {
    assert!(matches!(
        decoder("union_find", 3),
        Err(DecodeError::UnknownDecoder(name)) if name == "union_find"
    ));
}

#[test]
fn factory_propagates_bad_distances_for_mwpm() {
    assert!(matches!(decoder("mwpm", 4), Err(DecodeError::Code(_))));
}

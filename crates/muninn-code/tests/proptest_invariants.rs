//! Property-based tests for layout invariants and the detection transform.

use muninn_code::{ALLOWED_DISTANCES, Layout, detection_events};
use ndarray::Array3;
use proptest::prelude::*;

/// Pick one of the supported code distances.
fn arb_distance() -> impl Strategy<Value = usize> {
    prop::sample::select(ALLOWED_DISTANCES.to_vec())
}

/// Generate a random bit block of bounded shape.
fn arb_block() -> impl Strategy<Value = Array3<u8>> {
    (1_usize..=4, 1_usize..=5, 1_usize..=6).prop_flat_map(|(shots, rounds, stabs)| {
        prop::collection::vec(0_u8..=1, shots * rounds * stabs).prop_map(move |bits| {
            Array3::from_shape_vec((shots, rounds, stabs), bits).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn every_data_qubit_belongs_to_some_group(distance in arb_distance()) {
        let layout = Layout::build(distance).unwrap();
        let mut touched = vec![false; layout.num_data_qubits()];
        for group in layout.x_stabilizers().iter().chain(layout.z_stabilizers()) {
            for &qubit in group {
                touched[qubit] = true;
            }
        }
        // Every data qubit of the interior-adjacent grid is covered; on the
        // d×d grid the stabilizer corners reach every site.
        prop_assert!(touched.iter().all(|&t| t));
    }

    #[test]
    fn family_sizes_differ_by_at_most_the_parity_remainder(distance in arb_distance()) {
        let layout = Layout::build(distance).unwrap();
        let x = layout.x_stabilizers().len();
        let z = layout.z_stabilizers().len();
        let cells = (distance - 1) * (distance - 1);
        prop_assert_eq!(x + z, cells);
        // Checkerboard parity over an even×even interior splits evenly.
        prop_assert_eq!(x, z);
    }

    #[test]
    fn xor_reaccumulation_recovers_raw_block(raw in arb_block()) {
        let events = detection_events(&raw);
        // Prefix-XOR of the events reconstructs the raw measurements, so the
        // transform loses no information.
        let shape = raw.raw_dim();
        let mut rebuilt = Array3::<u8>::zeros(shape);
        for shot in 0..raw.shape()[0] {
            for stab in 0..raw.shape()[2] {
                let mut acc = 0_u8;
                for round in 0..raw.shape()[1] {
                    acc ^= events[[shot, round, stab]];
                    rebuilt[[shot, round, stab]] = acc;
                }
            }
        }
        prop_assert_eq!(rebuilt, raw);
    }

    #[test]
    fn detection_transform_is_deterministic(raw in arb_block()) {
        prop_assert_eq!(detection_events(&raw), detection_events(&raw));
    }
}

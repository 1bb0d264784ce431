//! Per-round syndrome-extraction schedule.
//!
//! Both backends interpret the same operation stream, so the measurement
//! pattern — and with it the noise attachment points — is defined exactly
//! once. Per round, every Z-type group is measured first (reset ancilla,
//! CX from each data qubit onto the ancilla, measure), then every X-type
//! group (reset, Hadamard, CX from the ancilla onto each data qubit,
//! Hadamard, measure). A single ancilla is reused for every group; it is
//! reset before each use, so the outcome statistics match a layout with
//! one ancilla per stabilizer.

use muninn_code::Layout;

/// Stabilizer family a measured outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabKind {
    /// X-type group (detects Z errors).
    X,
    /// Z-type group (detects X errors).
    Z,
}

/// One operation in the round schedule. Data indices address data qubits;
/// the shared ancilla is implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Reset the ancilla to |0⟩.
    ResetAncilla,
    /// Hadamard on the ancilla (basis change around an X-type parity check).
    HadamardAncilla,
    /// CX with a data-qubit control and the ancilla target (Z-type parity).
    CxDataAncilla {
        /// Control data qubit.
        data: usize,
    },
    /// CX with the ancilla control and a data-qubit target (X-type parity).
    CxAncillaData {
        /// Target data qubit.
        data: usize,
    },
    /// Measure the ancilla in the Z basis into the given slot of the round's
    /// measurement record.
    MeasureAncilla {
        /// Which family's block receives the bit.
        kind: StabKind,
        /// Stabilizer index within that family.
        index: usize,
    },
}

/// Build the operation stream for one syndrome-extraction round.
pub fn round_schedule(layout: &Layout) -> Vec<Op> {
    let mut ops = Vec::new();

    for (index, group) in layout.z_stabilizers().iter().enumerate() {
        ops.push(Op::ResetAncilla);
        for &data in group {
            ops.push(Op::CxDataAncilla { data });
        }
        ops.push(Op::MeasureAncilla {
            kind: StabKind::Z,
            index,
        });
    }

    for (index, group) in layout.x_stabilizers().iter().enumerate() {
        ops.push(Op::ResetAncilla);
        ops.push(Op::HadamardAncilla);
        for &data in group {
            ops.push(Op::CxAncillaData { data });
        }
        ops.push(Op::HadamardAncilla);
        ops.push(Op::MeasureAncilla {
            kind: StabKind::X,
            index,
        });
    }

    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_group_measures_exactly_once() {
        let layout = Layout::build(3).unwrap();
        let ops = round_schedule(&layout);
        let x_measures = ops
            .iter()
            .filter(|op| matches!(op, Op::MeasureAncilla { kind: StabKind::X, .. }))
            .count();
        let z_measures = ops
            .iter()
            .filter(|op| matches!(op, Op::MeasureAncilla { kind: StabKind::Z, .. }))
            .count();
        assert_eq!(x_measures, layout.x_stabilizers().len());
        assert_eq!(z_measures, layout.z_stabilizers().len());
    }

    #[test]
    fn four_entangling_gates_per_group() {
        let layout = Layout::build(5).unwrap();
        let ops = round_schedule(&layout);
        let cx_count = ops
            .iter()
            .filter(|op| matches!(op, Op::CxDataAncilla { .. } | Op::CxAncillaData { .. }))
            .count();
        let groups = layout.x_stabilizers().len() + layout.z_stabilizers().len();
        assert_eq!(cx_count, 4 * groups);
    }

    #[test]
    fn z_groups_precede_x_groups() {
        let layout = Layout::build(3).unwrap();
        let ops = round_schedule(&layout);
        let first_x = ops
            .iter()
            .position(|op| matches!(op, Op::MeasureAncilla { kind: StabKind::X, .. }))
            .unwrap();
        let last_z = ops
            .iter()
            .rposition(|op| matches!(op, Op::MeasureAncilla { kind: StabKind::Z, .. }))
            .unwrap();
        assert!(last_z < first_x);
    }
}

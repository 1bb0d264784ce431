//! Rotated surface code layout.
//!
//! Data qubits sit on a d×d grid, indexed row-major. Each interior unit cell
//! `(row, col)` with `row, col ∈ [0, d−2]` contributes one stabilizer group
//! from its four corner qubits. The group is X-type when `row + col` is even
//! and Z-type otherwise, so the two families tile the interior in a
//! checkerboard without overlap.

use serde::{Deserialize, Serialize};

use crate::error::{CodeError, CodeResult};

/// Code distances the layout builder accepts.
pub const ALLOWED_DISTANCES: [usize; 4] = [3, 5, 7, 9];

/// Stabilizer layout of a rotated surface code.
///
/// Immutable once built. Stabilizer groups are ordered row-major over the
/// interior cells; that order is not semantically meaningful but it is
/// stable by contract, because decoders reuse a group's position in the
/// list as its detector-node id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    distance: usize,
    data_qubits: Vec<usize>,
    x_stabilizers: Vec<[usize; 4]>,
    z_stabilizers: Vec<[usize; 4]>,
}

impl Layout {
    /// Build the layout for a given code distance.
    ///
    /// Fails with [`CodeError::InvalidDistance`] unless the distance is one
    /// of [`ALLOWED_DISTANCES`].
    pub fn build(distance: usize) -> CodeResult<Self> {
        if !ALLOWED_DISTANCES.contains(&distance) {
            return Err(CodeError::InvalidDistance { distance });
        }

        let data_qubits: Vec<usize> = (0..distance * distance).collect();
        let mut x_stabilizers = Vec::new();
        let mut z_stabilizers = Vec::new();

        for row in 0..distance - 1 {
            for col in 0..distance - 1 {
                let group = [
                    row * distance + col,
                    (row + 1) * distance + col,
                    row * distance + col + 1,
                    (row + 1) * distance + col + 1,
                ];
                if (row + col) % 2 == 0 {
                    x_stabilizers.push(group);
                } else {
                    z_stabilizers.push(group);
                }
            }
        }

        Ok(Self {
            distance,
            data_qubits,
            x_stabilizers,
            z_stabilizers,
        })
    }

    /// Code distance.
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Data qubit indices, `0..distance²`, row-major.
    pub fn data_qubits(&self) -> &[usize] {
        &self.data_qubits
    }

    /// Number of data qubits.
    pub fn num_data_qubits(&self) -> usize {
        self.data_qubits.len()
    }

    /// X-type stabilizer groups in row-major cell order.
    pub fn x_stabilizers(&self) -> &[[usize; 4]] {
        &self.x_stabilizers
    }

    /// Z-type stabilizer groups in row-major cell order.
    pub fn z_stabilizers(&self) -> &[[usize; 4]] {
        &self.z_stabilizers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_distance_rejected() {
        assert!(matches!(
            Layout::build(4),
            Err(CodeError::InvalidDistance { distance: 4 })
        ));
    }

    #[test]
    fn interior_cells_split_without_overlap() {
        let layout = Layout::build(5).unwrap();
        // 16 interior cells, alternating parity: 8 even, 8 odd.
        assert_eq!(layout.x_stabilizers().len(), 8);
        assert_eq!(layout.z_stabilizers().len(), 8);
    }
}

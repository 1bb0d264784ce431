//! Stochastic Pauli and readout channel draws.
//!
//! Channel semantics shared by both backends:
//!
//! - depolarizing, one qubit: with probability `p`, a uniformly random
//!   non-identity Pauli (p/3 each);
//! - depolarizing, two qubits: with probability `p`, a uniformly random
//!   non-identity two-qubit Pauli (p/15 each);
//! - biased Pauli, one qubit: X, Y, Z with their own probabilities in a
//!   single mutually exclusive draw;
//! - biased Pauli, two qubits: independent single-qubit draws per qubit;
//! - readout: the measured bit flips with the symmetric probability, or
//!   with the probability matching its true value for asymmetric noise.

use muninn_code::{PauliNoise, ReadoutNoise};
use rand::Rng;
use rand::rngs::SmallRng;

/// A sampled Pauli fault component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pauli {
    /// No fault.
    I,
    /// Bit flip.
    X,
    /// Bit and phase flip.
    Y,
    /// Phase flip.
    Z,
}

const PAULIS: [Pauli; 4] = [Pauli::I, Pauli::X, Pauli::Y, Pauli::Z];

impl Pauli {
    /// Whether this fault carries an X (bit-flip) component.
    pub fn flips_x(self) -> bool {
        matches!(self, Pauli::X | Pauli::Y)
    }

    /// Whether this fault carries a Z (phase-flip) component.
    pub fn flips_z(self) -> bool {
        matches!(self, Pauli::Z | Pauli::Y)
    }
}

/// Draw a single-qubit fault from the channel.
pub fn draw_single(noise: PauliNoise, rng: &mut SmallRng) -> Pauli {
    match noise {
        PauliNoise::Depolarizing { p } => {
            if p > 0.0 && rng.r#gen::<f64>() < p {
                PAULIS[rng.gen_range(1..4)]
            } else {
                Pauli::I
            }
        }
        PauliNoise::Biased { px, py, pz } => {
            let u = rng.r#gen::<f64>();
            if u < px {
                Pauli::X
            } else if u < px + py {
                Pauli::Y
            } else if u < px + py + pz {
                Pauli::Z
            } else {
                Pauli::I
            }
        }
    }
}

/// Draw a correlated two-qubit fault from the channel.
pub fn draw_pair(noise: PauliNoise, rng: &mut SmallRng) -> (Pauli, Pauli) {
    match noise {
        PauliNoise::Depolarizing { p } => {
            if p > 0.0 && rng.r#gen::<f64>() < p {
                let k = rng.gen_range(1..16);
                (PAULIS[k / 4], PAULIS[k % 4])
            } else {
                (Pauli::I, Pauli::I)
            }
        }
        PauliNoise::Biased { .. } => (draw_single(noise, rng), draw_single(noise, rng)),
    }
}

/// Apply the readout flip channel to a measured bit.
pub fn flip_readout(bit: u8, readout: ReadoutNoise, rng: &mut SmallRng) -> u8 {
    let p = match readout {
        ReadoutNoise::Symmetric { p } => p,
        ReadoutNoise::Asymmetric { p_0to1, p_1to0 } => {
            if bit == 0 { p_0to1 } else { p_1to0 }
        }
    };
    if p > 0.0 && rng.r#gen::<f64>() < p {
        bit ^ 1
    } else {
        bit
    }
}

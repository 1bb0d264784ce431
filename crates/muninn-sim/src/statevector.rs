//! Full-state trajectory sampling.
//!
//! Evolves a dense amplitude vector over the data qubits plus one shared
//! ancilla, executing the round schedule per shot with Monte Carlo noise
//! insertion: after each noisy operation a Pauli fault is drawn from the
//! channel and applied to the state. Measurements are projective with
//! collapse, so a fresh trajectory is simulated for every shot.
//!
//! The |0...0⟩ register is an eigenstate of every Z-type group but not of
//! the X-type groups, whose first measurement outcome is intrinsically
//! random. Each shot therefore begins with one noiseless projection pass
//! whose outcomes become the shot's reference frame; recorded bits are
//! reported relative to that frame, so a noiseless run reads all-zero and
//! detection events carry noise only.
//!
//! Cost is exponential in qubit count (d² + 1 amplitudes of 2^n), which is
//! what caps the practical distance for this backend; requests beyond the
//! supported width are rejected up front instead of attempting the
//! allocation.

use ndarray::Array3;
use num_complex::Complex64;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use muninn_code::SampledSyndromes;

use crate::backend::{SampleRequest, SamplerBackend};
use crate::channel::{Pauli, draw_pair, draw_single, flip_readout};
use crate::error::{SimError, SimResult};
use crate::schedule::{Op, StabKind, round_schedule};

/// Widest register the dense representation will allocate (16 MiB of
/// amplitudes); distance 5 with its shared ancilla lands exactly on it.
const MAX_QUBITS: usize = 26;

/// Statevector sampler backend ("statevector").
#[derive(Debug, Clone, Copy, Default)]
pub struct StatevectorBackend;

impl StatevectorBackend {
    /// Create the backend.
    pub fn new() -> Self {
        Self
    }
}

impl SamplerBackend for StatevectorBackend {
    fn name(&self) -> &'static str {
        "statevector"
    }

    fn sample(&self, request: &SampleRequest<'_>) -> SimResult<SampledSyndromes> {
        request.validate()?;

        let layout = request.layout;
        let num_qubits = layout.num_data_qubits() + 1;
        if num_qubits > MAX_QUBITS {
            return Err(SimError::UnsupportedConfiguration(format!(
                "statevector backend supports at most {MAX_QUBITS} qubits, \
                 distance {} needs {num_qubits}",
                layout.distance()
            )));
        }

        let pauli = request.noise.pauli();
        let readout = request.noise.readout();
        let schedule = round_schedule(layout);
        let anc = layout.num_data_qubits();

        debug!(
            distance = layout.distance(),
            rounds = request.rounds,
            shots = request.shots,
            seed = request.seed,
            num_qubits,
            "sampling via statevector trajectories"
        );

        let x_count = layout.x_stabilizers().len();
        let z_count = layout.z_stabilizers().len();
        let mut x_meas = Array3::zeros((request.shots, request.rounds, x_count));
        let mut z_meas = Array3::zeros((request.shots, request.rounds, z_count));

        let mut rng = SmallRng::seed_from_u64(request.seed);

        for shot in 0..request.shots {
            let mut state = State::new(num_qubits);

            // Noiseless projection pass: fixes the shot's reference frame.
            let mut x_reference = vec![0_u8; x_count];
            let mut z_reference = vec![0_u8; z_count];
            for op in &schedule {
                match *op {
                    Op::ResetAncilla => state.reset(anc, &mut rng),
                    Op::HadamardAncilla => state.apply_h(anc),
                    Op::CxDataAncilla { data } => state.apply_cx(data, anc),
                    Op::CxAncillaData { data } => state.apply_cx(anc, data),
                    Op::MeasureAncilla { kind, index } => {
                        let bit = state.measure(anc, &mut rng);
                        match kind {
                            StabKind::X => x_reference[index] = bit,
                            StabKind::Z => z_reference[index] = bit,
                        }
                    }
                }
            }

            for round in 0..request.rounds {
                for op in &schedule {
                    match *op {
                        Op::ResetAncilla => {
                            state.reset(anc, &mut rng);
                            state.apply_fault(anc, draw_single(pauli, &mut rng));
                        }
                        Op::HadamardAncilla => {
                            state.apply_h(anc);
                            state.apply_fault(anc, draw_single(pauli, &mut rng));
                        }
                        Op::CxDataAncilla { data } => {
                            state.apply_cx(data, anc);
                            let (fault_c, fault_t) = draw_pair(pauli, &mut rng);
                            state.apply_fault(data, fault_c);
                            state.apply_fault(anc, fault_t);
                        }
                        Op::CxAncillaData { data } => {
                            state.apply_cx(anc, data);
                            let (fault_c, fault_t) = draw_pair(pauli, &mut rng);
                            state.apply_fault(anc, fault_c);
                            state.apply_fault(data, fault_t);
                        }
                        Op::MeasureAncilla { kind, index } => {
                            let measured = state.measure(anc, &mut rng);
                            let relative = match kind {
                                StabKind::X => measured ^ x_reference[index],
                                StabKind::Z => measured ^ z_reference[index],
                            };
                            let bit = flip_readout(relative, readout, &mut rng);
                            match kind {
                                StabKind::X => x_meas[[shot, round, index]] = bit,
                                StabKind::Z => z_meas[[shot, round, index]] = bit,
                            }
                        }
                    }
                }
            }
        }

        Ok(SampledSyndromes::from_raw(x_meas, z_meas))
    }
}

/// Dense quantum state over `num_qubits` qubits.
struct State {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl State {
    /// Initialise to |0...0⟩.
    fn new(num_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                self.amplitudes.swap(i, i | mask);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let im = Complex64::new(0.0, 1.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let low = self.amplitudes[i];
                self.amplitudes[i] = -im * self.amplitudes[j];
                self.amplitudes[j] = im * low;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let norm = std::f64::consts::FRAC_1_SQRT_2;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let low = self.amplitudes[i];
                let high = self.amplitudes[j];
                self.amplitudes[i] = norm * (low + high);
                self.amplitudes[j] = norm * (low - high);
            }
        }
    }

    fn apply_cx(&mut self, control: usize, target: usize) {
        let control_mask = 1 << control;
        let target_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if i & control_mask != 0 && i & target_mask == 0 {
                self.amplitudes.swap(i, i | target_mask);
            }
        }
    }

    fn apply_fault(&mut self, qubit: usize, fault: Pauli) {
        match fault {
            Pauli::I => {}
            Pauli::X => self.apply_x(qubit),
            Pauli::Y => self.apply_y(qubit),
            Pauli::Z => self.apply_z(qubit),
        }
    }

    /// Projective Z-basis measurement with collapse and renormalisation.
    fn measure(&mut self, qubit: usize, rng: &mut SmallRng) -> u8 {
        let mask = 1 << qubit;
        let prob_one: f64 = self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask != 0)
            .map(|(_, amp)| amp.norm_sqr())
            .sum();

        let outcome = u8::from(rng.r#gen::<f64>() < prob_one);
        let kept = if outcome == 1 { prob_one } else { 1.0 - prob_one };
        let scale = 1.0 / kept.sqrt();

        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            let in_branch = (i & mask != 0) == (outcome == 1);
            *amp = if in_branch {
                *amp * scale
            } else {
                Complex64::new(0.0, 0.0)
            };
        }

        outcome
    }

    /// Collapse the qubit to |0⟩.
    fn reset(&mut self, qubit: usize, rng: &mut SmallRng) {
        if self.measure(qubit, rng) == 1 {
            self.apply_x(qubit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hadamard_pair_is_identity_on_measurement() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut state = State::new(2);
        state.apply_h(0);
        state.apply_h(0);
        assert_eq!(state.measure(0, &mut rng), 0);
    }

    #[test]
    fn cx_copies_a_bit_flip() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut state = State::new(2);
        state.apply_x(0);
        state.apply_cx(0, 1);
        assert_eq!(state.measure(1, &mut rng), 1);
    }

    #[test]
    fn reset_clears_an_excited_qubit() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut state = State::new(1);
        state.apply_x(0);
        state.reset(0, &mut rng);
        assert_eq!(state.measure(0, &mut rng), 0);
    }

    #[test]
    fn z_fault_is_invisible_to_z_measurement() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut state = State::new(1);
        state.apply_fault(0, Pauli::Z);
        assert_eq!(state.measure(0, &mut rng), 0);
    }
}

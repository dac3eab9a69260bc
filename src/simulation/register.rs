// src/simulation/register.rs
use crate::circuits::Circuit;
use crate::core::{AMPLITUDE_TOLERANCE, AmplitudeState, QubitId, SimulationError};
use crate::operations::Gate;
use crate::simulation::Measurement;
use crate::validation::validate_state;
use num_complex::Complex;
use num_traits::Zero;
use rand::Rng;
use std::f64::consts::FRAC_1_SQRT_2;
use tracing::trace;

/// A register of `N` qubits held as a full state vector of `2^N` amplitudes.
///
/// Gates are applied in place. Measurement takes the register by value, so a
/// register that has been sampled can no longer be touched.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumRegister {
    state: AmplitudeState,
    num_qubits: usize,
}

impl QuantumRegister {
    /// Creates a register in the all-zero basis state.
    pub fn new(num_qubits: usize) -> Result<Self, SimulationError> {
        if num_qubits == 0 {
            return Err(SimulationError::EmptyRegister);
        }
        let dim = u32::try_from(num_qubits)
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
            .ok_or(SimulationError::DimensionOverflow(num_qubits))?;

        let mut initial_vec = vec![Complex::zero(); dim];
        initial_vec[0] = Complex::new(1.0, 0.0);

        Ok(Self {
            state: AmplitudeState::new(initial_vec),
            num_qubits,
        })
    }

    /// Creates a register in the basis state described by `bits`, where
    /// character `i` is the value of qubit `i`.
    pub fn from_basis_state(bits: &str) -> Result<Self, SimulationError> {
        let mut register = Self::new(bits.len())?;
        for (q, ch) in bits.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => register.apply_pauli_x(q)?,
                _ => return Err(SimulationError::InvalidBitstring(bits.to_string())),
            }
        }
        Ok(register)
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Read-only view of the amplitude vector.
    pub fn state(&self) -> &AmplitudeState {
        &self.state
    }

    pub fn amplitudes(&self) -> &[Complex<f64>] {
        self.state.vector()
    }

    /// Born-rule probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.probabilities()
    }

    fn check_qubit(&self, q: usize) -> Result<usize, SimulationError> {
        if q < self.num_qubits {
            Ok(1 << q)
        } else {
            Err(SimulationError::InvalidQubit { qubit: QubitId(q), num_qubits: self.num_qubits })
        }
    }

    /// Bit flip on qubit `q`.
    pub fn apply_pauli_x(&mut self, q: usize) -> Result<(), SimulationError> {
        let mask = self.check_qubit(q)?;
        let vec = self.state.vector_mut();
        for k in 0..vec.len() {
            if k & mask == 0 {
                vec.swap(k, k | mask);
            }
        }
        Ok(())
    }

    /// Hadamard on qubit `q`: `(a, b) -> ((a+b)/√2, (a−b)/√2)` on every pair.
    pub fn apply_hadamard(&mut self, q: usize) -> Result<(), SimulationError> {
        let mask = self.check_qubit(q)?;
        let vec = self.state.vector_mut();
        for k in 0..vec.len() {
            if k & mask == 0 {
                let a = vec[k];
                let b = vec[k | mask];
                vec[k] = (a + b) * FRAC_1_SQRT_2;
                vec[k | mask] = (a - b) * FRAC_1_SQRT_2;
            }
        }
        Ok(())
    }

    /// Flips qubit `target` on every basis state where qubit `control` is 1.
    pub fn apply_controlled_x(&mut self, control: usize, target: usize) -> Result<(), SimulationError> {
        let c_mask = self.check_qubit(control)?;
        let t_mask = self.check_qubit(target)?;
        if control == target {
            return Err(SimulationError::ControlEqualsTarget(QubitId(control)));
        }
        let vec = self.state.vector_mut();
        for k in 0..vec.len() {
            if k & c_mask != 0 && k & t_mask == 0 {
                vec.swap(k, k | t_mask);
            }
        }
        Ok(())
    }

    /// Applies a single gate.
    pub fn apply_gate(&mut self, gate: &Gate) -> Result<(), SimulationError> {
        match gate {
            Gate::Hadamard { target } => self.apply_hadamard(target.0),
            Gate::PauliX { target } => self.apply_pauli_x(target.0),
            Gate::ControlledX { control, target } => self.apply_controlled_x(control.0, target.0),
        }
    }

    /// Applies every gate of `circuit` in order.
    pub fn apply_circuit(&mut self, circuit: &Circuit) -> Result<(), SimulationError> {
        if let Some(max) = circuit.max_qubit() {
            self.check_qubit(max.0)?;
        }
        for gate in circuit.gates() {
            self.apply_gate(gate)?;
        }
        trace!(gates = circuit.len(), "applied circuit to register");
        Ok(())
    }

    /// Measures every qubit once and consumes the register.
    ///
    /// The outcome is drawn from the categorical distribution `|amp_k|^2`.
    /// Fails with [`SimulationError::Normalization`] if the probabilities do
    /// not sum to one within `norm_tolerance`.
    pub fn measure_all<R: Rng>(self, rng: &mut R, norm_tolerance: f64) -> Result<Measurement, SimulationError> {
        validate_state(&self.state, self.num_qubits, Some(norm_tolerance))?;

        let probabilities = self.state.probabilities();
        let total: f64 = probabilities.iter().sum();
        let p_sample = rng.random::<f64>() * total; // in [0, total)

        let mut cumulative = 0.0;
        let mut chosen = None;
        let mut last_possible = 0;
        for (k, p) in probabilities.iter().enumerate() {
            if *p <= AMPLITUDE_TOLERANCE {
                continue;
            }
            last_possible = k;
            cumulative += *p;
            if p_sample < cumulative {
                chosen = Some(k);
                break;
            }
        }
        // Rounding can leave p_sample just above the final cumulative sum
        let outcome = chosen.unwrap_or(last_possible);

        trace!(outcome, probability = probabilities[outcome], "sampled register");
        Ok(Measurement::new(outcome, self.num_qubits))
    }
}

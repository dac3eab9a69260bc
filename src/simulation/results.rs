// src/simulation/results.rs
use crate::core::{QubitId, SimulationError};
use std::fmt;

/// One definite outcome of measuring every qubit of a register.
///
/// Bit `q` of [`Measurement::outcome`] is the value measured on qubit `q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Measurement {
    outcome: usize,
    num_qubits: usize,
}

impl Measurement {
    pub(crate) fn new(outcome: usize, num_qubits: usize) -> Self {
        Self { outcome, num_qubits }
    }

    /// Rebuilds a measurement from its reported bitstring (qubit 0 first).
    pub fn from_bitstring(bits: &str) -> Result<Self, SimulationError> {
        let num_qubits = bits.len();
        if num_qubits == 0 || num_qubits >= usize::BITS as usize {
            return Err(SimulationError::InvalidBitstring(bits.to_string()));
        }
        let mut outcome = 0usize;
        for (q, ch) in bits.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => outcome |= 1 << q,
                _ => return Err(SimulationError::InvalidBitstring(bits.to_string())),
            }
        }
        Ok(Self { outcome, num_qubits })
    }

    /// Basis-state index that was sampled.
    pub fn outcome(&self) -> usize {
        self.outcome
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Measured value of a single qubit, `None` if it is outside the register.
    pub fn bit(&self, qubit: QubitId) -> Option<bool> {
        (qubit.0 < self.num_qubits).then(|| (self.outcome >> qubit.0) & 1 == 1)
    }

    /// Outcome in counts-key order: highest qubit first.
    pub fn raw_bitstring(&self) -> String {
        (0..self.num_qubits)
            .rev()
            .map(|q| if (self.outcome >> q) & 1 == 1 { '1' } else { '0' })
            .collect()
    }

    /// Outcome in qubit order: character `i` is qubit `i`.
    ///
    /// This is [`Measurement::raw_bitstring`] reversed and is the form the
    /// board decoder reads.
    pub fn bitstring(&self) -> String {
        self.raw_bitstring().chars().rev().collect()
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bitstring())
    }
}

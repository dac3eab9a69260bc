// src/operations/mod.rs

//! The gate set the game needs.
//!
//! Moves are encoded with three unitary gates only: Hadamard, Pauli-X and
//! controlled-X. Measurement is not a gate here; it consumes the register
//! (see [`crate::simulation::QuantumRegister::measure_all`]).

use crate::core::QubitId;
use std::fmt;

/// A single unitary operation on a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Maps each amplitude pair `(a, b)` differing in `target` to
    /// `((a+b)/√2, (a−b)/√2)`.
    Hadamard {
        /// Qubit put into (or taken out of) superposition.
        target: QubitId,
    },

    /// Bit flip. Swaps the amplitudes of basis states differing only in `target`.
    PauliX {
        /// Flipped qubit.
        target: QubitId,
    },

    /// Flips `target` on every basis state where `control` is 1.
    ControlledX {
        /// Qubit whose value gates the flip.
        control: QubitId,
        /// Qubit that is flipped.
        target: QubitId,
    },
}

impl Gate {
    /// Shorthand for [`Gate::Hadamard`].
    pub fn h(target: usize) -> Self {
        Gate::Hadamard { target: QubitId(target) }
    }

    /// Shorthand for [`Gate::PauliX`].
    pub fn x(target: usize) -> Self {
        Gate::PauliX { target: QubitId(target) }
    }

    /// Shorthand for [`Gate::ControlledX`].
    pub fn cx(control: usize, target: usize) -> Self {
        Gate::ControlledX { control: QubitId(control), target: QubitId(target) }
    }

    /// Returns every qubit mentioned by the gate.
    pub fn involved_qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::Hadamard { target } => vec![*target],
            Gate::PauliX { target } => vec![*target],
            Gate::ControlledX { control, target } => vec![*control, *target],
        }
    }

    /// Short symbol used by the circuit diagram.
    pub fn symbol(&self) -> &'static str {
        match self {
            Gate::Hadamard { .. } => "H",
            Gate::PauliX { .. } | Gate::ControlledX { .. } => "X",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Hadamard { target } => write!(f, "h {}", target),
            Gate::PauliX { target } => write!(f, "x {}", target),
            Gate::ControlledX { control, target } => write!(f, "cx {}, {}", control, target),
        }
    }
}

// src/core/state.rs

use super::constants::qttt_constants::AMPLITUDE_TOLERANCE;
use num_complex::Complex;
use std::fmt;

/// The amplitude vector of a register before measurement.
///
/// Index `k` holds the amplitude of the basis state whose bit `q` is the
/// value of qubit `q`. Gates only ever apply unitary maps to it, so it stays
/// unit-norm until it is sampled.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct AmplitudeState {
    state_vector: Vec<Complex<f64>>,
}

impl AmplitudeState {
    /// Creates a state from a given vector. Normalization is checked at measurement time.
    pub(crate) fn new(initial_vector: Vec<Complex<f64>>) -> Self {
        Self { state_vector: initial_vector }
    }

    /// Provides read-only access to the internal state vector.
    pub fn vector(&self) -> &[Complex<f64>] {
        &self.state_vector
    }

    /// Provides mutable access for the register to apply gates in place.
    pub(crate) fn vector_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.state_vector
    }

    /// Number of basis states represented (2^N).
    pub fn dim(&self) -> usize {
        self.state_vector.len()
    }

    /// Born-rule probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.state_vector.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Sum of squared magnitudes; 1.0 for a valid state.
    pub fn norm_sqr(&self) -> f64 {
        self.state_vector.iter().map(|c| c.norm_sqr()).sum()
    }
}

impl fmt::Display for AmplitudeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only non-zero terms; a full 18-qubit vector is 262144 entries long.
        let width = self.state_vector.len().trailing_zeros() as usize;
        let mut first = true;
        for (k, c) in self.state_vector.iter().enumerate() {
            if c.norm_sqr() < AMPLITUDE_TOLERANCE {
                continue;
            }
            let ket: String = (0..width)
                .map(|q| if (k >> q) & 1 == 1 { '1' } else { '0' })
                .collect();
            write!(f, "{}{:.4}|{}>", if first { "" } else { " + " }, c, ket)?;
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

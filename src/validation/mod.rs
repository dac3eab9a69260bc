// src/validation/mod.rs

//! Sanity checks on an [`AmplitudeState`] before it is sampled.

use crate::core::{AmplitudeState, DEFAULT_NORM_TOLERANCE, SimulationError};

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `AmplitudeState` to check.
/// * `tolerance` - Allowed deviation from 1.0. `None` uses [`DEFAULT_NORM_TOLERANCE`].
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(SimulationError::Normalization)` otherwise.
pub fn check_normalization(state: &AmplitudeState, tolerance: Option<f64>) -> Result<(), SimulationError> {
    let tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq = state.norm_sqr();
    // NaN fails the comparison below, so check it explicitly
    if !norm_sq.is_finite() || (norm_sq - 1.0).abs() > tolerance {
        Err(SimulationError::Normalization { norm_sq, tolerance })
    } else {
        Ok(())
    }
}

/// Checks that the vector length is a power of two matching `num_qubits`.
pub fn check_dimension(state: &AmplitudeState, num_qubits: usize) -> Result<(), SimulationError> {
    let dim = state.dim();
    if !dim.is_power_of_two() || dim.trailing_zeros() as usize != num_qubits {
        return Err(SimulationError::QubitCountMismatch {
            expected: num_qubits,
            actual: dim.trailing_zeros() as usize,
        });
    }
    Ok(())
}

/// Performs every pre-measurement check: dimension, then normalization.
pub fn validate_state(state: &AmplitudeState, num_qubits: usize, norm_tolerance: Option<f64>) -> Result<(), SimulationError> {
    check_dimension(state, num_qubits)?;
    check_normalization(state, norm_tolerance)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_normalized_superposition_passes() {
        let state = AmplitudeState::new(vec![
            Complex::new(FRAC_1_SQRT_2, 0.0),
            Complex::new(0.0, FRAC_1_SQRT_2),
        ]);
        assert!(validate_state(&state, 1, None).is_ok());
    }

    #[test]
    fn test_unnormalized_state_fails() {
        let state = AmplitudeState::new(vec![Complex::new(1.0, 0.0), Complex::new(1.0, 0.0)]);
        match check_normalization(&state, None) {
            Err(SimulationError::Normalization { norm_sq, .. }) => assert!((norm_sq - 2.0).abs() < 1e-12),
            other => panic!("expected normalization failure, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_state_fails() {
        let state = AmplitudeState::new(vec![Complex::new(f64::NAN, 0.0), Complex::new(0.0, 0.0)]);
        assert!(check_normalization(&state, None).is_err());
    }

    #[test]
    fn test_dimension_mismatch() {
        let state = AmplitudeState::new(vec![Complex::new(1.0, 0.0); 4]);
        assert_eq!(
            check_dimension(&state, 3),
            Err(SimulationError::QubitCountMismatch { expected: 3, actual: 2 })
        );
    }
}

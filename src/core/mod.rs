// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod state;

// Re-export public types for convenient access via `qttt::core::TypeName`
pub use error::{GameError, MoveError, QubitId, Result, SimulationError};
pub use state::AmplitudeState;

pub mod constants;
pub use constants::qttt_constants::{
    AMPLITUDE_TOLERANCE, DEFAULT_NORM_TOLERANCE, NUM_CELLS, NUM_QUBITS, QUBITS_PER_CELL,
};

// src/simulation/mod.rs

//! State-vector simulation of the game register.
//!
//! [`QuantumRegister`] holds the amplitudes and applies gates; [`Simulator`]
//! owns the random source and performs the single measurement shot that
//! collapses a register into a [`Measurement`].

mod register;
mod results;

pub use register::QuantumRegister;
pub use results::Measurement;

use crate::circuits::Circuit;
use crate::core::{DEFAULT_NORM_TOLERANCE, SimulationError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Configuration for a [`Simulator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Deterministic seed. `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Allowed deviation of the total probability from 1.0 before sampling.
    pub norm_tolerance: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
        }
    }
}

/// Performs measurements on registers using an owned random source.
pub struct Simulator {
    config: SimConfig,
    rng: StdRng,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::with_config(SimConfig::default())
    }
}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator seeded from `config.seed`, or from OS entropy.
    pub fn with_config(config: SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    /// Shorthand for a simulator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_config(SimConfig { seed: Some(seed), ..SimConfig::default() })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Samples one outcome from `register`, consuming it.
    pub fn measure(&mut self, register: QuantumRegister) -> Result<Measurement, SimulationError> {
        let measurement = register.measure_all(&mut self.rng, self.config.norm_tolerance)?;
        debug!(outcome = %measurement, "register measured");
        Ok(measurement)
    }

    /// Runs `circuit` on a fresh `num_qubits` register and measures it once.
    pub fn run(&mut self, circuit: &Circuit, num_qubits: usize) -> Result<Measurement, SimulationError> {
        let mut register = QuantumRegister::new(num_qubits)?;
        register.apply_circuit(circuit)?;
        self.measure(register)
    }
}

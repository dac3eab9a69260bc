// src/lib.rs

//! `qttt` - Quantum tic-tac-toe on a state-vector simulator
//!
//! Each cell of the board is encoded by two qubits. A move either writes a
//! mark deterministically or puts it into equal superposition across two
//! cells; the register is measured once per round and the sampled outcome
//! becomes the board the next round starts from.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;
pub mod game;

// Re-export the most common types for easier top-level use
pub use crate::core::{GameError, MoveError, QubitId, SimulationError};
pub use operations::Gate;
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{Measurement, QuantumRegister, SimConfig, Simulator};
pub use validation::{check_normalization, validate_state};
pub use game::{Board, Game, GameConfig, GameResult, Mark, Move, RoundEvent, Session};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Example 1: Entangling move on a two-cell register
// An `x` spread over cells 0 and 1 always lands in exactly one of them.
/// ```
/// use qttt::{QuantumRegister, Simulator, SimulationError};
/// use qttt::game::encoder;
///
/// let mut simulator = Simulator::seeded(42);
/// for _ in 0..10 {
///     let mut register = QuantumRegister::new(4)?;
///     register.apply_circuit(&encoder::entangle_x(0, 1))?;
///     let outcome = simulator.measure(register)?.bitstring();
///     assert!(outcome == "1100" || outcome == "0011", "got {}", outcome);
/// }
/// # Ok::<(), SimulationError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: A game won by a placement, with no collapse
/// ```
/// use qttt::{Game, GameConfig, GameResult, Mark, RoundEvent, GameError};
///
/// let mut game = Game::new(GameConfig::default().with_seed(1))?;
/// for token in ["4", "0", "2", "1"] {
///     game.play(token)?;
/// }
/// let report = game.play("6")?; // x completes the 2-4-6 diagonal
/// assert_eq!(report.event, RoundEvent::EarlyWin { winner: Mark::X, line: [2, 4, 6] });
/// assert_eq!(game.result(), Some(GameResult::Winner(Mark::X)));
/// assert_eq!(game.measurements_taken(), 0);
/// # Ok::<(), GameError>(())
/// ```
#[doc(hidden)]
const _: () = ();

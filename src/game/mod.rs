// src/game/mod.rs

//! Quantum tic-tac-toe rules on top of the simulator.
//!
//! Every round runs on a fresh 18-qubit register re-initialized from the
//! previous collapse. Moves are validated against the provisional cells,
//! encoded as gates, and the register is measured once every cell has
//! received a move.

pub mod board;
pub mod encoder;
pub mod moves;
pub mod provisional;
pub mod round;
pub mod session;

pub use board::{Board, CellState, Mark, WIN_LINES};
pub use moves::{Move, validate_move};
pub use provisional::{CellTag, ProvisionalCells};
pub use round::{Game, GameConfig, GameResult, MoveReport, Phase, RoundEvent, TurnCounter};
pub use session::{LineSource, MoveSource, ScriptedMoves, Session};

//! Error handling logic

use std::fmt;
use thiserror::Error;

/// Index of a single qubit inside a register.
/// Qubit `q` corresponds to bit `q` of a basis-state index (least significant first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub usize);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Convenient `Result` alias used by game-level functions.
pub type Result<T> = std::result::Result<T, GameError>;

/// Failures of the state-vector simulation itself.
///
/// These are never caused by player input. Each one means a gate sequence or
/// decode step was built incorrectly, so callers must abort rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Squared amplitudes no longer sum to one.
    #[error("state vector normalization failed: sum(|c_i|^2) = {norm_sq} (tolerance {tolerance})")]
    Normalization {
        /// Observed sum of squared magnitudes.
        norm_sq: f64,
        /// Allowed deviation from 1.0.
        tolerance: f64,
    },

    /// A gate addressed a qubit the register does not have.
    #[error("{qubit} is out of range for a register of {num_qubits} qubits")]
    InvalidQubit {
        /// Offending qubit.
        qubit: QubitId,
        /// Size of the register.
        num_qubits: usize,
    },

    /// A controlled gate used the same qubit for control and target.
    #[error("control and target must differ for a controlled gate (both {0})")]
    ControlEqualsTarget(QubitId),

    /// The register would need more amplitudes than fit in memory addressing.
    #[error("{0} qubits overflow the state vector dimension")]
    DimensionOverflow(usize),

    /// A register must hold at least one qubit.
    #[error("cannot build a register with zero qubits")]
    EmptyRegister,

    /// A measured cell decoded to the unused `10` pattern.
    #[error("cell {cell} decoded to illegal basis pattern \"{bits}\"")]
    IllegalCellState {
        /// Cell index on the board.
        cell: usize,
        /// The two measured bits.
        bits: String,
    },

    /// A bitstring or outcome does not match the expected register width.
    #[error("expected {expected} qubits, got {actual}")]
    QubitCountMismatch {
        /// Width the caller required.
        expected: usize,
        /// Width that was supplied.
        actual: usize,
    },

    /// A bitstring contained something other than `0` and `1`.
    #[error("invalid bitstring \"{0}\"")]
    InvalidBitstring(String),
}

/// Rejections of a raw move token. Recoverable: the player is asked again
/// and the game state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Token is neither `a` nor `a,b`.
    #[error("Please enter the move in the correct format 'a' or 'a,b', where 0 <= a,b <= 8, and a!=b.")]
    MalformedMove,

    /// A cell index is larger than 8.
    #[error("Cell {0} does not exist. Please enter cells between 0 and 8.")]
    IndexOutOfRange(usize),

    /// Both halves of an entangling move name the same cell.
    #[error("Cell {0} was entered twice. An entangling move needs two different cells.")]
    RepeatedCell(usize),

    /// A referenced cell already received a move this round or holds a collapsed mark.
    #[error("Cell {0} is occupied. Please enter only the unoccupied cells.")]
    CellOccupied(usize),
}

/// Top-level error for driving a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// Player input was rejected.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// The simulator hit an unrecoverable state.
    #[error("simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// A move was submitted after the game finished.
    #[error("the game is already over")]
    GameOver,

    /// The move source ran out of input before the game ended.
    #[error("input closed before the game finished")]
    InputClosed,

    /// Reading moves or writing the board failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// `true` for errors the player can fix by entering another move.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::Move(_))
    }
}

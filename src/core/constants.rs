//! Board geometry and numeric constants shared by the simulator and the game.

/// Constants describing the quantum tic-tac-toe board
pub mod qttt_constants {
    /// Cells on the board.
    pub const NUM_CELLS: usize = 9;
    /// Qubits used to encode a single cell.
    pub const QUBITS_PER_CELL: usize = 2;
    /// Width of the register a game round runs on.
    pub const NUM_QUBITS: usize = NUM_CELLS * QUBITS_PER_CELL;
    /// Default allowed deviation of the total probability from 1.0.
    pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;
    /// Amplitudes with squared magnitude below this are treated as zero.
    pub const AMPLITUDE_TOLERANCE: f64 = 1e-12;
}

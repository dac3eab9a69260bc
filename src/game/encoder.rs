//! Translation of boards and moves into gate sequences.
//!
//! Cell `i` owns the *cross* qubit `2i` and the *occupancy* qubit `2i+1`.
//! An `o` sets only the occupancy qubit (`01`); an `x` sets both (`11`).

use crate::circuits::{Circuit, CircuitBuilder};
use crate::game::board::{Board, CellState, Mark};
use crate::game::moves::Move;

/// Qubit that is 1 only for an `x`.
#[inline]
pub fn cross_qubit(cell: usize) -> usize {
    2 * cell
}

/// Qubit that is 1 for any mark.
#[inline]
pub fn occupancy_qubit(cell: usize) -> usize {
    2 * cell + 1
}

/// Gates that write `mark` into `cell` of a register where the cell is `00`.
fn write_mark(builder: CircuitBuilder, cell: usize, mark: Mark) -> CircuitBuilder {
    match mark {
        Mark::O => builder.x(occupancy_qubit(cell)),
        Mark::X => builder.x(cross_qubit(cell)).x(occupancy_qubit(cell)),
    }
}

/// Rebuilds a previously collapsed board on an all-zero register.
pub fn reinitialize(board: &Board) -> Circuit {
    board
        .cells()
        .iter()
        .enumerate()
        .fold(CircuitBuilder::new(), |builder, (cell, state)| match state {
            CellState::Empty => builder,
            CellState::Marked(mark) => write_mark(builder, cell, *mark),
        })
        .build()
}

/// Deterministic mark in a single cell.
pub fn placement(cell: usize, mark: Mark) -> Circuit {
    write_mark(CircuitBuilder::new(), cell, mark).build()
}

/// Equal superposition of {a=o, b=empty} and {a=empty, b=o}.
pub fn entangle_o(a: usize, b: usize) -> Circuit {
    CircuitBuilder::new()
        .h(occupancy_qubit(a))
        .cx(occupancy_qubit(a), occupancy_qubit(b))
        .x(occupancy_qubit(a))
        .build()
}

/// Equal superposition of {a=x, b=empty} and {a=empty, b=x}.
pub fn entangle_x(a: usize, b: usize) -> Circuit {
    CircuitBuilder::new()
        .h(cross_qubit(a))
        .cx(cross_qubit(a), occupancy_qubit(b))
        .x(cross_qubit(a))
        // a is either 00 or 11, never 01
        .cx(cross_qubit(a), occupancy_qubit(a))
        // same for b
        .cx(occupancy_qubit(b), cross_qubit(b))
        .build()
}

/// Gates realizing `mv` played by `mark`.
pub fn encode(mv: Move, mark: Mark) -> Circuit {
    match (mv, mark) {
        (Move::Place(cell), _) => placement(cell, mark),
        (Move::Entangle(a, b), Mark::O) => entangle_o(a, b),
        (Move::Entangle(a, b), Mark::X) => entangle_x(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NUM_QUBITS, SimulationError};
    use crate::simulation::QuantumRegister;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TOL: f64 = 1e-9;

    /// Indices with non-zero amplitude, each paired with its real amplitude.
    fn support(register: &QuantumRegister) -> Vec<(usize, f64)> {
        register
            .amplitudes()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.norm_sqr() > TOL)
            .map(|(k, c)| {
                assert!(c.im.abs() < TOL);
                (k, c.re)
            })
            .collect()
    }

    #[test]
    fn test_entangle_o_two_cells() -> Result<(), SimulationError> {
        let mut register = QuantumRegister::new(4)?;
        register.apply_circuit(&entangle_o(0, 1))?;
        let s = support(&register);
        // qubit 1 set (a=o) or qubit 3 set (b=o)
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].0, 0b0010);
        assert_eq!(s[1].0, 0b1000);
        assert!((s[0].1 - FRAC_1_SQRT_2).abs() < TOL && (s[1].1 - FRAC_1_SQRT_2).abs() < TOL);
        Ok(())
    }

    #[test]
    fn test_entangle_x_two_cells() -> Result<(), SimulationError> {
        let mut register = QuantumRegister::new(4)?;
        register.apply_circuit(&entangle_x(0, 1))?;
        let s = support(&register);
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].0, 0b0011);
        assert_eq!(s[1].0, 0b1100);
        assert!((s[0].1 - FRAC_1_SQRT_2).abs() < TOL && (s[1].1 - FRAC_1_SQRT_2).abs() < TOL);
        Ok(())
    }

    #[test]
    fn test_entangle_reversed_pair() -> Result<(), SimulationError> {
        let mut register = QuantumRegister::new(4)?;
        register.apply_circuit(&entangle_x(1, 0))?;
        let indices: Vec<usize> = support(&register).into_iter().map(|(k, _)| k).collect();
        assert_eq!(indices, vec![0b0011, 0b1100]);
        Ok(())
    }

    #[test]
    fn test_placement_gates() {
        assert_eq!(placement(4, Mark::O).len(), 1);
        assert_eq!(placement(4, Mark::X).len(), 2);
        assert_eq!(encode(Move::Entangle(0, 1), Mark::X).len(), 5);
        assert_eq!(encode(Move::Entangle(0, 1), Mark::O).len(), 3);
    }

    #[test]
    fn test_reinitialize_matches_board() -> Result<(), SimulationError> {
        let bits = "010011000100000011";
        let board = Board::from_bitstring(bits)?;
        let mut register = QuantumRegister::new(NUM_QUBITS)?;
        register.apply_circuit(&reinitialize(&board))?;
        let expected = QuantumRegister::from_basis_state(bits)?;
        assert_eq!(support(&register), support(&expected));
        Ok(())
    }

    #[test]
    fn test_reinitialize_empty_board_is_identity() {
        assert!(reinitialize(&Board::empty()).is_empty());
    }
}

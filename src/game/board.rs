//! The classical board and the wire format it is decoded from.
//!
//! # Cell encoding
//!
//! ```text
//! Cell i owns qubits 2i (cross) and 2i+1 (occupancy).
//! Written (qubit 2i)(qubit 2i+1):
//!   00 = empty
//!   01 = o
//!   11 = x
//!   10 = unused, never produced by a valid gate sequence
//!
//! Cell indices (row-major order):
//!   0 1 2
//!   3 4 5
//!   6 7 8
//! ```

use crate::core::{NUM_CELLS, NUM_QUBITS, QUBITS_PER_CELL, SimulationError};
use crate::simulation::Measurement;
use std::fmt;

/// The eight winning lines: rows, columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Player identity and the mark it writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opponent's mark.
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Lowercase symbol used on the board.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }

    /// Two-bit cell pattern of this mark.
    pub fn bits(self) -> &'static str {
        match self {
            Mark::X => "11",
            Mark::O => "01",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Definite content of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Marked(Mark),
}

impl CellState {
    /// Decodes the two measured bits of `cell`.
    pub fn from_bits(cell: usize, bits: &str) -> Result<Self, SimulationError> {
        match bits {
            "00" => Ok(CellState::Empty),
            "01" => Ok(CellState::Marked(Mark::O)),
            "11" => Ok(CellState::Marked(Mark::X)),
            _ => Err(SimulationError::IllegalCellState { cell, bits: bits.to_string() }),
        }
    }

    pub fn bits(self) -> &'static str {
        match self {
            CellState::Empty => "00",
            CellState::Marked(mark) => mark.bits(),
        }
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            CellState::Empty => None,
            CellState::Marked(mark) => Some(mark),
        }
    }

    /// Two-character label: ` .`, ` o` or ` x`.
    pub fn label(self) -> String {
        match self {
            CellState::Empty => " .".to_string(),
            CellState::Marked(mark) => format!(" {}", mark),
        }
    }
}

/// Returns the first line whose three cells all carry the same mark.
pub fn find_winning_line<F>(mark_at: F) -> Option<(Mark, [usize; 3])>
where
    F: Fn(usize) -> Option<Mark>,
{
    WIN_LINES.iter().find_map(|line| {
        let first = mark_at(line[0])?;
        (mark_at(line[1]) == Some(first) && mark_at(line[2]) == Some(first)).then_some((first, *line))
    })
}

/// Writes a 3×3 grid as `| a | b | c |` rows from two-character labels.
pub(crate) fn write_grid<F>(f: &mut fmt::Formatter<'_>, label_at: F) -> fmt::Result
where
    F: Fn(usize) -> String,
{
    for i in 0..NUM_CELLS {
        write!(f, "|{} ", label_at(i))?;
        if (i + 1) % 3 == 0 {
            writeln!(f, "|")?;
        }
    }
    Ok(())
}

/// The classical truth of the game, as fixed by the last collapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [CellState; NUM_CELLS],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [CellState; NUM_CELLS]) -> Self {
        Self { cells }
    }

    /// Decodes an 18-character wire string, cell `i` at characters `[2i, 2i+2)`.
    pub fn from_bitstring(bits: &str) -> Result<Self, SimulationError> {
        if bits.len() != NUM_QUBITS {
            return Err(SimulationError::QubitCountMismatch { expected: NUM_QUBITS, actual: bits.len() });
        }
        if !bits.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(SimulationError::InvalidBitstring(bits.to_string()));
        }
        let mut cells = [CellState::Empty; NUM_CELLS];
        for (i, cell) in cells.iter_mut().enumerate() {
            let start = i * QUBITS_PER_CELL;
            *cell = CellState::from_bits(i, &bits[start..start + QUBITS_PER_CELL])?;
        }
        Ok(Self { cells })
    }

    /// Decodes a measurement of the full 18-qubit register.
    pub fn from_measurement(measurement: &Measurement) -> Result<Self, SimulationError> {
        Self::from_bitstring(&measurement.bitstring())
    }

    /// Encodes the board in the 18-character wire format.
    pub fn to_bitstring(&self) -> String {
        self.cells.iter().map(|c| c.bits()).collect()
    }

    pub fn cell(&self, index: usize) -> CellState {
        self.cells[index]
    }

    pub fn cells(&self) -> &[CellState; NUM_CELLS] {
        &self.cells
    }

    /// Writes a definite mark into a cell.
    pub fn set(&mut self, index: usize, state: CellState) {
        self.cells[index] = state;
    }

    /// `true` when every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| matches!(c, CellState::Marked(_)))
    }

    /// The first winning line, if any.
    pub fn winning_line(&self) -> Option<(Mark, [usize; 3])> {
        find_winning_line(|i| self.cells[i].mark())
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().map(|(mark, _)| mark)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, |i| self.cells[i].label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(labels: &str) -> Board {
        let mut cells = [CellState::Empty; NUM_CELLS];
        for (cell, ch) in cells.iter_mut().zip(labels.chars().filter(|c| !c.is_whitespace())) {
            *cell = match ch {
                'x' => CellState::Marked(Mark::X),
                'o' => CellState::Marked(Mark::O),
                _ => CellState::Empty,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_cell_labels() -> Result<(), SimulationError> {
        assert_eq!(CellState::from_bits(0, "00")?.label(), " .");
        assert_eq!(CellState::from_bits(0, "01")?.label(), " o");
        assert_eq!(CellState::from_bits(0, "11")?.label(), " x");
        assert!(matches!(
            CellState::from_bits(4, "10"),
            Err(SimulationError::IllegalCellState { cell: 4, .. })
        ));
        Ok(())
    }

    #[test]
    fn test_decode_first_o_rest_x() -> Result<(), SimulationError> {
        let board = Board::from_bitstring("011111111111111111")?;
        assert_eq!(board.cell(0), CellState::Marked(Mark::O));
        assert!((1..9).all(|i| board.cell(i) == CellState::Marked(Mark::X)));
        Ok(())
    }

    #[test]
    fn test_bitstring_round_trip() -> Result<(), SimulationError> {
        let bits = "010011000100000011";
        assert_eq!(Board::from_bitstring(bits)?.to_bitstring(), bits);
        Ok(())
    }

    #[test]
    fn test_decode_rejects_bad_width() {
        assert!(matches!(
            Board::from_bitstring("0101"),
            Err(SimulationError::QubitCountMismatch { expected: 18, actual: 4 })
        ));
    }

    #[test]
    fn test_is_full() -> Result<(), SimulationError> {
        assert!(Board::from_bitstring("110111011111110101")?.is_full());
        assert!(!Board::from_bitstring("110011011111110101")?.is_full());
        Ok(())
    }

    #[test]
    fn test_winner_on_anti_diagonal() {
        let b = board(". o x  o x o  x o .");
        assert_eq!(b.winning_line(), Some((Mark::X, [2, 4, 6])));
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        assert_eq!(Board::empty().winner(), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        assert_eq!(board("x x o  . . .  . . .").winner(), None);
    }

    #[test]
    fn test_render_grid() {
        let b = board("x . o  . x .  . . o");
        assert_eq!(b.to_string(), "| x | . | o |\n| . | x | . |\n| . | . | o |\n");
    }
}

//! Parsing and validation of raw move tokens.

use crate::core::{MoveError, NUM_CELLS};
use crate::game::provisional::ProvisionalCells;
use std::fmt;

/// A validated move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Writes the mark deterministically into one cell.
    Place(usize),
    /// Puts the mark into equal superposition across two distinct cells.
    Entangle(usize, usize),
}

impl Move {
    /// Cells referenced by the move.
    pub fn cells(&self) -> Vec<usize> {
        match *self {
            Move::Place(cell) => vec![cell],
            Move::Entangle(a, b) => vec![a, b],
        }
    }

    pub fn is_placement(&self) -> bool {
        matches!(self, Move::Place(_))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(cell) => write!(f, "{}", cell),
            Move::Entangle(a, b) => write!(f, "{},{}", a, b),
        }
    }
}

/// Splits `a` or `a,b` into digits. Anything else is malformed.
fn parse_format(token: &str) -> Result<Vec<usize>, MoveError> {
    let digit = |b: u8| b.is_ascii_digit().then(|| (b - b'0') as usize);
    match token.as_bytes() {
        [a] => digit(*a).map(|a| vec![a]).ok_or(MoveError::MalformedMove),
        [a, b',', b] => match (digit(*a), digit(*b)) {
            (Some(a), Some(b)) => Ok(vec![a, b]),
            _ => Err(MoveError::MalformedMove),
        },
        _ => Err(MoveError::MalformedMove),
    }
}

/// Validates a raw token against the current provisional cells.
///
/// Checks run in a fixed order and stop at the first failure: format,
/// index range, non-repetition, occupancy. Nothing is mutated.
pub fn validate_move(token: &str, cells: &ProvisionalCells) -> Result<Move, MoveError> {
    let indices = parse_format(token)?;

    if let Some(&bad) = indices.iter().find(|&&i| i >= NUM_CELLS) {
        return Err(MoveError::IndexOutOfRange(bad));
    }

    let mv = match indices[..] {
        [a] => Move::Place(a),
        [a, b] if a == b => return Err(MoveError::RepeatedCell(a)),
        [a, b] => Move::Entangle(a, b),
        _ => return Err(MoveError::MalformedMove),
    };

    if let Some(taken) = mv.cells().into_iter().find(|&i| !cells.is_empty(i)) {
        return Err(MoveError::CellOccupied(taken));
    }

    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{CellState, Mark};
    use crate::game::provisional::CellTag;

    fn empty() -> ProvisionalCells {
        ProvisionalCells::new()
    }

    #[test]
    fn test_format() {
        assert_eq!(validate_move("1 3", &empty()), Err(MoveError::MalformedMove));
        assert_eq!(validate_move("", &empty()), Err(MoveError::MalformedMove));
        assert_eq!(validate_move("a", &empty()), Err(MoveError::MalformedMove));
        assert_eq!(validate_move("12", &empty()), Err(MoveError::MalformedMove));
        assert_eq!(validate_move("3,5", &empty()), Ok(Move::Entangle(3, 5)));
        assert_eq!(validate_move("7", &empty()), Ok(Move::Place(7)));
    }

    #[test]
    fn test_index_range() {
        assert_eq!(validate_move("9", &empty()), Err(MoveError::IndexOutOfRange(9)));
        assert_eq!(validate_move("3,9", &empty()), Err(MoveError::IndexOutOfRange(9)));
        assert_eq!(validate_move("9,3", &empty()), Err(MoveError::IndexOutOfRange(9)));
        assert_eq!(validate_move("3", &empty()), Ok(Move::Place(3)));
    }

    #[test]
    fn test_repeated_cell() {
        assert_eq!(validate_move("3,3", &empty()), Err(MoveError::RepeatedCell(3)));
        // range is checked before repetition
        assert_eq!(validate_move("9,9", &empty()), Err(MoveError::IndexOutOfRange(9)));
    }

    #[test]
    fn test_occupied() {
        let mut cells = empty();
        cells.set(7, CellTag::Classical(Mark::O));
        cells.set(8, CellTag::Classical(Mark::O));
        assert_eq!(validate_move("3,7", &cells), Err(MoveError::CellOccupied(7)));
        assert_eq!(validate_move("8", &cells), Err(MoveError::CellOccupied(8)));

        let mut cells = empty();
        cells.set(3, CellTag::Entangled { mark: Mark::X, move_number: 1 });
        assert_eq!(validate_move("2,3", &cells), Err(MoveError::CellOccupied(3)));
    }

    #[test]
    fn test_occupied_by_collapsed_mark() {
        let mut board = crate::game::board::Board::empty();
        board.set(1, CellState::Marked(Mark::O));
        let cells = ProvisionalCells::from_board(&board);
        assert_eq!(validate_move("1", &cells), Err(MoveError::CellOccupied(1)));
    }

    #[test]
    fn test_valid_moves() {
        assert_eq!(validate_move("3,1", &empty()), Ok(Move::Entangle(3, 1)));
        assert_eq!(validate_move("1", &empty()), Ok(Move::Place(1)));
        assert_eq!(validate_move("5,3", &empty()), Ok(Move::Entangle(5, 3)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::Entangle(0, 8).to_string(), "0,8");
        assert_eq!(Move::Place(4).to_string(), "4");
    }
}

//! Per-round bookkeeping of which cells already received a move.
//!
//! These tags drive move validation and the in-round display. They are not
//! the quantum truth: an entangled cell may end up empty after collapse.

use crate::core::NUM_CELLS;
use crate::game::board::{Board, CellState, Mark, find_winning_line, write_grid};
use std::fmt;

/// Display and occupancy tag of one cell during a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellTag {
    #[default]
    Empty,
    /// Known mark: placed this round, or carried over from the last collapse.
    Classical(Mark),
    /// One half of an entangling move.
    Entangled {
        mark: Mark,
        /// Position of the move within the current round, starting at 1.
        move_number: usize,
    },
}

impl CellTag {
    /// Two-character label: ` .`, ` x`, or `<player><move#>` such as `x3`.
    pub fn label(self) -> String {
        match self {
            CellTag::Empty => " .".to_string(),
            CellTag::Classical(mark) => format!(" {}", mark),
            CellTag::Entangled { mark, move_number } => format!("{}{}", mark, move_number),
        }
    }
}

/// Tags for all nine cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ProvisionalCells {
    tags: [CellTag; NUM_CELLS],
}

impl ProvisionalCells {
    /// All cells empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags for the start of a round: collapsed marks carry over, the rest is empty.
    pub fn from_board(board: &Board) -> Self {
        let mut tags = [CellTag::Empty; NUM_CELLS];
        for (tag, cell) in tags.iter_mut().zip(board.cells()) {
            if let CellState::Marked(mark) = cell {
                *tag = CellTag::Classical(*mark);
            }
        }
        Self { tags }
    }

    pub fn tag(&self, index: usize) -> CellTag {
        self.tags[index]
    }

    pub fn set(&mut self, index: usize, tag: CellTag) {
        self.tags[index] = tag;
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.tags[index] == CellTag::Empty
    }

    /// `true` while at least one cell can still receive a move this round.
    pub fn has_empty(&self) -> bool {
        self.tags.iter().any(|t| *t == CellTag::Empty)
    }

    /// Winning line formed by classical marks only. Entangled cells never count.
    pub fn winning_line(&self) -> Option<(Mark, [usize; 3])> {
        find_winning_line(|i| match self.tags[i] {
            CellTag::Classical(mark) => Some(mark),
            _ => None,
        })
    }
}

impl fmt::Display for ProvisionalCells {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, |i| self.tags[i].label())
    }
}

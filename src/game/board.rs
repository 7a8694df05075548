use serde::{Deserialize, Serialize};

use crate::models::{Letter, Placement, Position, BOARD_SIZE};

/// The shared 15x15 grid. Cells are only ever filled, never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Letter>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Letter at a cell; anything off the board reads as empty
    pub fn get(&self, row: usize, col: usize) -> Option<Letter> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    pub fn at(&self, pos: Position) -> Option<Letter> {
        self.get(pos.row, pos.col)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.at(pos).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    pub fn rows(&self) -> &[[Option<Letter>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Write an already validated move onto the board
    pub fn commit(&mut self, placements: &[Placement]) {
        for p in placements {
            debug_assert!(self.cells[p.row][p.col].is_none(), "cell {} overwritten", p.position());
            self.cells[p.row][p.col] = Some(p.letter);
        }
    }
}

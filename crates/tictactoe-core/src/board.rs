//! Game board representation, move legality and win detection.
//!
//! This module contains:
//! - The cell type stored in the grid
//! - Board errors raised by illegal moves
//! - The square board itself, with line-based win detection and rendering

use crate::player::Player;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Board size used when none is given
pub const DEFAULT_SIZE: usize = 3;

const ROW_DIVIDER: &str = "---";
const COL_DIVIDER: &str = "|";

/// Errors raised when a move is not legal on the board.
///
/// Both variants are recoverable: the board is left untouched and the
/// caller may simply ask for another position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Invalid position")]
    InvalidPosition { row: usize, col: usize, size: usize },

    #[error("Position already occupied")]
    PositionOccupied { row: usize, col: usize },
}

/// What's in a single grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Cell {
    /// Nothing placed yet
    #[default]
    Empty,
    /// Claimed by a player
    Occupied(Player),
}

impl Cell {
    /// Get the occupant of this cell, if any
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(*p),
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }
}

/// A square grid of cells.
///
/// The grid never changes shape after construction, and an occupied cell is
/// never cleared or reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    grid: Vec<Vec<Cell>>,
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        // Every row is its own allocation
        let grid = (0..size).map(|_| vec![Cell::Empty; size]).collect();
        Self { size, grid }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the cell at a position, or `None` if it is off the board
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row)?.get(col).copied()
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        self.grid.iter().flatten().all(Cell::is_occupied)
    }

    /// Check if a position already holds a player.
    ///
    /// Positions off the board are reported as unoccupied.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(|c| c.is_occupied())
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.grid.iter().flatten().filter(|c| c.is_occupied()).count()
    }

    /// Place a player's mark, after checking bounds and then occupancy
    pub fn make_move(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::InvalidPosition {
                row,
                col,
                size: self.size,
            });
        }
        if self.is_occupied(row, col) {
            return Err(BoardError::PositionOccupied { row, col });
        }

        self.grid[row][col] = Cell::Occupied(player);
        Ok(())
    }

    /// Get the player holding a complete line, if any.
    ///
    /// Rows are checked first, then columns, then the two diagonals.
    pub fn get_winner(&self) -> Option<Player> {
        self.horizontal_winner()
            .or_else(|| self.vertical_winner())
            .or_else(|| self.diagonal_winner())
    }

    fn horizontal_winner(&self) -> Option<Player> {
        self.grid
            .iter()
            .find_map(|row| line_owner(row.iter().copied()))
    }

    fn vertical_winner(&self) -> Option<Player> {
        (0..self.size).find_map(|col| line_owner(self.grid.iter().map(|row| row[col])))
    }

    fn diagonal_winner(&self) -> Option<Player> {
        let n = self.size;
        line_owner((0..n).map(|i| self.grid[i][i]))
            .or_else(|| line_owner((0..n).map(|i| self.grid[i][n - 1 - i])))
    }

    /// Human-readable grid with `|` between cells and `---` lines between rows
    pub fn render(&self) -> String {
        let mut out = String::new();
        let divider = vec![ROW_DIVIDER; self.size].join(COL_DIVIDER);

        for (i, row) in self.grid.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell.owner() {
                    Some(player) => format!(" {} ", player),
                    None => "   ".to_string(),
                })
                .collect();
            out.push_str(&cells.join(COL_DIVIDER));
            out.push('\n');

            if i + 1 != self.size {
                out.push_str(&divider);
                out.push('\n');
            }
        }

        out
    }
}

/// A line belongs to a player when its first cell is occupied and every
/// other cell holds the same player.
fn line_owner(mut cells: impl Iterator<Item = Cell>) -> Option<Player> {
    let first = cells.next()?.owner()?;
    cells
        .all(|cell| cell.owner() == Some(first))
        .then_some(first)
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

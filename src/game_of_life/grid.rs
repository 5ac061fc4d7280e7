//! Square board representation for Game of Life

use super::error::{LifeError, LifeResult};
use itertools::iproduct;
use std::fmt;

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

/// A square `dimension x dimension` board of 0/1 cells, stored row-major.
///
/// Cells outside the board are treated as dead; the board never wraps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dimension: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an all-dead board
    pub fn new(dimension: usize) -> LifeResult<Self> {
        if dimension == 0 {
            return Err(LifeError::InvalidDimension { dimension });
        }

        Ok(Self {
            dimension,
            cells: vec![DEAD; dimension * dimension],
        })
    }

    /// Create a board from rows of 0/1 values
    pub fn from_rows(rows: Vec<Vec<u8>>) -> LifeResult<Self> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(LifeError::InvalidBoard("board cannot be empty".to_string()));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != dimension {
                return Err(LifeError::InvalidBoard(format!(
                    "row {} has length {}, expected {} (boards are square)",
                    i,
                    row.len(),
                    dimension
                )));
            }
            if let Some(col) = row.iter().position(|&cell| cell > ALIVE) {
                return Err(LifeError::InvalidBoard(format!(
                    "cell ({}, {}) is {}, expected 0 or 1",
                    i, col, row[col]
                )));
            }
        }

        Ok(Self {
            dimension,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cells on the board
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.dimension + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> LifeResult<()> {
        if row >= self.dimension || col >= self.dimension {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                dimension: self.dimension,
            });
        }
        Ok(())
    }

    /// Cell state at coordinates; out of bounds cells read as dead
    pub fn get(&self, row: usize, col: usize) -> u8 {
        if row < self.dimension && col < self.dimension {
            self.cells[self.index(row, col)]
        } else {
            DEAD
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == ALIVE
    }

    /// Set cell state at coordinates
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> LifeResult<()> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        self.cells[idx] = if alive { ALIVE } else { DEAD };
        Ok(())
    }

    /// Read a cell by its row-major index
    pub(crate) fn cell_at(&self, index: usize) -> u8 {
        self.cells[index]
    }

    pub(crate) fn set_index(&mut self, index: usize, state: u8) {
        self.cells[index] = state;
    }

    /// Sum of the alive Moore neighbors of `(row, col)`, excluding the cell itself.
    /// Neighbors past the edge contribute nothing.
    pub fn neighbor_sum(&self, row: usize, col: usize) -> LifeResult<u8> {
        self.check_bounds(row, col)?;
        Ok(self.neighbor_sum_unchecked(row, col))
    }

    pub(crate) fn neighbor_sum_unchecked(&self, row: usize, col: usize) -> u8 {
        let dim = self.dimension as isize;

        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| (row as isize + dr, col as isize + dc))
            .filter(|&(r, c)| r >= 0 && r < dim && c >= 0 && c < dim)
            .map(|(r, c)| self.cells[self.index(r as usize, c as usize)])
            .sum()
    }

    /// Get all living cell coordinates in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.dimension, 0..self.dimension)
            .filter(|&(row, col)| self.is_alive(row, col))
            .collect()
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == ALIVE).count()
    }

    /// Check if the board has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == DEAD)
    }

    /// Ordered rows of 0/1 values, independent of the board
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.dimension)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.dimension) {
            for &cell in row {
                let symbol = if cell == ALIVE { '█' } else { '·' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

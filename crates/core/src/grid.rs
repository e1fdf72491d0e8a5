//! Grid module - the 8x8 play area
//!
//! Each cell is either empty or holds the color of the block occupying it.
//! Uses a flat array (row-major, `row * GRID_SIZE + col`) with no allocation.
//! Coordinates are `(row, col)`, both signed so that an anchor pushed off the
//! grid by a shape offset is rejected instead of wrapping.

use arrayvec::ArrayVec;

use crate::pieces::CellOffset;
use crate::types::{BlockColor, Cell, GRID_SIZE};

/// Total number of cells on the grid
const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Rows and columns emptied by a single [`Grid::clear_lines`] call.
///
/// A cell at the intersection of a cleared row and a cleared column is emptied
/// once, but the row and the column each count as a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    pub rows: ArrayVec<u8, 8>,
    pub cols: ArrayVec<u8, 8>,
}

impl LineClear {
    /// Number of lines cleared (rows + columns)
    pub fn count(&self) -> u32 {
        (self.rows.len() + self.cols.len()) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// The play grid - 8 rows x 8 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= GRID_SIZE as i8 || col < 0 || col >= GRID_SIZE as i8 {
            return None;
        }
        Some((row as usize) * (GRID_SIZE as usize) + (col as usize))
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty
    pub fn is_empty_at(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// In bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Whether every occupied cell of `shape`, anchored at (row, col), lands on an
    /// empty in-bounds cell.
    pub fn can_place(&self, shape: &[CellOffset], row: i8, col: i8) -> bool {
        shape.iter().all(|&(dr, dc)| {
            let (r, c) = (row.saturating_add(dr), col.saturating_add(dc));
            self.is_empty_at(r, c)
        })
    }

    /// Write `color` into the footprint of `shape` anchored at (row, col).
    ///
    /// Returns false and leaves the grid untouched if the placement is illegal.
    pub fn place(&mut self, shape: &[CellOffset], row: i8, col: i8, color: BlockColor) -> bool {
        if !self.can_place(shape, row, col) {
            return false;
        }
        for &(dr, dc) in shape {
            self.set(row + dr, col + dc, Some(color));
        }
        true
    }

    /// Whether any anchor on the grid accepts `shape`
    pub fn fits_anywhere(&self, shape: &[CellOffset]) -> bool {
        (0..GRID_SIZE as i8)
            .any(|row| (0..GRID_SIZE as i8).any(|col| self.can_place(shape, row, col)))
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= GRID_SIZE as usize {
            return false;
        }
        let start = row * GRID_SIZE as usize;
        self.cells[start..start + GRID_SIZE as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= GRID_SIZE as usize {
            return false;
        }
        self.cells
            .iter()
            .skip(col)
            .step_by(GRID_SIZE as usize)
            .all(|cell| cell.is_some())
    }

    /// Empty every full row and every full column.
    ///
    /// Both scans run on the grid as it was before any clearing, so a row and a
    /// column completed by the same placement are both cleared and both counted.
    pub fn clear_lines(&mut self) -> LineClear {
        let mut cleared = LineClear::default();
        let n = GRID_SIZE as usize;

        for row in 0..n {
            if self.is_row_full(row) {
                cleared.rows.push(row as u8);
            }
        }
        for col in 0..n {
            if self.is_col_full(col) {
                cleared.cols.push(col as u8);
            }
        }

        for &row in &cleared.rows {
            let start = row as usize * n;
            self.cells[start..start + n].fill(None);
        }
        for &col in &cleared.cols {
            for row in 0..n {
                self.cells[row * n + col as usize] = None;
            }
        }

        cleared
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Encode into a compact `u8` grid (0 = empty, 1..=4 = color index).
    pub fn write_u8_grid(&self, out: &mut [[u8; GRID_SIZE as usize]; GRID_SIZE as usize]) {
        let n = GRID_SIZE as usize;
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, out_cell) in out_row.iter_mut().enumerate() {
                *out_cell = self.cells[row * n + col].map(|c| c.index()).unwrap_or(0);
            }
        }
    }

    /// A grid with every cell occupied by `color`
    pub fn filled(color: BlockColor) -> Self {
        Self {
            cells: [Some(color); GRID_CELLS],
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

//! Fixed-size two-dimensional grid.
//!
//! A dense row-major buffer with O(1) indexed access. The dimensions are set
//! at construction and never change; every access is bounds-checked against
//! them before touching the backing `Vec`.

use crate::error::{LevError, LevResult};

/// Dense `columns × rows` grid stored row-major in a single `Vec`.
///
/// Cell `(column, row)` lives at flat offset `row * columns + column`.
#[derive(Debug, Clone)]
pub struct FixedGrid2D<T> {
    columns: usize,
    rows: usize,
    cells: Vec<T>,
}

impl<T: Clone> FixedGrid2D<T> {
    /// Create a grid with every cell set to `initial`.
    ///
    /// A zero column or row count yields an empty grid on which every access fails.
    /// Panics if `columns * rows` overflows `usize`.
    pub fn new(columns: usize, rows: usize, initial: T) -> Self {
        match Self::try_new(columns, rows, initial) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`FixedGrid2D::new`].
    pub fn try_new(columns: usize, rows: usize, initial: T) -> LevResult<Self> {
        let len = columns
            .checked_mul(rows)
            .ok_or(LevError::DimensionOverflow { columns, rows })?;
        Ok(Self {
            columns,
            rows,
            cells: vec![initial; len],
        })
    }
}

impl<T> FixedGrid2D<T> {
    pub const fn columns(&self) -> usize {
        self.columns
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cells (`columns * rows`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Borrow the cell at `(column, row)`, or report which index is out of range.
    pub fn try_get(&self, column: usize, row: usize) -> LevResult<&T> {
        let offset = self.offset(column, row)?;
        Ok(&self.cells[offset])
    }

    /// Overwrite the cell at `(column, row)`, or report which index is out of range.
    pub fn try_set(&mut self, column: usize, row: usize, value: T) -> LevResult<()> {
        let offset = self.offset(column, row)?;
        self.cells[offset] = value;
        Ok(())
    }

    /// Overwrite the cell at `(column, row)`.
    ///
    /// Panics if either index is out of range.
    pub fn set(&mut self, column: usize, row: usize, value: T) {
        if let Err(err) = self.try_set(column, row, value) {
            panic!("{err}");
        }
    }

    fn offset(&self, column: usize, row: usize) -> LevResult<usize> {
        if column >= self.columns {
            return Err(LevError::ColumnOutOfRange {
                column,
                columns: self.columns,
                rows: self.rows,
            });
        }
        if row >= self.rows {
            return Err(LevError::RowOutOfRange {
                row,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(row * self.columns + column)
    }
}

impl<T: Copy> FixedGrid2D<T> {
    /// Read the cell at `(column, row)`.
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, column: usize, row: usize) -> T {
        match self.try_get(column, row) {
            Ok(value) => *value,
            Err(err) => panic!("{err}"),
        }
    }
}

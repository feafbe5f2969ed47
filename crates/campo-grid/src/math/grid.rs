use std::ops::{Index, IndexMut};

use crate::error::GridError;
use crate::math::Element;

/// Dense row-major 2D grid.
///
/// A grid built with a zero dimension is in the null state: no storage,
/// `0x0` shape, every accessor fails without touching memory.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid2D<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Grid2D<T> {
    /// The null-state grid.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for the null state.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn out_of_range(&self, row: usize, col: usize) -> GridError {
        GridError::IndexOutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn row_slice(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        let start = self.offset(row, 0);
        Some(&self.data[start..start + self.cols])
    }

    /// Iterates rows top to bottom. Yields nothing for the null state.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks(self.cols.max(1))
    }
}

/// Zeroed buffer for a `rows x cols` grid. Fails instead of panicking when
/// the cell count overflows `usize` or cannot be allocated.
fn zeroed<T: Element>(rows: usize, cols: usize) -> Result<Vec<T>, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::InvalidDimensions { rows, cols });
    }
    let len = rows
        .checked_mul(cols)
        .ok_or(GridError::InvalidDimensions { rows, cols })?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| GridError::InvalidDimensions { rows, cols })?;
    data.resize(len, T::zero());
    Ok(data)
}

impl<T: Element> Grid2D<T> {
    /// Allocates a `rows x cols` grid with every cell set to zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let data = zeroed(rows, cols)?;
        log::debug!("Creating {}x{} grid", rows, cols);
        Ok(Self { data, rows, cols })
    }

    /// Like `new`, but reports invalid dimensions through the log and yields
    /// the null state instead of an error.
    pub fn new_or_empty(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols).unwrap_or_else(|e| {
            log::error!("{}; grid left uninitialized", e);
            Self::empty()
        })
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, GridError> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::InvalidDimensions { rows, cols })?;
        if data.len() != len {
            return Err(GridError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Builds a grid from equally long rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::ShapeMismatch {
                    rows: rows.len(),
                    cols,
                    len: data.len() + row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_shape_vec((rows.len(), cols), data)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T, GridError> {
        if !self.contains(row, col) {
            return Err(self.out_of_range(row, col));
        }
        Ok(self.data[self.offset(row, col)])
    }

    /// Returns the cell value, or zero after logging the failure.
    pub fn get_or_zero(&self, row: usize, col: usize) -> T {
        self.get(row, col).unwrap_or_else(|e| {
            log::warn!("{}; returning default value", e);
            T::zero()
        })
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        if !self.contains(row, col) {
            return Err(self.out_of_range(row, col));
        }
        let i = self.offset(row, col);
        self.data[i] = value;
        Ok(())
    }

    /// Resizes in place, keeping the top-left overlap of old and new shapes.
    ///
    /// Cells outside the overlap start at zero. On error the grid is untouched.
    /// Resizing a null-state grid allocates a fresh zeroed grid.
    pub fn resize(&mut self, new_rows: usize, new_cols: usize) -> Result<(), GridError> {
        let mut data = zeroed(new_rows, new_cols)?;
        log::debug!(
            "Resizing grid from {}x{} to {}x{}",
            self.rows,
            self.cols,
            new_rows,
            new_cols
        );

        let copy_rows = self.rows.min(new_rows);
        let copy_cols = self.cols.min(new_cols);
        for i in 0..copy_rows {
            let src = self.offset(i, 0);
            let dst = i * new_cols;
            data[dst..dst + copy_cols].copy_from_slice(&self.data[src..src + copy_cols]);
        }

        // old buffer is dropped here, after the new one is complete
        self.data = data;
        self.rows = new_rows;
        self.cols = new_cols;
        log::debug!(
            "Copied {}x{} overlap, released previous storage",
            copy_rows,
            copy_cols
        );
        Ok(())
    }
}

impl<T> Default for Grid2D<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for Grid2D<T> {
    fn drop(&mut self) {
        if !self.data.is_empty() {
            log::trace!("Releasing {}x{} grid storage", self.rows, self.cols);
        }
    }
}

impl<T> Index<(usize, usize)> for Grid2D<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "grid index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid2D<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "grid index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

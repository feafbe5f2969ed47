//! Finite-difference gradient average over a rectangular region.
//!
//! For every point `(i, j)` of the region that has both a right and a lower
//! neighbour inside the region, the point gradient is
//! `(|g[i][j+1] - g[i][j]| + |g[i+1][j] - g[i][j]|) / 2`. The result is the
//! mean over those points. Differences are taken in `f64` after widening each
//! element, and the mean is narrowed to `T` once at the end.
use std::fmt;
use std::ops::Range;

use num_traits::{NumCast, ToPrimitive};

use crate::error::GridError;
use crate::math::{Element, Grid2D};

/// Half-open region `[start_row, end_row) x [start_col, end_col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub start_row: usize,
    pub end_row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl Region {
    pub fn new(start_row: usize, end_row: usize, start_col: usize, end_col: usize) -> Self {
        Self {
            start_row,
            end_row,
            start_col,
            end_col,
        }
    }

    /// The region covering a whole `rows x cols` grid.
    pub fn full(rows: usize, cols: usize) -> Self {
        Self::new(0, rows, 0, cols)
    }

    pub fn row_range(&self) -> Range<usize> {
        self.start_row..self.end_row
    }

    pub fn col_range(&self) -> Range<usize> {
        self.start_col..self.end_col
    }

    /// Number of points that have both forward neighbours inside the region.
    pub fn interior_points(&self) -> usize {
        let rows = self.end_row.saturating_sub(self.start_row).saturating_sub(1);
        let cols = self.end_col.saturating_sub(self.start_col).saturating_sub(1);
        rows * cols
    }

    fn fits(&self, rows: usize, cols: usize) -> bool {
        self.start_row < self.end_row
            && self.start_col < self.end_col
            && self.end_row <= rows
            && self.end_col <= cols
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) x [{}, {})",
            self.start_row, self.end_row, self.start_col, self.end_col
        )
    }
}

/// Result of a successful gradient average.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientMean<T> {
    /// `exact` narrowed to the element type.
    pub value: T,
    pub exact: f64,
    pub points: usize,
}

fn widen<T: ToPrimitive>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

impl<T: Element> Grid2D<T> {
    pub fn mean_gradient(&self, region: &Region) -> Result<GradientMean<T>, GridError> {
        if !region.fits(self.nrows(), self.ncols()) {
            return Err(GridError::InvalidRegion {
                region: *region,
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        let points = region.interior_points();
        if points == 0 {
            return Err(GridError::EmptyRegion { region: *region });
        }
        log::debug!("Computing mean gradient over {}", region);

        let band = || {
            let cols = region.col_range();
            self.rows_iter()
                .skip(region.start_row)
                .take(region.row_range().len())
                .map(move |row| &row[cols.clone()])
        };
        let mut sum = 0.0f64;
        for (upper, lower) in band().zip(band().skip(1)) {
            for (cells, &below) in upper.windows(2).zip(lower) {
                let here = widen(cells[0]);
                let right = widen(cells[1]);
                let below = widen(below);
                sum += ((right - here).abs() + (below - here).abs()) / 2.0;
            }
        }

        let exact = sum / points as f64;
        let value = <T as NumCast>::from(exact).ok_or(GridError::Unrepresentable { value: exact })?;
        Ok(GradientMean {
            value,
            exact,
            points,
        })
    }

    /// Returns the mean gradient, or zero after logging why none was computed.
    pub fn mean_gradient_or_zero(&self, region: &Region) -> T {
        match self.mean_gradient(region) {
            Ok(mean) => mean.value,
            Err(e) if e.is_informational() => {
                log::info!("{}", e);
                T::zero()
            }
            Err(e) => {
                log::warn!("{}; returning default value", e);
                T::zero()
            }
        }
    }
}

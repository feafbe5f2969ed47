use std::error::Error;
use std::fmt;

use crate::math::Region;

/// Failures reported by grid operations.
///
/// None of these are fatal: every operation that returns one leaves the grid
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Construction or resize with a zero dimension.
    InvalidDimensions { rows: usize, cols: usize },
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Region bounds are inverted, empty or outside the grid.
    InvalidRegion {
        region: Region,
        rows: usize,
        cols: usize,
    },
    /// Region is valid but has no point with both a right and a lower neighbour.
    EmptyRegion { region: Region },
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    /// A computed value does not fit the element type.
    Unrepresentable { value: f64 },
}

impl GridError {
    /// `EmptyRegion` is a defined empty result rather than a failure.
    pub fn is_informational(&self) -> bool {
        matches!(self, GridError::EmptyRegion { .. })
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { rows, cols } => write!(
                f,
                "invalid dimensions {}x{}: rows and columns must be positive",
                rows, cols
            ),
            GridError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index [{}][{}] out of range for {}x{} grid",
                row, col, rows, cols
            ),
            GridError::InvalidRegion { region, rows, cols } => {
                write!(f, "invalid region {} for {}x{} grid", region, rows, cols)
            }
            GridError::EmptyRegion { region } => write!(
                f,
                "region {} is too small to compute a gradient",
                region
            ),
            GridError::ShapeMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            GridError::Unrepresentable { value } => {
                write!(f, "value {} cannot be represented by the element type", value)
            }
        }
    }
}

impl Error for GridError {}

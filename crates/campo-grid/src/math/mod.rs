//! The grid container and the computations defined over it.
//!
//! `Grid2D` owns a single contiguous row-major buffer. `Region` and the
//! gradient average live in `gradient` and only use the public grid API.
pub mod gradient;
pub mod grid;

use std::fmt::Debug;

use num_traits::{NumCast, ToPrimitive, Zero};

pub use gradient::{GradientMean, Region};
pub use grid::Grid2D;

/// Numeric element stored in a `Grid2D`.
///
/// Implemented for every primitive integer and float. `Zero` supplies the
/// default cell value and `ToPrimitive`/`NumCast` carry values through the
/// `f64` accumulator used by the gradient average.
pub trait Element: Copy + Zero + ToPrimitive + NumCast + PartialEq + Debug {}

impl<T> Element for T where T: Copy + Zero + ToPrimitive + NumCast + PartialEq + Debug {}

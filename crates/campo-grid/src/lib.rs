//! campo-grid: a dense, row-major 2D field container for simulation work.
//!
//! The crate provides `Grid2D<T>`, a type-parametric grid over primitive
//! numeric elements with bounds-checked access, resizing that keeps the
//! overlapping cells, and a finite-difference gradient average over a
//! half-open rectangular region. Rendering helpers live in `report`.
//!
//! Fallible operations return `GridError`. Lifecycle notices go through the
//! `log` facade so the caller decides what reaches the terminal.
#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod math;
pub mod report;

pub use error::GridError;
pub use math::{Element, GradientMean, Grid2D, Region};

//! Scripted runs exercising every grid operation on concrete element types.
use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

use anyhow::{Context, Result};
use num_traits::NumCast;

use campo_grid::config::DisplayConfig;
use campo_grid::report::render;
use campo_grid::{Element, Grid2D, GridError, Region};

use crate::input::{DriverConfig, ElementKind};

const GRAVITY_FIELD: [[f64; 3]; 3] = [[10.0, 8.0, 5.0], [12.0, 9.0, 6.0], [15.0, 11.0, 7.0]];

fn cast<T: Element>(v: f64) -> Result<T> {
    <T as NumCast>::from(v).with_context(|| format!("{} does not fit the element type", v))
}

fn report_error(e: &GridError) {
    if e.is_informational() {
        log::info!("{}", e);
    } else {
        log::error!("{}", e);
    }
}

fn set_logged<T: Element>(grid: &mut Grid2D<T>, row: usize, col: usize, value: T) {
    if let Err(e) = grid.set(row, col, value) {
        report_error(&e);
    }
}

fn write_gradient<T, W>(grid: &Grid2D<T>, region: &Region, unit: &str, out: &mut W) -> Result<()>
where
    T: Element + Display,
    W: Write,
{
    match grid.mean_gradient(region) {
        Ok(mean) => writeln!(
            out,
            "Mean gradient over {} ({} points): {} {}",
            region, mean.points, mean.value, unit
        )?,
        Err(e) => {
            report_error(&e);
            writeln!(out, "No gradient computed: {}", e)?;
        }
    }
    Ok(())
}

/// 3x3 field: gradient, grow to 4x4, write the new corner, shrink to 2x2.
pub fn gravity_field<T, W>(display: &DisplayConfig, out: &mut W) -> Result<()>
where
    T: Element + Display,
    W: Write,
{
    let mut grid = Grid2D::<T>::new_or_empty(3, 3);
    for (i, row) in GRAVITY_FIELD.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            set_logged(&mut grid, i, j, cast(v)?);
        }
    }
    writeln!(out, "Current grid (step 0):")?;
    write!(out, "{}", render(&grid, display))?;
    write_gradient(&grid, &Region::full(3, 3), "units/m", out)?;

    grid.resize(4, 4)?;
    set_logged(&mut grid, 3, 3, cast(99.9)?);
    writeln!(out, "Grid after resizing to 4x4:")?;
    write!(out, "{}", render(&grid, display))?;

    grid.resize(2, 2)?;
    writeln!(out, "Grid after resizing to 2x2:")?;
    write!(out, "{}", render(&grid, display))?;
    if let Err(e) = grid.get(3, 3) {
        report_error(&e);
    }
    Ok(())
}

/// 2x4 field filled with `(i + 1) * 10 + j`, then its gradient.
pub fn potential_field<T, W>(display: &DisplayConfig, out: &mut W) -> Result<()>
where
    T: Element + Display,
    W: Write,
{
    let mut grid = Grid2D::<T>::new_or_empty(2, 4);
    for i in 0..2 {
        for j in 0..4 {
            set_logged(&mut grid, i, j, cast(((i + 1) * 10 + j) as f64)?);
        }
    }
    writeln!(out, "Current grid:")?;
    write!(out, "{}", render(&grid, display))?;
    write_gradient(&grid, &Region::full(2, 4), "units", out)
}

fn both_fields<T, W>(kind: ElementKind, display: &DisplayConfig, out: &mut W) -> Result<()>
where
    T: Element + Display,
    W: Write,
{
    writeln!(out, ">> Gravitational field ({}) <<", kind)?;
    gravity_field::<T, W>(display, out)?;
    writeln!(out, ">> Potential field ({}) <<", kind)?;
    potential_field::<T, W>(display, out)
}

/// Runs the demonstration for the configured element type. `All` runs the
/// gravitational field as `f32` and the potential field as `i32`.
pub fn run_demo<W: Write>(config: &DriverConfig, out: &mut W) -> Result<()> {
    let display = &config.display;
    match config.element {
        ElementKind::F32 => both_fields::<f32, W>(config.element, display, out),
        ElementKind::F64 => both_fields::<f64, W>(config.element, display, out),
        ElementKind::I32 => both_fields::<i32, W>(config.element, display, out),
        ElementKind::I64 => both_fields::<i64, W>(config.element, display, out),
        ElementKind::All => {
            writeln!(out, ">> Gravitational field (f32) <<")?;
            gravity_field::<f32, W>(display, out)?;
            writeln!(out, ">> Potential field (i32) <<")?;
            potential_field::<i32, W>(display, out)
        }
    }
}

/// Builds a grid from `values` and writes it with its mean gradient over
/// `region` (the whole grid when `None`).
pub fn run_gradient<T, W>(
    shape: (usize, usize),
    values: &str,
    region: Option<Region>,
    display: &DisplayConfig,
    out: &mut W,
) -> Result<()>
where
    T: Element + Display + FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    W: Write,
{
    let values = crate::input::parse_values::<T>(values)?;
    let grid = Grid2D::from_shape_vec(shape, values).context("Failed to build grid")?;
    let region = region.unwrap_or_else(|| Region::full(grid.nrows(), grid.ncols()));

    write!(out, "{}", render(&grid, display))?;
    match grid.mean_gradient(&region) {
        Ok(mean) => writeln!(out, "{}", mean.value)?,
        Err(e) if e.is_informational() => {
            log::info!("{}", e);
            writeln!(out, "{}", T::zero())?;
        }
        Err(e) => return Err(e).context("Gradient computation failed"),
    }
    Ok(())
}

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use campo_grid::config::DisplayConfig;
use campo_grid::Region;

/// Element type the driver instantiates grids with.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    F32,
    F64,
    I32,
    I64,
    /// Run both a floating-point and an integer field.
    #[default]
    All,
}

impl FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "f32" | "float" => Ok(ElementKind::F32),
            "f64" | "double" => Ok(ElementKind::F64),
            "i32" | "int" => Ok(ElementKind::I32),
            "i64" => Ok(ElementKind::I64),
            "all" => Ok(ElementKind::All),
            _ => Err(format!(
                "Unknown element type: {}. Expected one of f32, f64, i32, i64, all",
                s
            )),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
            ElementKind::I32 => "i32",
            ElementKind::I64 => "i64",
            ElementKind::All => "all",
        };
        f.write_str(name)
    }
}

/// Settings for a driver run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DriverConfig {
    pub display: DisplayConfig,
    pub element: ElementKind,
}

/// Load a driver configuration from a JSON file.
pub fn load_driver_config<P: AsRef<Path>>(path: P) -> Result<DriverConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DriverConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Parse `RxC`, e.g. `3x4`.
pub fn parse_shape(s: &str) -> Result<(usize, usize)> {
    let (rows, cols) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("Shape must look like ROWSxCOLS: {}", s))?;
    let rows = rows
        .trim()
        .parse()
        .with_context(|| format!("Invalid row count in shape: {}", s))?;
    let cols = cols
        .trim()
        .parse()
        .with_context(|| format!("Invalid column count in shape: {}", s))?;
    Ok((rows, cols))
}

fn parse_span(s: &str) -> Result<(usize, usize)> {
    let (start, end) = s
        .split_once(':')
        .with_context(|| format!("Span must look like START:END: {}", s))?;
    let start = start
        .trim()
        .parse()
        .with_context(|| format!("Invalid span start: {}", s))?;
    let end = end
        .trim()
        .parse()
        .with_context(|| format!("Invalid span end: {}", s))?;
    Ok((start, end))
}

/// Parse `r0:r1,c0:c1` into a half-open region.
pub fn parse_region(s: &str) -> Result<Region> {
    let (rows, cols) = s
        .split_once(',')
        .with_context(|| format!("Region must look like R0:R1,C0:C1: {}", s))?;
    let (start_row, end_row) = parse_span(rows)?;
    let (start_col, end_col) = parse_span(cols)?;
    Ok(Region::new(start_row, end_row, start_col, end_col))
}

/// Parse a comma separated list of values.
pub fn parse_values<T>(s: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.split(',')
        .map(|v| {
            v.trim()
                .parse::<T>()
                .with_context(|| format!("Invalid value: {:?}", v.trim()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_kind_parses_aliases() {
        assert_eq!("FLOAT".parse::<ElementKind>(), Ok(ElementKind::F32));
        assert_eq!("int".parse::<ElementKind>(), Ok(ElementKind::I32));
        assert!("u128".parse::<ElementKind>().is_err());
    }

    #[test]
    fn shape_requires_separator() {
        assert_eq!(parse_shape("3x4").unwrap(), (3, 4));
        assert!(parse_shape("34").is_err());
        assert!(parse_shape("-1x4").is_err());
    }
}

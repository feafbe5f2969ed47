//! Plain-text rendering of grids.
use std::fmt;

use crate::config::DisplayConfig;
use crate::math::Grid2D;

pub const UNINITIALIZED: &str = "grid is uninitialized or invalid";

/// Renders one line per row. The null state renders as a single notice line.
pub fn render<T: fmt::Display>(grid: &Grid2D<T>, config: &DisplayConfig) -> String {
    if grid.is_empty() {
        return format!("{}\n", UNINITIALIZED);
    }

    let edge = config.delimiter.trim();
    let mut out = String::new();
    for row in grid.rows_iter() {
        let cells: Vec<String> = row
            .iter()
            .map(|v| match config.precision {
                Some(p) => format!("{:.*}", p, v),
                None => v.to_string(),
            })
            .collect();
        if config.border {
            out.push_str(edge);
            out.push(' ');
        }
        out.push_str(&cells.join(&config.delimiter));
        if config.border {
            out.push(' ');
            out.push_str(edge);
        }
        out.push('\n');
    }
    out
}

impl<T: fmt::Display> fmt::Display for Grid2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &DisplayConfig::default()))
    }
}

use serde::{Deserialize, Serialize};

/// How `report::render` lays out a grid.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Placed between cells, and around each row when `border` is set.
    pub delimiter: String,
    pub border: bool,
    /// Decimal places for floating-point cells. Ignored for integers.
    pub precision: Option<usize>,
}

impl DisplayConfig {
    pub fn new(delimiter: &str, border: bool, precision: Option<usize>) -> Self {
        Self {
            delimiter: delimiter.to_string(),
            border,
            precision,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            delimiter: " | ".to_string(),
            border: true,
            precision: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: DisplayConfig = serde_json::from_str(r#"{"precision": 2}"#).unwrap();
        assert_eq!(cfg.delimiter, " | ");
        assert!(cfg.border);
        assert_eq!(cfg.precision, Some(2));
    }
}

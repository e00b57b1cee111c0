// ============================================================
// CELL VALUE
// ============================================================
// Tagged value type produced by per-cell type inference

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric literal shape accepted by type inference: optional sign,
/// integer or decimal digits, optional scientific-notation exponent.
/// Anything else ("inf", "NaN", "1,000", hex) stays text.
static NUMERIC_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("numeric literal pattern")
});

/// A single parsed CSV cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Boolean(bool),
    Text(String),
    Null,
}

impl CellValue {
    /// Infer the typed value of a raw cell.
    ///
    /// An empty cell is null. A cell whose trimmed content is a full
    /// numeric literal becomes a number; `true`/`false` (any ASCII case)
    /// become booleans; everything else is kept verbatim as text.
    pub fn infer(raw: &str) -> Self {
        if raw.is_empty() {
            return CellValue::Null;
        }

        let trimmed = raw.trim();
        if NUMERIC_LITERAL.is_match(trimmed) {
            if let Ok(value) = trimmed.parse::<f64>() {
                return CellValue::Number(value);
            }
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return CellValue::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(false);
        }

        CellValue::Text(raw.to_string())
    }

    /// The numeric content of this cell, if it has one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(value) => write!(f, "{}", value),
            CellValue::Boolean(value) => write!(f, "{}", value),
            CellValue::Text(value) => write!(f, "{}", value),
            CellValue::Null => Ok(()),
        }
    }
}

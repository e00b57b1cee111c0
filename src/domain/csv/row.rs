// ============================================================
// ROW AND DATASET TYPES
// ============================================================
// Data structures representing parsed CSV content

use super::CellValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single record of a parsed CSV file.
///
/// Cells are keyed by header column name. Rows are immutable once built;
/// screen transitions hand around snapshots, never shared mutable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    index: usize,
    cells: HashMap<String, CellValue>,
}

impl Row {
    pub fn new(index: usize, cells: HashMap<String, CellValue>) -> Self {
        Self { index, cells }
    }

    /// Record index in file order (0-based)
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// An ordered collection of rows sharing one header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Column names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All values of one column, in row order
    pub fn column_values(&self, column: &str) -> Vec<&CellValue> {
        self.rows
            .iter()
            .filter_map(|row| row.get(column))
            .collect()
    }

    /// The numeric subset of one column, in row order
    pub fn numeric_column(&self, column: &str) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.get(column))
            .filter_map(CellValue::as_number)
            .collect()
    }
}

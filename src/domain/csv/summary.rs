// ============================================================
// COLUMN SUMMARY STATISTICS
// ============================================================
// Per-column mean/median/mode over the numeric subset of each column

use super::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Descriptive statistics for one column.
///
/// Each value is `None` when the column holds no numeric cells; a column
/// of pure text yields an empty summary rather than zeros or NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub mode: Option<f64>,
}

impl ColumnSummary {
    pub fn of(values: &[f64]) -> Self {
        Self {
            mean: mean(values),
            median: median(values),
            mode: mode(values),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_none() && self.median.is_none() && self.mode.is_none()
    }
}

/// Summaries for every header column, iterable in header order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    columns: Vec<String>,
    stats: HashMap<String, ColumnSummary>,
}

impl Summary {
    /// Summarize every column of the dataset, including columns without
    /// any numeric data.
    pub fn of(dataset: &Dataset) -> Self {
        let columns: Vec<String> = dataset.headers().to_vec();
        let stats = columns
            .iter()
            .map(|column| {
                let values = dataset.numeric_column(column);
                (column.clone(), ColumnSummary::of(&values))
            })
            .collect();

        Self { columns, stats }
    }

    pub fn get(&self, column: &str) -> Option<&ColumnSummary> {
        self.stats.get(column)
    }

    /// Column names in header order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Iterate summaries in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnSummary)> {
        self.columns
            .iter()
            .filter_map(|column| self.stats.get(column).map(|s| (column.as_str(), s)))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Arithmetic mean; `None` for an empty slice, never zero.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median as the element at index `n / 2` of the ascending sort.
///
/// For even-length input this is the upper middle value, not the average
/// of the two middles; downstream consumers expect exactly this indexing,
/// so it must not be "corrected" to the textbook median.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(sorted[sorted.len() / 2])
}

/// Most frequent value; among equally frequent values the numerically
/// largest wins. `None` for an empty slice.
pub fn mode(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    // Run-length scan over the sorted values. Ties resolve to the later
    // (larger) run because equal counts still replace the best candidate.
    let mut best_value = sorted[0];
    let mut best_count = 0usize;
    let mut run_value = sorted[0];
    let mut run_count = 0usize;

    for &value in &sorted {
        if value == run_value {
            run_count += 1;
        } else {
            run_value = value;
            run_count = 1;
        }
        if run_count >= best_count {
            best_value = run_value;
            best_count = run_count;
        }
    }

    Some(best_value)
}

// ============================================================
// CSV SUMMARIZATION USE CASE
// ============================================================
// Parse raw CSV text and compute per-column statistics

use crate::domain::csv::{Dataset, Summary};
use crate::domain::error::Result;
use crate::infrastructure::csv::CsvParser;
use tracing::info;

/// Result of parsing one CSV payload
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCsv {
    pub dataset: Dataset,
    pub summary: Summary,
}

/// CSV summarization use case.
///
/// Pure with respect to its input: the same text always yields the same
/// dataset and summary, and nothing is retained between calls.
pub struct CsvSummarizer;

impl CsvSummarizer {
    pub fn new() -> Self {
        Self
    }

    /// Parse CSV text and summarize every header column
    pub fn summarize(&self, content: &str) -> Result<ParsedCsv> {
        let delimiter = CsvParser::detect_delimiter(content);
        let dataset = CsvParser::new()
            .with_delimiter(delimiter)
            .parse_content(content)?;
        let summary = Summary::of(&dataset);

        info!(
            rows = dataset.len(),
            columns = summary.len(),
            "parsed CSV content"
        );

        Ok(ParsedCsv { dataset, summary })
    }
}

impl Default for CsvSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;

    const TOLERANCE: f64 = 1e-9;

    fn close(actual: Option<f64>, expected: f64) -> bool {
        matches!(actual, Some(value) if (value - expected).abs() < TOLERANCE)
    }

    #[test]
    fn test_summarizes_numeric_columns() {
        let parsed = CsvSummarizer::new()
            .summarize("a,b\n1,10\n2,20\n3,30\n")
            .unwrap();

        assert_eq!(parsed.dataset.len(), 3);
        assert_eq!(parsed.summary.len(), 2);

        let a = parsed.summary.get("a").unwrap();
        assert!(close(a.mean, 2.0));
        assert!(close(a.median, 2.0));
        // all values appear once; the largest equally-frequent value wins
        assert!(close(a.mode, 3.0));

        let b = parsed.summary.get("b").unwrap();
        assert!(close(b.mean, 20.0));
        assert!(close(b.median, 20.0));
        assert!(close(b.mode, 30.0));
    }

    #[test]
    fn test_non_numeric_cells_are_excluded_from_statistics() {
        let parsed = CsvSummarizer::new()
            .summarize("v\n1\nnot a number\n3\n")
            .unwrap();

        let v = parsed.summary.get("v").unwrap();
        assert!(close(v.mean, 2.0));
        assert_eq!(parsed.dataset.len(), 3);
    }

    #[test]
    fn test_text_only_column_has_empty_summary() {
        let parsed = CsvSummarizer::new().summarize("city\nNYC\nLA\n").unwrap();
        assert!(parsed.summary.get("city").unwrap().is_empty());
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        let result = CsvSummarizer::new().summarize("");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let summarizer = CsvSummarizer::new();
        let content = "a,b\n4,x\n4,y\n9,z\n";
        assert_eq!(
            summarizer.summarize(content).unwrap(),
            summarizer.summarize(content).unwrap()
        );
    }

    #[test]
    fn test_detects_semicolon_delimiter() {
        let parsed = CsvSummarizer::new().summarize("x;y\n1;2\n3;4\n").unwrap();
        assert_eq!(parsed.summary.len(), 2);
        assert!(close(parsed.summary.get("x").unwrap().mean, 2.0));
    }
}

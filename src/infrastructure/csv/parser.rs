// ============================================================
// CSV PARSER
// ============================================================
// Parse CSV text into typed rows with delimiter detection

use crate::domain::csv::{CellValue, Dataset, Row};
use crate::domain::error::AppError;
use csv::{ReaderBuilder, Trim};
use std::collections::HashMap;
use tracing::warn;

/// CSV parser with delimiter detection
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
        }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Parse CSV content into a typed dataset.
    ///
    /// The first record is the header. Records shorter than the header are
    /// padded with null cells; fields beyond the header are dropped with a
    /// warning. Empty input or an all-empty header row is a parse error,
    /// never a silent empty dataset.
    pub fn parse_content(&self, content: &str) -> Result<Dataset, AppError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV header: {}", e)))?
            .clone();

        if headers.is_empty() || headers.iter().all(|name| name.trim().is_empty()) {
            return Err(AppError::ParseError(
                "CSV input is empty or missing a header row".to_string(),
            ));
        }

        // Positional header list for zipping; duplicate names keep the last
        // value but appear once in the dataset header.
        let positional: Vec<String> = headers.iter().map(|name| name.to_string()).collect();
        let mut columns: Vec<String> = Vec::with_capacity(positional.len());
        for name in &positional {
            if columns.contains(name) {
                warn!(column = %name, "duplicate header column; later values win");
            } else {
                columns.push(name.clone());
            }
        }

        let mut rows = Vec::new();

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV record {}: {}", index + 1, e))
            })?;

            if record.len() > positional.len() {
                warn!(
                    record = index + 1,
                    extra = record.len() - positional.len(),
                    "record has more fields than the header; extras ignored"
                );
            }

            let mut cells = HashMap::with_capacity(columns.len());
            for (position, column) in positional.iter().enumerate() {
                let cell = match record.get(position) {
                    Some(raw) => CellValue::infer(raw),
                    None => CellValue::Null,
                };
                cells.insert(column.clone(), cell);
            }

            rows.push(Row::new(index, cells));
        }

        Ok(Dataset::new(columns, rows))
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe).
    ///
    /// Scores each candidate by average per-line occurrence weighted by
    /// consistency across a sample of lines; comma wins all ties.
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];
        let sample: Vec<&str> = content.lines().take(10).collect();

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        if sample.is_empty() {
            return best_delimiter;
        }

        for &delimiter in &candidates {
            let counts: Vec<usize> = sample
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect();

            let avg = counts.iter().sum::<usize>() as f32 / counts.len() as f32;
            let variance = counts
                .iter()
                .map(|&count| (count as f32 - avg).powi(2))
                .sum::<f32>()
                / counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let content = "name,age,city\nAlice,30,NYC\nBob,25,LA";
        let dataset = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.headers(),
            &["name".to_string(), "age".to_string(), "city".to_string()]
        );
        assert_eq!(
            dataset.rows()[0].get("name"),
            Some(&CellValue::Text("Alice".to_string()))
        );
        assert_eq!(dataset.rows()[0].get("age"), Some(&CellValue::Number(30.0)));
    }

    #[test]
    fn test_trailing_newline_adds_no_record() {
        let dataset = CsvParser::new().parse_content("a,b\n1,10\n2,20\n").unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_quoted_fields() {
        let content = "name,notes\n\"Doe, Jane\",\"line one\nline two\"\nBob,\"she said \"\"hi\"\"\"";
        let dataset = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.rows()[0].get("name"),
            Some(&CellValue::Text("Doe, Jane".to_string()))
        );
        assert_eq!(
            dataset.rows()[0].get("notes"),
            Some(&CellValue::Text("line one\nline two".to_string()))
        );
        assert_eq!(
            dataset.rows()[1].get("notes"),
            Some(&CellValue::Text("she said \"hi\"".to_string()))
        );
    }

    #[test]
    fn test_short_record_pads_with_null() {
        let content = "a,b,c\n1,2";
        let dataset = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(dataset.rows()[0].get("b"), Some(&CellValue::Number(2.0)));
        assert_eq!(dataset.rows()[0].get("c"), Some(&CellValue::Null));
    }

    #[test]
    fn test_long_record_drops_extras() {
        let content = "a,b\n1,2,3,4";
        let dataset = CsvParser::new().parse_content(content).unwrap();

        assert_eq!(dataset.rows()[0].len(), 2);
        assert_eq!(dataset.rows()[0].get("b"), Some(&CellValue::Number(2.0)));
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        let result = CsvParser::new().parse_content("");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_blank_header_is_parse_error() {
        // header row of empty field names
        let result = CsvParser::new().parse_content(",,\n1,2,3");
        assert!(matches!(result, Err(AppError::ParseError(_))));
        // blank lines only
        let result = CsvParser::new().parse_content("\n\n");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_header_only_yields_empty_dataset() {
        let dataset = CsvParser::new().parse_content("a,b,c").unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.headers().len(), 3);
    }

    #[test]
    fn test_duplicate_header_keeps_last_value() {
        let dataset = CsvParser::new().parse_content("a,a\n1,2").unwrap();
        assert_eq!(dataset.headers(), &["a".to_string()]);
        assert_eq!(dataset.rows()[0].get("a"), Some(&CellValue::Number(2.0)));
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(CsvParser::detect_delimiter("a,b,c\nd,e,f"), b',');
        assert_eq!(CsvParser::detect_delimiter("a;b;c\nd;e;f"), b';');
        assert_eq!(CsvParser::detect_delimiter("a|b|c\nd|e|f"), b'|');
        assert_eq!(CsvParser::detect_delimiter(""), b',');
    }

    #[test]
    fn test_semicolon_content_parses_with_detected_delimiter() {
        let content = "x;y\n1;2\n3;4";
        let delimiter = CsvParser::detect_delimiter(content);
        let dataset = CsvParser::new()
            .with_delimiter(delimiter)
            .parse_content(content)
            .unwrap();
        assert_eq!(dataset.rows()[1].get("y"), Some(&CellValue::Number(4.0)));
    }
}

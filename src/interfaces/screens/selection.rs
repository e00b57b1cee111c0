// ============================================================
// SELECTION SCREEN
// ============================================================
// Pick a CSV file and a chart type, then hand off an immutable payload

use crate::domain::chart::ChartType;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::file_source::{FileSource, PickedFile};
use tracing::info;

/// Immutable snapshot carried from the selection screen to the result
/// screen; nothing downstream can mutate the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPayload {
    pub file_name: String,
    pub file_text: String,
    pub chart_type: ChartType,
}

/// Screen state for file and chart-type selection
pub struct SelectionScreen {
    file: Option<PickedFile>,
    chart_type: ChartType,
}

impl SelectionScreen {
    pub fn new() -> Self {
        Self {
            file: None,
            chart_type: ChartType::default(),
        }
    }

    /// Run the file picker against the given source.
    ///
    /// Returns `true` when a file was selected. Cancellation returns
    /// `false` and keeps the current selection untouched.
    pub async fn pick_file(&mut self, source: &dyn FileSource) -> Result<bool> {
        match source.acquire().await? {
            Some(picked) => {
                info!(file = %picked.name, "file selected");
                self.file = Some(picked);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.chart_type = chart_type;
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn selected_file(&self) -> Option<&PickedFile> {
        self.file.as_ref()
    }

    /// Validate the selection and produce the navigation payload.
    /// Fails without a file; no navigation happens in that case.
    pub fn submit(&self) -> Result<ChartPayload> {
        let file = self.file.as_ref().ok_or_else(|| {
            AppError::ValidationError("Please select a CSV file and a chart type".to_string())
        })?;

        Ok(ChartPayload {
            file_name: file.name.clone(),
            file_text: file.content.clone(),
            chart_type: self.chart_type,
        })
    }
}

impl Default for SelectionScreen {
    fn default() -> Self {
        Self::new()
    }
}

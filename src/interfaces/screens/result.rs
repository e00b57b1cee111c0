// ============================================================
// RESULT SCREEN
// ============================================================
// Orchestrate the local summary and the remote chart render

use super::selection::ChartPayload;
use crate::application::use_cases::chart_render::ChartRenderUseCase;
use crate::application::use_cases::summarize::{CsvSummarizer, ParsedCsv};
use crate::domain::csv::{Dataset, Summary};
use crate::domain::error::Result;
use tracing::{info, warn};

/// The one user-facing message for any render failure; transport errors
/// and server-side rejections are deliberately indistinguishable here.
pub const UNSUPPORTED_FORMAT_WARNING: &str = "Unsupported file type or format";

/// Lifecycle of one result screen instance. `Ready` is terminal; a new
/// navigation creates a new screen rather than re-entering `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Loading,
    Ready { image_present: bool },
}

/// Everything the result screen displays
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub file_name: String,
    pub dataset: Dataset,
    pub summary: Summary,
    pub image_url: Option<String>,
    pub warning: Option<String>,
}

/// Screen showing the rendered chart and the per-column statistics
pub struct ResultScreen {
    state: ScreenState,
}

impl ResultScreen {
    pub fn new() -> Self {
        Self {
            state: ScreenState::Loading,
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// Load the screen from its navigation payload.
    ///
    /// The local summary is computed first and displayed regardless of the
    /// remote outcome. Exactly one render request is issued; any failure
    /// degrades to a single warning with no image and no retry. The screen
    /// leaves `Loading` only after the remote call has settled either way.
    pub async fn load(
        &mut self,
        payload: &ChartPayload,
        summarizer: &CsvSummarizer,
        renderer: &ChartRenderUseCase,
    ) -> Result<ResultView> {
        let ParsedCsv { dataset, summary } = summarizer.summarize(&payload.file_text)?;

        let (image_url, warning) = match renderer
            .execute(&payload.file_text, payload.chart_type)
            .await
        {
            Ok(image_url) => {
                info!(image = %image_url, "chart image ready");
                (Some(image_url), None)
            }
            Err(err) => {
                warn!(error = %err, "chart rendering failed; showing summary only");
                (None, Some(UNSUPPORTED_FORMAT_WARNING.to_string()))
            }
        };

        self.state = ScreenState::Ready {
            image_present: image_url.is_some(),
        };

        Ok(ResultView {
            file_name: payload.file_name.clone(),
            dataset,
            summary,
            image_url,
            warning,
        })
    }
}

impl Default for ResultScreen {
    fn default() -> Self {
        Self::new()
    }
}

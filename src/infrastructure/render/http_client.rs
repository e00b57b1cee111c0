use super::RenderClient;
use crate::domain::chart::ChartType;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::RenderConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ConvertRequest<'a> {
    file: &'a str,
    graph_type: &'a str,
}

// The service may also return a `statistics` member; the front-end always
// computes its own summary, so unknown members are ignored.
#[derive(Deserialize)]
struct ConvertResponse {
    image_url: String,
}

/// HTTP client for the rendering service's `POST /convert` endpoint
pub struct HttpRenderClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRenderClient {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl RenderClient for HttpRenderClient {
    async fn render_chart(&self, file_base64: &str, chart_type: ChartType) -> Result<String> {
        let url = format!("{}/convert", self.base_url);
        let body = ConvertRequest {
            file: file_base64,
            graph_type: chart_type.as_str(),
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::RenderError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::RenderError(format!(
                "Render service error ({}): {}",
                status, text
            )));
        }

        let json: ConvertResponse = response
            .json()
            .await
            .map_err(|e| AppError::RenderError(format!("Failed to parse JSON: {}", e)))?;

        Ok(json.image_url)
    }
}

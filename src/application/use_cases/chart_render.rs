// ============================================================
// CHART RENDER USE CASE
// ============================================================
// Encode the CSV payload, request one render, normalize the reference

use crate::domain::chart::ChartType;
use crate::domain::error::Result;
use crate::infrastructure::render::RenderClient;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::sync::Arc;
use tracing::info;

/// Chart rendering use case
pub struct ChartRenderUseCase {
    client: Arc<dyn RenderClient + Send + Sync>,
}

impl ChartRenderUseCase {
    pub fn new(client: Arc<dyn RenderClient + Send + Sync>) -> Self {
        Self { client }
    }

    /// Send the raw CSV text to the rendering service and return the
    /// normalized image reference.
    pub async fn execute(&self, file_text: &str, chart_type: ChartType) -> Result<String> {
        let encoded = BASE64.encode(file_text);
        let image_url = self.client.render_chart(&encoded, chart_type).await?;

        info!(chart = %chart_type, "render service returned an image reference");

        Ok(normalize_image_url(&image_url))
    }
}

/// References returned by the service can carry Windows path separators;
/// the image loader only accepts forward slashes.
pub fn normalize_image_url(image_url: &str) -> String {
    image_url.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubRenderClient {
        image_url: String,
        captured: Mutex<Option<(String, ChartType)>>,
    }

    #[async_trait]
    impl RenderClient for StubRenderClient {
        async fn render_chart(&self, file_base64: &str, chart_type: ChartType) -> Result<String> {
            *self.captured.lock().unwrap() = Some((file_base64.to_string(), chart_type));
            Ok(self.image_url.clone())
        }
    }

    struct FailingRenderClient;

    #[async_trait]
    impl RenderClient for FailingRenderClient {
        async fn render_chart(&self, _file_base64: &str, _chart_type: ChartType) -> Result<String> {
            Err(AppError::RenderError("connection refused".to_string()))
        }
    }

    #[test]
    fn test_normalize_image_url() {
        assert_eq!(
            normalize_image_url("http://h/static\\img\\chart.png"),
            "http://h/static/img/chart.png"
        );
        assert_eq!(
            normalize_image_url("http://h/static/chart.png"),
            "http://h/static/chart.png"
        );
    }

    #[tokio::test]
    async fn test_execute_encodes_payload_and_normalizes_result() {
        let client = Arc::new(StubRenderClient {
            image_url: "http://h/static\\chart.png".to_string(),
            captured: Mutex::new(None),
        });
        let use_case = ChartRenderUseCase::new(client.clone());

        let image_url = use_case.execute("a,b\n1,2\n", ChartType::Area).await.unwrap();
        assert_eq!(image_url, "http://h/static/chart.png");

        let (encoded, chart_type) = client.captured.lock().unwrap().clone().unwrap();
        assert_eq!(encoded, BASE64.encode("a,b\n1,2\n"));
        assert_eq!(chart_type, ChartType::Area);
    }

    #[tokio::test]
    async fn test_execute_propagates_client_failure() {
        let use_case = ChartRenderUseCase::new(Arc::new(FailingRenderClient));
        let result = use_case.execute("a\n1\n", ChartType::Bar).await;
        assert!(matches!(result, Err(AppError::RenderError(_))));
    }
}

mod http_client;

use crate::domain::chart::ChartType;
use crate::domain::error::Result;
use async_trait::async_trait;

pub use http_client::HttpRenderClient;

/// Client for the external chart rendering service.
///
/// One request per screen instance; the caller treats every failure
/// uniformly, so implementations only need to describe what went wrong.
#[async_trait]
pub trait RenderClient {
    /// Submit a base64-encoded CSV payload and return the raw image
    /// reference from the service, un-normalized.
    async fn render_chart(&self, file_base64: &str, chart_type: ChartType) -> Result<String>;
}

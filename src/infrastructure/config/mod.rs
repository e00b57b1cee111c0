use crate::domain::error::{AppError, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use url::Url;

/// Connection settings for the chart rendering service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Base URL of the rendering service
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 120,
        }
    }
}

impl RenderConfig {
    /// Load configuration: built-in defaults, overridden by `statviz.toml`,
    /// overridden by `STATVIZ_*` environment variables.
    pub fn load() -> Result<Self> {
        let config: RenderConfig = Figment::from(Serialized::defaults(RenderConfig::default()))
            .merge(Toml::file("statviz.toml"))
            .merge(Env::prefixed("STATVIZ_"))
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url).map_err(|e| {
            AppError::ValidationError(format!(
                "Invalid render service URL {}: {}",
                self.base_url, e
            ))
        })?;

        if self.timeout_secs == 0 {
            return Err(AppError::ValidationError(
                "timeout_secs must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

use anyhow::{anyhow, Result};
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;

pub const MAX_TOP_N: usize = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // HTTP server
    pub http_host: String,
    pub http_port: u16,
    /// Comma-separated origins, or "*"
    pub cors_allowed_origins: String,

    // Recommendations
    pub default_top_n: usize,
    /// JSON catalog replacing the bundled reference catalog
    pub catalog_path: Option<String>,

    // Observability
    pub log_level: String,
    /// "text" or "json"
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::defaults()?
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }

    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("http_host", "0.0.0.0")?
            .set_default("http_port", 5001)?
            .set_default("cors_allowed_origins", "*")?
            .set_default("default_top_n", 15)?
            .set_default("log_level", "info")?
            .set_default("log_format", "text")
    }

    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow!("HTTP port must be greater than 0"));
        }

        if self.default_top_n == 0 || self.default_top_n > MAX_TOP_N {
            return Err(anyhow!("Default top N must be between 1 and {}", MAX_TOP_N));
        }

        if !matches!(self.log_format.as_str(), "text" | "json") {
            return Err(anyhow!("Log format must be 'text' or 'json', got '{}'", self.log_format));
        }

        Ok(())
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.http_host.clone(), self.http_port)
    }
}

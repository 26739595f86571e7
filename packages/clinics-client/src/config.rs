use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let base_url = env::var("CLINICS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        url::Url::parse(&base_url).context("CLINICS_API_URL must be a valid URL")?;

        // Trailing slash would double up when endpoint paths are appended
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

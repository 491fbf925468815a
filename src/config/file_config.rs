use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub port: Option<u16>,
    pub logging_level: Option<String>,
    pub content_cache_age_sec: Option<usize>,
    pub cache_dir: Option<String>,
    pub request_timeout_sec: Option<u64>,

    // Credentials
    pub data_service_url: Option<String>,
    pub data_service_key: Option<String>,
    pub youtube_api_key: Option<String>,

    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// Rows requested per data service call during a full fetch.
    pub fetch_page_size: Option<usize>,
    /// Page size used when a request does not name one.
    pub default_page_size: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

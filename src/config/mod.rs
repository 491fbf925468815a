mod file_config;

pub use file_config::{CatalogConfig, FileConfig};

use crate::pipeline::DEFAULT_PAGE_SIZE;
use crate::server::RequestsLoggingLevel;
use crate::song_store::FULL_FETCH_PAGE_SIZE;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub cache_dir: Option<PathBuf>,
    pub request_timeout_sec: u64,
    pub data_service_url: Option<String>,
    pub data_service_key: Option<String>,
    pub youtube_api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    /// Where the song summary snapshot is persisted, disabled when absent.
    pub cache_dir: Option<PathBuf>,
    pub request_timeout_sec: u64,

    pub data_service_url: Option<String>,
    pub data_service_key: Option<String>,
    pub youtube_api_key: Option<String>,

    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub fetch_page_size: usize,
    pub default_page_size: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            fetch_page_size: FULL_FETCH_PAGE_SIZE,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let content_cache_age_sec = file
            .content_cache_age_sec
            .unwrap_or(cli.content_cache_age_sec);

        let cache_dir = file
            .cache_dir
            .map(PathBuf::from)
            .or_else(|| cli.cache_dir.clone());
        if let Some(dir) = &cache_dir {
            if dir.exists() && !dir.is_dir() {
                bail!("cache_dir is not a directory: {:?}", dir);
            }
        }

        let request_timeout_sec = file
            .request_timeout_sec
            .unwrap_or(cli.request_timeout_sec);
        if request_timeout_sec == 0 {
            bail!("request_timeout_sec must be greater than 0");
        }

        let data_service_url = non_empty(file.data_service_url)
            .or_else(|| non_empty(cli.data_service_url.clone()));
        let data_service_key = non_empty(file.data_service_key)
            .or_else(|| non_empty(cli.data_service_key.clone()));
        let youtube_api_key = non_empty(file.youtube_api_key)
            .or_else(|| non_empty(cli.youtube_api_key.clone()));

        let catalog_file = file.catalog.unwrap_or_default();
        let defaults = CatalogSettings::default();
        let catalog = CatalogSettings {
            fetch_page_size: catalog_file
                .fetch_page_size
                .unwrap_or(defaults.fetch_page_size),
            default_page_size: catalog_file
                .default_page_size
                .unwrap_or(defaults.default_page_size),
        };
        if catalog.fetch_page_size == 0 {
            bail!("catalog.fetch_page_size must be greater than 0");
        }
        if catalog.default_page_size == 0 {
            bail!("catalog.default_page_size must be greater than 0");
        }

        Ok(Self {
            port,
            logging_level,
            content_cache_age_sec,
            cache_dir,
            request_timeout_sec,
            data_service_url,
            data_service_key,
            youtube_api_key,
            catalog,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

use super::RequestsLoggingLevel;
use crate::pipeline::DEFAULT_PAGE_SIZE;

#[derive(Clone)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    pub content_cache_age_sec: usize,
    /// Used when a catalog request does not name a page size.
    pub default_page_size: usize,
    /// Base URL of the storage serving bare cover paths.
    pub storage_base_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3001,
            content_cache_age_sec: 3600,
            default_page_size: DEFAULT_PAGE_SIZE,
            storage_base_url: None,
        }
    }
}

use async_trait::async_trait;
use thiserror::Error;

use super::VideoResult;

pub const MAX_VIDEO_RESULTS: usize = 3;

#[derive(Debug, Error)]
pub enum VideoSearchError {
    #[error("Video search is not configured")]
    NotConfigured,

    #[error("Video search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Video search failed with status {0}")]
    Status(u16),

    #[error("Invalid video search response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoQuery {
    pub song_title: String,
    pub category: Option<String>,
}

impl VideoQuery {
    pub fn new(song_title: &str, category: Option<&str>) -> Self {
        Self {
            song_title: song_title.trim().to_string(),
            category: category
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        }
    }

    /// Free text sent to the search backend, e.g. `"Lilly Future chart view"`.
    pub fn search_terms(&self) -> String {
        [
            Some(self.song_title.as_str()),
            self.category.as_deref(),
            Some("chart view"),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// A backend able to find chart videos for a song.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// At most [`MAX_VIDEO_RESULTS`] results, most relevant first.
    async fn search(&self, query: &VideoQuery) -> Result<Vec<VideoResult>, VideoSearchError>;
}

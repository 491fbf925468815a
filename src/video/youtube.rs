//! YouTube Data API v3 search backend.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use super::{VideoQuery, VideoResult, VideoSearch, VideoSearchError, MAX_VIDEO_RESULTS};

pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

// Value shipped in the sample environment file.
const PLACEHOLDER_API_KEY: &str = "your_youtube_api_key_here";

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    channel_title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Deserialize, Default)]
struct Thumbnails {
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Deserialize)]
struct Thumbnail {
    url: String,
}

pub struct YouTubeSearch {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl YouTubeSearch {
    /// A missing, empty or sample key leaves the backend unconfigured.
    pub fn new(api_key: Option<&str>, timeout_sec: u64) -> Result<Self, VideoSearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()?;
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
            .map(str::to_string);
        if api_key.is_none() {
            info!("YouTube API key not configured, video search will return placeholders");
        }
        Ok(Self {
            client,
            api_key,
            base_url: YOUTUBE_API_BASE.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

fn into_video_result(item: SearchItem) -> Option<VideoResult> {
    let video_id = item.id.video_id?;
    let thumbnail_url = item
        .snippet
        .thumbnails
        .medium
        .or(item.snippet.thumbnails.default)
        .map(|t| t.url)
        .unwrap_or_default();
    Some(VideoResult {
        video_url: VideoResult::watch_url(&video_id),
        id: video_id,
        title: item.snippet.title,
        channel_title: item.snippet.channel_title,
        thumbnail_url,
    })
}

#[async_trait]
impl VideoSearch for YouTubeSearch {
    async fn search(&self, query: &VideoQuery) -> Result<Vec<VideoResult>, VideoSearchError> {
        let api_key = self.api_key.as_deref().ok_or(VideoSearchError::NotConfigured)?;
        let terms = query.search_terms();

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("q", terms.as_str()),
                ("type", "video"),
                ("maxResults", "3"),
                ("key", api_key),
                ("order", "relevance"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(VideoSearchError::Status(status.as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| VideoSearchError::InvalidResponse(e.to_string()))?;
        let videos: Vec<VideoResult> = body
            .items
            .into_iter()
            .filter_map(into_video_result)
            .take(MAX_VIDEO_RESULTS)
            .collect();

        debug!("Found {} videos for \"{}\"", videos.len(), terms);
        Ok(videos)
    }
}

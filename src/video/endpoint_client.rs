//! Client for a running `/api/video-search` endpoint.

use async_trait::async_trait;
use std::time::Duration;

use super::{VideoQuery, VideoResult, VideoSearch, VideoSearchError, MAX_VIDEO_RESULTS};

pub struct VideoSearchEndpointClient {
    client: reqwest::Client,
    base_url: String,
}

impl VideoSearchEndpointClient {
    pub fn new(base_url: &str, timeout_sec: u64) -> Result<Self, VideoSearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint_url(&self) -> String {
        format!("{}/api/video-search", self.base_url)
    }
}

#[async_trait]
impl VideoSearch for VideoSearchEndpointClient {
    async fn search(&self, query: &VideoQuery) -> Result<Vec<VideoResult>, VideoSearchError> {
        let mut params = vec![("songTitle", query.song_title.as_str())];
        if let Some(category) = query.category.as_deref() {
            params.push(("songDifficulty", category));
        }

        let response = self
            .client
            .get(self.endpoint_url())
            .query(&params)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(VideoSearchError::Status(status.as_u16()));
        }

        let mut videos: Vec<VideoResult> = response
            .json()
            .await
            .map_err(|e| VideoSearchError::InvalidResponse(e.to_string()))?;
        videos.truncate(MAX_VIDEO_RESULTS);
        Ok(videos)
    }
}

//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per server endpoint. When API routes or
//! parameters change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    pub async fn get_home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Home request failed")
    }

    // ========================================================================
    // Catalog Endpoints
    // ========================================================================

    /// GET /v1/songs with the given query parameters
    pub async fn get_songs(&self, params: &[(&str, &str)]) -> Response {
        self.client
            .get(format!("{}/v1/songs", self.base_url))
            .query(params)
            .send()
            .await
            .expect("Songs request failed")
    }

    pub async fn get_song(&self, id: i64) -> Response {
        self.client
            .get(format!("{}/v1/songs/{}", self.base_url, id))
            .send()
            .await
            .expect("Song request failed")
    }

    pub async fn get_song_videos(&self, id: i64) -> Response {
        self.client
            .get(format!("{}/v1/songs/{}/videos", self.base_url, id))
            .send()
            .await
            .expect("Song videos request failed")
    }

    // ========================================================================
    // Video Search Endpoint
    // ========================================================================

    pub async fn video_search(&self, params: &[(&str, &str)]) -> Response {
        self.client
            .get(format!("{}/api/video-search", self.base_url))
            .header("Origin", "http://localhost:5173")
            .query(params)
            .send()
            .await
            .expect("Video search request failed")
    }

    /// Sends `method` to the video search endpoint with a browser origin.
    pub async fn video_search_with_method(&self, method: reqwest::Method) -> Response {
        self.client
            .request(method, format!("{}/api/video-search", self.base_url))
            .header("Origin", "http://localhost:5173")
            .query(&[("songTitle", "Lilly")])
            .send()
            .await
            .expect("Video search request failed")
    }
}

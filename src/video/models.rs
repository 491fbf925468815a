use serde::{Deserialize, Serialize};

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed";
const YOUTUBE_WATCH_BASE: &str = "https://www.youtube.com/watch?v=";

/// A candidate video as returned by the search endpoint.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoResult {
    pub id: String,
    pub title: String,
    pub channel_title: String,
    pub thumbnail_url: String,
    pub video_url: String,
}

impl VideoResult {
    pub fn watch_url(video_id: &str) -> String {
        format!("{}{}", YOUTUBE_WATCH_BASE, video_id)
    }

    /// Player URL for this video, autoplaying with related videos and
    /// branding reduced.
    pub fn embed_url(&self) -> String {
        format!(
            "{}/{}?autoplay=1&rel=0&modestbranding=1&enablejsapi=1",
            YOUTUBE_EMBED_BASE,
            urlencoding::encode(&self.id)
        )
    }
}

//! PostgREST client for the hosted `songs` table.

use async_trait::async_trait;
use reqwest::header::CONTENT_RANGE;
use std::time::Duration;
use tracing::debug;

use super::{SongOrder, SongPage, SongPageRequest, SongSource, SongStoreError};
use crate::catalog::Song;

const SONGS_TABLE: &str = "songs";
const SONG_COLUMNS: &str = "id,imageUrl,title,artist,difficulty,constant,level,version";

// Values shipped in the sample environment file, never valid credentials.
const PLACEHOLDER_URL: &str = "https://your-project.supabase.co";
const PLACEHOLDER_KEY: &str = "your-anon-key";

pub struct SupabaseSongSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseSongSource {
    /// Create a new client for the data service at `base_url`.
    pub fn new(base_url: &str, api_key: &str, timeout_sec: u64) -> Result<Self, SongStoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Like [`SupabaseSongSource::new`], but fails with `NotConfigured` when
    /// either credential is missing or still set to the sample value.
    pub fn from_credentials(
        base_url: Option<&str>,
        api_key: Option<&str>,
        timeout_sec: u64,
    ) -> Result<Self, SongStoreError> {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty() && *url != PLACEHOLDER_URL)
            .ok_or_else(|| SongStoreError::NotConfigured("missing data service URL".into()))?;
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_KEY)
            .ok_or_else(|| SongStoreError::NotConfigured("missing data service key".into()))?;
        Self::new(base_url, api_key, timeout_sec)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn songs_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, SONGS_TABLE)
    }
}

fn order_param(order: SongOrder) -> &'static str {
    match order {
        SongOrder::ConstantDesc => "constant.desc,id.asc",
        SongOrder::TitleAsc => "title.asc,id.asc",
    }
}

/// Extracts the total from a `Content-Range` value such as `0-24/2500`.
pub(crate) fn parse_content_range_total(value: &str) -> Option<usize> {
    let (_, total) = value.split_once('/')?;
    total.trim().parse().ok()
}

#[async_trait]
impl SongSource for SupabaseSongSource {
    async fn fetch_range(&self, request: &SongPageRequest) -> Result<SongPage, SongStoreError> {
        debug!(
            "Fetching songs [{}, {}) from {}",
            request.offset,
            request.offset + request.limit,
            self.base_url
        );

        let mut builder = self
            .client
            .get(self.songs_url())
            .query(&[
                ("select", SONG_COLUMNS.to_string()),
                ("order", order_param(request.order).to_string()),
                ("offset", request.offset.to_string()),
                ("limit", request.limit.to_string()),
            ])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key);
        if request.with_count {
            builder = builder.header("Prefer", "count=exact");
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SongStoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let total_count = if request.with_count {
            let header = response
                .headers()
                .get(CONTENT_RANGE)
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| {
                    SongStoreError::InvalidResponse("missing Content-Range header".into())
                })?;
            Some(parse_content_range_total(header).ok_or_else(|| {
                SongStoreError::InvalidResponse(format!("unparseable Content-Range {}", header))
            })?)
        } else {
            None
        };

        let songs: Vec<Song> = response.json().await?;
        Ok(SongPage { songs, total_count })
    }
}

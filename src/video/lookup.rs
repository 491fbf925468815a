use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use super::{placeholder_videos, VideoQuery, VideoResult, VideoSearch, MAX_VIDEO_RESULTS};
use crate::cache::{Clock, ExpiringCache, SystemClock};

/// Finds chart videos for a song, never failing.
///
/// The first result set produced for a title, real or placeholder, is kept
/// for the lifetime of the lookup and served for every later request with the
/// same title.
pub struct ChartVideoLookup {
    search: Arc<dyn VideoSearch>,
    cache: Mutex<ExpiringCache<String, Vec<VideoResult>>>,
}

impl ChartVideoLookup {
    pub fn new(search: Arc<dyn VideoSearch>) -> Self {
        Self::with_clock(search, Arc::new(SystemClock))
    }

    pub fn with_clock(search: Arc<dyn VideoSearch>, clock: Arc<dyn Clock>) -> Self {
        Self {
            search,
            cache: Mutex::new(ExpiringCache::session(clock)),
        }
    }

    pub fn cached(&self, title: &str) -> Option<Vec<VideoResult>> {
        self.cache.lock().unwrap().get(title)
    }

    pub fn cached_titles(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    pub async fn find_chart_videos(&self, title: &str, category: Option<&str>) -> Vec<VideoResult> {
        if let Some(videos) = self.cached(title) {
            debug!("Video cache hit for \"{}\"", title);
            return videos;
        }

        let query = VideoQuery::new(title, category);
        let mut videos = match self.search.search(&query).await {
            Ok(videos) => videos,
            Err(err) => {
                warn!("Video search for \"{}\" failed: {}", title, err);
                placeholder_videos(title)
            }
        };
        videos.truncate(MAX_VIDEO_RESULTS);

        // A concurrent lookup for the same title may have finished first.
        let mut cache = self.cache.lock().unwrap();
        match cache.get(title) {
            Some(existing) => existing,
            None => {
                cache.put(title.to_string(), videos.clone());
                videos
            }
        }
    }
}

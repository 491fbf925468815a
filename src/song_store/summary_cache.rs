use chrono::{DateTime, Duration};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::cache::{is_fresh, Clock, KeyValueStorage};
use crate::catalog::Song;

pub const SUMMARY_CACHE_KEY: &str = "arcaea_songs_summary";
pub const SUMMARY_CACHE_TTL_HOURS: i64 = 24;

#[derive(Deserialize)]
struct CachedSummaries {
    data: Vec<Song>,
    /// Capture time, milliseconds since the Unix epoch.
    timestamp: i64,
}

#[derive(Serialize)]
struct CachedSummariesRef<'a> {
    data: &'a [Song],
    timestamp: i64,
}

/// Snapshot of the last full song fetch, valid for a day.
///
/// Unreadable or expired entries behave as a miss, never as an error.
pub struct SummaryCache {
    storage: Arc<dyn KeyValueStorage>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl SummaryCache {
    pub fn new(storage: Arc<dyn KeyValueStorage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            ttl: Duration::hours(SUMMARY_CACHE_TTL_HOURS),
        }
    }

    pub fn load(&self) -> Option<Vec<Song>> {
        let raw = match self.storage.get_item(SUMMARY_CACHE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!("Failed to read summary cache: {}", err);
                return None;
            }
        };

        let cached: CachedSummaries = match serde_json::from_str(&raw) {
            Ok(cached) => cached,
            Err(err) => {
                debug!("Ignoring unreadable summary cache: {}", err);
                return None;
            }
        };

        let captured_at = DateTime::from_timestamp_millis(cached.timestamp)?;
        if !is_fresh(captured_at, self.clock.now(), self.ttl) {
            info!("Summary cache captured at {} expired, evicting", captured_at);
            self.evict();
            return None;
        }

        Some(cached.data)
    }

    pub fn save(&self, songs: &[Song]) {
        let cached = CachedSummariesRef {
            data: songs,
            timestamp: self.clock.now().timestamp_millis(),
        };
        let result = serde_json::to_string(&cached)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.storage.set_item(SUMMARY_CACHE_KEY, &json));
        match result {
            Ok(()) => debug!("Saved {} songs to summary cache", songs.len()),
            Err(err) => error!("Failed to save summary cache: {}", err),
        }
    }

    pub fn evict(&self) {
        if let Err(err) = self.storage.remove_item(SUMMARY_CACHE_KEY) {
            warn!("Failed to evict summary cache: {}", err);
        }
    }
}

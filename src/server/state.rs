use axum::extract::FromRef;
use serde::Serialize;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use crate::pipeline::CatalogView;
use crate::video::{ChartVideoLookup, VideoSearch};

use super::ServerConfig;

pub const LOADING_MESSAGE: &str = "Loading songs...";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load songs. Please try again later.";
pub const NO_MATCHES_MESSAGE: &str = "No songs match your search.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogPhase {
    Loading,
    Loaded,
    Failed,
}

/// Where the in-memory catalog stands. Starts as `Loading`.
#[derive(Debug, Clone, Default)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Loaded(Arc<CatalogView>),
    /// Carries the underlying error, the user-facing text is fixed.
    Failed(String),
}

impl CatalogStatus {
    pub fn phase(&self) -> CatalogPhase {
        match self {
            CatalogStatus::Loading => CatalogPhase::Loading,
            CatalogStatus::Loaded(_) => CatalogPhase::Loaded,
            CatalogStatus::Failed(_) => CatalogPhase::Failed,
        }
    }

    pub fn song_count(&self) -> usize {
        match self {
            CatalogStatus::Loaded(view) => view.len(),
            _ => 0,
        }
    }

    pub fn view(&self) -> Option<Arc<CatalogView>> {
        match self {
            CatalogStatus::Loaded(view) => Some(view.clone()),
            _ => None,
        }
    }
}

pub type GuardedCatalog = Arc<RwLock<CatalogStatus>>;
pub type GuardedVideoLookup = Arc<ChartVideoLookup>;
pub type GuardedVideoSearch = Arc<dyn VideoSearch>;

pub fn new_guarded_catalog() -> GuardedCatalog {
    Arc::new(RwLock::new(CatalogStatus::Loading))
}

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog: GuardedCatalog,
    pub video_lookup: GuardedVideoLookup,
    pub video_search: GuardedVideoSearch,
}

impl ServerState {
    pub fn new(
        config: ServerConfig,
        catalog: GuardedCatalog,
        video_search: GuardedVideoSearch,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            catalog,
            video_lookup: Arc::new(ChartVideoLookup::new(video_search.clone())),
            video_search,
        }
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}

impl FromRef<ServerState> for GuardedCatalog {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog.clone()
    }
}

impl FromRef<ServerState> for GuardedVideoLookup {
    fn from_ref(input: &ServerState) -> Self {
        input.video_lookup.clone()
    }
}

impl FromRef<ServerState> for GuardedVideoSearch {
    fn from_ref(input: &ServerState) -> Self {
        input.video_search.clone()
    }
}

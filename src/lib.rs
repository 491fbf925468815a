//! Chart Catalog Server Library
//!
//! Loads a rhythm-game chart catalog from a hosted data service, serves it
//! filtered, sorted and paginated, and looks up chart-view videos.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod pipeline;
pub mod playback;
pub mod server;
pub mod song_store;
pub mod video;

// Re-export commonly used types for convenience
pub use catalog::{Difficulty, Song};
pub use pipeline::{CatalogBrowser, CatalogView, FilterCriteria};
pub use server::{run_server, RequestsLoggingLevel};
pub use song_store::{SongStoreAccessor, SupabaseSongSource};
pub use video::{ChartVideoLookup, VideoResult};

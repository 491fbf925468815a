//! Chart-video lookup: search backends, placeholder fallback and the
//! per-title session cache.

mod endpoint_client;
mod lookup;
mod models;
mod placeholder;
mod preview;
mod search;
mod youtube;

pub use endpoint_client::VideoSearchEndpointClient;
pub use lookup::ChartVideoLookup;
pub use models::VideoResult;
pub use placeholder::{placeholder_videos, PLACEHOLDER_THUMBNAIL_URL, PLACEHOLDER_VIDEO_URL};
pub use preview::{PreviewSelector, PreviewTicket};
pub use search::{VideoQuery, VideoSearch, VideoSearchError, MAX_VIDEO_RESULTS};
pub use youtube::{YouTubeSearch, YOUTUBE_API_BASE};

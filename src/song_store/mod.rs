//! Read access to the hosted song collection.
//!
//! The data service only serves bounded pages, so the accessor walks the
//! collection page by page. A snapshot of the last full fetch can be kept in
//! local storage for a day to make startup instant.

mod accessor;
mod error;
mod image_url;
mod summary_cache;
mod supabase;
mod trait_def;

pub use accessor::{SongStoreAccessor, FULL_FETCH_PAGE_SIZE};
pub use error::SongStoreError;
pub use image_url::{resolve_image_url, CORS_PROXY_PREFIX, STORAGE_BUCKET};
pub use summary_cache::{SummaryCache, SUMMARY_CACHE_KEY, SUMMARY_CACHE_TTL_HOURS};
pub use supabase::SupabaseSongSource;
pub use trait_def::{SongOrder, SongPage, SongPageRequest, SongSource};

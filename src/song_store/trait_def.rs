//! SongSource trait definition.

use super::SongStoreError;
use crate::catalog::Song;
use async_trait::async_trait;

/// Ordering applied by the data service.
///
/// Both orders end with the id, so pages concatenate into one total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SongOrder {
    #[default]
    ConstantDesc,
    TitleAsc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongPageRequest {
    pub offset: usize,
    pub limit: usize,
    pub order: SongOrder,
    /// Ask the service for the total number of rows as well.
    pub with_count: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SongPage {
    pub songs: Vec<Song>,
    pub total_count: Option<usize>,
}

/// A read-only, range-addressable songs collection.
#[async_trait]
pub trait SongSource: Send + Sync {
    async fn fetch_range(&self, request: &SongPageRequest) -> Result<SongPage, SongStoreError>;
}

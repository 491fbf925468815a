use std::sync::Arc;
use tracing::{debug, info};

use super::{SongOrder, SongPageRequest, SongSource, SongStoreError};
use crate::catalog::Song;

/// Rows requested per page when walking the whole collection.
pub const FULL_FETCH_PAGE_SIZE: usize = 1000;

pub struct SongStoreAccessor {
    source: Arc<dyn SongSource>,
    page_size: usize,
    order: SongOrder,
}

impl SongStoreAccessor {
    pub fn new(source: Arc<dyn SongSource>) -> Self {
        Self {
            source,
            page_size: FULL_FETCH_PAGE_SIZE,
            order: SongOrder::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_order(mut self, order: SongOrder) -> Self {
        self.order = order;
        self
    }

    /// Fetch the whole collection by concatenating fixed-size pages.
    ///
    /// Stops at the first page shorter than the page size. Any failing page
    /// fails the whole fetch, no partial list is returned.
    pub async fn fetch_all_songs(&self) -> Result<Vec<Song>, SongStoreError> {
        let mut all_songs = Vec::new();
        let mut offset = 0;

        loop {
            let request = SongPageRequest {
                offset,
                limit: self.page_size,
                order: self.order,
                with_count: false,
            };
            let page = self.source.fetch_range(&request).await?;
            let received = page.songs.len();
            debug!("Received {} songs at offset {}", received, offset);
            all_songs.extend(page.songs);

            if received < self.page_size {
                break;
            }
            offset += self.page_size;
        }

        info!("Fetched {} songs", all_songs.len());
        Ok(all_songs)
    }

    /// Fetch a single 1-based page together with the collection's total count.
    pub async fn fetch_songs_page(
        &self,
        page_number: usize,
        page_size: usize,
    ) -> Result<(Vec<Song>, usize), SongStoreError> {
        let offset = page_number.saturating_sub(1) * page_size;
        let request = SongPageRequest {
            offset,
            limit: page_size,
            order: self.order,
            with_count: true,
        };
        let page = self.source.fetch_range(&request).await?;
        Ok((page.songs, page.total_count.unwrap_or(0)))
    }
}

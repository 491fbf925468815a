use serde::Serialize;
use std::cmp::Ordering;

use super::{FilterCriteria, SortDirection, SortKey};
use crate::catalog::Song;

/// A song plus the lowercase keys the pipeline needs, computed once per load.
#[derive(Debug, Clone)]
pub struct IndexedSong {
    pub song: Song,
    search_text: String,
    title_key: String,
    artist_key: String,
}

impl IndexedSong {
    pub fn new(song: Song) -> Self {
        Self {
            search_text: song.search_text(),
            title_key: song.title.to_lowercase(),
            artist_key: song.artist.to_lowercase(),
            song,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    fn compare(&self, other: &Self, key: SortKey) -> Ordering {
        match key {
            SortKey::Title => self.title_key.cmp(&other.title_key),
            SortKey::Artist => self.artist_key.cmp(&other.artist_key),
            SortKey::Constant => self.song.constant.total_cmp(&other.song.constant),
        }
    }
}

/// Keeps the songs that match the query, the constant range and the category set.
pub fn filter_songs<'a, I>(songs: I, criteria: &FilterCriteria) -> Vec<&'a IndexedSong>
where
    I: IntoIterator<Item = &'a IndexedSong>,
{
    let query = criteria.query.to_lowercase();
    songs
        .into_iter()
        .filter(|s| query.is_empty() || s.search_text.contains(&query))
        .filter(|s| criteria.range.contains(s.song.constant))
        .filter(|s| criteria.matches_category(s.song.difficulty))
        .collect()
}

/// Stable: songs with equal keys keep their relative order.
pub fn sort_songs(songs: &mut [&IndexedSong], key: SortKey, direction: SortDirection) {
    songs.sort_by(|a, b| {
        let ordering = a.compare(b, key);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Items of the 1-based `page`; out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// "Showing 26 to 50 of 120 songs"
pub fn results_summary(page: usize, page_size: usize, total: usize) -> String {
    let from = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .saturating_add(1)
        .min(total);
    let to = page.saturating_mul(page_size).min(total);
    format!("Showing {} to {} of {} songs", from, to, total)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
    pub songs: Vec<Song>,
    pub total_matching: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl CatalogPage {
    pub fn summary(&self) -> String {
        results_summary(self.page, self.page_size, self.total_matching)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// The loaded song list, indexed for repeated querying.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    songs: Vec<IndexedSong>,
}

impl CatalogView {
    pub fn new(songs: Vec<Song>) -> Self {
        Self {
            songs: songs.into_iter().map(IndexedSong::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter().map(|s| &s.song)
    }

    pub fn get_song(&self, id: i64) -> Option<&Song> {
        self.songs().find(|s| s.id == id)
    }

    /// Filtered and sorted, not paginated.
    pub fn matching(&self, criteria: &FilterCriteria) -> Vec<&IndexedSong> {
        let mut matching = filter_songs(&self.songs, criteria);
        sort_songs(&mut matching, criteria.sort_key, criteria.sort_direction);
        matching
    }

    pub fn query(&self, criteria: &FilterCriteria) -> CatalogPage {
        let matching = self.matching(criteria);
        let page = criteria.page.max(1);
        CatalogPage {
            songs: paginate(&matching, page, criteria.page_size)
                .iter()
                .map(|s| s.song.clone())
                .collect(),
            total_matching: matching.len(),
            total_pages: total_pages(matching.len(), criteria.page_size),
            page,
            page_size: criteria.page_size,
        }
    }
}

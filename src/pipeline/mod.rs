//! Filter, sort and paginate the in-memory catalog.
//!
//! Everything in `view` is a pure function of the loaded songs and the
//! current criteria. `browser` keeps the criteria for one viewer and applies
//! the page-reset rules, `scheduler` decides when a recomputation runs.

mod browser;
mod criteria;
mod scheduler;
mod view;

pub use browser::CatalogBrowser;
pub use criteria::{
    ConstantRange, FilterCriteria, SortDirection, SortKey, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
pub use scheduler::{Debouncer, RecomputePolicy, DEFAULT_DEBOUNCE};
pub use view::{
    filter_songs, paginate, results_summary, sort_songs, total_pages, CatalogPage, CatalogView,
    IndexedSong,
};

use anyhow::{bail, Result};

use super::{CatalogPage, CatalogView, ConstantRange, FilterCriteria, SortDirection, SortKey};
use crate::catalog::Difficulty;

/// Holds one viewer's criteria.
///
/// Every setter that actually changes a filter, the sort or the page size
/// sends the viewer back to the first page. Setting a value equal to the
/// current one is a no-op.
#[derive(Debug, Clone, Default)]
pub struct CatalogBrowser {
    criteria: FilterCriteria,
}

impl CatalogBrowser {
    pub fn new(criteria: FilterCriteria) -> Self {
        let mut criteria = criteria;
        criteria.page = criteria.page.max(1);
        Self { criteria }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn current_page(&self) -> usize {
        self.criteria.page
    }

    fn changed(&mut self, changed: bool) -> bool {
        if changed {
            self.criteria.page = 1;
        }
        changed
    }

    pub fn set_query(&mut self, query: &str) -> bool {
        let changed = self.criteria.query != query;
        if changed {
            self.criteria.query = query.to_string();
        }
        self.changed(changed)
    }

    pub fn set_range(&mut self, min: f64, max: f64) -> bool {
        let range = ConstantRange::new(min, max);
        let changed = self.criteria.range != range;
        self.criteria.range = range;
        self.changed(changed)
    }

    /// Adds the category if absent, removes it otherwise.
    pub fn toggle_category(&mut self, difficulty: Difficulty) -> bool {
        if !self.criteria.categories.remove(&difficulty) {
            self.criteria.categories.insert(difficulty);
        }
        self.changed(true)
    }

    pub fn set_categories<I>(&mut self, categories: I) -> bool
    where
        I: IntoIterator<Item = Difficulty>,
    {
        let categories = categories.into_iter().collect();
        let changed = self.criteria.categories != categories;
        self.criteria.categories = categories;
        self.changed(changed)
    }

    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) -> bool {
        let changed = self.criteria.sort_key != key || self.criteria.sort_direction != direction;
        self.criteria.sort_key = key;
        self.criteria.sort_direction = direction;
        self.changed(changed)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<bool> {
        if page_size == 0 {
            bail!("Page size must be at least 1");
        }
        let changed = self.criteria.page_size != page_size;
        self.criteria.page_size = page_size;
        Ok(self.changed(changed))
    }

    /// Clamped to `[1, total_pages]`, page 1 when there are no pages.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.criteria.page = page.clamp(1, total_pages.max(1));
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.go_to_page(self.criteria.page + 1, total_pages);
    }

    pub fn previous_page(&mut self) {
        self.criteria.page = self.criteria.page.saturating_sub(1).max(1);
    }

    pub fn page(&self, view: &CatalogView) -> CatalogPage {
        view.query(&self.criteria)
    }
}

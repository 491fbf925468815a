use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::Difficulty;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [1, 10, 25, 50];
pub const DEFAULT_PAGE_SIZE: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Title,
    Artist,
    #[default]
    Constant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    #[value(name = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    #[value(name = "desc")]
    Descending,
}

/// Closed interval over the difficulty constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantRange {
    pub min: f64,
    pub max: f64,
}

impl ConstantRange {
    /// Bounds given in the wrong order are swapped.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn contains(&self, constant: f64) -> bool {
        constant >= self.min && constant <= self.max
    }
}

impl Default for ConstantRange {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub query: String,
    pub range: ConstantRange,
    /// Empty means every category.
    pub categories: BTreeSet<Difficulty>,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            range: ConstantRange::default(),
            categories: BTreeSet::new(),
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterCriteria {
    pub fn matches_category(&self, difficulty: Difficulty) -> bool {
        self.categories.is_empty() || self.categories.contains(&difficulty)
    }
}

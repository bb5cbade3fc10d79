//! Author Results

use std::collections::BTreeMap;

use crate::domain::entities::Author;
use crate::domain::value_objects::ProductivityLevel;

/// Everything the classifier says about one author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorClassification {
    pub author: Author,
    pub level: ProductivityLevel,
    pub is_prolific: bool,
    pub can_receive_award: bool,
}

/// Snapshot of the whole author store
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductivityStatistics {
    /// Author count per level; every level is present, possibly with zero
    pub by_level: BTreeMap<ProductivityLevel, usize>,
    pub prolific_authors: Vec<Author>,
    pub total_authors: usize,
}

impl ProductivityStatistics {
    pub fn count(&self, level: ProductivityLevel) -> usize {
        self.by_level.get(&level).copied().unwrap_or(0)
    }

    /// Share of prolific authors in percent, 0.0 for an empty store
    pub fn prolific_percentage(&self) -> f64 {
        if self.total_authors == 0 {
            return 0.0;
        }
        self.count(ProductivityLevel::Prolific) as f64 * 100.0 / self.total_authors as f64
    }
}

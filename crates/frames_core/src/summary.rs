use std::fmt;

use crate::{Catalog, CatalogEntry, EntryStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCoverage {
    pub category: String,
    pub total: usize,
    pub saved: usize,
    pub skipped_existing: usize,
    pub failed: usize,
}

impl CategoryCoverage {
    pub fn satisfied(&self) -> usize {
        self.saved + self.skipped_existing
    }
}

/// Coverage per category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    categories: Vec<CategoryCoverage>,
}

impl RunSummary {
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let categories = catalog
            .categories()
            .into_iter()
            .map(|category| CategoryCoverage {
                category: category.to_string(),
                total: catalog
                    .entries()
                    .iter()
                    .filter(|e| e.category == category)
                    .count(),
                saved: 0,
                skipped_existing: 0,
                failed: 0,
            })
            .collect();
        Self { categories }
    }

    pub fn record(&mut self, entry: &CatalogEntry, status: EntryStatus) {
        let Some(coverage) = self
            .categories
            .iter_mut()
            .find(|c| c.category == entry.category)
        else {
            return;
        };
        match status {
            EntryStatus::Saved => coverage.saved += 1,
            EntryStatus::SkippedExisting => coverage.skipped_existing += 1,
            EntryStatus::Failed => coverage.failed += 1,
        }
    }

    pub fn categories(&self) -> &[CategoryCoverage] {
        &self.categories
    }

    pub fn satisfied(&self) -> usize {
        self.categories.iter().map(CategoryCoverage::satisfied).sum()
    }

    pub fn saved(&self) -> usize {
        self.categories.iter().map(|c| c.saved).sum()
    }

    pub fn failed(&self) -> usize {
        self.categories.iter().map(|c| c.failed).sum()
    }

    pub fn total(&self) -> usize {
        self.categories.iter().map(|c| c.total).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.satisfied() == self.total()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for coverage in &self.categories {
            writeln!(
                f,
                "{}: {}/{} images",
                capitalize(&coverage.category),
                coverage.satisfied(),
                coverage.total
            )?;
        }
        write!(f, "Total: {}/{} images", self.satisfied(), self.total())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::builtin::BUILTIN_CATALOG;

/// One (category, subcategory) pair with its ordered search phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub category: String,
    pub subcategory: String,
    pub queries: Vec<String>,
}

impl CatalogEntry {
    pub fn file_name(&self) -> String {
        format!("{}.jpg", self.subcategory)
    }

    /// Deterministic artifact location: `{root}/{category}/{subcategory}.jpg`.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.category).join(self.file_name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no entries")]
    Empty,
    #[error("empty category or style name")]
    EmptyName,
    #[error("name {0:?} is not usable as a path component")]
    UnsafeName(String),
    #[error("duplicate entry {category}/{subcategory}")]
    DuplicateEntry {
        category: String,
        subcategory: String,
    },
    #[error("entry {category}/{subcategory} has no queries")]
    NoQueries {
        category: String,
        subcategory: String,
    },
    #[error("entry {category}/{subcategory} has a blank query")]
    BlankQuery {
        category: String,
        subcategory: String,
    },
}

/// Serialized catalog layout, as read from a RON override file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSpec {
    pub categories: Vec<CategorySpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategorySpec {
    pub name: String,
    pub styles: Vec<StyleSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StyleSpec {
    pub name: String,
    pub queries: Vec<String>,
}

/// Immutable, validated catalog. Iteration order is declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn builtin() -> Self {
        let entries = BUILTIN_CATALOG
            .iter()
            .flat_map(|(category, styles)| {
                styles.iter().map(move |(style, queries)| CatalogEntry {
                    category: (*category).to_string(),
                    subcategory: (*style).to_string(),
                    queries: queries.iter().map(|q| (*q).to_string()).collect(),
                })
            })
            .collect();
        Self { entries }
    }

    pub fn from_spec(spec: CatalogSpec) -> Result<Self, CatalogError> {
        let entries = spec
            .categories
            .into_iter()
            .flat_map(|category| {
                let name = category.name;
                category.styles.into_iter().map(move |style| CatalogEntry {
                    category: name.clone(),
                    subcategory: style.name,
                    queries: style.queries,
                })
            })
            .collect();
        Self::from_entries(entries)
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for entry in &entries {
            check_name(&entry.category)?;
            check_name(&entry.subcategory)?;
            if entry.queries.is_empty() {
                return Err(CatalogError::NoQueries {
                    category: entry.category.clone(),
                    subcategory: entry.subcategory.clone(),
                });
            }
            if entry.queries.iter().any(|q| q.trim().is_empty()) {
                return Err(CatalogError::BlankQuery {
                    category: entry.category.clone(),
                    subcategory: entry.subcategory.clone(),
                });
            }
            if !seen.insert((entry.category.as_str(), entry.subcategory.as_str())) {
                return Err(CatalogError::DuplicateEntry {
                    category: entry.category.clone(),
                    subcategory: entry.subcategory.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !out.contains(&entry.category.as_str()) {
                out.push(&entry.category);
            }
        }
        out
    }
}

fn check_name(name: &str) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::EmptyName);
    }
    let unsafe_name = name == "."
        || name == ".."
        || name.chars().any(|c| matches!(c, '/' | '\\' | ':' | '\0'));
    if unsafe_name {
        return Err(CatalogError::UnsafeName(name.to_string()));
    }
    Ok(())
}

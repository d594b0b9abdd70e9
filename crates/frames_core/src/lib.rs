//! Frames core: catalog, suitability filter and per-run bookkeeping. No IO.
mod builtin;
mod catalog;
mod filter;
mod outcome;
mod record;
mod run_state;
mod select;
mod summary;

pub use catalog::{Catalog, CatalogEntry, CatalogError, CatalogSpec, CategorySpec, StyleSpec};
pub use filter::{FilterRules, Suitability};
pub use outcome::{EntryStatus, Stage};
pub use record::{ImageMeta, SearchResult};
pub use run_state::RunState;
pub use select::{pick_candidate, Selection, SelectionPass};
pub use summary::{CategoryCoverage, RunSummary};

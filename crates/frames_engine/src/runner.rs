use std::path::{Path, PathBuf};
use std::time::Duration;

use frames_core::{
    Catalog, CatalogEntry, EntryStatus, FilterRules, RunState, RunSummary, SelectionPass, Stage,
};
use frames_logging::{frames_info, frames_warn};
use thiserror::Error;

use crate::{
    ensure_output_dir, fetch_candidate, find_best_image, normalize_image, AtomicFileWriter,
    EntryProgress, FetchError, Fetcher, ImageSearch, LogProgressSink, NormalizeError,
    NormalizeSettings, PersistError, ProgressSink, RunEvent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    /// Pause after each entry that went to the network.
    pub entry_delay: Duration,
    /// Pause after a strict-pass query that yielded no candidate.
    pub query_delay: Duration,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            entry_delay: Duration::from_secs(2),
            query_delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Error)]
pub enum EntryFailure {
    #[error("no image available")]
    NoCandidate,
    #[error("download rejected: {0}")]
    Fetch(#[from] FetchError),
    #[error("{0}")]
    Normalize(#[from] NormalizeError),
    #[error("could not write artifact: {0}")]
    Persist(#[from] PersistError),
}

#[derive(Debug)]
pub enum EntryOutcome {
    SkippedExisting,
    Saved {
        url: String,
        hash: String,
        pass: SelectionPass,
    },
    Failed(EntryFailure),
}

impl EntryOutcome {
    pub fn status(&self) -> EntryStatus {
        match self {
            EntryOutcome::SkippedExisting => EntryStatus::SkippedExisting,
            EntryOutcome::Saved { .. } => EntryStatus::Saved,
            EntryOutcome::Failed(_) => EntryStatus::Failed,
        }
    }
}

#[derive(Debug)]
pub struct EntryReport {
    pub category: String,
    pub subcategory: String,
    pub path: PathBuf,
    pub outcome: EntryOutcome,
}

#[derive(Debug)]
pub struct RunReport {
    pub entries: Vec<EntryReport>,
    pub summary: RunSummary,
}

/// Drives the catalog through search, fetch, normalize and save, one entry at a time.
pub struct Harvester {
    search: Box<dyn ImageSearch>,
    fetcher: Box<dyn Fetcher>,
    rules: FilterRules,
    normalize: NormalizeSettings,
    settings: RunSettings,
    sink: Box<dyn ProgressSink>,
}

impl Harvester {
    pub fn new(search: Box<dyn ImageSearch>, fetcher: Box<dyn Fetcher>) -> Self {
        Self {
            search,
            fetcher,
            rules: FilterRules::default(),
            normalize: NormalizeSettings::default(),
            settings: RunSettings::default(),
            sink: Box::new(LogProgressSink),
        }
    }

    pub fn with_rules(mut self, rules: FilterRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_normalize_settings(mut self, normalize: NormalizeSettings) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_run_settings(mut self, settings: RunSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Creates one directory per category under `root`. Returns the directories created.
    pub fn prepare_output_dirs(
        &self,
        catalog: &Catalog,
        root: &Path,
    ) -> Result<Vec<PathBuf>, PersistError> {
        let mut created = Vec::new();
        for category in catalog.categories() {
            let dir = root.join(category);
            if ensure_output_dir(&dir)? {
                frames_info!("Created directory: {}", dir.display());
                created.push(dir);
            }
        }
        Ok(created)
    }

    pub async fn run(&self, catalog: &Catalog, root: &Path, state: &mut RunState) -> RunReport {
        let total = catalog.len();
        let mut summary = RunSummary::for_catalog(catalog);
        let mut entries = Vec::with_capacity(total);

        frames_info!("Starting download of {} images into {}", total, root.display());
        for (position, entry) in catalog.entries().iter().enumerate() {
            let index = position + 1;
            let report = self.process_entry(index, total, entry, root, state).await;
            summary.record(entry, report.outcome.status());

            let went_to_network = !matches!(report.outcome, EntryOutcome::SkippedExisting);
            entries.push(report);
            if went_to_network && index < total && !self.settings.entry_delay.is_zero() {
                tokio::time::sleep(self.settings.entry_delay).await;
            }
        }

        RunReport { entries, summary }
    }

    pub async fn process_entry(
        &self,
        index: usize,
        total: usize,
        entry: &CatalogEntry,
        root: &Path,
        state: &mut RunState,
    ) -> EntryReport {
        let path = entry.output_path(root);
        self.emit(index, total, entry, Stage::Pending);

        let outcome = if path.exists() {
            EntryOutcome::SkippedExisting
        } else {
            match self.acquire(index, total, entry, root, state).await {
                Ok(outcome) => outcome,
                Err(failure) => {
                    log_failure(entry, &failure);
                    EntryOutcome::Failed(failure)
                }
            }
        };
        self.emit(index, total, entry, outcome.status().stage());

        EntryReport {
            category: entry.category.clone(),
            subcategory: entry.subcategory.clone(),
            path,
            outcome,
        }
    }

    async fn acquire(
        &self,
        index: usize,
        total: usize,
        entry: &CatalogEntry,
        root: &Path,
        state: &mut RunState,
    ) -> Result<EntryOutcome, EntryFailure> {
        let on_stage = |stage: Stage| self.emit(index, total, entry, stage);
        let selection = find_best_image(
            self.search.as_ref(),
            &self.rules,
            entry,
            state,
            self.settings.query_delay,
            &on_stage,
        )
        .await
        .ok_or(EntryFailure::NoCandidate)?;

        frames_info!("Selected {} (query {:?})", selection.url, selection.query);

        self.emit(index, total, entry, Stage::Fetching);
        let fetched = fetch_candidate(self.fetcher.as_ref(), &selection.url, state).await?;

        self.emit(index, total, entry, Stage::Normalizing);
        let normalized = normalize_image(&fetched.output.bytes, &self.normalize)?;

        let writer = AtomicFileWriter::new(root.join(&entry.category));
        writer.write_new(&entry.file_name(), &normalized.jpeg)?;
        let recorded = state.record_saved(&selection.url, &fetched.hash);
        debug_assert!(
            recorded,
            "run state already held {} or its content",
            selection.url
        );

        Ok(EntryOutcome::Saved {
            url: selection.url,
            hash: fetched.hash,
            pass: selection.pass,
        })
    }

    fn emit(&self, index: usize, total: usize, entry: &CatalogEntry, stage: Stage) {
        self.sink.emit(RunEvent::Progress(EntryProgress {
            index,
            total,
            category: entry.category.clone(),
            subcategory: entry.subcategory.clone(),
            stage,
        }));
    }
}

fn log_failure(entry: &CatalogEntry, failure: &EntryFailure) {
    match failure {
        EntryFailure::Fetch(err) if err.is_duplicate() => {
            frames_info!(
                "Skipping {}/{}: {}",
                entry.category,
                entry.subcategory,
                err.kind
            );
        }
        EntryFailure::NoCandidate => {
            frames_warn!(
                "No suitable image found for {}/{}",
                entry.category,
                entry.subcategory
            );
        }
        other => {
            frames_warn!("{}/{}: {}", entry.category, entry.subcategory, other);
        }
    }
}

//! Frames engine: search, fetch, normalize and persist, driven one catalog entry at a time.
mod download;
mod fetch;
mod finder;
mod hash;
mod normalize;
mod persist;
mod progress;
mod runner;
mod search;
mod types;

pub use download::{fetch_candidate, FetchedImage};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use finder::find_best_image;
pub use hash::content_hash;
pub use normalize::{
    centered_offset, fit_within, normalize_image, NormalizeError, NormalizeSettings,
    NormalizedImage,
};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use progress::{ChannelProgressSink, EntryProgress, LogProgressSink, ProgressSink, RunEvent};
pub use runner::{EntryFailure, EntryOutcome, EntryReport, Harvester, RunReport, RunSettings};
pub use search::{
    build_search_url, CustomSearchClient, ImageSearch, SearchCredentials, SearchError,
    SearchSettings, DEFAULT_SEARCH_ENDPOINT,
};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};

use std::collections::HashSet;

/// Per-run duplicate bookkeeping. Starts empty on every process start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    urls: HashSet<String>,
    hashes: HashSet<String>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_url(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn has_hash(&self, hash: &str) -> bool {
        self.hashes.contains(hash)
    }

    /// Records an artifact that has been written to disk.
    ///
    /// Returns false (and records nothing) if either key was already present.
    #[must_use]
    pub fn record_saved(&mut self, url: &str, hash: &str) -> bool {
        if self.has_url(url) || self.has_hash(hash) {
            return false;
        }
        self.urls.insert(url.to_string());
        self.hashes.insert(hash.to_string());
        true
    }

    pub fn saved_count(&self) -> usize {
        self.urls.len()
    }
}

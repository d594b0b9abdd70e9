use std::fmt;

/// Where a catalog entry is in its lifecycle.
///
/// `Searching` and `Filtering` alternate once per query tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Pending,
    SkippedExisting,
    Searching,
    Filtering,
    Fetching,
    Normalizing,
    Saved,
    Failed,
}

/// Final status of one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Saved,
    SkippedExisting,
    Failed,
}

impl EntryStatus {
    /// Whether the entry's artifact is present at the end of the run.
    pub fn is_satisfied(self) -> bool {
        matches!(self, EntryStatus::Saved | EntryStatus::SkippedExisting)
    }

    pub fn stage(self) -> Stage {
        match self {
            EntryStatus::Saved => Stage::Saved,
            EntryStatus::SkippedExisting => Stage::SkippedExisting,
            EntryStatus::Failed => Stage::Failed,
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryStatus::Saved => write!(f, "saved"),
            EntryStatus::SkippedExisting => write!(f, "skipped (already exists)"),
            EntryStatus::Failed => write!(f, "failed"),
        }
    }
}

use frames_core::Stage;
use frames_logging::{frames_debug, frames_info, frames_warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryProgress {
    /// 1-based position in the catalog.
    pub index: usize,
    pub total: usize,
    pub category: String,
    pub subcategory: String,
    pub stage: Stage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    Progress(EntryProgress),
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: RunEvent);
}

/// Writes entry progress to the global logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn emit(&self, event: RunEvent) {
        let RunEvent::Progress(p) = event;
        let file = format!("{}/{}.jpg", p.category, p.subcategory);
        match p.stage {
            Stage::SkippedExisting => {
                frames_info!("{}/{} - Skipping {} (already exists)", p.index, p.total, file)
            }
            Stage::Fetching => frames_info!("{}/{} - Downloading {}...", p.index, p.total, file),
            Stage::Saved => frames_info!("Successfully downloaded {}", file),
            Stage::Failed => frames_warn!("Failed to download {}", file),
            Stage::Pending | Stage::Searching | Stage::Filtering | Stage::Normalizing => {
                frames_debug!("{}/{} {} -> {:?}", p.index, p.total, file, p.stage)
            }
        }
    }
}

pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<RunEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<RunEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: RunEvent) {
        let _ = self.tx.send(event);
    }
}

use anyhow::Result;
use popcorn_models::WatchedEntry;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Full-set JSON persistence for the watched list. Single writer,
/// last-write-wins; the whole set is rewritten on every mutation.
pub struct WatchedStore {
    path: PathBuf,
}

impl WatchedStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the persisted set. A missing file is an empty list, and so
    /// is an unreadable one: losing the watched list beats refusing to
    /// start over a corrupt file.
    pub fn load(&self) -> Result<Vec<WatchedEntry>> {
        if !self.path.exists() {
            debug!("watched file does not exist, starting with empty list");
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(
                    "watched file at {:?} is not parseable ({}), starting with empty list",
                    self.path, e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Persist the full set. Write to a temp file then rename so a
    /// crash mid-write never leaves a truncated list behind.
    pub fn save(&self, entries: &[WatchedEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(entries)?;
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, serialized)?;
        std::fs::rename(&temp_path, &self.path)?;
        debug!("saved {} watched entries", entries.len());
        Ok(())
    }
}

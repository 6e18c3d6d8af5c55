use anyhow::Result;
use popcorn_models::WatchedEntry;
use tracing::info;

use crate::store::WatchedStore;

/// Read-only aggregates over the watched set. Every mean is 0 for an
/// empty set, never NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchlistSummary {
    pub count: usize,
    pub avg_rating_external: f64,
    pub avg_rating_user: f64,
    pub avg_runtime_minutes: f64,
}

/// Owns the watched set and keeps the store in sync: every mutation
/// persists the full resulting set before returning.
pub struct Watchlist {
    entries: Vec<WatchedEntry>,
    store: WatchedStore,
}

impl Watchlist {
    pub fn open(store: WatchedStore) -> Result<Self> {
        let entries = store.load()?;
        Ok(Self { entries, store })
    }

    pub fn entries(&self) -> &[WatchedEntry] {
        &self.entries
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.entries.iter().any(|entry| entry.imdb_id == imdb_id)
    }

    pub fn rating_for(&self, imdb_id: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|entry| entry.imdb_id == imdb_id)
            .map(|entry| entry.rating_user)
    }

    /// Add an entry and persist. Idempotent by imdb id: adding a movie
    /// that is already on the list leaves the list untouched and
    /// returns false.
    pub fn add(&mut self, entry: WatchedEntry) -> Result<bool> {
        if self.contains(&entry.imdb_id) {
            return Ok(false);
        }
        info!(imdb_id = %entry.imdb_id, title = %entry.title, "adding to watched list");
        self.entries.push(entry);
        self.store.save(&self.entries)?;
        Ok(true)
    }

    /// Remove by imdb id and persist. Returns false if nothing matched.
    pub fn remove(&mut self, imdb_id: &str) -> Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.imdb_id != imdb_id);
        if self.entries.len() == before {
            return Ok(false);
        }
        info!(imdb_id, "removed from watched list");
        self.store.save(&self.entries)?;
        Ok(true)
    }

    pub fn summary(&self) -> WatchlistSummary {
        WatchlistSummary {
            count: self.entries.len(),
            avg_rating_external: average(self.entries.iter().map(|e| e.rating_external)),
            avg_rating_user: average(self.entries.iter().map(|e| f64::from(e.rating_user))),
            avg_runtime_minutes: average(self.entries.iter().map(|e| f64::from(e.runtime_minutes))),
        }
    }
}

/// Arithmetic mean, with the empty sequence defined as 0.
fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

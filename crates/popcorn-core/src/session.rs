use popcorn_models::SearchResultItem;
use popcorn_omdb::{OmdbError, SearchOutcome};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Queries shorter than this never hit the network.
pub const MIN_QUERY_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Handed out by [`SearchSession::set_query`] when a query qualifies.
/// The caller runs the network call with `cancel` and reports back via
/// [`SearchSession::apply_outcome`] with the same `generation`.
#[derive(Debug)]
pub struct SearchRequest {
    pub query: String,
    pub generation: u64,
    pub cancel: CancellationToken,
}

/// One search box worth of state. At most one search is live at a time:
/// every query change cancels the previous in-flight request, and
/// settled outcomes are only applied if they carry the current
/// generation, so a slow early response can never clobber a later one.
pub struct SearchSession {
    query: String,
    status: SearchStatus,
    results: Vec<SearchResultItem>,
    error: Option<String>,
    generation: u64,
    cancel: Option<CancellationToken>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            status: SearchStatus::Idle,
            results: Vec::new(),
            error: None,
            generation: 0,
            cancel: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn results(&self) -> &[SearchResultItem] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Apply a query-text change. Cancels any in-flight search, then
    /// either goes `Idle` (short query, nothing issued) or `Loading`
    /// with a fresh request to run.
    pub fn set_query(&mut self, text: &str) -> Option<SearchRequest> {
        self.query = text.to_string();

        if let Some(token) = self.cancel.take() {
            token.cancel();
        }

        if text.chars().count() < MIN_QUERY_LEN {
            self.results.clear();
            self.error = None;
            self.status = SearchStatus::Idle;
            return None;
        }

        self.generation += 1;
        self.status = SearchStatus::Loading;
        let cancel = CancellationToken::new();
        self.cancel = Some(cancel.clone());
        debug!(query = text, generation = self.generation, "issuing search");

        Some(SearchRequest {
            query: text.to_string(),
            generation: self.generation,
            cancel,
        })
    }

    /// Settle a search. Outcomes from superseded generations are
    /// dropped wholesale, and `Cancelled` never transitions: the
    /// superseding search's own settlement governs what is visible.
    pub fn apply_outcome(
        &mut self,
        generation: u64,
        outcome: Result<SearchOutcome, OmdbError>,
    ) {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "dropping outcome from superseded search"
            );
            return;
        }
        match outcome {
            Ok(SearchOutcome::Cancelled) => {}
            Ok(SearchOutcome::Results(items)) => {
                self.results = items;
                self.error = None;
                self.status = SearchStatus::Success;
                self.cancel = None;
            }
            Err(err) => {
                self.results.clear();
                self.error = Some(err.to_string());
                self.status = SearchStatus::Error;
                self.cancel = None;
            }
        }
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

use anyhow::Result;
use popcorn_models::{MovieDetail, WatchedEntry};
use popcorn_omdb::{OmdbError, SearchOutcome};

use crate::selection::Selection;
use crate::session::{SearchRequest, SearchSession};
use crate::watchlist::Watchlist;

/// The whole application state behind one owner, mutated through
/// discrete actions so every transition is testable without a UI.
///
/// Network calls stay outside: actions that need one hand back a
/// request (query + token, or an id to fetch) and the caller reports
/// the settled result through the matching `apply_*` action.
pub struct App {
    session: SearchSession,
    selection: Selection,
    watchlist: Watchlist,
    detail: Option<MovieDetail>,
    detail_error: Option<String>,
}

impl App {
    pub fn new(watchlist: Watchlist) -> Self {
        Self {
            session: SearchSession::new(),
            selection: Selection::new(),
            watchlist,
            detail: None,
            detail_error: None,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    pub fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
    }

    pub fn detail_error(&self) -> Option<&str> {
        self.detail_error.as_deref()
    }

    /// Change the query. When a search is actually issued, any open
    /// detail view is closed first.
    pub fn set_query(&mut self, text: &str) -> Option<SearchRequest> {
        let request = self.session.set_query(text);
        if request.is_some() {
            self.close_detail();
        }
        request
    }

    pub fn apply_search(&mut self, generation: u64, outcome: Result<SearchOutcome, OmdbError>) {
        self.session.apply_outcome(generation, outcome);
    }

    /// Toggle the selection. Returns the id whose detail should now be
    /// fetched, or None when the toggle closed the view. Either way the
    /// previous detail is discarded.
    pub fn select(&mut self, imdb_id: &str) -> Option<String> {
        self.detail = None;
        self.detail_error = None;
        if self.selection.select(imdb_id) {
            Some(imdb_id.to_string())
        } else {
            None
        }
    }

    /// Settle a detail fetch. The response is keyed to the id it was
    /// issued for; if the selection moved on in the meantime the stale
    /// detail is silently dropped.
    pub fn apply_detail(&mut self, for_id: &str, result: Result<MovieDetail, OmdbError>) {
        if self.selection.active_id() != Some(for_id) {
            return;
        }
        match result {
            Ok(detail) => {
                self.detail = Some(detail);
                self.detail_error = None;
            }
            Err(err) => {
                self.detail = None;
                self.detail_error = Some(err.to_string());
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.selection.clear();
        self.detail = None;
        self.detail_error = None;
    }

    /// Promote the currently open detail plus a 1-10 user rating into
    /// the watched list, then close the detail view.
    pub fn rate_and_add(&mut self, rating_user: u8) -> Result<bool> {
        if !(1..=10).contains(&rating_user) {
            anyhow::bail!("rating must be between 1 and 10, got {rating_user}");
        }
        let Some(detail) = &self.detail else {
            anyhow::bail!("no movie detail is open");
        };
        let entry = WatchedEntry::from_detail(detail, rating_user);
        let added = self.watchlist.add(entry)?;
        self.close_detail();
        Ok(added)
    }

    pub fn remove_watched(&mut self, imdb_id: &str) -> Result<bool> {
        self.watchlist.remove(imdb_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::WatchedStore;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        let store = WatchedStore::new(dir.path().join("watched.json"));
        App::new(Watchlist::open(store).unwrap())
    }

    fn detail(imdb_id: &str) -> MovieDetail {
        MovieDetail {
            imdb_id: imdb_id.to_string(),
            title: format!("Movie {imdb_id}"),
            year: "2020".to_string(),
            poster_url: String::new(),
            runtime_minutes: Some(120),
            rating_external: Some(7.5),
            plot: String::new(),
            released: String::new(),
            actors: String::new(),
            director: String::new(),
            genre: String::new(),
        }
    }

    #[test]
    fn test_issuing_search_closes_detail() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let id = app.select("tt001").unwrap();
        app.apply_detail(&id, Ok(detail("tt001")));
        assert!(app.detail().is_some());

        app.set_query("batman");
        assert!(app.detail().is_none());
        assert_eq!(app.selection().active_id(), None);
    }

    #[test]
    fn test_short_query_leaves_detail_open() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let id = app.select("tt001").unwrap();
        app.apply_detail(&id, Ok(detail("tt001")));

        // Below threshold, no search is issued and nothing else changes.
        assert!(app.set_query("ba").is_none());
        assert!(app.detail().is_some());
    }

    #[test]
    fn test_stale_detail_response_is_dropped() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let first = app.select("tt001").unwrap();
        app.select("tt002");

        // The fetch for tt001 lands after the selection moved on.
        app.apply_detail(&first, Ok(detail("tt001")));
        assert!(app.detail().is_none());

        app.apply_detail("tt002", Ok(detail("tt002")));
        assert_eq!(app.detail().unwrap().imdb_id, "tt002");
    }

    #[test]
    fn test_detail_fetch_failure_is_displayed_not_fatal() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let id = app.select("tt001").unwrap();
        app.apply_detail(
            &id,
            Err(OmdbError::NoResults("Incorrect IMDb ID.".to_string())),
        );
        assert!(app.detail().is_none());
        assert_eq!(app.detail_error(), Some("Incorrect IMDb ID."));
    }

    #[test]
    fn test_toggle_selection_closes_it() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        assert!(app.select("tt001").is_some());
        assert!(app.select("tt001").is_none());
        assert_eq!(app.selection().active_id(), None);
    }

    #[test]
    fn test_rate_and_add_promotes_open_detail() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let id = app.select("tt001").unwrap();
        app.apply_detail(&id, Ok(detail("tt001")));
        assert!(app.rate_and_add(8).unwrap());

        // Adding closes the detail view, like the original flow.
        assert!(app.detail().is_none());
        assert_eq!(app.watchlist().rating_for("tt001"), Some(8));
    }

    #[test]
    fn test_rate_and_add_rejects_out_of_range_rating() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let id = app.select("tt001").unwrap();
        app.apply_detail(&id, Ok(detail("tt001")));
        assert!(app.rate_and_add(0).is_err());
        assert!(app.rate_and_add(11).is_err());
    }

    #[test]
    fn test_rate_and_add_without_detail_fails() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        assert!(app.rate_and_add(7).is_err());
    }
}

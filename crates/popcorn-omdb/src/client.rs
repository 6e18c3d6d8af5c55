use popcorn_models::{MovieDetail, SearchResultItem};
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::api;
use crate::error::OmdbError;

/// How a title search ended. Cancellation is an outcome, not an error:
/// a cancelled search must produce no observable state change, so it is
/// kept out of the `Err` path that feeds the error display.
#[derive(Debug)]
pub enum SearchOutcome {
    Results(Vec<SearchResultItem>),
    Cancelled,
}

#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Search titles matching `title`. The token belongs to the query
    /// that spawned this call; when a newer query supersedes it the
    /// session cancels the token and this resolves to `Cancelled`
    /// without waiting for the network.
    pub async fn search_by_title(
        &self,
        title: &str,
        cancel: &CancellationToken,
    ) -> Result<SearchOutcome, OmdbError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(query = title, "search cancelled before completion");
                Ok(SearchOutcome::Cancelled)
            }
            result = self.run_search(title) => result.map(SearchOutcome::Results),
        }
    }

    async fn run_search(&self, title: &str) -> Result<Vec<SearchResultItem>, OmdbError> {
        debug!(query = title, "searching OMDb");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("s", title)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(OmdbError::Http(response.status()));
        }
        let envelope: api::SearchEnvelope = response.json().await?;
        api::search_items(envelope)
    }

    /// Look up one title by IMDb id. Not cancellable: a detail fetch
    /// for a stale selection is discarded by the caller instead.
    pub async fn fetch_by_id(&self, imdb_id: &str) -> Result<MovieDetail, OmdbError> {
        debug!(imdb_id, "fetching OMDb detail");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("i", imdb_id)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(OmdbError::Http(response.status()));
        }
        let envelope: api::DetailEnvelope = response.json().await?;
        api::detail_from(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cancelled_token_short_circuits_search() {
        // Unroutable address: if cancellation did not win, this would
        // attempt a connection and fail with a network error.
        let client = OmdbClient::new(
            "testkey".to_string(),
            "http://127.0.0.1:1/".to_string(),
        );
        let token = CancellationToken::new();
        token.cancel();

        let outcome = client.search_by_title("batman", &token).await.unwrap();
        assert!(matches!(outcome, SearchOutcome::Cancelled));
    }
}

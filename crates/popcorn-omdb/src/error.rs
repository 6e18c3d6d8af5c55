use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum OmdbError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request failed with status {0}")]
    Http(StatusCode),

    /// The API answered cleanly but found nothing ("Response": "False").
    #[error("{0}")]
    NoResults(String),
}

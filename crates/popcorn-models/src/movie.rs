use serde::{Deserialize, Serialize};

/// Full record for a single title, fetched when the user opens a
/// search result. Discarded as soon as the selection changes.
///
/// Runtime and rating are optional because OMDb reports "N/A" for
/// titles it has no data for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetail {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub runtime_minutes: Option<u32>,
    pub rating_external: Option<f64>,
    pub plot: String,
    pub released: String,
    pub actors: String,
    pub director: String,
    pub genre: String,
}

use serde::{Deserialize, Serialize};

/// One row of a title search. Replaced wholesale on every new query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResultItem {
    pub imdb_id: String,
    pub title: String,
    pub year: String, // OMDb year is a string (shows report ranges like "2011–2019")
    pub poster_url: String,
}

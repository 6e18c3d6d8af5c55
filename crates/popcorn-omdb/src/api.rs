use popcorn_models::{MovieDetail, SearchResultItem};
use serde::Deserialize;

use crate::error::OmdbError;

/// Envelope for `?s=<title>` responses. OMDb signals failure in-band:
/// `Response` is the string "True" or "False", and on "False" the
/// `Error` field carries the reason ("Movie not found!" etc).
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<SearchEntry>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchEntry {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster")]
    pub poster: String,
}

/// Envelope for `?i=<imdb id>` responses.
#[derive(Debug, Deserialize)]
pub struct DetailEnvelope {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Released", default)]
    pub released: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
}

/// Parse OMDb's runtime format ("142 min") down to the leading integer.
/// "N/A" and anything else non-numeric yields None.
pub fn parse_runtime_minutes(raw: &str) -> Option<u32> {
    raw.split_whitespace().next()?.parse().ok()
}

/// OMDb ratings are numeric strings ("9.3"), or "N/A".
pub fn parse_rating(raw: &str) -> Option<f64> {
    raw.parse().ok()
}

fn no_results_message(error: Option<String>) -> String {
    error.unwrap_or_else(|| "Movie not found!".to_string())
}

pub fn search_items(envelope: SearchEnvelope) -> Result<Vec<SearchResultItem>, OmdbError> {
    if envelope.response != "True" {
        return Err(OmdbError::NoResults(no_results_message(envelope.error)));
    }
    Ok(envelope
        .search
        .into_iter()
        .map(|entry| SearchResultItem {
            imdb_id: entry.imdb_id,
            title: entry.title,
            year: entry.year,
            poster_url: entry.poster,
        })
        .collect())
}

pub fn detail_from(envelope: DetailEnvelope) -> Result<MovieDetail, OmdbError> {
    if envelope.response != "True" {
        return Err(OmdbError::NoResults(no_results_message(envelope.error)));
    }
    Ok(MovieDetail {
        imdb_id: envelope.imdb_id,
        title: envelope.title,
        year: envelope.year,
        poster_url: envelope.poster,
        runtime_minutes: parse_runtime_minutes(&envelope.runtime),
        rating_external: parse_rating(&envelope.imdb_rating),
        plot: envelope.plot,
        released: envelope.released,
        actors: envelope.actors,
        director: envelope.director,
        genre: envelope.genre,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_runtime_minutes() {
        assert_eq!(parse_runtime_minutes("142 min"), Some(142));
        assert_eq!(parse_runtime_minutes("57 min"), Some(57));
        assert_eq!(parse_runtime_minutes("N/A"), None);
        assert_eq!(parse_runtime_minutes(""), None);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("9.3"), Some(9.3));
        assert_eq!(parse_rating("8"), Some(8.0));
        assert_eq!(parse_rating("N/A"), None);
    }

    #[test]
    fn test_search_items_success() {
        let json = r#"{
            "Search": [
                {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784", "Poster": "https://example.com/bb.jpg"},
                {"Title": "The Batman", "Year": "2022", "imdbID": "tt1877830", "Poster": "N/A"}
            ],
            "totalResults": "587",
            "Response": "True"
        }"#;
        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        let items = search_items(envelope).unwrap();

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| !item.imdb_id.is_empty()));
        assert_eq!(items[0].title, "Batman Begins");
        assert_eq!(items[1].year, "2022");
    }

    #[test]
    fn test_search_items_no_results() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();

        let err = search_items(envelope).unwrap_err();
        match err {
            OmdbError::NoResults(message) => assert_eq!(message, "Movie not found!"),
            other => panic!("expected NoResults, got {other:?}"),
        }
    }

    #[test]
    fn test_detail_from_parses_mixed_numeric_fields() {
        let json = r#"{
            "Title": "The Shawshank Redemption",
            "Year": "1994",
            "Released": "14 Oct 1994",
            "Runtime": "142 min",
            "Genre": "Drama",
            "Director": "Frank Darabont",
            "Actors": "Tim Robbins, Morgan Freeman, Bob Gunton",
            "Plot": "Two imprisoned men bond over a number of years.",
            "Poster": "https://example.com/shawshank.jpg",
            "imdbRating": "9.3",
            "imdbID": "tt0111161",
            "Response": "True"
        }"#;
        let envelope: DetailEnvelope = serde_json::from_str(json).unwrap();
        let detail = detail_from(envelope).unwrap();

        assert_eq!(detail.runtime_minutes, Some(142));
        assert_eq!(detail.rating_external, Some(9.3));
        assert_eq!(detail.imdb_id, "tt0111161");
        assert_eq!(detail.director, "Frank Darabont");
    }

    #[test]
    fn test_detail_from_tolerates_na_fields() {
        let json = r#"{
            "Title": "Obscure Short",
            "Year": "1923",
            "Runtime": "N/A",
            "imdbRating": "N/A",
            "imdbID": "tt9999999",
            "Poster": "N/A",
            "Response": "True"
        }"#;
        let envelope: DetailEnvelope = serde_json::from_str(json).unwrap();
        let detail = detail_from(envelope).unwrap();

        assert_eq!(detail.runtime_minutes, None);
        assert_eq!(detail.rating_external, None);
    }

    #[test]
    fn test_detail_from_bad_id() {
        let json = r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#;
        let envelope: DetailEnvelope = serde_json::from_str(json).unwrap();
        assert!(matches!(
            detail_from(envelope),
            Err(OmdbError::NoResults(_))
        ));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::movie::MovieDetail;

/// A movie the user has rated. The full set of these is the unit of
/// persistence: read once at startup, written in full on every change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchedEntry {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub rating_external: f64,
    pub runtime_minutes: u32,
    /// User rating on a 1-10 scale.
    pub rating_user: u8,
    /// Defaults on load so files written before this field existed still parse.
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}

impl WatchedEntry {
    /// Promote a fetched detail plus a user rating into a watched entry.
    /// Missing runtime/rating ("N/A" upstream) becomes 0 so the
    /// watchlist aggregates stay well-defined.
    pub fn from_detail(detail: &MovieDetail, rating_user: u8) -> Self {
        Self {
            imdb_id: detail.imdb_id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster_url: detail.poster_url.clone(),
            rating_external: detail.rating_external.unwrap_or(0.0),
            runtime_minutes: detail.runtime_minutes.unwrap_or(0),
            rating_user,
            added_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> MovieDetail {
        MovieDetail {
            imdb_id: "tt0111161".to_string(),
            title: "The Shawshank Redemption".to_string(),
            year: "1994".to_string(),
            poster_url: "https://example.com/poster.jpg".to_string(),
            runtime_minutes: Some(142),
            rating_external: Some(9.3),
            plot: "Two imprisoned men bond over a number of years.".to_string(),
            released: "14 Oct 1994".to_string(),
            actors: "Tim Robbins, Morgan Freeman".to_string(),
            director: "Frank Darabont".to_string(),
            genre: "Drama".to_string(),
        }
    }

    #[test]
    fn test_from_detail_copies_fields() {
        let entry = WatchedEntry::from_detail(&detail(), 9);
        assert_eq!(entry.imdb_id, "tt0111161");
        assert_eq!(entry.rating_external, 9.3);
        assert_eq!(entry.runtime_minutes, 142);
        assert_eq!(entry.rating_user, 9);
    }

    #[test]
    fn test_from_detail_defaults_missing_numbers_to_zero() {
        let mut d = detail();
        d.runtime_minutes = None;
        d.rating_external = None;
        let entry = WatchedEntry::from_detail(&d, 5);
        assert_eq!(entry.rating_external, 0.0);
        assert_eq!(entry.runtime_minutes, 0);
    }

    #[test]
    fn test_deserializes_without_added_at() {
        let json = r#"{
            "imdb_id": "tt001",
            "title": "Test",
            "year": "2020",
            "poster_url": "",
            "rating_external": 7.5,
            "runtime_minutes": 100,
            "rating_user": 8
        }"#;
        let entry: WatchedEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.rating_user, 8);
    }
}

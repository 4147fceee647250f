//! Serde types for the lookup service's wire contract.
//!
//! Field names are the remote service's contract, not ours: responses carry
//! PascalCase keys (`Title`, `Year`, `imdbID`, ...), success is reported as
//! the string `"True"`/`"False"` in `Response`, and unknown fields hold the
//! literal `"N/A"`. Conversion into the domain model normalizes all of that
//! so nothing downstream ever sees a sentinel.

use serde::Deserialize;

use crate::model::{MovieDetail, SearchResultItem, SourceRating};

/// The service's absent-field sentinel.
const NOT_AVAILABLE: &str = "N/A";

/// Drops empty strings and the `"N/A"` sentinel.
fn presence(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.is_empty() && value != NOT_AVAILABLE)
}

/// Envelope of a title search response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<SearchHit>,
    /// Service-side explanation when `Response` is `"False"`. Logged for
    /// diagnostics, never rendered.
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl SearchEnvelope {
    pub fn found(&self) -> bool {
        self.response == "True"
    }
}

/// One entry of the `Search` array.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

impl From<SearchHit> for SearchResultItem {
    fn from(hit: SearchHit) -> Self {
        Self {
            title: hit.title,
            year: hit.year,
            external_id: hit.imdb_id,
            poster_url: presence(hit.poster),
        }
    }
}

/// Envelope of a detail-by-id response.
///
/// The service flattens the record and the found/not-found indicator into
/// one object, so every content field must be optional at the wire level
/// regardless of the `"N/A"` convention.
#[derive(Debug, Deserialize)]
pub(crate) struct DetailEnvelope {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Rated")]
    pub rated: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Writer")]
    pub writer: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Awards")]
    pub awards: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<WireRating>,
}

impl DetailEnvelope {
    pub fn found(&self) -> bool {
        self.response == "True"
    }
}

/// One entry of the `Ratings` array.
#[derive(Debug, Deserialize)]
pub(crate) struct WireRating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl From<DetailEnvelope> for MovieDetail {
    fn from(wire: DetailEnvelope) -> Self {
        Self {
            title: presence(wire.title),
            year: presence(wire.year),
            rated: presence(wire.rated),
            runtime: presence(wire.runtime),
            genre: presence(wire.genre),
            plot: presence(wire.plot),
            director: presence(wire.director),
            writer: presence(wire.writer),
            actors: presence(wire.actors),
            language: presence(wire.language),
            country: presence(wire.country),
            awards: presence(wire.awards),
            imdb_rating: presence(wire.imdb_rating),
            imdb_votes: presence(wire.imdb_votes),
            poster_url: presence(wire.poster),
            ratings: wire
                .ratings
                .into_iter()
                .map(|rating| SourceRating {
                    source: rating.source,
                    value: rating.value,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATRIX_SEARCH: &str = r#"{
        "Search": [
            {"Title": "The Matrix", "Year": "1999", "imdbID": "tt0133093", "Type": "movie", "Poster": "https://m.media-amazon.com/matrix.jpg"},
            {"Title": "The Matrix Reloaded", "Year": "2003", "imdbID": "tt0234215", "Type": "movie", "Poster": "N/A"}
        ],
        "totalResults": "2",
        "Response": "True"
    }"#;

    #[test]
    fn search_envelope_preserves_order_and_normalizes_posters() {
        let envelope: SearchEnvelope = serde_json::from_str(MATRIX_SEARCH).unwrap();
        assert!(envelope.found());

        let items: Vec<SearchResultItem> =
            envelope.search.into_iter().map(Into::into).collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "The Matrix");
        assert_eq!(items[0].year, "1999");
        assert_eq!(items[0].external_id, "tt0133093");
        assert!(items[0].poster_url.is_some());
        assert_eq!(items[1].title, "The Matrix Reloaded");
        assert_eq!(items[1].poster_url, None);
    }

    #[test]
    fn no_match_envelope_reports_not_found() {
        let envelope: SearchEnvelope =
            serde_json::from_str(r#"{"Response": "False", "Error": "Movie not found!"}"#)
                .unwrap();
        assert!(!envelope.found());
        assert!(envelope.search.is_empty());
        assert_eq!(envelope.error.as_deref(), Some("Movie not found!"));
    }

    #[test]
    fn detail_envelope_normalizes_not_available_fields() {
        let raw = r#"{
            "Title": "The Matrix",
            "Year": "1999",
            "Rated": "R",
            "Runtime": "136 min",
            "Genre": "Action, Sci-Fi",
            "Director": "Lana Wachowski, Lilly Wachowski",
            "Writer": "N/A",
            "Actors": "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
            "Plot": "A computer hacker learns about the true nature of reality.",
            "Language": "English",
            "Country": "United States, Australia",
            "Awards": "Won 4 Oscars",
            "Poster": "N/A",
            "Ratings": [
                {"Source": "Internet Movie Database", "Value": "8.7/10"},
                {"Source": "Rotten Tomatoes", "Value": "88%"}
            ],
            "imdbRating": "8.7",
            "imdbVotes": "2,156,338",
            "Response": "True"
        }"#;

        let envelope: DetailEnvelope = serde_json::from_str(raw).unwrap();
        assert!(envelope.found());

        let detail = MovieDetail::from(envelope);
        assert_eq!(detail.title.as_deref(), Some("The Matrix"));
        assert_eq!(detail.writer, None);
        assert_eq!(detail.poster_url, None);
        assert_eq!(detail.imdb_votes.as_deref(), Some("2,156,338"));
        assert_eq!(detail.ratings.len(), 2);
        assert_eq!(detail.ratings[0].source, "Internet Movie Database");
        assert_eq!(detail.ratings[1].value, "88%");
    }

    #[test]
    fn detail_not_found_envelope() {
        let envelope: DetailEnvelope =
            serde_json::from_str(r#"{"Response": "False", "Error": "Incorrect IMDb ID."}"#)
                .unwrap();
        assert!(!envelope.found());
    }

    #[test]
    fn missing_ratings_array_defaults_to_empty() {
        let envelope: DetailEnvelope =
            serde_json::from_str(r#"{"Title": "Pi", "Response": "True"}"#).unwrap();
        let detail = MovieDetail::from(envelope);
        assert!(detail.ratings.is_empty());
    }
}

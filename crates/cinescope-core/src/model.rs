//! Domain model for search results and title details.
//!
//! These types are the parsed, normalized form of the lookup service's
//! responses: wire-level `"N/A"` sentinels have already been converted to
//! `None`, so a `Some` value is always renderable. All of them are
//! ephemeral; nothing is cached across requests.

use serde::{Deserialize, Serialize};

/// A single search hit shown as a card in the results grid.
///
/// Identity is `external_id` (an IMDb-style id such as `tt0133093`); the
/// remaining fields exist purely for card rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub title: String,
    pub year: String,
    pub external_id: String,
    /// Absent when the service has no poster for the title.
    pub poster_url: Option<String>,
}

/// One (source, value) rating pair, e.g. `("Rotten Tomatoes", "88%")`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRating {
    pub source: String,
    pub value: String,
}

/// Full record for a single title, fetched fresh on every detail request
/// and discarded when the overlay closes.
///
/// Every textual field is optional: the service marks unknown fields with
/// `"N/A"` and the wire layer normalizes those to `None`. The renderer omits
/// absent fields from the layout entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub title: Option<String>,
    pub year: Option<String>,
    pub rated: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub plot: Option<String>,
    pub director: Option<String>,
    pub writer: Option<String>,
    pub actors: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub awards: Option<String>,
    pub imdb_rating: Option<String>,
    pub imdb_votes: Option<String>,
    pub poster_url: Option<String>,
    /// Per-source ratings in the order the service returned them.
    pub ratings: Vec<SourceRating>,
}

/// Accessor into one optional field of [`MovieDetail`].
pub type DetailAccessor = fn(&MovieDetail) -> Option<&str>;

/// One labelled optional field of the detail layout.
pub struct DetailField {
    pub label: &'static str,
    pub value: DetailAccessor,
}

/// Credits-block fields in render order.
///
/// The overlay iterates this table instead of repeating a presence check per
/// field; an entry whose accessor yields `None` is omitted from the layout.
pub const CREDIT_FIELDS: &[DetailField] = &[
    DetailField {
        label: "Director",
        value: |d: &MovieDetail| d.director.as_deref(),
    },
    DetailField {
        label: "Writer",
        value: |d: &MovieDetail| d.writer.as_deref(),
    },
    DetailField {
        label: "Actors",
        value: |d: &MovieDetail| d.actors.as_deref(),
    },
    DetailField {
        label: "Language",
        value: |d: &MovieDetail| d.language.as_deref(),
    },
    DetailField {
        label: "Country",
        value: |d: &MovieDetail| d.country.as_deref(),
    },
    DetailField {
        label: "Awards",
        value: |d: &MovieDetail| d.awards.as_deref(),
    },
];

impl MovieDetail {
    /// Labelled credit fields that are present, in render order.
    pub fn present_credits(&self) -> Vec<(&'static str, &str)> {
        CREDIT_FIELDS
            .iter()
            .filter_map(|field| (field.value)(self).map(|value| (field.label, value)))
            .collect()
    }

    /// Meta-row values (year, runtime, age rating, genre) that are present,
    /// in render order.
    pub fn present_meta(&self) -> Vec<&str> {
        [
            self.year.as_deref(),
            self.runtime.as_deref(),
            self.rated.as_deref(),
            self.genre.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

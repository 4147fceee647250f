//! Client boundary for the remote movie lookup service.
//!
//! The service is an OMDb-style HTTP+JSON API with two read-only
//! operations: free-text title search and detail-by-id. This module is a
//! thin wrapper around them: one request per call, no retries, no caching.
//!
//! **Module Organization:**
//! - `mod.rs`: Public API, configuration, and outcome types
//! - `wire.rs`: Serde types for the service's wire contract
//! - `client.rs`: HTTP fetching with reqwest

mod client;
mod wire;

pub use client::LookupClient;

use crate::config::{DEFAULT_API_KEY, DEFAULT_BASE_URL};
use crate::model::{MovieDetail, SearchResultItem};

/// Configuration for the lookup client.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Base URL of the lookup service.
    pub base_url: String,
    /// API key sent with every request.
    pub api_key: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: option_env!("CINESCOPE_API_KEY")
                .unwrap_or(DEFAULT_API_KEY)
                .to_string(),
        }
    }
}

/// Outcome of a search request the service answered.
///
/// `NoMatch` covers both an explicit "nothing found" answer and an empty
/// result list; transport and contract failures surface separately as
/// [`LookupError`](crate::error::LookupError).
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Hits(Vec<SearchResultItem>),
    NoMatch,
}

/// Outcome of a detail request the service answered.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    Found(Box<MovieDetail>),
    NotFound,
}

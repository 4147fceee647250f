//! Error types for cinescope-core.

use thiserror::Error;

/// Errors that can occur while talking to the lookup service.
///
/// Service-level "no match" / "not found" answers are not errors; they are
/// modeled as [`SearchOutcome`](crate::lookup::SearchOutcome) and
/// [`DetailOutcome`](crate::lookup::DetailOutcome) variants. Everything here
/// is a transport or contract failure and is surfaced to the user only as a
/// generic message, with the detail logged.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// Network-level failure: DNS, connect, timeout, or body read
    #[error("Request failed: {0}")]
    Transport(String),
    /// Response body was not the JSON shape the service's contract promises
    #[error("Malformed response: {0}")]
    Decode(String),
    /// Service answered with a non-success HTTP status
    #[error("Service returned HTTP {0}")]
    Status(u16),
    /// Request URL could not be constructed from the configured base
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

//! Lookup service configuration constants.
//!
//! These values define the default remote endpoint and request behavior for
//! the Cinescope lookup client. The frontend overrides them through
//! [`LookupConfig`](crate::lookup::LookupConfig) when needed.

/// Default base URL of the OMDb-style lookup service.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Public demo API key shared by the service for testing.
///
/// A real deployment supplies its own key at build time through the
/// `CINESCOPE_API_KEY` environment variable; the WASM target has no runtime
/// environment, so the override is compile-time only.
pub const DEFAULT_API_KEY: &str = "trilogy";

/// Plot length requested for detail lookups.
///
/// The service accepts `short` or `full`; the detail overlay shows the
/// complete synopsis.
pub const DETAIL_PLOT: &str = "full";

/// Per-request timeout in seconds (native targets only; the browser's fetch
/// implementation manages its own timeouts on WASM).
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

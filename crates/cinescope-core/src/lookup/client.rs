//! HTTP fetching for the lookup service.
//!
//! This module wraps reqwest to issue the two lookup operations. reqwest
//! works on both native and WASM platforms:
//! - Native: Uses hyper with rustls-tls for HTTPS
//! - WASM: Uses the browser fetch() API internally
//!
//! The HTTP client is pooled for connection reuse; every lookup hits the
//! same host, so a single shared client avoids a handshake per request.

use once_cell::sync::Lazy;
use tracing::debug;
use url::Url;

use super::wire::{DetailEnvelope, SearchEnvelope};
use super::{DetailOutcome, LookupConfig, SearchOutcome};
use crate::config::DETAIL_PLOT;
use crate::error::LookupError;
use crate::model::MovieDetail;

/// Global HTTP client for connection pooling.
///
/// The timeout and user-agent are native-only: the browser forbids setting
/// a User-Agent header and manages fetch timeouts itself.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    let builder = reqwest::Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder
        .user_agent(concat!("cinescope/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(
            crate::config::REQUEST_TIMEOUT_SECS,
        ))
        .pool_max_idle_per_host(4);
    builder.build().expect("Failed to build HTTP client")
});

/// Thin boundary over the remote lookup service.
///
/// One request per call; no retries, no timeout policy beyond the shared
/// client's, no batching. The surfaced outcome is whatever the service
/// returned or a generic transport failure.
#[derive(Debug, Clone)]
pub struct LookupClient {
    config: LookupConfig,
}

impl LookupClient {
    /// Creates a client for the given service configuration.
    pub fn new(config: LookupConfig) -> Self {
        Self { config }
    }

    /// Searches titles matching the free-text `query`.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, LookupError> {
        let url = self.search_url(query)?;
        let envelope: SearchEnvelope = self.fetch_json(url).await?;

        if envelope.found() && !envelope.search.is_empty() {
            Ok(SearchOutcome::Hits(
                envelope.search.into_iter().map(Into::into).collect(),
            ))
        } else {
            debug!(
                reason = envelope.error.as_deref().unwrap_or("empty result list"),
                "search reported no match"
            );
            Ok(SearchOutcome::NoMatch)
        }
    }

    /// Fetches the full record for the title identified by `id`.
    pub async fn fetch_detail(&self, id: &str) -> Result<DetailOutcome, LookupError> {
        let url = self.detail_url(id)?;
        let envelope: DetailEnvelope = self.fetch_json(url).await?;

        if envelope.found() {
            Ok(DetailOutcome::Found(Box::new(MovieDetail::from(envelope))))
        } else {
            debug!(
                reason = envelope.error.as_deref().unwrap_or("no reason given"),
                "detail lookup reported not found"
            );
            Ok(DetailOutcome::NotFound)
        }
    }

    /// Request URL for a title search.
    pub fn search_url(&self, query: &str) -> Result<Url, LookupError> {
        Url::parse_with_params(
            &self.config.base_url,
            &[("apikey", self.config.api_key.as_str()), ("s", query)],
        )
        .map_err(|e| LookupError::InvalidUrl(format!("{}: {}", self.config.base_url, e)))
    }

    /// Request URL for a detail-by-id lookup.
    pub fn detail_url(&self, id: &str) -> Result<Url, LookupError> {
        Url::parse_with_params(
            &self.config.base_url,
            &[
                ("apikey", self.config.api_key.as_str()),
                ("i", id),
                ("plot", DETAIL_PLOT),
            ],
        )
        .map_err(|e| LookupError::InvalidUrl(format!("{}: {}", self.config.base_url, e)))
    }

    /// Issues a GET and decodes the JSON body.
    ///
    /// The body is read as text before parsing so that transport failures
    /// and contract violations stay distinguishable in the logs.
    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<T, LookupError> {
        let response = HTTP_CLIENT
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| LookupError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> LookupClient {
        LookupClient::new(LookupConfig {
            base_url: "https://lookup.example/".into(),
            api_key: "k".into(),
        })
    }

    #[test]
    fn search_url_carries_key_and_encoded_query() {
        let url = test_client().search_url("the matrix").unwrap();
        assert_eq!(url.host_str(), Some("lookup.example"));
        assert_eq!(url.query(), Some("apikey=k&s=the+matrix"));
    }

    #[test]
    fn detail_url_requests_full_plot() {
        let url = test_client().detail_url("tt0133093").unwrap();
        assert_eq!(url.query(), Some("apikey=k&i=tt0133093&plot=full"));
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let client = LookupClient::new(LookupConfig {
            base_url: "not a url".into(),
            api_key: "k".into(),
        });
        assert!(matches!(
            client.search_url("x"),
            Err(LookupError::InvalidUrl(_))
        ));
    }
}

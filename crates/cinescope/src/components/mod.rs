//! UI components for the Cinescope application.
//!
//! - `app_shell`: AppBar and Footer frame
//! - `search`: SearchCard, SearchView, ResultCard, state panels
//! - `detail`: the detail overlay and its panel
//!
//! # Context Providers
//!
//! Components share state through Dioxus context:
//!
//! ```ignore
//! // Read the main-view state from any component
//! let session = use_search_session();
//! match session.read().state() {
//!     SearchState::Results(items) => { /* ... */ }
//!     _ => { /* ... */ }
//! }
//!
//! // Open the overlay for a selected card
//! use_detail_actions().send(DetailMessage::Open(id));
//! ```

mod app_shell;
mod detail;
pub mod search; // Public for SearchView and PosterPlaceholder re-exports

pub use app_shell::{AppBar, Footer};
pub use detail::DetailOverlay;
pub use search::SearchView;

use std::sync::Arc;

use cinescope_core::lookup::{DetailOutcome, LookupClient, LookupConfig};
use cinescope_core::state::{DetailResolution, DetailSession, SearchSession};
use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

/// Messages handled by the detail coroutine.
pub enum DetailMessage {
    /// Open the overlay and fetch the record for this external id.
    Open(String),
    /// Dismiss the overlay.
    Close,
}

/// Shared handle to the lookup client.
pub type LookupHandle = Arc<LookupClient>;

/// Main-view session context.
pub fn use_search_session() -> Signal<SearchSession> {
    use_context::<Signal<SearchSession>>()
}

/// Detail-overlay session context.
pub fn use_detail_session() -> Signal<DetailSession> {
    use_context::<Signal<DetailSession>>()
}

/// Sender for detail-overlay actions.
pub fn use_detail_actions() -> Coroutine<DetailMessage> {
    use_context::<Coroutine<DetailMessage>>()
}

/// Shared lookup client context.
pub fn use_lookup_client() -> LookupHandle {
    use_context::<LookupHandle>()
}

/// Root application component.
///
/// Provides the shared sessions and the lookup client, runs the detail
/// coroutine, and composes the shell around the search view and overlay.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(SearchSession::new()));
    let mut detail_session = use_context_provider(|| Signal::new(DetailSession::new()));
    let client: LookupHandle =
        use_context_provider(|| Arc::new(LookupClient::new(LookupConfig::default())));

    // Detail coroutine: owns overlay transitions and the page scroll lock.
    // Each fetch runs in its own task so a slow response never blocks the
    // message loop; the session's ticket decides whether it still applies.
    use_coroutine(move |mut rx: UnboundedReceiver<DetailMessage>| {
        let client = client.clone();
        async move {
            while let Some(msg) = rx.next().await {
                match msg {
                    DetailMessage::Open(id) => {
                        let ticket = detail_session.write().open();
                        detail::set_page_scroll_locked(true);
                        let client = client.clone();
                        spawn(async move {
                            let resolution = match client.fetch_detail(&id).await {
                                Ok(DetailOutcome::Found(detail)) => DetailResolution::Found(detail),
                                Ok(DetailOutcome::NotFound) => DetailResolution::NotFound,
                                Err(e) => {
                                    error!("Detail lookup for {id} failed: {e}");
                                    DetailResolution::Failed
                                }
                            };
                            detail_session.write().resolve(ticket, resolution);
                        });
                    }
                    DetailMessage::Close => {
                        detail_session.write().close();
                        detail::set_page_scroll_locked(false);
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "cs-app",
            AppBar {}
            main { class: "cs-main",
                SearchView {}
            }
            Footer {}
            DetailOverlay {}
        }
    }
}

use cinescope_core::lookup::SearchOutcome;
use cinescope_core::state::{SearchResolution, SearchState};
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use super::{
    ErrorState, InitialState, NoResultsState, ResultCard, SearchCard, SkeletonResultCard,
};
use crate::components::{use_lookup_client, use_search_session};

// Messages for the search coroutine
enum SearchMessage {
    Run(String),
}

/// Number of placeholder cards shown while a search is in flight.
const SKELETON_CARDS: usize = 6;

/// Main search view: the search card plus exactly one of the main-view
/// states rendered below it.
///
/// The coroutine drives the session state machine; each request runs in its
/// own task and carries the session's ticket, so a response from a
/// superseded search is dropped instead of rendered.
#[component]
pub fn SearchView() -> Element {
    let search_query = use_signal(String::new);
    let session = use_search_session();
    let client = use_lookup_client();

    let search_task = use_coroutine({
        let mut session = session;
        move |mut rx: UnboundedReceiver<SearchMessage>| {
            let client = client.clone();
            async move {
                while let Some(msg) = rx.next().await {
                    match msg {
                        SearchMessage::Run(query) => {
                            let Some(ticket) = session.write().submit(&query) else {
                                continue;
                            };
                            info!("Searching for '{}'", query.trim());
                            let client = client.clone();
                            spawn(async move {
                                let resolution = match client.search(query.trim()).await {
                                    Ok(SearchOutcome::Hits(items)) => SearchResolution::Hits(items),
                                    Ok(SearchOutcome::NoMatch) => SearchResolution::NoMatch,
                                    Err(e) => {
                                        error!("Search for '{}' failed: {e}", query.trim());
                                        SearchResolution::Failed
                                    }
                                };
                                session.write().resolve(ticket, resolution);
                            });
                        }
                    }
                }
            }
        }
    });

    let handle_search = move |query: String| {
        search_task.send(SearchMessage::Run(query));
    };

    let searching = session.read().is_loading();
    let state = session.read().state().clone();

    let body = match state {
        SearchState::Initial => rsx! { InitialState {} },
        SearchState::Loading => rsx! {
            section { class: "cs-results-grid cs-results-grid--loading", "aria-busy": "true",
                for _ in 0..SKELETON_CARDS {
                    SkeletonResultCard {}
                }
            }
        },
        SearchState::Results(items) => rsx! {
            section { class: "cs-results-grid",
                for item in items.iter() {
                    ResultCard { key: "{item.external_id}", item: item.clone() }
                }
            }
        },
        SearchState::NoResults => rsx! { NoResultsState {} },
        SearchState::Error => rsx! { ErrorState {} },
    };

    rsx! {
        section { class: "cs-view cs-view--search",
            SearchCard {
                search_query,
                on_search: handle_search,
                searching,
            }
            {body}
        }
    }
}

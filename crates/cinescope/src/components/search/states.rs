use dioxus::prelude::*;

/// Shown before the first search and after a blank submission.
#[component]
pub fn InitialState() -> Element {
    rsx! {
        section { class: "cs-state-panel",
            h2 { class: "cs-state-title", "Search for a movie" }
            p { class: "cs-state-text", "Type a title above to browse matching movies." }
        }
    }
}

/// Shown when the service found nothing for the query.
#[component]
pub fn NoResultsState() -> Element {
    rsx! {
        section { class: "cs-state-panel",
            h2 { class: "cs-state-title", "No movies found" }
            p { class: "cs-state-text", "Try a different title or check the spelling." }
        }
    }
}

/// Shown when the search request failed. The diagnostic detail goes to the
/// log, never to this panel.
#[component]
pub fn ErrorState() -> Element {
    rsx! {
        section { class: "cs-state-panel cs-state-panel--error",
            h2 { class: "cs-state-title", "Something went wrong" }
            p { class: "cs-state-text",
                "The movie service could not be reached. Please try again."
            }
        }
    }
}

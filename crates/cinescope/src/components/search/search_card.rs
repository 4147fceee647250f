use dioxus::prelude::*;

/// Search card with text input and submit button.
///
/// Submission fires on the button or on Enter while the input has focus.
/// Every submission is forwarded, including blank ones: the session treats
/// a blank submission as a reset to the initial view, so the card must not
/// swallow it.
#[component]
pub fn SearchCard(
    search_query: Signal<String>,
    on_search: EventHandler<String>,
    searching: bool,
) -> Element {
    let run_search = move || on_search.call(search_query.read().clone());

    rsx! {
        section { class: "cs-search-card",
            div { class: "cs-search-input-row",
                input {
                    class: "cs-search-input",
                    r#type: "text",
                    placeholder: "Search for a movie title…",
                    value: "{search_query}",
                    oninput: move |evt| search_query.set(evt.value()),
                    onkeypress: move |evt| {
                        if evt.key() == Key::Enter {
                            run_search();
                        }
                    },
                }
                button {
                    class: "cs-btn cs-btn--primary",
                    onclick: move |_| run_search(),
                    if searching {
                        "Searching…"
                    } else {
                        "Search"
                    }
                }
            }
            div { class: "cs-search-hints",
                span { "Search by title • Select a card for full details" }
            }
        }
    }
}

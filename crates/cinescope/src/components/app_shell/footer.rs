use dioxus::prelude::*;

/// Footer crediting the data source.
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "cs-footer",
            span { class: "cs-footer-text", "Movie data from the OMDb API." }
        }
    }
}

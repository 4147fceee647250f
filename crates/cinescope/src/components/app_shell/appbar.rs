use dioxus::prelude::*;

/// Persistent top bar with the product name.
#[component]
pub fn AppBar() -> Element {
    rsx! {
        header { class: "cs-appbar",
            h1 { class: "cs-appbar-title", "Cinescope" }
            span { class: "cs-appbar-tagline", "Find your favorite movies" }
        }
    }
}

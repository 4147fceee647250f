use cinescope_core::model::SearchResultItem;
use dioxus::prelude::*;

use crate::components::{use_detail_actions, DetailMessage};

/// Placeholder shown wherever the service has no poster for a title.
#[component]
pub fn PosterPlaceholder() -> Element {
    rsx! {
        div { class: "cs-poster-placeholder",
            span { "No poster available" }
        }
    }
}

/// Skeleton card shown while a search is in progress.
/// Mimics the structure of [`ResultCard`] with animated placeholder blocks.
#[component]
pub fn SkeletonResultCard() -> Element {
    rsx! {
        article { class: "cs-result-card cs-result-card--skeleton",
            div { class: "cs-skeleton-block cs-skeleton-block--poster" }
            div { class: "cs-result-info",
                div { class: "cs-skeleton-block cs-skeleton-block--title" }
                div { class: "cs-skeleton-block cs-skeleton-block--year" }
            }
        }
    }
}

/// One search hit: poster (or placeholder), title, and year.
///
/// Selecting the card opens the detail overlay for the hit's external id.
#[component]
pub fn ResultCard(item: SearchResultItem) -> Element {
    let detail_actions = use_detail_actions();
    let external_id = item.external_id.clone();

    let poster = match &item.poster_url {
        Some(url) => rsx! {
            img {
                class: "cs-result-poster",
                src: "{url}",
                alt: "{item.title} poster",
                loading: "lazy",
            }
        },
        None => rsx! { PosterPlaceholder {} },
    };

    rsx! {
        article {
            class: "cs-result-card",
            onclick: move |_| detail_actions.send(DetailMessage::Open(external_id.clone())),
            {poster}
            div { class: "cs-result-info",
                h3 { class: "cs-result-title", "{item.title}" }
                p { class: "cs-result-year", "{item.year}" }
            }
        }
    }
}

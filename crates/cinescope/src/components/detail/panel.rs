use cinescope_core::model::MovieDetail;
use dioxus::prelude::*;

use crate::components::search::PosterPlaceholder;

/// Projection of a loaded title record into the overlay layout.
///
/// Every optional field is omitted entirely when absent. The credits block
/// iterates the core model's field table instead of repeating a presence
/// check per field.
#[component]
pub fn DetailPanel(detail: MovieDetail) -> Element {
    let alt = detail.title.clone().unwrap_or_else(|| "Movie".to_string());

    let poster = match &detail.poster_url {
        Some(url) => rsx! {
            img { class: "cs-detail-poster", src: "{url}", alt: "{alt} poster" }
        },
        None => rsx! { PosterPlaceholder {} },
    };

    let title = match &detail.title {
        Some(title) => rsx! {
            h2 { class: "cs-detail-title", "{title}" }
        },
        None => rsx! {},
    };

    let rating_row = match &detail.imdb_rating {
        Some(rating) => {
            let votes = match &detail.imdb_votes {
                Some(votes) => rsx! {
                    span { class: "cs-detail-votes", "{votes} votes" }
                },
                None => rsx! {},
            };
            rsx! {
                div { class: "cs-detail-rating-row",
                    span { class: "cs-detail-rating", "★ {rating}/10" }
                    {votes}
                }
            }
        }
        None => rsx! {},
    };

    let plot = match &detail.plot {
        Some(plot) => rsx! {
            div { class: "cs-detail-plot",
                h4 { "Plot" }
                p { "{plot}" }
            }
        },
        None => rsx! {},
    };

    let meta = detail.present_meta();
    let credits = detail.present_credits();

    rsx! {
        div { class: "cs-detail",
            div { class: "cs-detail-poster-col", {poster} }
            div { class: "cs-detail-info",
                {title}

                if !meta.is_empty() {
                    div { class: "cs-detail-meta",
                        for entry in meta.iter() {
                            span { class: "cs-detail-meta-item", "{entry}" }
                        }
                    }
                }

                {rating_row}
                {plot}

                if !detail.ratings.is_empty() {
                    div { class: "cs-detail-ratings",
                        h4 { "Ratings" }
                        ul { class: "cs-detail-ratings-list",
                            for rating in detail.ratings.iter() {
                                li { key: "{rating.source}",
                                    strong { "{rating.source}: " }
                                    "{rating.value}"
                                }
                            }
                        }
                    }
                }

                if !credits.is_empty() {
                    div { class: "cs-detail-credits",
                        for (label, value) in credits.iter() {
                            div { class: "cs-info-item",
                                span { class: "cs-info-label", "{label}" }
                                p { class: "cs-info-value", "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

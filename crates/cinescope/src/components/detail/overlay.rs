use cinescope_core::state::{DetailPhase, ModalState};
use dioxus::prelude::*;

use super::panel::DetailPanel;
use crate::components::{use_detail_actions, use_detail_session, DetailMessage};

/// Detail overlay layered above the main view.
///
/// The backdrop dismisses on click; clicks inside the content panel are
/// swallowed so only the backdrop and the close control dismiss. A failed
/// load keeps the overlay open for deliberate dismissal.
#[component]
pub fn DetailOverlay() -> Element {
    let session = use_detail_session();
    let actions = use_detail_actions();

    let phase = match session.read().state() {
        ModalState::Closed => return rsx! {},
        ModalState::Open(phase) => phase.clone(),
    };

    let content = match phase {
        DetailPhase::Loading => rsx! {
            div { class: "cs-modal-status",
                p { "Loading movie details…" }
            }
        },
        DetailPhase::Failed => rsx! {
            div { class: "cs-modal-status cs-modal-status--error",
                p { "Could not load movie details." }
            }
        },
        DetailPhase::Loaded(detail) => rsx! {
            DetailPanel { detail: *detail }
        },
    };

    rsx! {
        div {
            class: "cs-modal-backdrop",
            onclick: move |_| actions.send(DetailMessage::Close),

            div {
                class: "cs-modal",
                onclick: move |e| e.stop_propagation(), // Prevent closing when clicking inside

                button {
                    class: "cs-modal-close",
                    onclick: move |_| actions.send(DetailMessage::Close),
                    "aria-label": "Close details",
                    "✕"
                }
                div { class: "cs-modal-content", {content} }
            }
        }
    }
}

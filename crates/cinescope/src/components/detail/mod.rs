//! Detail overlay components.

mod overlay;
mod panel;

pub use overlay::DetailOverlay;

use dioxus::document;

/// Suspends or restores page scrolling while the overlay is open.
///
/// Toggles `overflow: hidden` on the document body; the desktop webview
/// hosts the same document, so one script serves both targets.
pub(crate) fn set_page_scroll_locked(locked: bool) {
    let overflow = if locked { "hidden" } else { "" };
    let _ = document::eval(&format!("document.body.style.overflow = '{overflow}';"));
}

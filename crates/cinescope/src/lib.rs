//! Cinescope: a browser-based movie search client.
//!
//! The UI is a Dioxus application over [`cinescope_core`]: a search card,
//! a grid of result cards, and a detail overlay. All view state lives in
//! the core crate's session types; components only project it into markup
//! and feed user actions back through coroutines.

#![forbid(unsafe_code)]

pub mod components;

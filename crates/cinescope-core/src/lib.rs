//! # Cinescope Core
//!
//! Platform-independent library for the Cinescope movie search client.
//!
//! This crate provides the lookup client, domain model, and UI state
//! machines used by the Cinescope frontend, designed to be reusable from
//! any rendering layer (GUI, tests, future frontends).
//!
//! ## Modules
//!
//! - [`lookup`] - HTTP boundary to the remote movie lookup service
//! - [`model`] - Search result and title detail domain types
//! - [`state`] - Main-view and detail-overlay state machines
//! - [`config`] - Service endpoint and request configuration constants
//! - [`error`] - Error types for lookup operations

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod state;

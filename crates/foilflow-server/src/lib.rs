//! HTTP/JSON API and browser client for the Foil Flow decision wizard.
//!
//! Serves one wizard session over the content graph, the layered map as JSON
//! or SVG, and an embedded static client that drives both.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;

//! HTTP handler modules for the Foil Flow API.
//!
//! Each sub-module implements thin handlers that parse requests, acquire the
//! service lock, delegate to [`WizardService`](crate::service::WizardService),
//! and return JSON responses. No business logic lives in handlers.

pub mod content;
pub mod map;
pub mod ui;
pub mod wizard;

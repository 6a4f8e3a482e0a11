//! Application state with the shared `WizardService`.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` so handlers
//! await the lock without blocking the tokio runtime. There is one wizard
//! session per server process.

use std::sync::Arc;

use foilflow_core::FlowGraph;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::service::WizardService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<tokio::sync::Mutex<WizardService>>,
}

impl AppState {
    /// Loads the corpus named by `config`.
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        Ok(Self::from_service(WizardService::from_config(config)?))
    }

    /// State over the built-in corpus (for testing).
    pub fn builtin() -> Result<Self, ApiError> {
        Ok(Self::from_service(WizardService::builtin()?))
    }

    /// State over an already-loaded graph.
    pub fn from_graph(graph: FlowGraph) -> Self {
        Self::from_service(WizardService::new(graph))
    }

    fn from_service(service: WizardService) -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        }
    }
}

//! WizardService: the content graph plus the single wizard session.
//!
//! Every handler goes through this type. Wizard operations mutate the session
//! and return the fresh [`WizardView`]; map and inspector operations read the
//! graph and the current id.

use foilflow_core::wizard::WizardView;
use foilflow_core::{
    corpus, validate, FlowGraph, NodeId, ValidationReport, ViewMode, WizardSession,
};
use foilflow_layout::{
    compute_layout, inspect, render_svg, InspectorView, Layout, LayoutConfig, RenderOptions,
    Transform,
};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::schema::content::GraphResponse;
use crate::schema::map::MapLayoutResponse;

pub struct WizardService {
    graph: FlowGraph,
    session: WizardSession,
    fingerprint: String,
    report: ValidationReport,
}

impl WizardService {
    /// Wraps `graph` in a fresh session. Validation findings are logged.
    pub fn new(graph: FlowGraph) -> Self {
        let report = validate(&graph);
        for message in report.messages() {
            tracing::warn!("corpus: {}", message);
        }
        let fingerprint = graph.fingerprint();
        tracing::info!(
            nodes = graph.len(),
            edges = graph.edge_count(),
            fingerprint = %fingerprint,
            "content graph loaded"
        );
        WizardService {
            graph,
            session: WizardSession::new(),
            fingerprint,
            report,
        }
    }

    /// Loads the corpus named by `config`, or the built-in one.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ApiError> {
        let graph = corpus::load(config.content.as_deref()).map_err(|e| {
            ApiError::InternalError(format!("failed to load content corpus: {}", e))
        })?;
        Ok(Self::new(graph))
    }

    /// Service over the built-in corpus.
    pub fn builtin() -> Result<Self, ApiError> {
        Ok(Self::new(corpus::builtin()?))
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    // -----------------------------------------------------------------------
    // Content
    // -----------------------------------------------------------------------

    pub fn graph_response(&self) -> GraphResponse {
        GraphResponse {
            fingerprint: self.fingerprint.clone(),
            node_count: self.graph.len(),
            edge_count: self.graph.edge_count(),
            nodes: self.graph.clone(),
        }
    }

    pub fn validation(&self) -> ValidationReport {
        self.report.clone()
    }

    pub fn inspect(&self, id: &str) -> Result<InspectorView, ApiError> {
        Ok(inspect(&self.graph, id, self.session.current_id())?)
    }

    // -----------------------------------------------------------------------
    // Wizard
    // -----------------------------------------------------------------------

    pub fn wizard_view(&self) -> WizardView {
        self.session.view(&self.graph)
    }

    pub fn answer(&mut self, option: usize) -> Result<WizardView, ApiError> {
        let from = self.session.current_id().clone();
        self.session.choose_option(&self.graph, option)?;
        self.log_transition(&from, "answer");
        Ok(self.wizard_view())
    }

    pub fn progress(&mut self) -> Result<WizardView, ApiError> {
        let from = self.session.current_id().clone();
        self.session.follow_progression(&self.graph)?;
        self.log_transition(&from, "progress");
        Ok(self.wizard_view())
    }

    pub fn select(&mut self, next_id: &str, label: &str) -> WizardView {
        let from = self.session.current_id().clone();
        self.session.select(&self.graph, &NodeId::from(next_id), label);
        self.log_transition(&from, "select");
        self.wizard_view()
    }

    pub fn start_over(&mut self) -> WizardView {
        let from = self.session.current_id().clone();
        self.session.start_over(&self.graph);
        self.log_transition(&from, "start_over");
        self.wizard_view()
    }

    pub fn restart(&mut self) -> WizardView {
        let from = self.session.current_id().clone();
        self.session.restart();
        self.log_transition(&from, "restart");
        self.wizard_view()
    }

    pub fn jump_to_history(&mut self, index: usize) -> Result<WizardView, ApiError> {
        let from = self.session.current_id().clone();
        self.session.jump_to_history(index)?;
        self.log_transition(&from, "history_jump");
        Ok(self.wizard_view())
    }

    pub fn set_view(&mut self, mode: ViewMode) -> WizardView {
        self.session.set_view(mode);
        tracing::debug!(?mode, "view mode changed");
        self.wizard_view()
    }

    /// Jumps to a node picked on the map. Unknown ids are a 404.
    pub fn navigate_from_map(&mut self, id: &str) -> Result<WizardView, ApiError> {
        let from = self.session.current_id().clone();
        self.session.jump_from_map(&self.graph, id)?;
        self.log_transition(&from, "map_navigate");
        Ok(self.wizard_view())
    }

    fn log_transition(&self, from: &NodeId, action: &str) {
        tracing::debug!(
            action,
            from = %from,
            to = %self.session.current_id(),
            history = self.session.history().len(),
            "wizard transition"
        );
    }

    // -----------------------------------------------------------------------
    // Map
    // -----------------------------------------------------------------------

    fn layout(&self, width: Option<f64>, height: Option<f64>) -> Result<Layout, ApiError> {
        let defaults = LayoutConfig::default();
        let config = LayoutConfig::with_viewport(
            width.unwrap_or(defaults.viewport_width),
            height.unwrap_or(defaults.viewport_height),
        )?;
        Ok(compute_layout(&self.graph, &config)?)
    }

    pub fn map_layout(
        &self,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<MapLayoutResponse, ApiError> {
        let layout = self.layout(width, height)?;
        let current_id = self.session.current_id().clone();
        let initial_transform = layout
            .node(current_id.as_str())
            .map(|n| Transform::centered_on(n, &layout.config))
            .unwrap_or_default();
        Ok(MapLayoutResponse {
            current_id,
            initial_transform,
            layout,
        })
    }

    pub fn map_svg(&self, width: Option<f64>, height: Option<f64>) -> Result<String, ApiError> {
        let layout = self.layout(width, height)?;
        let opts = RenderOptions {
            current: Some(self.session.current_id().as_str()),
            transform: None,
        };
        Ok(render_svg(&layout, &opts)?)
    }
}

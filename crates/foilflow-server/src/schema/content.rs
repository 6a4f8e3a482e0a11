//! Content graph response types.

use foilflow_core::FlowGraph;
use serde::Serialize;

/// Response for `GET /api/graph`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphResponse {
    /// blake3 fingerprint of the corpus, also sent as the `ETag`.
    pub fingerprint: String,
    pub node_count: usize,
    pub edge_count: usize,
    /// The corpus itself, keyed by node id in corpus order.
    pub nodes: FlowGraph,
}

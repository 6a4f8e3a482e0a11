//! Deterministic content fingerprint using blake3.
//!
//! The fingerprint changes whenever any node's content changes and is
//! independent of corpus order: nodes are hashed sorted by id, each as its
//! canonical `serde_json` bytes. Node types contain no `HashMap`, so their
//! JSON is stable.

use crate::graph::FlowGraph;
use crate::node::FlowNode;

/// Hash of a single node's content.
pub fn hash_node(node: &FlowNode) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    // Serializing plain structs and strings cannot fail.
    let bytes = serde_json::to_vec(node).unwrap_or_default();
    hasher.update(&bytes);
    hasher.finalize()
}

/// Hash of the whole corpus.
pub fn hash_graph(graph: &FlowGraph) -> blake3::Hash {
    let mut nodes: Vec<&FlowNode> = graph.nodes().collect();
    nodes.sort_by(|a, b| a.id.cmp(&b.id));

    let mut hasher = blake3::Hasher::new();
    for node in nodes {
        hasher.update(node.id.as_str().as_bytes());
        hasher.update(hash_node(node).as_bytes());
    }
    hasher.finalize()
}

impl FlowGraph {
    /// Hex digest of [`hash_graph`].
    pub fn fingerprint(&self) -> String {
        hash_graph(self).to_hex().to_string()
    }
}

//! FlowGraph: the content graph container.
//!
//! [`FlowGraph`] owns the corpus nodes in their original order and a
//! petgraph `StableGraph` holding every resolved option and progression
//! reference as a [`FlowEdge`]. References to ids that do not exist are not
//! load errors; they are recorded as [`DanglingRef`]s and degrade to the root
//! node when they become current in a wizard session.
//!
//! The graph may contain cycles (retry loops back to the same diagnostic
//! question). The only structural guarantee is that a `root` node exists.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use petgraph::visit::{Bfs, EdgeRef};
use petgraph::{Directed, Direction};
use serde::{Serialize, Serializer};

use crate::edge::{EdgeSlot, FlowEdge};
use crate::error::CoreError;
use crate::id::{NodeId, ROOT_ID};
use crate::node::FlowNode;

/// A reference to a node id that is not in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingRef {
    pub source: NodeId,
    pub slot: EdgeSlot,
    pub target: NodeId,
}

/// The content graph.
#[derive(Debug, Clone)]
pub struct FlowGraph {
    /// Corpus nodes, in corpus order.
    nodes: IndexMap<NodeId, FlowNode>,
    /// Resolved edges. Node weights are the content ids.
    edges: StableGraph<NodeId, FlowEdge, Directed, u32>,
    /// Mapping from content id to its petgraph index.
    indices: HashMap<NodeId, NodeIndex<u32>>,
    /// References whose target id is missing.
    dangling: Vec<DanglingRef>,
}

impl FlowGraph {
    /// Builds a graph from a corpus map keyed by id.
    ///
    /// Fails when a node's `id` differs from its key or when there is no
    /// `root` node.
    pub fn from_map(map: IndexMap<String, FlowNode>) -> Result<Self, CoreError> {
        let mut nodes = IndexMap::with_capacity(map.len());
        for (key, node) in map {
            if node.id.as_str() != key {
                return Err(CoreError::IdMismatch { key, id: node.id });
            }
            nodes.insert(node.id.clone(), node);
        }
        Self::build(nodes)
    }

    /// Builds a graph from a list of nodes, keyed by their own ids. A later
    /// node with a repeated id replaces the earlier one.
    pub fn from_nodes(list: impl IntoIterator<Item = FlowNode>) -> Result<Self, CoreError> {
        let nodes = list.into_iter().map(|n| (n.id.clone(), n)).collect();
        Self::build(nodes)
    }

    /// Parses a corpus JSON object (`{ "<id>": { ...node... }, ... }`).
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let map: IndexMap<String, FlowNode> = serde_json::from_str(json)?;
        Self::from_map(map)
    }

    fn build(nodes: IndexMap<NodeId, FlowNode>) -> Result<Self, CoreError> {
        if !nodes.contains_key(ROOT_ID) {
            return Err(CoreError::MissingRoot);
        }

        let mut edges = StableGraph::<NodeId, FlowEdge, Directed, u32>::with_capacity(
            nodes.len(),
            nodes.len() * 2,
        );
        let mut indices = HashMap::with_capacity(nodes.len());
        for id in nodes.keys() {
            indices.insert(id.clone(), edges.add_node(id.clone()));
        }

        let mut dangling = Vec::new();
        for node in nodes.values() {
            let from = indices[&node.id];
            let refs = node
                .options()
                .iter()
                .enumerate()
                .map(|(i, o)| (FlowEdge::option(i, &o.label), &o.next_id))
                .chain(
                    node.progression_link
                        .iter()
                        .map(|p| (FlowEdge::progression(&p.label), &p.next_id)),
                );
            for (edge, target) in refs {
                match indices.get(target) {
                    Some(&to) => {
                        edges.add_edge(from, to, edge);
                    }
                    None => dangling.push(DanglingRef {
                        source: node.id.clone(),
                        slot: edge.slot,
                        target: target.clone(),
                    }),
                }
            }
        }

        Ok(FlowGraph {
            nodes,
            edges,
            indices,
            dangling,
        })
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.get(id)
    }

    /// Like [`get`](Self::get) but reports a missing node as an error.
    pub fn node(&self, id: &str) -> Result<&FlowNode, CoreError> {
        self.get(id).ok_or_else(|| CoreError::NodeNotFound { id: id.into() })
    }

    /// The entry point.
    pub fn root(&self) -> &FlowNode {
        // Presence checked at construction.
        &self.nodes[ROOT_ID]
    }

    /// The node for `id`, or the root when `id` does not resolve.
    pub fn resolve(&self, id: &str) -> &FlowNode {
        self.get(id).unwrap_or_else(|| self.root())
    }

    /// Nodes in corpus order.
    pub fn nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// Position of `id` in corpus order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    /// Number of resolved edges.
    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    /// References whose targets are missing.
    pub fn dangling(&self) -> &[DanglingRef] {
        &self.dangling
    }

    /// Read-only access to the petgraph layer.
    pub fn petgraph(&self) -> &StableGraph<NodeId, FlowEdge, Directed, u32> {
        &self.edges
    }

    /// Resolved outgoing edges of `id` in slot order (options by index, then
    /// the progression link). Empty for unknown ids.
    pub fn successors(&self, id: &str) -> Vec<(&FlowEdge, &NodeId)> {
        let Some(&idx) = self.indices.get(id) else {
            return Vec::new();
        };
        let mut out: Vec<(&FlowEdge, &NodeId)> = self
            .edges
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.weight(), &self.edges[e.target()]))
            .collect();
        out.sort_by_key(|(edge, _)| edge.slot);
        out
    }

    /// Ids of nodes with an edge into `id`, in corpus order.
    pub fn predecessors(&self, id: &str) -> Vec<&NodeId> {
        let Some(&idx) = self.indices.get(id) else {
            return Vec::new();
        };
        let mut out: Vec<&NodeId> = self
            .edges
            .neighbors_directed(idx, Direction::Incoming)
            .map(|n| &self.edges[n])
            .collect();
        out.sort_by_key(|n| self.position(n.as_str()));
        out.dedup();
        out
    }

    /// Ids reachable from the root, the root included.
    pub fn reachable_from_root(&self) -> HashSet<NodeId> {
        let mut seen = HashSet::new();
        let start = self.indices[&NodeId::root()];
        let mut bfs = Bfs::new(&self.edges, start);
        while let Some(idx) = bfs.next(&self.edges) {
            seen.insert(self.edges[idx].clone());
        }
        seen
    }

    /// Serializes the corpus back to its JSON object form.
    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(&self.nodes)?)
    }
}

impl Serialize for FlowGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.nodes.serialize(serializer)
    }
}

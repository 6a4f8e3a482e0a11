//! Breadth-first layering.
//!
//! Starting from `root` at layer 0, each node is assigned the depth at which
//! the BFS first dequeues it, and its index within that layer is the order
//! of dequeueing. Successors are visited in slot order (options by index,
//! then the progression link) so the layout follows corpus order.
//! Dangling targets never enter the queue. Nodes the BFS never reaches have
//! no layer.

use std::collections::{HashMap, VecDeque};

use foilflow_core::{FlowGraph, NodeId};

/// Layer and in-layer position of a placed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub layer: usize,
    pub index: usize,
}

/// Result of [`assign_layers`].
#[derive(Debug, Clone, Default)]
pub struct Layering {
    slots: HashMap<NodeId, Slot>,
    /// Placed ids in BFS order.
    order: Vec<NodeId>,
    /// Number of nodes in each layer.
    counts: Vec<usize>,
}

impl Layering {
    pub fn slot(&self, id: &NodeId) -> Option<Slot> {
        self.slots.get(id).copied()
    }

    pub fn layer_of(&self, id: &NodeId) -> Option<usize> {
        self.slot(id).map(|s| s.layer)
    }

    /// Placed ids in BFS order.
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Node count per layer. `counts()[0]` is always 1 (the root).
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn layer_count(&self) -> usize {
        self.counts.len()
    }

    pub fn count_in(&self, layer: usize) -> usize {
        self.counts.get(layer).copied().unwrap_or(0)
    }

    pub fn is_placed(&self, id: &NodeId) -> bool {
        self.slots.contains_key(id)
    }
}

/// Runs the BFS over `graph` from its root.
pub fn assign_layers(graph: &FlowGraph) -> Layering {
    let mut layering = Layering::default();
    let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();
    queue.push_back((NodeId::root(), 0));

    while let Some((id, layer)) = queue.pop_front() {
        if layering.slots.contains_key(&id) {
            continue;
        }

        if layering.counts.len() <= layer {
            layering.counts.resize(layer + 1, 0);
        }
        let index = layering.counts[layer];
        layering.counts[layer] += 1;

        for (_, target) in graph.successors(id.as_str()) {
            if !layering.slots.contains_key(target) && *target != id {
                queue.push_back((target.clone(), layer + 1));
            }
        }

        layering.slots.insert(id.clone(), Slot { layer, index });
        layering.order.push(id);
    }

    layering
}

#[cfg(test)]
mod tests {
    use super::*;
    use foilflow_core::corpus;
    use foilflow_core::{FlowNode, NodeKind};

    fn ids(layering: &Layering, layer: usize) -> Vec<&str> {
        layering
            .order()
            .iter()
            .filter(|id| layering.layer_of(id) == Some(layer))
            .map(|id| id.as_str())
            .collect()
    }

    #[test]
    fn builtin_layer_counts() {
        let g = corpus::builtin().unwrap();
        let l = assign_layers(&g);
        assert_eq!(l.counts(), &[1, 2, 4, 8, 8, 7, 6, 6]);
        assert_eq!(l.order().len(), 42);
    }

    #[test]
    fn builtin_layers_follow_option_order() {
        let g = corpus::builtin().unwrap();
        let l = assign_layers(&g);
        assert_eq!(ids(&l, 1), vec!["q_wind_surfer", "q_wind_nonsurfer"]);
        assert_eq!(
            ids(&l, 2),
            vec![
                "q_boat_surfer_windy",
                "q_boat_surfer_calm",
                "q_boat_nonsurfer_windy",
                "q_boat_nonsurfer_calm"
            ]
        );
        assert_eq!(
            l.slot(&NodeId::from("prone_q1")),
            Some(Slot { layer: 4, index: 0 })
        );
        assert_eq!(
            l.slot(&NodeId::from("assist_master")),
            Some(Slot { layer: 7, index: 5 })
        );
    }

    #[test]
    fn unreachable_nodes_are_not_placed() {
        let g = corpus::builtin().unwrap();
        let l = assign_layers(&g);
        assert!(!l.is_placed(&NodeId::from("dw_q1")));
        assert!(!l.is_placed(&NodeId::from("dw_master")));
    }

    #[test]
    fn first_visit_wins_for_shared_targets() {
        // Both branches reach `shared`; it sits at the shallowest depth.
        let g = FlowGraph::from_nodes(vec![
            FlowNode::new("root", NodeKind::Question, "R", "")
                .with_option("a", "a")
                .with_option("s", "shared"),
            FlowNode::new("a", NodeKind::Question, "A", "").with_option("s", "shared"),
            FlowNode::new("shared", NodeKind::Result, "S", "").with_progression("Retry", "root"),
        ])
        .unwrap();
        let l = assign_layers(&g);
        assert_eq!(l.layer_of(&NodeId::from("shared")), Some(1));
        assert_eq!(l.counts(), &[1, 2]);
    }

    #[test]
    fn dangling_targets_and_self_loops_are_skipped() {
        let g = FlowGraph::from_nodes(vec![
            FlowNode::new("root", NodeKind::Question, "R", "")
                .with_option("ghost", "ghost")
                .with_option("again", "root")
                .with_option("next", "n"),
            FlowNode::new("n", NodeKind::Result, "N", ""),
        ])
        .unwrap();
        let l = assign_layers(&g);
        assert_eq!(l.counts(), &[1, 1]);
        assert_eq!(l.slot(&NodeId::from("n")), Some(Slot { layer: 1, index: 0 }));
    }

    #[test]
    fn lone_root() {
        let g = FlowGraph::from_nodes(vec![FlowNode::new("root", NodeKind::Result, "R", "")])
            .unwrap();
        let l = assign_layers(&g);
        assert_eq!(l.counts(), &[1]);
        assert_eq!(l.count_in(3), 0);
    }
}

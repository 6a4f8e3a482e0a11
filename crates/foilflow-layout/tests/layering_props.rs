//! Property tests for layering and link classification over random graphs.

use std::collections::{HashMap, HashSet, VecDeque};

use foilflow_core::{FlowGraph, FlowNode, NodeKind};
use foilflow_layout::layering::assign_layers;
use foilflow_layout::{compute_layout, LayoutConfig};
use proptest::prelude::*;

fn node_name(i: usize, n: usize) -> String {
    if i == 0 {
        "root".to_string()
    } else if i < n {
        format!("n{i}")
    } else {
        format!("ghost{i}")
    }
}

/// Random adjacency: up to 20 nodes, each with up to 3 targets. Targets at
/// or past `n` dangle.
fn adjacency() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..20).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(0..n + 2, 0..4), n)
    })
}

fn build(adj: &[Vec<usize>]) -> FlowGraph {
    let n = adj.len();
    let nodes = adj.iter().enumerate().map(|(i, targets)| {
        let kind = if targets.is_empty() {
            NodeKind::Result
        } else {
            NodeKind::Question
        };
        let mut node = FlowNode::new(node_name(i, n), kind, &format!("Node {i}"), "");
        for (k, &t) in targets.iter().enumerate() {
            node = node.with_option(&format!("opt{k}"), node_name(t, n));
        }
        node
    });
    FlowGraph::from_nodes(nodes).unwrap()
}

/// Plain shortest-path distances from root.
fn distances(adj: &[Vec<usize>]) -> HashMap<String, usize> {
    let n = adj.len();
    let mut dist = HashMap::new();
    let mut queue = VecDeque::from([(0usize, 0usize)]);
    let mut seen = HashSet::from([0usize]);
    while let Some((i, d)) = queue.pop_front() {
        dist.insert(node_name(i, n), d);
        for &t in &adj[i] {
            if t < n && seen.insert(t) {
                queue.push_back((t, d + 1));
            }
        }
    }
    dist
}

proptest! {
    #[test]
    fn layer_is_shortest_distance_from_root(adj in adjacency()) {
        let graph = build(&adj);
        let layering = assign_layers(&graph);
        let dist = distances(&adj);

        prop_assert_eq!(layering.order().len(), dist.len());
        for id in layering.order() {
            prop_assert_eq!(layering.layer_of(id), dist.get(id.as_str()).copied());
        }
    }

    #[test]
    fn indices_in_each_layer_are_dense(adj in adjacency()) {
        let graph = build(&adj);
        let layering = assign_layers(&graph);
        let mut per_layer: HashMap<usize, Vec<usize>> = HashMap::new();
        for id in layering.order() {
            let slot = layering.slot(id).unwrap();
            per_layer.entry(slot.layer).or_default().push(slot.index);
        }
        for (layer, mut indices) in per_layer {
            indices.sort_unstable();
            let expected: Vec<usize> = (0..layering.count_in(layer)).collect();
            prop_assert_eq!(indices, expected);
        }
    }

    #[test]
    fn forward_links_advance_exactly_one_layer(adj in adjacency()) {
        let graph = build(&adj);
        let layout = compute_layout(&graph, &LayoutConfig::default()).unwrap();
        for link in &layout.links {
            let s = layout.node(link.source.as_str()).unwrap();
            let t = layout.node(link.target.as_str()).unwrap();
            if link.backward {
                prop_assert!(t.layer <= s.layer);
            } else {
                prop_assert_eq!(t.layer, s.layer + 1);
            }
        }
    }

    #[test]
    fn every_node_is_placed_or_unreachable(adj in adjacency()) {
        let graph = build(&adj);
        let layout = compute_layout(&graph, &LayoutConfig::default()).unwrap();
        prop_assert_eq!(layout.nodes.len() + layout.unreachable.len(), graph.len());

        let mut positions = HashSet::new();
        for node in &layout.nodes {
            prop_assert!(positions.insert((node.x.to_bits(), node.y.to_bits())));
        }
    }
}

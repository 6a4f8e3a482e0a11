//! Coordinate assignment and link routing.
//!
//! [`compute_layout`] turns a [`Layering`] into absolute positions:
//! layers are columns left to right, and each column is centred vertically
//! on the viewport. Links are created for every option and progression edge
//! between two placed nodes. A link whose target does not sit in a later
//! layer than its source is a back edge (retry loops, links back to root,
//! self loops) and is routed as a loop underneath the boxes.

use foilflow_core::{EdgeSlot, FlowGraph, NodeId, NodeKind};
use serde::Serialize;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::layering::{assign_layers, Layering};

/// A point in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned extent of everything drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }
}

/// A node box with its top-left corner.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub title: String,
    pub content: String,
    pub layer: usize,
    pub index_in_layer: usize,
    pub x: f64,
    pub y: f64,
}

impl PlacedNode {
    pub fn center(&self, config: &LayoutConfig) -> Point {
        Point {
            x: self.x + config.node_width / 2.0,
            y: self.y + config.node_height / 2.0,
        }
    }
}

/// A routed link.
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub source: NodeId,
    pub target: NodeId,
    pub slot: EdgeSlot,
    pub label: String,
    /// Target layer <= source layer.
    pub backward: bool,
    /// SVG path data.
    pub path: String,
    /// Top-left corner of the label box, absent for empty labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_at: Option<Point>,
}

/// A complete layout.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub config: LayoutConfig,
    /// Placed nodes in BFS order.
    pub nodes: Vec<PlacedNode>,
    pub links: Vec<Link>,
    /// Ids the BFS from root never reached. Not drawn.
    pub unreachable: Vec<NodeId>,
    /// Node count per layer.
    pub layer_counts: Vec<usize>,
    pub bounds: Bounds,
}

impl Layout {
    pub fn node(&self, id: &str) -> Option<&PlacedNode> {
        self.nodes.iter().find(|n| n.id.as_str() == id)
    }

    pub fn backward_links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(|l| l.backward)
    }
}

/// Lays out every node reachable from root.
pub fn compute_layout(graph: &FlowGraph, config: &LayoutConfig) -> Result<Layout, LayoutError> {
    config.check()?;
    let layering = assign_layers(graph);

    let nodes = place_nodes(graph, &layering, config);
    let links = route_links(graph, &nodes, config);
    let unreachable = graph
        .ids()
        .filter(|id| !layering.is_placed(id))
        .cloned()
        .collect();
    let bounds = measure(&nodes, &links, config);

    Ok(Layout {
        config: *config,
        nodes,
        links,
        unreachable,
        layer_counts: layering.counts().to_vec(),
        bounds,
    })
}

fn place_nodes(graph: &FlowGraph, layering: &Layering, config: &LayoutConfig) -> Vec<PlacedNode> {
    layering
        .order()
        .iter()
        .filter_map(|id| {
            let node = graph.get(id.as_str())?;
            let slot = layering.slot(id)?;
            let total = layering.count_in(slot.layer).max(1) as f64;
            let layer_height = total * config.node_spacing;
            let start_y = config.viewport_height / 2.0 - layer_height / 2.0 + config.margin;
            Some(PlacedNode {
                id: id.clone(),
                kind: node.kind,
                title: node.title.clone(),
                content: node.content.clone(),
                layer: slot.layer,
                index_in_layer: slot.index,
                x: slot.layer as f64 * config.layer_spacing + config.margin,
                y: start_y + slot.index as f64 * config.node_spacing,
            })
        })
        .collect()
}

fn route_links(graph: &FlowGraph, placed: &[PlacedNode], config: &LayoutConfig) -> Vec<Link> {
    let find = |id: &NodeId| placed.iter().find(|p| &p.id == id);
    let mut links = Vec::new();

    // Corpus order, so links of the same source stay together.
    for node in graph.nodes() {
        let Some(source) = find(&node.id) else {
            continue;
        };
        for (edge, target_id) in graph.successors(node.id.as_str()) {
            let Some(target) = find(target_id) else {
                continue;
            };
            let backward = target.layer <= source.layer;
            let (path, label_at) = if backward {
                (loop_path(source, target, config), loop_label(source, target, config))
            } else {
                (curve_path(source, target, config), curve_label(source, target, config))
            };
            links.push(Link {
                source: source.id.clone(),
                target: target.id.clone(),
                slot: edge.slot,
                label: edge.label.clone(),
                backward,
                path,
                label_at: (!edge.label.is_empty()).then_some(label_at),
            });
        }
    }
    links
}

/// Horizontal cubic from the right-middle of the source to just short of
/// the left-middle of the target.
fn curve_path(s: &PlacedNode, t: &PlacedNode, c: &LayoutConfig) -> String {
    let sx = s.x + c.node_width;
    let sy = s.y + c.node_height / 2.0;
    let tx = t.x;
    let ty = t.y + c.node_height / 2.0;
    let mid_x = (sx + tx) / 2.0;
    format!(
        "M{sx},{sy} C{mid_x},{sy} {mid_x},{ty} {},{ty}",
        tx - c.arrow_gap
    )
}

/// Loop from the bottom-middle of the source, under both boxes, into the
/// bottom-middle of the target.
fn loop_path(s: &PlacedNode, t: &PlacedNode, c: &LayoutConfig) -> String {
    let sx = s.x + c.node_width / 2.0;
    let sy = s.y + c.node_height;
    let tx = t.x + c.node_width / 2.0;
    let ty = t.y + c.node_height;
    format!(
        "M{sx},{sy} C{sx},{} {tx},{} {tx},{ty}",
        sy + c.loop_drop,
        ty + c.loop_drop
    )
}

fn curve_label(s: &PlacedNode, t: &PlacedNode, c: &LayoutConfig) -> Point {
    let sx = s.x + c.node_width;
    let sy = s.y + c.node_height / 2.0;
    let ty = t.y + c.node_height / 2.0;
    Point {
        x: (sx + t.x) / 2.0 - c.label_width / 2.0,
        y: (sy + ty) / 2.0 - c.label_height / 2.0,
    }
}

fn loop_label(s: &PlacedNode, t: &PlacedNode, c: &LayoutConfig) -> Point {
    Point {
        x: (s.x + t.x + c.node_width) / 2.0 - c.label_width / 2.0,
        y: s.y.max(t.y) + c.node_height + c.loop_label_drop,
    }
}

fn measure(nodes: &[PlacedNode], links: &[Link], c: &LayoutConfig) -> Bounds {
    let mut bounds = Bounds {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };
    for n in nodes {
        bounds.include(n.x, n.y);
        bounds.include(n.x + c.node_width, n.y + c.node_height);
    }
    for p in links.iter().filter_map(|l| l.label_at) {
        bounds.include(p.x, p.y);
        bounds.include(p.x + c.label_width, p.y + c.label_height);
    }
    if nodes.is_empty() {
        return Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
        };
    }
    bounds
}

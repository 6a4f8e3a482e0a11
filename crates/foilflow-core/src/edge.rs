//! Edge types for the content graph.
//!
//! Edges are implicit in the corpus (option targets and progression links).
//! When a [`FlowGraph`](crate::graph::FlowGraph) is built, every resolved
//! reference becomes a [`FlowEdge`] in the petgraph layer, tagged with the
//! [`EdgeSlot`] it came from so that traversal can restore corpus order.

use serde::{Deserialize, Serialize};

/// Where on the source node an edge originates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum EdgeSlot {
    /// The n-th option of a question.
    Option(usize),
    /// The progression link of a result. Orders after every option.
    Progression,
}

/// A labelled edge in the content graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub slot: EdgeSlot,
    pub label: String,
}

impl FlowEdge {
    pub fn option(index: usize, label: &str) -> Self {
        FlowEdge {
            slot: EdgeSlot::Option(index),
            label: label.to_string(),
        }
    }

    pub fn progression(label: &str) -> Self {
        FlowEdge {
            slot: EdgeSlot::Progression,
            label: label.to_string(),
        }
    }

    pub fn is_progression(&self) -> bool {
        matches!(self.slot, EdgeSlot::Progression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progression_sorts_after_options() {
        let mut slots = vec![EdgeSlot::Progression, EdgeSlot::Option(1), EdgeSlot::Option(0)];
        slots.sort();
        assert_eq!(
            slots,
            vec![EdgeSlot::Option(0), EdgeSlot::Option(1), EdgeSlot::Progression]
        );
    }

    #[test]
    fn slot_serialization() {
        let json = serde_json::to_value(EdgeSlot::Option(3)).unwrap();
        assert_eq!(json["kind"], "option");
        assert_eq!(json["index"], 3);
        let json = serde_json::to_value(EdgeSlot::Progression).unwrap();
        assert_eq!(json["kind"], "progression");
    }

    #[test]
    fn constructors() {
        assert!(FlowEdge::progression("Retry").is_progression());
        assert!(!FlowEdge::option(0, "Yes").is_progression());
    }
}

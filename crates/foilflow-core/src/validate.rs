//! Structural checks over a loaded corpus.
//!
//! None of these findings prevent a corpus from loading. The server logs
//! them at startup and the CLI's `validate` command reports them.

use serde::Serialize;

use crate::graph::{DanglingRef, FlowGraph};
use crate::id::NodeId;
use crate::node::NodeKind;

/// Findings for one corpus.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Option or progression targets that do not exist.
    pub dangling: Vec<DanglingRef>,
    /// Nodes that cannot be reached from `root`, in corpus order.
    pub unreachable: Vec<NodeId>,
    /// Questions and transitions with neither options nor a progression link.
    pub dead_ends: Vec<NodeId>,
    /// Results that also carry options.
    pub results_with_options: Vec<NodeId>,
}

impl ValidationReport {
    /// No dangling references and no dead ends. Unreachable nodes and
    /// results with options are tolerated.
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.dead_ends.is_empty()
    }

    /// Human-readable one-line findings.
    pub fn messages(&self) -> Vec<String> {
        let mut out = Vec::new();
        for d in &self.dangling {
            out.push(format!(
                "'{}' links to missing node '{}' ({:?})",
                d.source, d.target, d.slot
            ));
        }
        for id in &self.unreachable {
            out.push(format!("'{id}' is not reachable from root"));
        }
        for id in &self.dead_ends {
            out.push(format!("'{id}' asks a question but offers no way forward"));
        }
        for id in &self.results_with_options {
            out.push(format!("result '{id}' carries options"));
        }
        out
    }
}

/// Runs every check over `graph`.
pub fn validate(graph: &FlowGraph) -> ValidationReport {
    let reachable = graph.reachable_from_root();

    let mut report = ValidationReport {
        dangling: graph.dangling().to_vec(),
        ..ValidationReport::default()
    };

    for node in graph.nodes() {
        if !reachable.contains(&node.id) {
            report.unreachable.push(node.id.clone());
        }
        let has_way_forward = !node.options().is_empty() || node.progression_link.is_some();
        if node.kind.expects_choice() && !has_way_forward {
            report.dead_ends.push(node.id.clone());
        }
        if node.kind == NodeKind::Result && !node.options().is_empty() {
            report.results_with_options.push(node.id.clone());
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus;
    use crate::node::FlowNode;

    #[test]
    fn builtin_corpus_is_clean_but_has_unreachable_downwind_tree() {
        let g = corpus::builtin().unwrap();
        let report = validate(&g);
        assert!(report.is_clean(), "{:?}", report.messages());
        let unreachable: Vec<&str> = report.unreachable.iter().map(|i| i.as_str()).collect();
        assert_eq!(
            unreachable,
            vec!["dw_q1", "dw_adv_1", "dw_q2", "dw_adv_2", "dw_q3", "dw_adv_3", "dw_master"]
        );
    }

    #[test]
    fn reports_every_finding_kind() {
        let g = FlowGraph::from_nodes(vec![
            FlowNode::new("root", NodeKind::Question, "Q", "")
                .with_option("a", "stuck")
                .with_option("b", "ghost")
                .with_option("c", "odd"),
            FlowNode::new("stuck", NodeKind::Transition, "T", ""),
            FlowNode::new("odd", NodeKind::Result, "R", "").with_option("again", "root"),
            FlowNode::new("lonely", NodeKind::Result, "L", ""),
        ])
        .unwrap();

        let report = validate(&g);
        assert!(!report.is_clean());
        assert_eq!(report.dangling.len(), 1);
        assert_eq!(report.dangling[0].target.as_str(), "ghost");
        assert_eq!(report.dead_ends, vec![NodeId::from("stuck")]);
        assert_eq!(report.results_with_options, vec![NodeId::from("odd")]);
        assert_eq!(report.unreachable, vec![NodeId::from("lonely")]);
        assert_eq!(report.messages().len(), 4);
    }

    #[test]
    fn unreachable_alone_is_still_clean() {
        let g = FlowGraph::from_nodes(vec![
            FlowNode::new("root", NodeKind::Result, "R", ""),
            FlowNode::new("x", NodeKind::Result, "X", ""),
        ])
        .unwrap();
        let report = validate(&g);
        assert!(report.is_clean());
        assert_eq!(report.unreachable.len(), 1);
    }
}

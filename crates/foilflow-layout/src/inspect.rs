//! On-demand node detail for the map's inspector panel.

use foilflow_core::{CoreError, FlowGraph, NodeId, NodeKind, RoadmapStep};
use serde::Serialize;

/// Label shown for a target id that does not resolve.
const DANGLING_TARGET_NAME: &str = "Next";

/// Hint shown when navigating would leave the map.
pub const NAVIGATE_HINT: &str = "Clicking will switch view to Wizard mode";

/// One outgoing path of an inspected question.
#[derive(Debug, Clone, Serialize)]
pub struct PathPreview {
    pub label: String,
    pub next_id: NodeId,
    /// Short title of the target ("leads to ...").
    pub leads_to: String,
}

/// Inspector panel content.
#[derive(Debug, Clone, Serialize)]
pub struct InspectorView {
    pub id: NodeId,
    pub kind: NodeKind,
    pub badge: &'static str,
    pub title: String,
    pub content: String,
    /// Questions only.
    pub paths: Vec<PathPreview>,
    pub roadmap: Vec<RoadmapStep>,
    pub is_current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_hint: Option<&'static str>,
}

/// Badge shown in the inspector header.
pub fn inspector_badge(kind: NodeKind) -> &'static str {
    if kind.is_result() {
        "Recommendation"
    } else {
        "Question"
    }
}

/// Builds the inspector view of `id`. `current` is the wizard's current id.
pub fn inspect(graph: &FlowGraph, id: &str, current: &NodeId) -> Result<InspectorView, CoreError> {
    let node = graph.node(id)?;
    let is_current = node.id == *current;

    let paths = if node.kind.expects_choice() {
        node.options()
            .iter()
            .map(|o| PathPreview {
                label: o.label.clone(),
                next_id: o.next_id.clone(),
                leads_to: graph
                    .get(o.next_id.as_str())
                    .map(|t| t.short_title().to_string())
                    .unwrap_or_else(|| DANGLING_TARGET_NAME.to_string()),
            })
            .collect()
    } else {
        Vec::new()
    };

    Ok(InspectorView {
        id: node.id.clone(),
        kind: node.kind,
        badge: inspector_badge(node.kind),
        title: node.title.clone(),
        content: node.content.clone(),
        paths,
        roadmap: node.roadmap.clone().unwrap_or_default(),
        is_current,
        navigate_hint: (!is_current).then_some(NAVIGATE_HINT),
    })
}

//! Content node types.
//!
//! A [`FlowNode`] is a single screen of the decision wizard: either a
//! question offering labelled [`FlowOption`]s, or a result carrying an
//! [`Analysis`], an ordered roadmap and an optional [`ProgressionLink`] into
//! a skill diagnostic sub-graph. Field names serialize in camelCase to match
//! the corpus JSON format.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::id::NodeId;

/// What kind of screen a node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A multiple-choice question.
    Question,
    /// A recommendation or drill at the end of a path.
    Result,
    /// An intermediate screen. Treated like a question except for its badge.
    Transition,
}

impl NodeKind {
    pub fn is_result(self) -> bool {
        matches!(self, NodeKind::Result)
    }

    /// Questions and transitions expect the user to pick an option.
    pub fn expects_choice(self) -> bool {
        !self.is_result()
    }
}

/// A labelled edge from a question to another node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowOption {
    pub label: String,
    pub next_id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One ordered phase of a recommendation roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub title: String,
    pub description: String,
}

/// "Why this, why not that" rationale for a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub why: String,
    #[serde(default)]
    pub why_not: Vec<String>,
}

/// A result node's edge into a diagnostic sub-graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionLink {
    pub label: String,
    pub next_id: NodeId,
}

/// Options are almost always a yes/no pair.
pub type Options = SmallVec<[FlowOption; 2]>;

/// A single question or result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub title: String,
    /// Body text shown under the title.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roadmap: Option<Vec<RoadmapStep>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progression_link: Option<ProgressionLink>,
}

impl FlowNode {
    /// Creates a bare node with no options, analysis, roadmap or progression.
    pub fn new(id: impl Into<NodeId>, kind: NodeKind, title: &str, content: &str) -> Self {
        FlowNode {
            id: id.into(),
            kind,
            title: title.to_string(),
            content: content.to_string(),
            roadmap: None,
            analysis: None,
            options: None,
            progression_link: None,
        }
    }

    /// Builder: appends an option.
    pub fn with_option(mut self, label: &str, next_id: impl Into<NodeId>) -> Self {
        self.options.get_or_insert_with(Options::new).push(FlowOption {
            label: label.to_string(),
            next_id: next_id.into(),
            description: None,
        });
        self
    }

    /// Builder: sets the progression link.
    pub fn with_progression(mut self, label: &str, next_id: impl Into<NodeId>) -> Self {
        self.progression_link = Some(ProgressionLink {
            label: label.to_string(),
            next_id: next_id.into(),
        });
        self
    }

    /// Builder: appends a roadmap step.
    pub fn with_step(mut self, title: &str, description: &str) -> Self {
        self.roadmap.get_or_insert_with(Vec::new).push(RoadmapStep {
            title: title.to_string(),
            description: description.to_string(),
        });
        self
    }

    /// Builder: sets the analysis.
    pub fn with_analysis(mut self, why: &str, why_not: &[&str]) -> Self {
        self.analysis = Some(Analysis {
            why: why.to_string(),
            why_not: why_not.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    /// The node's options, empty when it has none.
    pub fn options(&self) -> &[FlowOption] {
        self.options.as_deref().unwrap_or(&[])
    }

    /// Outgoing target ids in traversal order: options first, then the
    /// progression link.
    pub fn targets(&self) -> impl Iterator<Item = &NodeId> {
        self.options()
            .iter()
            .map(|o| &o.next_id)
            .chain(self.progression_link.iter().map(|p| &p.next_id))
    }

    /// The part of the title before the first `:`, used as a short name for
    /// link previews ("Core Assessment: Wind" -> "Core Assessment").
    pub fn short_title(&self) -> &str {
        self.title.split(':').next().unwrap_or(&self.title)
    }

    /// The part of the title after the first `:`, trimmed, or the whole
    /// title when there is no `:` ("Core Assessment: Wind" -> "Wind").
    pub fn topic(&self) -> &str {
        topic_of(&self.title)
    }
}

/// See [`FlowNode::topic`]. Works on a bare title string so that history
/// entries can be labelled without the node at hand.
pub fn topic_of(title: &str) -> &str {
    match title.split_once(':') {
        Some((_, rest)) => {
            // Only the segment right after the first ':' is shown.
            let topic = rest.split(':').next().unwrap_or(rest).trim();
            if topic.is_empty() {
                title
            } else {
                topic
            }
        }
        None => title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_corpus_shape() {
        let json = r#"{
            "id": "res_wake_only",
            "type": "result",
            "title": "Recommendation: Wake Foiling",
            "content": "This is your sport.",
            "analysis": { "why": "Only option.", "whyNot": ["Prone: hard."] },
            "roadmap": [{ "title": "Setup", "description": "Short rope." }],
            "progressionLink": { "label": "Back to Start", "nextId": "root" }
        }"#;
        let node: FlowNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, NodeKind::Result);
        assert_eq!(node.analysis.as_ref().unwrap().why_not.len(), 1);
        assert_eq!(node.roadmap.as_ref().unwrap()[0].title, "Setup");
        assert!(node.progression_link.as_ref().unwrap().next_id.is_root());
        assert!(node.options().is_empty());
    }

    #[test]
    fn options_keep_order_and_description() {
        let json = r#"{
            "id": "root", "type": "question", "title": "T", "content": "C",
            "options": [
                { "label": "Yes", "nextId": "a", "description": "first" },
                { "label": "No", "nextId": "b" }
            ]
        }"#;
        let node: FlowNode = serde_json::from_str(json).unwrap();
        let opts = node.options();
        assert_eq!(opts[0].next_id.as_str(), "a");
        assert_eq!(opts[0].description.as_deref(), Some("first"));
        assert_eq!(opts[1].label, "No");
    }

    #[test]
    fn missing_why_not_defaults_to_empty() {
        let a: Analysis = serde_json::from_str(r#"{ "why": "Physics." }"#).unwrap();
        assert!(a.why_not.is_empty());
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let node = FlowNode::new("x", NodeKind::Question, "T", "C");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "question");
        assert!(value.get("options").is_none());
        assert!(value.get("progressionLink").is_none());
    }

    #[test]
    fn targets_list_options_then_progression() {
        let node = FlowNode::new("r", NodeKind::Result, "T", "C")
            .with_option("a", "n1")
            .with_option("b", "n2")
            .with_progression("Retry", "n0");
        let targets: Vec<&str> = node.targets().map(|t| t.as_str()).collect();
        assert_eq!(targets, vec!["n1", "n2", "n0"]);
    }

    #[test]
    fn short_title_and_topic() {
        let node = FlowNode::new("q", NodeKind::Question, "Core Assessment: Wind", "");
        assert_eq!(node.short_title(), "Core Assessment");
        assert_eq!(node.topic(), "Wind");

        let plain = FlowNode::new("q", NodeKind::Question, "Wave Assessment", "");
        assert_eq!(plain.short_title(), "Wave Assessment");
        assert_eq!(plain.topic(), "Wave Assessment");
    }

    #[test]
    fn topic_of_empty_suffix_falls_back_to_title() {
        assert_eq!(topic_of("Prefix:"), "Prefix:");
        assert_eq!(topic_of("A: B: C"), "B");
    }

    #[test]
    fn transition_expects_choice() {
        assert!(NodeKind::Transition.expects_choice());
        assert!(NodeKind::Question.expects_choice());
        assert!(!NodeKind::Result.expects_choice());
    }
}

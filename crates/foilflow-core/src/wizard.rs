//! Wizard session: the question/answer walker with linear history.
//!
//! A [`WizardSession`] is three fields of state (current node, history, view
//! mode) plus the transitions the UI can trigger. The session does not own
//! the content graph; every operation takes the [`FlowGraph`] it walks.
//!
//! The current id is allowed to dangle. Whatever is rendered for a dangling
//! id is the root node (see [`FlowGraph::resolve`]).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::graph::FlowGraph;
use crate::id::NodeId;
use crate::node::{topic_of, Analysis, FlowNode, NodeKind, ProgressionLink, RoadmapStep};

/// Title recorded in history when the node being left does not resolve.
const FALLBACK_QUESTION_TITLE: &str = "Question";

/// Answer label recorded for the "Start Over" action.
pub const RESTART_LABEL: &str = "Restart";

/// Which of the two top-level views is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Wizard,
    Map,
}

/// One step of the path taken so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// The node that was showing when the answer was given.
    pub node_id: NodeId,
    /// That node's title.
    pub question_title: String,
    /// The label of the option or link that was chosen.
    pub answer_label: String,
}

/// State of one user's walk through the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSession {
    current: NodeId,
    history: Vec<HistoryItem>,
    view_mode: ViewMode,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    /// A fresh session at `root` with empty history in wizard view.
    pub fn new() -> Self {
        WizardSession {
            current: NodeId::root(),
            history: Vec::new(),
            view_mode: ViewMode::Wizard,
        }
    }

    pub fn current_id(&self) -> &NodeId {
        &self.current
    }

    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The node to show: the current node, or root when the current id
    /// dangles.
    pub fn current_node<'g>(&self, graph: &'g FlowGraph) -> &'g FlowNode {
        graph.resolve(self.current.as_str())
    }

    /// Moves to `next_id`, recording `answer_label` against the node being
    /// left. Selecting `root` is a reset: history is cleared instead.
    pub fn select(&mut self, graph: &FlowGraph, next_id: &NodeId, answer_label: &str) {
        if next_id.is_root() {
            self.history.clear();
            self.current = NodeId::root();
            return;
        }

        let question_title = graph
            .get(self.current.as_str())
            .map(|n| n.title.clone())
            .unwrap_or_else(|| FALLBACK_QUESTION_TITLE.to_string());

        self.history.push(HistoryItem {
            node_id: self.current.clone(),
            question_title,
            answer_label: answer_label.to_string(),
        });
        self.current = next_id.clone();
    }

    /// Picks the `index`th option of the node being shown.
    pub fn choose_option(&mut self, graph: &FlowGraph, index: usize) -> Result<(), CoreError> {
        let node = self.current_node(graph);
        let options = node.options();
        let option = options.get(index).ok_or_else(|| CoreError::OptionOutOfRange {
            id: node.id.clone(),
            index,
            len: options.len(),
        })?;
        let (next, label) = (option.next_id.clone(), option.label.clone());
        self.select(graph, &next, &label);
        Ok(())
    }

    /// Follows the progression link of the node being shown.
    pub fn follow_progression(&mut self, graph: &FlowGraph) -> Result<(), CoreError> {
        let node = self.current_node(graph);
        let link = node
            .progression_link
            .as_ref()
            .ok_or_else(|| CoreError::NoProgression {
                id: node.id.clone(),
            })?;
        let (next, label) = (link.next_id.clone(), link.label.clone());
        self.select(graph, &next, &label);
        Ok(())
    }

    /// The "Start Over" action on result screens.
    pub fn start_over(&mut self, graph: &FlowGraph) {
        self.select(graph, &NodeId::root(), RESTART_LABEL);
    }

    /// Returns to the node recorded at `index`. That item and everything
    /// after it are dropped from history.
    pub fn jump_to_history(&mut self, index: usize) -> Result<(), CoreError> {
        let len = self.history.len();
        let target = self
            .history
            .get(index)
            .map(|item| item.node_id.clone())
            .ok_or(CoreError::HistoryOutOfRange { index, len })?;
        self.history.truncate(index);
        self.current = target;
        Ok(())
    }

    /// Jumps to a node picked on the map and switches to the wizard view.
    /// History is kept as it is.
    pub fn jump_from_map(&mut self, graph: &FlowGraph, id: &str) -> Result<(), CoreError> {
        let node = graph.node(id)?;
        self.current = node.id.clone();
        self.view_mode = ViewMode::Wizard;
        Ok(())
    }

    /// Back to root with empty history. The view mode is left alone.
    pub fn restart(&mut self) {
        self.history.clear();
        self.current = NodeId::root();
    }

    pub fn set_view(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Render-ready projection of the session.
    pub fn view(&self, graph: &FlowGraph) -> WizardView {
        WizardView::build(self, graph)
    }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// A selectable option as shown on the card.
#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub index: usize,
    pub label: String,
    pub next_id: NodeId,
}

/// A numbered roadmap step.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapStepView {
    pub number: usize,
    pub title: String,
    pub description: String,
}

/// A history sidebar entry.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntryView {
    pub index: usize,
    pub node_id: NodeId,
    /// Short question label shown above the answer.
    pub topic: String,
    pub answer: String,
}

/// Everything the wizard card and history sidebar need.
#[derive(Debug, Clone, Serialize)]
pub struct WizardView {
    /// The id the session points at (may dangle).
    pub current_id: NodeId,
    /// The id of the node actually shown.
    pub node_id: NodeId,
    pub kind: NodeKind,
    pub badge: &'static str,
    pub title: String,
    pub content: String,
    /// Results only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    /// Results only.
    pub roadmap: Vec<RoadmapStepView>,
    pub options: Vec<OptionView>,
    /// Results only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progression: Option<ProgressionLink>,
    /// Results offer a "Start Over" action.
    pub can_start_over: bool,
    pub history: Vec<HistoryEntryView>,
    pub view_mode: ViewMode,
}

/// Badge shown on the wizard card.
pub fn card_badge(kind: NodeKind) -> &'static str {
    if kind.is_result() {
        "Recommendation"
    } else {
        "Diagnostic Question"
    }
}

impl WizardView {
    fn build(session: &WizardSession, graph: &FlowGraph) -> Self {
        let node = session.current_node(graph);
        let is_result = node.kind.is_result();

        let roadmap = if is_result {
            numbered(node.roadmap.as_deref().unwrap_or(&[]))
        } else {
            Vec::new()
        };

        WizardView {
            current_id: session.current.clone(),
            node_id: node.id.clone(),
            kind: node.kind,
            badge: card_badge(node.kind),
            title: node.title.clone(),
            content: node.content.clone(),
            analysis: node.analysis.clone().filter(|_| is_result),
            roadmap,
            options: node
                .options()
                .iter()
                .enumerate()
                .map(|(index, o)| OptionView {
                    index,
                    label: o.label.clone(),
                    next_id: o.next_id.clone(),
                })
                .collect(),
            progression: node.progression_link.clone().filter(|_| is_result),
            can_start_over: is_result,
            history: session
                .history
                .iter()
                .enumerate()
                .map(|(index, item)| HistoryEntryView {
                    index,
                    node_id: item.node_id.clone(),
                    topic: topic_of(&item.question_title).to_string(),
                    answer: item.answer_label.clone(),
                })
                .collect(),
            view_mode: session.view_mode,
        }
    }
}

fn numbered(steps: &[RoadmapStep]) -> Vec<RoadmapStepView> {
    steps
        .iter()
        .enumerate()
        .map(|(i, s)| RoadmapStepView {
            number: i + 1,
            title: s.title.clone(),
            description: s.description.clone(),
        })
        .collect()
}

//! Content graph and wizard state for the Foil Flow decision guide.
//!
//! - [`graph::FlowGraph`]: the static content graph (questions, results,
//!   option and progression edges), loaded from JSON.
//! - [`validate`]: structural checks over a corpus.
//! - [`wizard::WizardSession`]: the question/answer walker with history.

pub mod corpus;
pub mod edge;
pub mod error;
pub mod graph;
pub mod hash;
pub mod id;
pub mod node;
pub mod validate;
pub mod wizard;

// Re-export commonly used types
pub use edge::{EdgeSlot, FlowEdge};
pub use error::CoreError;
pub use graph::{DanglingRef, FlowGraph};
pub use id::{NodeId, ROOT_ID};
pub use node::{Analysis, FlowNode, FlowOption, NodeKind, ProgressionLink, RoadmapStep};
pub use validate::{validate, ValidationReport};
pub use wizard::{HistoryItem, ViewMode, WizardSession, WizardView};

//! Core error types for foilflow-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering corpus
//! loading and wizard navigation failures.

use crate::id::NodeId;
use thiserror::Error;

/// Core errors produced by the foilflow-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The corpus JSON could not be parsed.
    #[error("malformed corpus: {0}")]
    Parse(#[from] serde_json::Error),

    /// A node's `id` field differs from the key it is stored under.
    #[error("node stored under '{key}' declares id '{id}'")]
    IdMismatch { key: String, id: NodeId },

    /// The corpus has no `root` entry point.
    #[error("corpus has no 'root' node")]
    MissingRoot,

    /// A node id was not found in the graph.
    #[error("node not found: '{id}'")]
    NodeNotFound { id: NodeId },

    /// An option index past the end of a node's options.
    #[error("node '{id}' has {len} option(s), no option {index}")]
    OptionOutOfRange { id: NodeId, index: usize, len: usize },

    /// Asked to follow a progression link on a node that has none.
    #[error("node '{id}' has no progression link")]
    NoProgression { id: NodeId },

    /// A history index past the end of the history.
    #[error("history has {len} item(s), no item {index}")]
    HistoryOutOfRange { index: usize, len: usize },
}

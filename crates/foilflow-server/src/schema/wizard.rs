//! Wizard request types.

use foilflow_core::ViewMode;
use serde::Deserialize;

/// Request to pick an option of the current question.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    /// Zero-based option index.
    pub option: usize,
}

/// Request to move to an arbitrary node with a given answer label.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectRequest {
    pub next_id: String,
    pub label: String,
}

/// Request to switch between the wizard and map views.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewRequest {
    pub mode: ViewMode,
}

//! Layout error types.

use thiserror::Error;

/// Errors produced while laying out or rendering a graph.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A layout dimension is zero, negative or not finite.
    #[error("invalid layout dimension {name} = {value}")]
    InvalidDimension { name: String, value: f64 },

    /// Writing the SVG document failed.
    #[error("render failed: {0}")]
    Render(#[from] std::fmt::Error),

    /// A content graph lookup failed.
    #[error(transparent)]
    Core(#[from] foilflow_core::CoreError),
}

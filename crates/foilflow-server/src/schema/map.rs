//! Map request and response types.

use foilflow_core::NodeId;
use foilflow_layout::{Layout, Transform};
use serde::{Deserialize, Serialize};

/// Viewport size for map endpoints. Missing values use the layout defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapQuery {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

/// Response for `GET /api/map/layout`.
#[derive(Debug, Clone, Serialize)]
pub struct MapLayoutResponse {
    pub current_id: NodeId,
    /// Transform that centres the current node at scale 1 (identity when the
    /// current node is not placed).
    pub initial_transform: Transform,
    pub layout: Layout,
}

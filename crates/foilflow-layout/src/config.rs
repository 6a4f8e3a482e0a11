//! Layout dimensions.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Box sizes, spacing and viewport size used by the layout and renderer.
///
/// Spacing is generous: edge labels sit between layers and need the
/// horizontal room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    /// Horizontal distance between the left edges of adjacent layers.
    pub layer_spacing: f64,
    /// Vertical distance between the top edges of nodes in a layer.
    pub node_spacing: f64,
    /// Offset applied to both axes.
    pub margin: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub label_width: f64,
    pub label_height: f64,
    /// Forward links stop this far short of the target for the arrowhead.
    pub arrow_gap: f64,
    /// How far below the boxes a backward link loops.
    pub loop_drop: f64,
    /// How far below the lower box a backward link's label sits.
    pub loop_label_drop: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            node_width: 300.0,
            node_height: 160.0,
            layer_spacing: 450.0,
            node_spacing: 220.0,
            margin: 100.0,
            viewport_width: 1200.0,
            viewport_height: 800.0,
            label_width: 150.0,
            label_height: 28.0,
            arrow_gap: 10.0,
            loop_drop: 120.0,
            loop_label_drop: 90.0,
            min_zoom: 0.1,
            max_zoom: 1.5,
        }
    }
}

impl LayoutConfig {
    /// Default dimensions with a different viewport.
    pub fn with_viewport(width: f64, height: f64) -> Result<Self, LayoutError> {
        let config = LayoutConfig {
            viewport_width: width,
            viewport_height: height,
            ..LayoutConfig::default()
        };
        config.check()?;
        Ok(config)
    }

    /// Rejects non-finite or non-positive dimensions and inverted zoom
    /// bounds.
    pub fn check(&self) -> Result<(), LayoutError> {
        let positive = [
            ("node_width", self.node_width),
            ("node_height", self.node_height),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("min_zoom", self.min_zoom),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidDimension {
                    name: name.to_string(),
                    value,
                });
            }
        }
        if !self.max_zoom.is_finite() || self.max_zoom < self.min_zoom {
            return Err(LayoutError::InvalidDimension {
                name: "max_zoom".to_string(),
                value: self.max_zoom,
            });
        }
        Ok(())
    }
}

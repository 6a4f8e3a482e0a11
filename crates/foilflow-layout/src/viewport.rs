//! Pan/zoom transform.
//!
//! A [`Transform`] maps layout space to screen space as
//! `screen = layout * k + (x, y)`. Zoom is always clamped to the configured
//! extent so text never shrinks past readability.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::layout::{Bounds, PlacedNode, Point};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub k: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        x: 0.0,
        y: 0.0,
        k: 1.0,
    };

    /// Scale 1, with `node` centred in the viewport.
    pub fn centered_on(node: &PlacedNode, config: &LayoutConfig) -> Self {
        Transform {
            x: config.viewport_width / 2.0 - node.x - config.node_width / 2.0,
            y: config.viewport_height / 2.0 - node.y - config.node_height / 2.0,
            k: 1.0,
        }
    }

    /// Largest clamped scale that shows all of `bounds` with `padding`
    /// around it, centred.
    pub fn fit(bounds: &Bounds, config: &LayoutConfig, padding: f64) -> Self {
        let w = (bounds.width() + 2.0 * padding).max(1.0);
        let h = (bounds.height() + 2.0 * padding).max(1.0);
        let k = clamp_zoom(
            (config.viewport_width / w).min(config.viewport_height / h),
            config,
        );
        let cx = (bounds.min_x + bounds.max_x) / 2.0;
        let cy = (bounds.min_y + bounds.max_y) / 2.0;
        Transform {
            x: config.viewport_width / 2.0 - cx * k,
            y: config.viewport_height / 2.0 - cy * k,
            k,
        }
    }

    /// Shifts by a screen-space delta.
    pub fn pan(self, dx: f64, dy: f64) -> Self {
        Transform {
            x: self.x + dx,
            y: self.y + dy,
            k: self.k,
        }
    }

    /// Multiplies the scale by `factor` (clamped), keeping the screen point
    /// `anchor` over the same layout point.
    pub fn zoom_about(self, anchor: Point, factor: f64, config: &LayoutConfig) -> Self {
        let k = clamp_zoom(self.k * factor, config);
        let world = self.invert(anchor);
        Transform {
            x: anchor.x - world.x * k,
            y: anchor.y - world.y * k,
            k,
        }
    }

    /// Layout space to screen space.
    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: p.x * self.k + self.x,
            y: p.y * self.k + self.y,
        }
    }

    /// Screen space to layout space.
    pub fn invert(&self, p: Point) -> Point {
        Point {
            x: (p.x - self.x) / self.k,
            y: (p.y - self.y) / self.k,
        }
    }

    /// SVG `transform` attribute value.
    pub fn to_svg(&self) -> String {
        format!("translate({},{}) scale({})", self.x, self.y, self.k)
    }
}

/// Clamps a scale factor into `[min_zoom, max_zoom]`. Non-finite input
/// yields 1.
pub fn clamp_zoom(k: f64, config: &LayoutConfig) -> f64 {
    if !k.is_finite() {
        return 1.0_f64.clamp(config.min_zoom, config.max_zoom);
    }
    k.clamp(config.min_zoom, config.max_zoom)
}

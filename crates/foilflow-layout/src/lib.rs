//! Layered map layout and rendering for Foil Flow content graphs.
//!
//! The pipeline is [`layering::assign_layers`] (BFS depth per node) ->
//! [`layout::compute_layout`] (coordinates, routed links, bounds) ->
//! [`svg::render_svg`]. [`viewport`] holds the pan/zoom math shared by the
//! renderer and clients; [`inspect`] builds the detail panel for one node.

pub mod config;
pub mod error;
pub mod inspect;
pub mod layering;
pub mod layout;
pub mod svg;
pub mod viewport;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use inspect::{inspect, InspectorView};
pub use layout::{compute_layout, Layout, Link, PlacedNode, Point};
pub use svg::{render_svg, RenderOptions};
pub use viewport::Transform;

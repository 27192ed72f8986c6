//! Host-owned anchors and the retained scene used by headless hosts.
//!
//! Visualizations only ever talk to a [`anchor::SceneAnchor`]; [`retained::RetainedScene`] is
//! the in-memory implementation, which can also be exported to SVG and rasterized.

/// Anchor trait.
pub mod anchor;
/// Axis guides.
pub mod axis;
/// CPU rasterization of a retained scene.
pub mod raster;
/// In-memory retained scene.
pub mod retained;

//! Embedding imperative visualizations in a re-rendering host.

/// Static linear axis.
pub mod axis_demo;
/// Blackbox lifecycle and host wrapper.
pub mod blackbox;
/// Closure-backed blackboxes.
pub mod fn_blackbox;
/// Single-series bar chart refitted on every render.
pub mod simple_barchart;
/// The stacked-to-grouped bar chart.
pub mod stacked_to_grouped;

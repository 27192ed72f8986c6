//! Synthetic series and their stacked layout.

/// "Bumps" series generator.
pub mod series;
/// Cumulative stacking.
pub mod stack;

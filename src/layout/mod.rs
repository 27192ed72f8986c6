//! Scales and bar geometry for both arrangements.

/// Stacked and grouped bar geometry.
pub mod arrangement;
/// Band and linear scales.
pub mod scale;

//! Per-element animation: easing, interpolated attributes, step tracks, and the one-shot timer.

/// Interpolated bar attributes and partial patches.
pub mod attrs;
/// Easing curves.
pub mod ease;
/// One-shot timer.
pub mod timer;
/// Sequential per-element step tracks.
pub mod track;

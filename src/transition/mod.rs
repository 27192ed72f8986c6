//! Arrangement transitions: choreography, toggle delivery, and the scheduler.

/// Step lists for entry and arrangement transitions.
pub mod plan;
/// Staggered two-phase scheduler.
pub mod scheduler;
/// Toggle request channel.
pub mod toggle;

//! Shared primitives: time, geometry, colour, errors, and the deterministic RNG.

/// Time, sizes, margins, and colours.
pub mod core;
/// Crate error type.
pub mod error;
/// SplitMix64 generator.
pub mod rng;

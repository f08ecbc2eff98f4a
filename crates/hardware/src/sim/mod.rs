//! Simulation front-door: image loading and the run loop.

/// Hex-text image parsing and file loading.
pub mod loader;
/// The `Simulator` owner type.
pub mod simulator;

pub use simulator::Simulator;

//! Common types shared across the simulator.

/// System-wide constants (store geometry, register count, word size).
pub mod constants;
/// Error taxonomy for image loading and run control.
pub mod error;

pub use error::{ImageError, SimError};

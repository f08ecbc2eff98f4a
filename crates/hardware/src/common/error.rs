//! Error definitions for the simulator.
//!
//! The taxonomy is deliberately small: an initial image that cannot be
//! opened or parsed is fatal before any cycle runs, and the optional
//! cycle-limit watchdog reports a run that never reached halt. Hazards are
//! never errors; they are resolved by the stall/flush protocol inside the
//! pipeline, so no error value crosses the engine boundary during normal
//! operation.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to construct an initial store or register image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The image file could not be opened or read.
    #[error("cannot read image '{path}': {source}")]
    Open {
        /// Path of the image file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A token in the image was not a valid hexadecimal byte.
    #[error("invalid hex byte token '{token}'")]
    BadToken {
        /// The offending token text.
        token: String,
    },

    /// The image holds more bytes than the target container.
    #[error("image holds {count} bytes but capacity is {capacity}")]
    TooLarge {
        /// Number of bytes parsed from the image.
        count: usize,
        /// Capacity of the target container.
        capacity: usize,
    },
}

/// Top-level simulator error.
#[derive(Debug, Error)]
pub enum SimError {
    /// An initial image failed to load; simulation never started.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The configured cycle watchdog expired before a halt committed.
    #[error("cycle limit of {limit} exceeded before halt")]
    CycleLimitExceeded {
        /// The configured limit that was reached.
        limit: u64,
    },
}

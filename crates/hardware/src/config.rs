//! Configuration for the pipeline simulator.
//!
//! The machine itself is fixed by the ISA (register count, store sizes,
//! pipeline depth), so configuration covers run control only. Values can be
//! supplied as JSON or built with `Config::default()`.

use serde::Deserialize;

/// Simulator run configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Emit per-stage trace events (a `tracing` subscriber must be
    /// installed by the host for these to appear).
    pub trace: bool,

    /// Abort the run with [`SimError::CycleLimitExceeded`] after this many
    /// cycles without a halt. `None` (the default) runs unbounded, like the
    /// hardware being modeled: a program that never halts spins in fetch
    /// indefinitely.
    ///
    /// [`SimError::CycleLimitExceeded`]: crate::common::SimError::CycleLimitExceeded
    pub max_cycles: Option<u64>,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Unknown fields are rejected so a typo in a config file surfaces
    /// instead of silently using defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if the document is not
    /// valid JSON or does not match the schema.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

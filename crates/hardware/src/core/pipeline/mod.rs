//! The five-stage pipeline.
//!
//! Stages advance in reverse order (WB, MEM, EX, ID, IF) once per cycle so
//! each stage observes the previous cycle's downstream occupancy before
//! deciding whether it may advance. Inter-stage state lives in one
//! `Option<Entry>` latch per boundary; a stage that cannot advance simply
//! leaves its input latch occupied ("wedged") and retries next cycle.

/// Hazard predicates consulted by decode.
pub mod hazards;
/// Latch entry types for each stage boundary.
pub mod latches;
/// The five stage functions.
pub mod stages;

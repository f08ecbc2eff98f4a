//! Cycle-accurate pipeline simulator library.
//!
//! This crate implements a five-stage (fetch, decode, execute, memory,
//! writeback) in-order pipeline for a small educational ISA: 16-bit
//! instructions over an 8-bit datapath, 16 byte-wide registers, and two flat
//! 256-byte stores. It provides:
//! 1. **Core:** Pipeline latches, stage functions, hazard detection, and the
//!    register file with its busy-bit scoreboard.
//! 2. **Memory:** Block-organized instruction and data stores.
//! 3. **ISA:** Centralized decoding into typed instruction records, plus a
//!    disassembler for tracing.
//! 4. **Simulation:** Hex-image loader, run loop, configuration, and
//!    statistics collection.

/// Common types and constants (errors, store geometry, register count).
pub mod common;
/// Simulator configuration (trace flag, cycle-limit watchdog).
pub mod config;
/// CPU core (architectural state, pipeline stages, cycle stepping).
pub mod core;
/// Instruction set (field extraction, decoder, opcodes, disassembler).
pub mod isa;
/// Instruction and data stores (block-organized byte-addressable memory).
pub mod mem;
/// Image loading and the simulation front-door.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the register file, both stores, and pipeline state.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new` and call `run`.
pub use crate::sim::Simulator;
/// Statistics snapshot accumulated over a run.
pub use crate::stats::SimStats;

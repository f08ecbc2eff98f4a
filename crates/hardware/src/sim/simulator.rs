//! Top-level simulator: owns the CPU and drives the run loop.

use std::path::Path;

use crate::common::SimError;
use crate::common::constants::{NUM_REGISTERS, STORE_SIZE};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::RegisterFile;
use crate::mem::{DataStore, InstructionStore};
use crate::sim::loader;
use crate::stats::SimStats;

/// A single simulation run over one program image.
///
/// Construct from pre-parsed byte images (or directly from image files),
/// call [`run`](Self::run), then read the final registers, memory, and
/// statistics. The CPU is public so tests and tools can step cycle by
/// cycle and inspect latch state.
#[derive(Debug)]
pub struct Simulator {
    /// The processor under simulation.
    pub cpu: Cpu,
    config: Config,
}

impl Simulator {
    /// Builds a simulator from byte images for the instruction store, the
    /// data store, and the registers (in index order).
    pub fn new(program: &[u8], data: &[u8], registers: &[u8], config: Config) -> Self {
        let cpu = Cpu::new(
            RegisterFile::from_seed(registers),
            InstructionStore::from_bytes(program),
            DataStore::from_bytes(data),
        );
        Self { cpu, config }
    }

    /// Builds a simulator by loading the three hex-text image files.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Image`] if any image cannot be read or parsed;
    /// no cycle runs in that case.
    pub fn from_image_files(
        program: &Path,
        data: &Path,
        registers: &Path,
        config: Config,
    ) -> Result<Self, SimError> {
        let program = loader::load_store_image(program)?;
        let data = loader::load_store_image(data)?;
        let registers = loader::load_register_image(registers)?;
        Ok(Self::new(&program, &data, &registers, config))
    }

    /// Advances the machine by one cycle.
    pub fn step(&mut self) {
        self.cpu.step();
    }

    /// Runs cycles until a halt commits in writeback.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimitExceeded`] if `config.max_cycles` is
    /// set and the program has not halted when the limit is reached. With no
    /// limit configured a program that never halts loops forever, exactly
    /// like the hardware it models.
    pub fn run(&mut self) -> Result<(), SimError> {
        while !self.cpu.halted {
            if let Some(limit) = self.config.max_cycles {
                if self.cpu.stats.cycles >= limit {
                    return Err(SimError::CycleLimitExceeded { limit });
                }
            }
            self.cpu.step();
        }
        Ok(())
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// Final data-store image in address order.
    pub fn memory_image(&self) -> [u8; STORE_SIZE] {
        self.cpu.dmem.dump()
    }

    /// Final register values in index order.
    pub fn register_image(&self) -> [u8; NUM_REGISTERS] {
        self.cpu.regs.dump()
    }
}

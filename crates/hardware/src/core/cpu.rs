//! CPU container and per-cycle stepping.
//!
//! `Cpu` owns every piece of mutable state in the system: the register
//! file, both stores, the four pipeline latches, the fetch PC, and the
//! statistics counters. The stage functions mutate it directly; nothing
//! outside the engine touches a latch.

use crate::core::arch::RegisterFile;
use crate::core::pipeline::latches::{ExecEntry, FetchEntry, IssueEntry, MemoryEntry};
use crate::core::pipeline::stages;
use crate::mem::{DataStore, InstructionStore};
use crate::stats::SimStats;

/// Processor state for one simulation run.
///
/// Stages are evaluated in reverse pipeline order within a cycle so a
/// stage's "may I advance" check always sees this cycle's downstream latch
/// state, never a half-updated one: synchronous register transfer without
/// true parallelism.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose registers with busy bits.
    pub regs: RegisterFile,
    /// Read-only instruction store.
    pub imem: InstructionStore,
    /// Read/write data store.
    pub dmem: DataStore,

    /// Fetch program counter.
    pub pc: u8,
    /// Cleared when a halt decodes; no instruction is fetched afterwards.
    pub fetch_enabled: bool,
    /// Set while a decoded control transfer drains toward resolution at
    /// the memory stage; suppresses fetch and decode.
    pub branch_pending: bool,
    /// Terminal state: a halt has committed in writeback.
    pub halted: bool,

    /// IF/ID latch.
    pub if_id: Option<FetchEntry>,
    /// ID/EX latch.
    pub id_ex: Option<IssueEntry>,
    /// EX/MEM latch.
    pub ex_mem: Option<ExecEntry>,
    /// MEM/WB latch.
    pub mem_wb: Option<MemoryEntry>,

    /// Execution statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU over pre-populated collaborators, ready to fetch from
    /// address zero.
    pub fn new(regs: RegisterFile, imem: InstructionStore, dmem: DataStore) -> Self {
        Self {
            regs,
            imem,
            dmem,
            pc: 0,
            fetch_enabled: true,
            branch_pending: false,
            halted: false,
            if_id: None,
            id_ex: None,
            ex_mem: None,
            mem_wb: None,
            stats: SimStats::default(),
        }
    }

    /// Advances the machine by one cycle: WB, MEM, EX, ID, IF.
    pub fn step(&mut self) {
        self.stats.cycles += 1;

        stages::writeback_stage(self);
        stages::memory_stage(self);
        stages::execute_stage(self);
        stages::decode_stage(self);
        stages::fetch_stage(self);
    }

    /// Discards all in-flight work after a confirmed control-flow
    /// redirection: every latch is emptied, the control stall is released,
    /// and fetch resumes from the redirected PC on the following cycle.
    /// Only a jump or branch at the memory stage triggers this.
    pub fn flush_pipeline(&mut self) {
        self.if_id = None;
        self.id_ex = None;
        self.ex_mem = None;
        self.mem_wb = None;
        self.branch_pending = false;
        self.fetch_enabled = true;
    }
}

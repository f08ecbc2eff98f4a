//! Execution statistics collection and reporting.
//!
//! This module tracks the counters accumulated over a simulation run:
//! 1. **Cycles:** Total pipeline cycles elapsed.
//! 2. **Instruction mix:** Counts by class (arithmetic, logical, data,
//!    control, halt).
//! 3. **Stalls:** Data-hazard (RAW) and control-hazard stall cycles.
//!
//! The counters are owned by the [`Cpu`](crate::core::Cpu) and mutated only
//! by the pipeline stages; callers read a snapshot after the run halts.

use std::fmt::Write as _;

use serde::Serialize;

use crate::isa::InstrClass;

/// Statistics accumulated by the pipeline engine over one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,

    /// Arithmetic instructions executed (ADD, SUB, MUL, INC).
    pub inst_arith: u64,
    /// Logical instructions executed (AND, OR, NOT, XOR).
    pub inst_logic: u64,
    /// Data-movement instructions executed (LOAD, STORE).
    pub inst_data: u64,
    /// Control-transfer instructions executed (JMP, BEQZ).
    pub inst_control: u64,
    /// Halt instructions executed.
    pub inst_halt: u64,

    /// Stall cycles due to RAW data hazards (busy source register).
    pub stalls_data: u64,
    /// Stall cycles charged while a control transfer drains to resolution.
    pub stalls_control: u64,
}

impl SimStats {
    /// Records one executed instruction of the given class.
    pub fn record(&mut self, class: InstrClass) {
        match class {
            InstrClass::Arithmetic => self.inst_arith += 1,
            InstrClass::Logical => self.inst_logic += 1,
            InstrClass::Data => self.inst_data += 1,
            InstrClass::Control => self.inst_control += 1,
            InstrClass::Halt => self.inst_halt += 1,
        }
    }

    /// Total instructions executed across all classes.
    pub fn total_instructions(&self) -> u64 {
        self.inst_arith + self.inst_logic + self.inst_data + self.inst_control + self.inst_halt
    }

    /// Total stall cycles (data + control).
    pub fn total_stalls(&self) -> u64 {
        self.stalls_data + self.stalls_control
    }

    /// Cycles per instruction.
    ///
    /// Deliberately unguarded: a run that retires zero instructions yields
    /// `inf` or `NaN`. Callers that care must check
    /// [`total_instructions`](Self::total_instructions).
    pub fn cpi(&self) -> f64 {
        self.cycles as f64 / self.total_instructions() as f64
    }

    /// Renders the statistics report in the classic fixed-column text
    /// format consumed by downstream tooling.
    pub fn render_report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Total number of instructions executed: {}",
            self.total_instructions()
        );
        let _ = writeln!(out, "Number of instructions in each class");
        let _ = writeln!(out, "Arithmetic instructions              : {}", self.inst_arith);
        let _ = writeln!(out, "Logical instructions                 : {}", self.inst_logic);
        let _ = writeln!(out, "Data instructions                    : {}", self.inst_data);
        let _ = writeln!(out, "Control instructions                 : {}", self.inst_control);
        let _ = writeln!(out, "Halt instructions                    : {}", self.inst_halt);
        let _ = writeln!(out, "Cycles Per Instruction               : {}", self.cpi());
        let _ = writeln!(out, "Total number of stalls               : {}", self.total_stalls());
        let _ = writeln!(out, "Data stalls (RAW)                    : {}", self.stalls_data);
        let _ = writeln!(out, "Control stalls                       : {}", self.stalls_control);
        out
    }
}

//! Memory (MEM) stage.
//!
//! Loads read the data store at the computed address; stores write it,
//! re-reading the value register from the register file at this stage so a
//! same-cycle writeback is visible. Control transfers resolve here: if the
//! computed target equals the PC speculative fetch already reached, the
//! stall is simply released; otherwise the whole pipeline is flushed and
//! fetch redirected. Everything continues to writeback; stores and
//! transfers arrive there as no-ops.

use tracing::{debug, trace};

use crate::core::Cpu;
use crate::core::pipeline::latches::MemoryEntry;
use crate::isa::Instruction;

/// Executes the memory stage for one cycle.
pub fn memory_stage(cpu: &mut Cpu) {
    let Some(executed) = cpu.ex_mem else {
        return;
    };
    if cpu.mem_wb.is_some() {
        return;
    }
    cpu.ex_mem = None;

    let mut load = 0;
    match executed.inst {
        Instruction::Jump { .. } | Instruction::BranchZero { .. } => {
            if cpu.pc == executed.alu {
                // The speculatively advanced fetch stream is already
                // correct; release the control stall without flushing.
                cpu.branch_pending = false;
                debug!(pc = executed.pc, resolved = executed.alu, "MEM transfer fell through");
            } else {
                cpu.pc = executed.alu;
                cpu.flush_pipeline();
                debug!(pc = executed.pc, resolved = executed.alu, "MEM transfer taken, flush");
            }
        }
        Instruction::Store { src, .. } => {
            let value = cpu.regs.read(src);
            cpu.dmem.write_byte(executed.alu, value);
            trace!(
                addr = executed.alu,
                value = %format_args!("{value:#04x}"),
                "MEM store"
            );
        }
        Instruction::Load { .. } => {
            load = cpu.dmem.read_byte(executed.alu);
            trace!(
                addr = executed.alu,
                value = %format_args!("{load:#04x}"),
                "MEM load"
            );
        }
        _ => {}
    }

    cpu.mem_wb = Some(MemoryEntry {
        inst: executed.inst,
        alu: executed.alu,
        load,
        pc: executed.pc,
    });
}

//! Writeback (WB) stage.
//!
//! Commits results to the register file and clears the destination's busy
//! bit: the loaded byte for loads, the ALU result for every other
//! result-producing opcode. A halt reaching writeback sets the terminal
//! halted flag. Stores, control transfers, and undefined encodings commit
//! nothing.

use tracing::trace;

use crate::core::Cpu;
use crate::isa::{Instruction, disasm};

/// Executes the writeback stage for one cycle.
pub fn writeback_stage(cpu: &mut Cpu) {
    let Some(entry) = cpu.mem_wb else {
        return;
    };
    cpu.mem_wb = None;

    trace!(pc = entry.pc, inst = %disasm::disassemble(entry.inst), "WB");

    match entry.inst {
        Instruction::Halt => {
            cpu.halted = true;
        }
        Instruction::Load { dst, .. } => {
            cpu.regs.write(dst, entry.load);
            cpu.regs.set_busy(dst, false);
        }
        Instruction::Alu { dst, .. } | Instruction::Not { dst, .. } => {
            cpu.regs.write(dst, entry.alu);
            cpu.regs.set_busy(dst, false);
        }
        Instruction::Inc { reg } => {
            cpu.regs.write(reg, entry.alu);
            cpu.regs.set_busy(reg, false);
        }
        Instruction::Store { .. }
        | Instruction::Jump { .. }
        | Instruction::BranchZero { .. }
        | Instruction::Undefined { .. } => {}
    }
}

//! Instruction Decode (ID) stage.
//!
//! Decodes the latched word into a typed instruction record, performs RAW
//! hazard detection against the busy-bit scoreboard, reads source operands,
//! and issues to the ID/EX latch. This stage owns all stall accounting:
//! 1. **Data stall:** a busy source register keeps the instruction latched
//!    in decode; one stall is recorded per retried cycle.
//! 2. **Control stall:** issuing a jump or branch charges two stall cycles
//!    and suppresses fetch/decode until the transfer resolves at memory.
//! 3. **Halt:** decoding a halt disables further fetch and issue; the halt
//!    itself drains through the remaining stages.

use tracing::{debug, trace};

use crate::core::Cpu;
use crate::core::pipeline::hazards::raw_hazard;
use crate::core::pipeline::latches::IssueEntry;
use crate::isa::{Instruction, decode, disasm};

/// Cycles charged against the control-stall counter when a transfer issues:
/// the transfer resolves at the memory stage two cycles later.
const CONTROL_STALL_CYCLES: u64 = 2;

/// Executes the decode stage for one cycle.
pub fn decode_stage(cpu: &mut Cpu) {
    if cpu.branch_pending {
        return;
    }
    let Some(fetched) = cpu.if_id else {
        return;
    };
    if cpu.id_ex.is_some() {
        return;
    }

    let inst = decode(fetched.word);
    trace!(pc = fetched.pc, inst = %disasm::disassemble(inst), "ID");

    // A halt issues unconditionally: no source reads, and nothing fetched
    // after it may ever decode.
    if inst == Instruction::Halt {
        cpu.fetch_enabled = false;
        cpu.stats.inst_halt += 1;
        cpu.if_id = None;
        cpu.id_ex = Some(IssueEntry {
            inst,
            a: 0,
            b: 0,
            pc: fetched.pc,
            link_pc: cpu.pc,
        });
        return;
    }

    // The hazard check precedes any control-stall accounting: a branch with
    // a busy condition register records a data stall and retries, charging
    // its control stalls only once the register is free.
    if raw_hazard(&cpu.regs, &inst) {
        cpu.stats.stalls_data += 1;
        debug!(pc = fetched.pc, inst = %disasm::disassemble(inst), "ID data stall");
        return;
    }

    let (a, b) = read_operands(cpu, &inst);

    if inst.is_control() {
        cpu.branch_pending = true;
        cpu.stats.stalls_control += CONTROL_STALL_CYCLES;
        debug!(pc = fetched.pc, "ID control transfer issued");
    }

    if let Some(dst) = busy_destination(&inst) {
        cpu.regs.set_busy(dst, true);
    }

    cpu.if_id = None;
    cpu.id_ex = Some(IssueEntry {
        inst,
        a,
        b,
        pc: fetched.pc,
        link_pc: cpu.pc,
    });
}

/// Reads the operand bytes an instruction carries into execute.
fn read_operands(cpu: &Cpu, inst: &Instruction) -> (u8, u8) {
    match *inst {
        Instruction::Alu { src1, src2, .. } => (cpu.regs.read(src1), cpu.regs.read(src2)),
        Instruction::Inc { reg } => (cpu.regs.read(reg), 0),
        Instruction::Not { src, .. } => (cpu.regs.read(src), 0),
        Instruction::Load { base, offset, .. } | Instruction::Store { base, offset, .. } => {
            (cpu.regs.read(base), offset)
        }
        Instruction::Jump { offset } => (offset, 0),
        Instruction::BranchZero { cond, offset } => (cpu.regs.read(cond), offset),
        Instruction::Halt | Instruction::Undefined { .. } => (0, 0),
    }
}

/// The destination register an issue marks busy, if any.
///
/// Loads mark their destination even though the loaded value is unknown
/// until memory; stores, control transfers, and undefined encodings write
/// no register and mark nothing.
fn busy_destination(inst: &Instruction) -> Option<usize> {
    match *inst {
        Instruction::Alu { dst, .. }
        | Instruction::Not { dst, .. }
        | Instruction::Load { dst, .. } => Some(dst),
        Instruction::Inc { reg } => Some(reg),
        Instruction::Store { .. }
        | Instruction::Jump { .. }
        | Instruction::BranchZero { .. }
        | Instruction::Halt
        | Instruction::Undefined { .. } => None,
    }
}

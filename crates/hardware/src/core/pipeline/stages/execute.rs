//! Execute (EX) stage.
//!
//! Performs the ALU operation selected by the decoded instruction with
//! 8-bit wraparound semantics, computes load/store addresses, and resolves
//! control-transfer targets against the link PC captured at issue. The
//! per-class instruction counters advance here (halts are counted at
//! decode); undefined encodings pass through with no ALU effect and no
//! counter.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::ExecEntry;
use crate::isa::{InstrClass, Instruction, disasm};

/// Executes the execute stage for one cycle.
pub fn execute_stage(cpu: &mut Cpu) {
    let Some(issued) = cpu.id_ex else {
        return;
    };
    if cpu.ex_mem.is_some() {
        return;
    }
    cpu.id_ex = None;

    let alu = match issued.inst {
        Instruction::Alu { op, .. } => op.apply(issued.a, issued.b),
        Instruction::Inc { .. } => issued.a.wrapping_add(1),
        Instruction::Not { .. } => !issued.a,
        // Byte address arithmetic: base + offset, wrapping in the store.
        Instruction::Load { .. } | Instruction::Store { .. } => issued.a.wrapping_add(issued.b),
        // Displacements are instruction-granular: scaled by 2, mod 256.
        Instruction::Jump { .. } => issued.link_pc.wrapping_add(issued.a.wrapping_shl(1)),
        Instruction::BranchZero { .. } => {
            if issued.a == 0 {
                issued.link_pc.wrapping_add(issued.b.wrapping_shl(1))
            } else {
                issued.link_pc
            }
        }
        Instruction::Halt | Instruction::Undefined { .. } => 0,
    };

    match issued.inst.class() {
        Some(InstrClass::Halt) | None => {}
        Some(class) => cpu.stats.record(class),
    }

    trace!(
        pc = issued.pc,
        inst = %disasm::disassemble(issued.inst),
        alu = %format_args!("{alu:#04x}"),
        "EX"
    );

    cpu.ex_mem = Some(ExecEntry {
        inst: issued.inst,
        alu,
        pc: issued.pc,
    });
}
